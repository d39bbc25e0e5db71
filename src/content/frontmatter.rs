//! Front-matter parsing

use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::Images;

/// Custom deserializer that handles a single string, a list of strings, or nothing
fn optional_string_or_vec<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Option<Vec<String>>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok((!value.is_empty()).then(|| vec![value.to_string()]))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok((!value.is_empty()).then(|| vec![value]))
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(Some(vec))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(alias = "updated")]
    pub lastmod: Option<String>,
    #[serde(alias = "summary")]
    pub description: Option<String>,
    pub images: Option<Images>,
    #[serde(deserialize_with = "optional_string_or_vec", default)]
    pub authors: Option<Vec<String>>,
    #[serde(deserialize_with = "optional_string_or_vec", default)]
    pub tags: Option<Vec<String>>,
    pub draft: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let (fm, remaining) = if content.starts_with("---") {
            Self::parse_yaml(content)?
        } else if content.starts_with('{') {
            Self::parse_json(content)?
        } else {
            (FrontMatter::default(), content)
        };

        Ok((fm.without_empty_values(), remaining))
    }

    /// Treat empty strings as absent values
    fn without_empty_values(mut self) -> Self {
        self.images = self
            .images
            .filter(|images| !matches!(images, Images::Single(image) if image.is_empty()));
        self
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = content[3..].trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence: a thematic break, not front-matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)
            .map_err(|e| anyhow!("Failed to parse YAML front-matter: {}", e))?;
        Ok((fm, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str)> {
        let mut stream = serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();

        let fm = match stream.next() {
            Some(Ok(fm)) => fm,
            Some(Err(e)) => return Err(anyhow!("Failed to parse JSON front-matter: {}", e)),
            None => return Err(anyhow!("Invalid JSON front-matter")),
        };
        let remaining = content[stream.byte_offset()..].trim_start_matches(['\n', '\r']);

        Ok((fm, remaining))
    }
}
