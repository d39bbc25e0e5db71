//! Post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Image reference(s) from front-matter: either one URL or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Images {
    Single(String),
    Multiple(Vec<String>),
}

impl Images {
    /// All image references, a single value wrapped into a one-element list
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Images::Single(url) => vec![url.clone()],
            Images::Multiple(urls) => urls.clone(),
        }
    }

    /// First image reference, if any
    pub fn first(&self) -> Option<&str> {
        match self {
            Images::Single(url) => Some(url),
            Images::Multiple(urls) => urls.first().map(String::as_str),
        }
    }
}

/// Compiled post body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Body {
    /// Raw MDX/Markdown source (front-matter removed)
    pub raw: String,
    /// Executable output of the MDX compiler: an HTML fragment
    pub html: String,
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Identifier derived from the source path
    pub id: String,

    /// Post title
    pub title: String,

    /// Short description used for previews
    pub description: String,

    /// Publication date
    pub date: DateTime<Utc>,

    /// Last modified date
    pub lastmod: Option<DateTime<Utc>>,

    /// Social preview image(s)
    pub images: Option<Images>,

    /// Author names
    pub authors: Option<Vec<String>>,

    /// Post tags
    pub tags: Vec<String>,

    /// Whether the post is a draft
    pub draft: bool,

    /// Compiled content
    pub body: Body,

    /// schema.org object embedded as JSON-LD
    pub structured_data: serde_json::Value,

    /// Full source file path
    pub full_source: PathBuf,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(id: String, title: String, date: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            date,
            lastmod: None,
            images: None,
            authors: None,
            tags: Vec::new(),
            draft: false,
            body: Body::default(),
            structured_data: serde_json::Value::Null,
            full_source: PathBuf::new(),
        }
    }

    /// Last modification date, falling back to the publication date
    pub fn modified(&self) -> DateTime<Utc> {
        self.lastmod.unwrap_or(self.date)
    }
}
