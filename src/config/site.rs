//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Static site metadata shared by every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// Base URL of the site, without a trailing slash
    #[serde(alias = "siteUrl")]
    pub site_url: String,
    pub title: String,
    pub description: String,
    /// Default author for posts that do not name one
    pub author: String,
    /// Locale in BCP 47 form (`zh-CN`)
    pub locale: String,
    /// Fallback social preview image
    #[serde(alias = "socialBanner")]
    pub social_banner: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            site_url: "https://yongjunwang.com".to_string(),
            title: "Blog of Yongjun Wang".to_string(),
            description: "Full stack development | React/Next.js".to_string(),
            author: "Yongjun Wang".to_string(),
            locale: "zh-CN".to_string(),
            social_banner: "https://cdna.artstation.com/p/assets/images/images/028/138/058/large/z-w-gu-bandageb5f.jpg?1593594749".to_string(),
        }
    }
}

impl SiteMetadata {
    /// Locale in the Open Graph form (`zh_CN`)
    pub fn og_locale(&self) -> String {
        self.locale.replace('-', "_")
    }
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    #[serde(flatten)]
    pub site: SiteMetadata,
    pub timezone: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    /// Files copied verbatim under `/static`
    pub static_dir: String,
    pub file_path_patterns: Vec<String>,

    // Writing
    pub render_drafts: bool,
    pub highlight_theme: String,
    pub line_numbers: bool,

    // Theme
    pub default_theme: String,
    pub themes: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMetadata::default(),
            timezone: "UTC".to_string(),

            content_dir: "data/posts".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),
            file_path_patterns: vec!["**/*.md".to_string(), "**/*.mdx".to_string()],

            render_drafts: false,
            highlight_theme: "base16-ocean.dark".to_string(),
            line_numbers: false,

            default_theme: "system".to_string(),
            themes: vec![
                "light".to_string(),
                "dark".to_string(),
                "system".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config.tz()?;
        Ok(config)
    }

    /// Timezone used for date-times without an offset and for display dates
    pub fn tz(&self) -> Result<Tz> {
        if self.timezone.is_empty() {
            return Ok(Tz::UTC);
        }
        self.timezone
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("Invalid timezone {:?}: {}", self.timezone, e))
    }

    /// Whether `name` is one of the configured themes
    pub fn is_known_theme(&self, name: &str) -> bool {
        self.themes.iter().any(|t| t == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.site.author, "Yongjun Wang");
        assert_eq!(config.site.locale, "zh-CN");
        assert_eq!(config.content_dir, "data/posts");
        assert_eq!(config.tz().unwrap(), Tz::UTC);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
site_url: https://example.com
title: My Blog
author: Test User
timezone: Asia/Shanghai
themes: [light, dark]
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.site.site_url, "https://example.com");
        assert_eq!(config.site.title, "My Blog");
        assert_eq!(config.site.author, "Test User");
        // Unset fields keep their defaults
        assert_eq!(config.site.locale, "zh-CN");
        assert_eq!(config.tz().unwrap(), chrono_tz::Asia::Shanghai);
        assert!(config.is_known_theme("dark"));
        assert!(!config.is_known_theme("system"));
    }

    #[test]
    fn test_camel_case_aliases() {
        let yaml = r#"
siteUrl: https://example.org
socialBanner: /static/banner.png
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.site.site_url, "https://example.org");
        assert_eq!(config.site.social_banner, "/static/banner.png");
    }

    #[test]
    fn test_invalid_timezone() {
        let config = SiteConfig {
            timezone: "Mars/Olympus".to_string(),
            ..Default::default()
        };
        assert!(config.tz().is_err());
    }

    #[test]
    fn test_og_locale() {
        assert_eq!(SiteMetadata::default().og_locale(), "zh_CN");
    }
}
