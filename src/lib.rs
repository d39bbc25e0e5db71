//! inkwell: a small static blog engine for MDX posts
//!
//! Posts are loaded once into a read-only [`content::ContentCollection`].
//! For every post identifier the [`page::PostPage`] derives SEO metadata and
//! renders the compiled body; the results are either written to disk by the
//! [`generator`] or served on demand by the [`server`].

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod page;
pub mod server;
pub mod templates;
pub mod theme;

use anyhow::Result;
use chrono_tz::Tz;
use std::path::{Path, PathBuf};

/// The blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Timezone resolved from the configuration
    pub tz: Tz,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Static assets directory
    pub static_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        Self::with_config(base_dir, config)
    }

    /// Create a Blog instance from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Result<Self> {
        let tz = config.tz()?;
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            tz,
            base_dir,
            content_dir,
            public_dir,
            static_dir,
        })
    }

    /// Load the post collection
    pub fn load_content(&self) -> Result<content::ContentCollection> {
        content::loader::ContentLoader::new(self)?.load()
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, path: Option<&str>) -> Result<()> {
        commands::new::create_post(self, title, path).map(|_| ())
    }
}
