//! Generator module - writes every page of the site to the public directory

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::content::ContentCollection;
use crate::page::{render_home, render_not_found, PostPage};
use crate::templates::TemplateRenderer;
use crate::theme::{MemoryThemeStore, ThemeSwitch};
use crate::Blog;

/// Static site generator
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            blog: blog.clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site, returning the number of post pages written
    pub fn generate(&self, collection: &ContentCollection) -> Result<usize> {
        fs::create_dir_all(&self.blog.public_dir)?;

        self.copy_static_assets()?;
        self.generate_home_page(collection)?;
        let count = self.generate_post_pages(collection)?;
        self.generate_not_found_page()?;

        Ok(count)
    }

    /// Generate the home page
    ///
    /// No reader preference exists at build time, so the theme switch is
    /// rendered unmounted.
    fn generate_home_page(&self, collection: &ContentCollection) -> Result<()> {
        let store = MemoryThemeStore::default();
        let switch = ThemeSwitch::new(&store);

        let html = render_home(
            &self.renderer,
            &self.blog.config.site,
            collection,
            self.blog.tz,
            &switch,
            &self.blog.config.default_theme,
        )?;

        self.write_page(&self.blog.public_dir.join("index.html"), &html)
    }

    /// Generate one page per post identifier
    fn generate_post_pages(&self, collection: &ContentCollection) -> Result<usize> {
        let page = PostPage::new(collection, &self.blog.config.site, self.blog.tz);
        let ids = page.enumerate_identifiers();

        for id in &ids {
            let html = page
                .render_html(id, &self.renderer)
                .with_context(|| format!("Failed to render post {:?}", id))?;
            self.write_page(&self.post_output_path(id), &html)?;
        }

        Ok(ids.len())
    }

    /// Generate the standalone not-found page
    fn generate_not_found_page(&self) -> Result<()> {
        let html = render_not_found(&self.renderer, &self.blog.config.site, None)?;
        self.write_page(&self.blog.public_dir.join("404.html"), &html)
    }

    /// Output file of a post page
    fn post_output_path(&self, id: &str) -> PathBuf {
        let mut path = self.blog.public_dir.join("posts");
        for segment in id.split('/') {
            path.push(segment);
        }
        path.join("index.html")
    }

    fn write_page(&self, path: &Path, html: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, html).with_context(|| format!("Failed to write {:?}", path))?;
        tracing::debug!("Generated: {:?}", path);
        Ok(())
    }

    /// Copy the static directory to `public/static`
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.blog.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        let dest_root = self.blog.public_dir.join("static");

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = dest_root.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(path, &dest)?;
        }

        Ok(())
    }
}
