//! Content loader - loads posts from the content directory

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{structured_data, ContentCollection, FrontMatter, MarkdownRenderer, Post};
use crate::helpers::parse_date;
use crate::Blog;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Loads content from the content directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
    patterns: Vec<Pattern>,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Result<Self> {
        let renderer = MarkdownRenderer::with_options(
            &blog.config.highlight_theme,
            blog.config.line_numbers,
        );
        let patterns = blog
            .config
            .file_path_patterns
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("Invalid file pattern {:?}", p)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            blog,
            renderer,
            patterns,
        })
    }

    /// Load the whole collection
    pub fn load(&self) -> Result<ContentCollection> {
        Ok(ContentCollection::new(self.load_posts()?))
    }

    /// Load all posts from the content directory
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        let mut entries: Vec<_> = WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .collect();
        // Stable order so duplicate identifiers resolve the same way every run
        entries.sort_by(|a, b| a.path().cmp(b.path()));

        for entry in entries {
            let path = entry.path();
            let relative = path.strip_prefix(content_dir).unwrap_or(path);
            if !self.is_content_file(relative) {
                continue;
            }

            match self.load_post(path, relative) {
                Ok(post) if post.draft && !self.blog.config.render_drafts => {
                    tracing::debug!("Skipping draft {:?}", path);
                }
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {:#}", path, e);
                }
            }
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), content_dir);

        Ok(posts)
    }

    /// Check a path (relative to the content directory) against the patterns
    fn is_content_file(&self, relative: &Path) -> bool {
        let relative = relative.to_string_lossy().replace('\\', "/");
        self.patterns
            .iter()
            .any(|p| p.matches_with(&relative, MATCH_OPTIONS))
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path, relative: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;
        let tz = self.blog.tz;

        let date = match fm.date.as_deref() {
            Some(raw) => parse_date(raw, tz)
                .with_context(|| format!("Unrecognized date {:?}", raw))?,
            None => {
                let modified = fs::metadata(path)?.modified()?;
                DateTime::<Utc>::from(modified)
            }
        };

        let lastmod = match fm.lastmod.as_deref() {
            Some(raw) => Some(
                parse_date(raw, tz).with_context(|| format!("Unrecognized lastmod {:?}", raw))?,
            ),
            None => None,
        };

        let title = fm.title.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let mut post = Post::new(post_id(relative), title, date);
        post.description = fm.description.unwrap_or_default();
        post.lastmod = lastmod;
        post.images = fm.images;
        post.authors = fm.authors;
        post.tags = fm.tags.unwrap_or_default();
        post.draft = fm.draft;
        post.body.raw = body.to_string();
        post.body.html = self.renderer.compile_mdx(body)?;
        post.full_source = path.to_path_buf();
        post.structured_data = structured_data::blog_posting(&post, &self.blog.config.site);

        Ok(post)
    }
}

/// Identifier of a post: its relative path without extension, `/`-separated
///
/// A trailing `index` file names its directory.
pub fn post_id(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    let parts: Vec<String> = without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    match parts.split_last() {
        Some((last, parents)) if last == "index" && !parents.is_empty() => parents.join("/"),
        _ => parts.join("/"),
    }
}
