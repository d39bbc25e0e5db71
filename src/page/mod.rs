//! Post pages: identifier enumeration, metadata derivation and rendering
//!
//! Every operation is a pure function of the loaded collection and the
//! requested identifier. An identifier that matches no post always yields
//! [`PageError::NotFound`]; no compiled content is touched in that case.

mod error;
mod home;
mod metadata;
mod render;

use anyhow::Result;
use chrono_tz::Tz;

pub use error::PageError;
pub use home::{render_home, render_not_found};
pub use metadata::{MetaTag, OgImage, OpenGraph, PageMetadata, TwitterCard};
pub use render::{RenderedPost, DISPLAY_DATE_FORMAT};

use crate::config::SiteMetadata;
use crate::content::{ContentCollection, Post};
use crate::templates::{base_context, TemplateRenderer};

/// Post page operations over a loaded collection
#[derive(Clone, Copy)]
pub struct PostPage<'a> {
    collection: &'a ContentCollection,
    site: &'a SiteMetadata,
    tz: Tz,
}

impl<'a> PostPage<'a> {
    pub fn new(collection: &'a ContentCollection, site: &'a SiteMetadata, tz: Tz) -> Self {
        Self {
            collection,
            site,
            tz,
        }
    }

    /// Identifiers of every post, one page each
    pub fn enumerate_identifiers(&self) -> Vec<String> {
        self.collection.identifiers()
    }

    /// Look up a post, failing with `NotFound`
    pub fn lookup(&self, id: &str) -> Result<&'a Post, PageError> {
        self.collection
            .find(id)
            .ok_or_else(|| PageError::not_found(id))
    }

    /// Derive the head metadata of a post page
    pub fn derive_metadata(&self, id: &str) -> Result<PageMetadata, PageError> {
        let post = self.lookup(id)?;
        Ok(PageMetadata::derive(post, self.site))
    }

    /// Render the body of a post page
    pub fn render(&self, id: &str) -> Result<RenderedPost, PageError> {
        let post = self.lookup(id)?;
        Ok(RenderedPost::from_post(post, self.tz))
    }

    /// Render a complete HTML document for a post
    pub fn render_html(&self, id: &str, renderer: &TemplateRenderer) -> Result<String> {
        let metadata = self.derive_metadata(id)?;
        let post = self.render(id)?;

        let mut context = base_context(self.site, &metadata.title);
        context.insert("head_tags", &metadata.head_tags());
        context.insert("post", &post);

        renderer.render("post.html", &context)
    }
}

/// Whether an error is a `NotFound` from a post page lookup
pub fn is_not_found(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<PageError>(),
        Some(PageError::NotFound { .. })
    )
}
