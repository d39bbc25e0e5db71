//! Rendered form of a single post

use chrono_tz::Tz;
use serde::Serialize;

use crate::content::Post;
use crate::helpers::{escape_script_json, format_date, iso_timestamp};

/// Display format of the publication date
pub const DISPLAY_DATE_FORMAT: &str = "DD/MM/YYYY";

/// Everything a post template needs, derived from one post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPost {
    pub id: String,
    pub title: String,
    /// Machine-readable publication date for the `datetime` attribute
    pub date_time: String,
    /// Publication date as shown to readers
    pub display_date: String,
    /// Structured data serialized for a JSON-LD script element
    pub json_ld: String,
    /// Compiled body HTML
    pub content: String,
}

impl RenderedPost {
    pub fn from_post(post: &Post, tz: Tz) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            date_time: iso_timestamp(&post.date),
            display_date: format_date(&post.date, DISPLAY_DATE_FORMAT, tz),
            json_ld: escape_script_json(&post.structured_data.to_string()),
            content: post.body.html.clone(),
        }
    }
}
