//! Built-in site templates using the Tera template engine
//!
//! Templates are embedded in the binary. HTML autoescaping stays on, using
//! [`escape_html`] so that `/` in dates and URLs is left alone; compiled post
//! bodies and JSON-LD are marked `safe` where they are placed.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteMetadata;
use crate::content::Post;
use crate::helpers::{escape_html, format_date, post_path};
use crate::page::DISPLAY_DATE_FORMAT;

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("post.html", include_str!("site/post.html")),
            ("home.html", include_str!("site/home.html")),
            ("404.html", include_str!("site/404.html")),
        ])?;

        tera.set_escape_fn(escape_html);
        tera.register_filter("post_path", post_path_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Context shared by every page: site metadata, page title, no extra head tags
pub fn base_context(site: &SiteMetadata, page_title: &str) -> Context {
    let mut context = Context::new();
    context.insert("site", site);
    context.insert("page_title", page_title);
    context.insert("head_tags", &Vec::<crate::page::MetaTag>::new());
    context
}

/// Tera filter: site-relative path of a post identifier
fn post_path_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let id = tera::try_get_value!("post_path", "value", String, value);
    Ok(tera::Value::String(post_path(&id)))
}

/// A post entry in the home page list
#[derive(Debug, Clone, Serialize)]
pub struct PostLink {
    pub id: String,
    pub title: String,
    pub description: String,
    pub display_date: String,
}

impl PostLink {
    pub fn from_post(post: &Post, tz: chrono_tz::Tz) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            description: post.description.clone(),
            display_date: format_date(&post.date, DISPLAY_DATE_FORMAT, tz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_not_found_template() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = base_context(&SiteMetadata::default(), "Not Found");
        context.insert("missing_id", "nope");

        let html = renderer.render("404.html", &context).unwrap();
        assert!(html.contains("404"));
        assert!(html.contains("nope"));
    }

    #[test]
    fn test_post_path_filter() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = base_context(&SiteMetadata::default(), "Home");
        context.insert("theme_label", &Option::<String>::None);
        context.insert("default_theme", "system");
        context.insert(
            "posts",
            &vec![PostLink {
                id: "2023/hello world".into(),
                title: "Hello".into(),
                description: String::new(),
                display_date: "01/01/2023".into(),
            }],
        );

        let html = renderer.render("home.html", &context).unwrap();
        assert!(html.contains(r#"href="/posts/2023/hello%20world/""#));
    }

    #[test]
    fn test_autoescape_keeps_slashes() {
        let renderer = TemplateRenderer::new().unwrap();
        let site = SiteMetadata {
            title: "Notes <& more>".into(),
            ..SiteMetadata::default()
        };
        let mut context = base_context(&site, "2023/05/20");
        context.insert("missing_id", "a/b");

        let html = renderer.render("404.html", &context).unwrap();
        assert!(html.contains("<title>2023/05/20</title>"));
        assert!(html.contains("No post named a/b"));
        assert!(html.contains("Notes &lt;&amp; more&gt;"));
        assert!(!html.contains("&#x2F;"));
    }
}
