//! Per-post SEO metadata: Open Graph and Twitter card data

use serde::Serialize;

use crate::config::SiteMetadata;
use crate::content::Post;
use crate::helpers::{absolute_image_url, iso_timestamp};

/// Metadata embedded in the head of a post page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

/// Open Graph data of an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub published_time: String,
    pub modified_time: String,
    pub url: String,
    pub images: Vec<OgImage>,
    pub authors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
}

/// Twitter card data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    /// Image references as written in front-matter
    pub images: Vec<String>,
}

/// A single `<meta>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    /// `name` or `property`
    pub attr: &'static str,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    fn name(key: &str, content: &str) -> Self {
        Self {
            attr: "name",
            key: key.to_string(),
            content: content.to_string(),
        }
    }

    fn property(key: &str, content: &str) -> Self {
        Self {
            attr: "property",
            key: key.to_string(),
            content: content.to_string(),
        }
    }
}

impl PageMetadata {
    /// Derive the metadata of a post, filling gaps from the site metadata
    pub fn derive(post: &Post, site: &SiteMetadata) -> Self {
        let published_at = iso_timestamp(&post.date);
        let modified_at = iso_timestamp(&post.modified());

        let image_list = match &post.images {
            Some(images) => images.to_list(),
            None => vec![site.social_banner.clone()],
        };

        let og_images = image_list
            .iter()
            .map(|img| OgImage {
                url: absolute_image_url(&site.site_url, img),
            })
            .collect();

        let authors = post
            .authors
            .clone()
            .unwrap_or_else(|| vec![site.author.clone()]);

        Self {
            title: post.title.clone(),
            description: post.description.clone(),
            open_graph: OpenGraph {
                title: post.title.clone(),
                description: post.description.clone(),
                site_name: site.title.clone(),
                locale: site.og_locale(),
                kind: "article".to_string(),
                published_time: published_at,
                modified_time: modified_at,
                url: "./".to_string(),
                images: og_images,
                authors,
            },
            twitter: TwitterCard {
                card: "summary_large_image".to_string(),
                title: post.title.clone(),
                description: post.description.clone(),
                images: image_list,
            },
        }
    }

    /// Flatten into the `<meta>` elements of the page head
    pub fn head_tags(&self) -> Vec<MetaTag> {
        let og = &self.open_graph;
        let mut tags = vec![
            MetaTag::name("description", &self.description),
            MetaTag::property("og:title", &og.title),
            MetaTag::property("og:description", &og.description),
            MetaTag::property("og:url", &og.url),
            MetaTag::property("og:site_name", &og.site_name),
            MetaTag::property("og:locale", &og.locale),
        ];
        tags.extend(
            og.images
                .iter()
                .map(|img| MetaTag::property("og:image", &img.url)),
        );
        tags.push(MetaTag::property("og:type", &og.kind));
        tags.push(MetaTag::property("article:published_time", &og.published_time));
        tags.push(MetaTag::property("article:modified_time", &og.modified_time));
        tags.extend(
            og.authors
                .iter()
                .map(|author| MetaTag::property("article:author", author)),
        );

        let twitter = &self.twitter;
        tags.push(MetaTag::name("twitter:card", &twitter.card));
        tags.push(MetaTag::name("twitter:title", &twitter.title));
        tags.push(MetaTag::name("twitter:description", &twitter.description));
        tags.extend(
            twitter
                .images
                .iter()
                .map(|img| MetaTag::name("twitter:image", img)),
        );

        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Images;
    use chrono::{TimeZone, Utc};

    fn site() -> SiteMetadata {
        SiteMetadata {
            site_url: "https://example.com".to_string(),
            title: "Example".to_string(),
            description: "An example blog".to_string(),
            author: "Default Author".to_string(),
            locale: "en-US".to_string(),
            social_banner: "https://example.com/banner.png".to_string(),
        }
    }

    fn bare_post() -> Post {
        let date = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let mut post = Post::new("hello".into(), "Hello".into(), date);
        post.description = "Greeting".into();
        post
    }

    #[test]
    fn test_bare_post_uses_site_defaults() {
        let meta = PageMetadata::derive(&bare_post(), &site());
        let og = &meta.open_graph;

        assert_eq!(og.published_time, "2023-01-01T00:00:00.000Z");
        assert_eq!(og.modified_time, og.published_time);
        assert_eq!(
            og.images,
            vec![OgImage {
                url: "https://example.com/banner.png".into()
            }]
        );
        assert_eq!(og.authors, vec!["Default Author"]);
        assert_eq!(meta.twitter.images, vec!["https://example.com/banner.png"]);
    }

    #[test]
    fn test_relative_image_is_prefixed() {
        let mut post = bare_post();
        post.images = Some(Images::Single("photo.png".into()));
        let meta = PageMetadata::derive(&post, &site());
        assert_eq!(meta.open_graph.images[0].url, "https://example.comphoto.png");
        // Twitter keeps the raw reference
        assert_eq!(meta.twitter.images, vec!["photo.png"]);
    }

    #[test]
    fn test_absolute_image_is_unchanged() {
        let mut post = bare_post();
        post.images = Some(Images::Single("http://x.com/a.png".into()));
        let meta = PageMetadata::derive(&post, &site());
        assert_eq!(
            meta.open_graph.images,
            vec![OgImage {
                url: "http://x.com/a.png".into()
            }]
        );
    }

    #[test]
    fn test_image_list_and_lastmod() {
        let mut post = bare_post();
        post.images = Some(Images::Multiple(vec![
            "/a.png".into(),
            "https://cdn.test/b.png".into(),
        ]));
        post.lastmod = Some(Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap());
        post.authors = Some(vec!["Alice".into()]);

        let meta = PageMetadata::derive(&post, &site());
        let urls: Vec<_> = meta.open_graph.images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, vec!["https://example.com/a.png", "https://cdn.test/b.png"]);
        assert_eq!(meta.open_graph.modified_time, "2023-06-01T12:00:00.000Z");
        assert_eq!(meta.open_graph.authors, vec!["Alice"]);
    }

    #[test]
    fn test_fixed_fields() {
        let meta = PageMetadata::derive(&bare_post(), &site());
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.description, "Greeting");
        assert_eq!(meta.open_graph.kind, "article");
        assert_eq!(meta.open_graph.url, "./");
        assert_eq!(meta.open_graph.locale, "en_US");
        assert_eq!(meta.open_graph.site_name, "Example");
        assert_eq!(meta.twitter.card, "summary_large_image");
    }

    #[test]
    fn test_serialized_type_key() {
        let meta = PageMetadata::derive(&bare_post(), &site());
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["open_graph"]["type"], "article");
    }

    #[test]
    fn test_head_tags() {
        let mut post = bare_post();
        post.authors = Some(vec!["Alice".into(), "Bob".into()]);
        let tags = PageMetadata::derive(&post, &site()).head_tags();

        let find = |key: &str| {
            tags.iter()
                .filter(|t| t.key == key)
                .map(|t| t.content.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(find("og:title"), vec!["Hello"]);
        assert_eq!(find("og:image"), vec!["https://example.com/banner.png"]);
        assert_eq!(find("article:author"), vec!["Alice", "Bob"]);
        assert_eq!(find("twitter:card"), vec!["summary_large_image"]);
        assert!(tags
            .iter()
            .all(|t| t.attr == "name" || t.attr == "property"));
    }
}
