//! schema.org structured data computed for each post

use serde_json::{json, Value};

use super::Post;
use crate::config::SiteMetadata;
use crate::helpers::{iso_timestamp, post_url};

/// Build the `BlogPosting` JSON-LD object for a post
pub fn blog_posting(post: &Post, site: &SiteMetadata) -> Value {
    let image = post
        .images
        .as_ref()
        .and_then(|images| images.first())
        .unwrap_or(site.social_banner.as_str());

    let authors: Vec<Value> = post
        .authors
        .clone()
        .unwrap_or_else(|| vec![site.author.clone()])
        .into_iter()
        .map(|name| json!({ "@type": "Person", "name": name }))
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "datePublished": iso_timestamp(&post.date),
        "dateModified": iso_timestamp(&post.modified()),
        "description": post.description,
        "image": image,
        "url": post_url(&site.site_url, &post.id),
        "author": authors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Images;
    use chrono::{TimeZone, Utc};

    fn sample_post() -> Post {
        let date = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let mut post = Post::new("hello".into(), "Hello".into(), date);
        post.description = "A greeting".into();
        post
    }

    #[test]
    fn test_defaults_from_site() {
        let site = SiteMetadata::default();
        let data = blog_posting(&sample_post(), &site);

        assert_eq!(data["@type"], "BlogPosting");
        assert_eq!(data["headline"], "Hello");
        assert_eq!(data["datePublished"], "2023-01-01T00:00:00.000Z");
        assert_eq!(data["dateModified"], "2023-01-01T00:00:00.000Z");
        assert_eq!(data["image"], site.social_banner.as_str());
        assert_eq!(data["url"], "https://yongjunwang.com/posts/hello");
        assert_eq!(data["author"][0]["name"], "Yongjun Wang");
    }

    #[test]
    fn test_first_image_and_authors() {
        let mut post = sample_post();
        post.images = Some(Images::Multiple(vec!["/a.png".into(), "/b.png".into()]));
        post.authors = Some(vec!["Alice".into(), "Bob".into()]);

        let data = blog_posting(&post, &SiteMetadata::default());
        assert_eq!(data["image"], "/a.png");
        assert_eq!(data["author"].as_array().unwrap().len(), 2);
        assert_eq!(data["author"][1]["name"], "Bob");
    }
}
