//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/');

/// Whether `url` already carries a scheme
///
/// Deliberately a substring check for `http`, matching how image
/// references in front-matter have always been classified.
pub fn has_scheme(url: &str) -> bool {
    url.contains("http")
}

/// Resolve a front-matter image reference against the site URL
///
/// # Examples
/// ```ignore
/// absolute_image_url("https://example.com", "/static/a.png") // -> "https://example.com/static/a.png"
/// absolute_image_url("https://example.com", "http://x.com/a.png") // -> "http://x.com/a.png"
/// ```
pub fn absolute_image_url(site_url: &str, image: &str) -> String {
    if has_scheme(image) {
        image.to_string()
    } else {
        format!("{}{}", site_url, image)
    }
}

/// Site-relative path of a post page
///
/// # Examples
/// ```ignore
/// post_path("2023/hello world") // -> "/posts/2023/hello%20world/"
/// ```
pub fn post_path(id: &str) -> String {
    let encoded: Vec<String> = id
        .split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect();
    format!("/posts/{}/", encoded.join("/"))
}

/// Canonical URL of a post page
pub fn post_url(site_url: &str, id: &str) -> String {
    format!(
        "{}{}",
        site_url.trim_end_matches('/'),
        post_path(id).trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_image_is_prefixed() {
        assert_eq!(
            absolute_image_url("https://example.com", "photo.png"),
            "https://example.comphoto.png"
        );
        assert_eq!(
            absolute_image_url("https://example.com", "/static/photo.png"),
            "https://example.com/static/photo.png"
        );
    }

    #[test]
    fn test_absolute_image_is_unchanged() {
        assert_eq!(
            absolute_image_url("https://example.com", "http://x.com/a.png"),
            "http://x.com/a.png"
        );
        assert_eq!(
            absolute_image_url("https://example.com", "https://cdn.test/b.jpg"),
            "https://cdn.test/b.jpg"
        );
    }

    #[test]
    fn test_scheme_check_is_substring_only() {
        assert!(has_scheme("/images/http-diagram.png"));
        assert!(!has_scheme("//cdn.test/a.png"));
    }

    #[test]
    fn test_post_path() {
        assert_eq!(post_path("hello"), "/posts/hello/");
        assert_eq!(post_path("2023/hello world"), "/posts/2023/hello%20world/");
    }

    #[test]
    fn test_post_url() {
        assert_eq!(
            post_url("https://example.com/", "hello"),
            "https://example.com/posts/hello"
        );
    }
}
