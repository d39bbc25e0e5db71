//! Home and not-found pages

use anyhow::Result;
use chrono_tz::Tz;

use crate::config::SiteMetadata;
use crate::content::ContentCollection;
use crate::templates::{base_context, PostLink, TemplateRenderer};
use crate::theme::{ThemeStore, ThemeSwitch};

/// Render the home page: the theme switch followed by the post list
///
/// An unmounted switch renders nothing and leaves the label to the browser.
pub fn render_home<S: ThemeStore + ?Sized>(
    renderer: &TemplateRenderer,
    site: &SiteMetadata,
    collection: &ContentCollection,
    tz: Tz,
    switch: &ThemeSwitch<'_, S>,
    default_theme: &str,
) -> Result<String> {
    let posts: Vec<PostLink> = collection
        .posts()
        .map(|post| PostLink::from_post(post, tz))
        .collect();

    let mut context = base_context(site, &site.title);
    context.insert("theme_label", &switch.render());
    context.insert("default_theme", default_theme);
    context.insert("posts", &posts);

    renderer.render("home.html", &context)
}

/// Render the standard not-found page
pub fn render_not_found(
    renderer: &TemplateRenderer,
    site: &SiteMetadata,
    missing_id: Option<&str>,
) -> Result<String> {
    let mut context = base_context(site, "404: This page could not be found");
    context.insert("missing_id", &missing_id);
    renderer.render("404.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;
    use crate::theme::MemoryThemeStore;
    use chrono::{TimeZone, Utc};

    fn collection() -> ContentCollection {
        let date = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        ContentCollection::new(vec![Post::new("hello".into(), "Hello post".into(), date)])
    }

    #[test]
    fn test_home_before_mount_has_no_label() {
        let renderer = TemplateRenderer::new().unwrap();
        let store = MemoryThemeStore::new(Some("dark"));
        let switch = ThemeSwitch::new(&store);

        let html = render_home(
            &renderer,
            &SiteMetadata::default(),
            &collection(),
            Tz::UTC,
            &switch,
            "system",
        )
        .unwrap();

        assert!(!html.contains("Current Theme: dark"));
        assert!(html.contains("localStorage"));
        assert!(html.contains("Hello post"));
    }

    #[test]
    fn test_home_after_mount_shows_theme() {
        let renderer = TemplateRenderer::new().unwrap();
        let store = MemoryThemeStore::new(Some("dark"));
        let mut switch = ThemeSwitch::new(&store);
        switch.mount();

        let html = render_home(
            &renderer,
            &SiteMetadata::default(),
            &collection(),
            Tz::UTC,
            &switch,
            "system",
        )
        .unwrap();

        assert!(html.contains("Current Theme: dark"));
        assert!(!html.contains("localStorage"));
    }

    #[test]
    fn test_home_mounted_without_theme_shows_empty_label() {
        let renderer = TemplateRenderer::new().unwrap();
        let store = MemoryThemeStore::default();
        let mut switch = ThemeSwitch::new(&store);
        switch.mount();

        let html = render_home(
            &renderer,
            &SiteMetadata::default(),
            &collection(),
            Tz::UTC,
            &switch,
            "system",
        )
        .unwrap();

        assert!(html.contains("Current Theme: </h1>"));
    }

    #[test]
    fn test_not_found_page() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = render_not_found(&renderer, &SiteMetadata::default(), None).unwrap();
        assert!(html.contains("This page could not be found."));
        assert!(!html.contains("No post named"));
    }
}
