//! Theme persistence

use axum::http::{header, HeaderMap};

/// Name of the cookie holding the theme preference
pub const THEME_COOKIE: &str = "theme";

/// Source of the persisted theme preference
pub trait ThemeStore {
    /// The stored theme, if one was ever chosen
    fn theme(&self) -> Option<String>;

    /// Persist a new theme
    fn set_theme(&mut self, theme: &str);
}

/// In-process theme store
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    theme: Option<String>,
}

impl MemoryThemeStore {
    pub fn new(theme: Option<&str>) -> Self {
        Self {
            theme: theme.map(str::to_string),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn theme(&self) -> Option<String> {
        self.theme.clone()
    }

    fn set_theme(&mut self, theme: &str) {
        self.theme = Some(theme.to_string());
    }
}

/// Theme preference carried by the `theme` cookie of an HTTP request
#[derive(Debug, Clone, Default)]
pub struct CookieThemeStore {
    theme: Option<String>,
    dirty: bool,
}

impl CookieThemeStore {
    /// Read the theme cookie from request headers
    ///
    /// Without a cookie the store reports `default_theme`, unless that is
    /// empty too.
    pub fn from_headers(headers: &HeaderMap, default_theme: &str) -> Self {
        let theme = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == THEME_COOKIE)
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .or_else(|| (!default_theme.is_empty()).then(|| default_theme.to_string()));

        Self {
            theme,
            dirty: false,
        }
    }

    /// `Set-Cookie` value persisting a theme changed through `set_theme`
    pub fn set_cookie(&self) -> Option<String> {
        if !self.dirty {
            return None;
        }
        let theme = self.theme.as_deref()?;
        Some(format!(
            "{}={}; Path=/; Max-Age=31536000; SameSite=Lax",
            THEME_COOKIE, theme
        ))
    }
}

impl ThemeStore for CookieThemeStore {
    fn theme(&self) -> Option<String> {
        self.theme.clone()
    }

    fn set_theme(&mut self, theme: &str) {
        self.theme = Some(theme.to_string());
        self.dirty = true;
    }
}
