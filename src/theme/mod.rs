//! Theme switch display
//!
//! The switch shows nothing until the stored preference has been read, so a
//! guessed default is never shown in place of the real value.

mod store;

pub use store::{CookieThemeStore, MemoryThemeStore, ThemeStore, THEME_COOKIE};

/// Transient state of one switch instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub mounted: bool,
    pub theme: Option<String>,
}

/// Displays the current theme once mounted
pub struct ThemeSwitch<'a, S: ThemeStore + ?Sized> {
    store: &'a S,
    state: ThemeState,
}

impl<'a, S: ThemeStore + ?Sized> ThemeSwitch<'a, S> {
    /// A fresh, unmounted switch
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            state: ThemeState::default(),
        }
    }

    /// Read the stored theme and become visible; later calls do nothing
    pub fn mount(&mut self) {
        if self.state.mounted {
            return;
        }
        self.state.theme = self.store.theme();
        self.state.mounted = true;
        tracing::trace!("Theme switch mounted with {:?}", self.state.theme);
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    /// Visible label, or `None` before mounting
    pub fn render(&self) -> Option<String> {
        if !self.state.mounted {
            return None;
        }
        Some(format!(
            "Current Theme: {}",
            self.state.theme.as_deref().unwrap_or_default()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_before_mount() {
        let store = MemoryThemeStore::new(Some("dark"));
        let switch = ThemeSwitch::new(&store);
        assert_eq!(switch.render(), None);
        assert_eq!(switch.state(), &ThemeState::default());
    }

    #[test]
    fn test_shows_theme_after_mount() {
        let store = MemoryThemeStore::new(Some("dark"));
        let mut switch = ThemeSwitch::new(&store);
        switch.mount();
        assert_eq!(switch.render().as_deref(), Some("Current Theme: dark"));
        assert_eq!(
            switch.state(),
            &ThemeState {
                mounted: true,
                theme: Some("dark".into())
            }
        );
    }

    #[test]
    fn test_absent_theme_renders_empty_label() {
        let store = MemoryThemeStore::default();
        let mut switch = ThemeSwitch::new(&store);
        switch.mount();
        assert_eq!(switch.render().as_deref(), Some("Current Theme: "));
    }

    #[test]
    fn test_mount_is_one_shot() {
        let store = MemoryThemeStore::new(Some("light"));
        let mut switch = ThemeSwitch::new(&store);
        switch.mount();
        switch.mount();
        assert!(switch.state().mounted);
        assert_eq!(switch.render().as_deref(), Some("Current Theme: light"));
    }

    #[test]
    fn test_fresh_instance_starts_unmounted() {
        let store = MemoryThemeStore::new(Some("light"));
        let mut first = ThemeSwitch::new(&store);
        first.mount();
        let second = ThemeSwitch::new(&store);
        assert!(!second.state().mounted);
        assert_eq!(second.render(), None);
    }

    #[test]
    fn test_dyn_store() {
        let store: Box<dyn ThemeStore> = Box::new(MemoryThemeStore::new(Some("dark")));
        let mut switch = ThemeSwitch::new(store.as_ref());
        switch.mount();
        assert_eq!(switch.render().as_deref(), Some("Current Theme: dark"));
    }
}
