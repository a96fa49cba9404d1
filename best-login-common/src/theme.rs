//! Theme preference model
//!
//! A stored preference is `light`, `dark` or `auto`; `auto` defers to the
//! system color scheme when the concrete theme is needed. Storage problems
//! never escape this module: reads fall back to `auto`, failed writes are
//! logged and dropped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::error::StorageError;

/// Root element attribute carrying an explicit theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query telling whether the system prefers a dark scheme
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

/// Concrete theme used for rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Auto];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Auto => "Auto",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
            Theme::Auto => "🖥️",
        }
    }

    /// Resolve to a concrete theme; `prefers_dark` is `None` when the
    /// system preference cannot be read.
    pub fn resolve(self, prefers_dark: Option<bool>) -> EffectiveTheme {
        match self {
            Theme::Light => EffectiveTheme::Light,
            Theme::Dark => EffectiveTheme::Dark,
            Theme::Auto if prefers_dark == Some(true) => EffectiveTheme::Dark,
            Theme::Auto => EffectiveTheme::Light,
        }
    }

    /// Value of [`THEME_ATTRIBUTE`], or `None` to remove it and let the
    /// stylesheet media query decide.
    pub fn dom_attribute(self) -> Option<&'static str> {
        match self {
            Theme::Auto => None,
            explicit => Some(explicit.as_str()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

impl EffectiveTheme {
    /// The explicit theme that flips this one
    pub fn toggled(self) -> Theme {
        match self {
            EffectiveTheme::Light => Theme::Dark,
            EffectiveTheme::Dark => Theme::Light,
        }
    }
}

impl From<EffectiveTheme> for Theme {
    fn from(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Light => Theme::Light,
            EffectiveTheme::Dark => Theme::Dark,
        }
    }
}

/// Key-value storage for user preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read the stored theme, falling back to `auto` on any problem
pub fn load_theme(store: &impl PreferenceStore, key: &str) -> Theme {
    match store.get(key) {
        Ok(Some(value)) => value.parse().unwrap_or_else(|err: UnknownTheme| {
            warn!(%err, "ignoring stored theme");
            Theme::Auto
        }),
        Ok(None) => Theme::Auto,
        Err(err) => {
            warn!(%err, "theme preference unreadable, using auto");
            Theme::Auto
        }
    }
}

/// Persist the theme; failures are logged and ignored
pub fn save_theme(store: &impl PreferenceStore, key: &str, theme: Theme) {
    if let Err(err) = store.set(key, theme.as_str()) {
        warn!(%err, %theme, "could not persist theme preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.0.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Storage that refuses every access, like private browsing modes
    struct DeniedStore;

    impl PreferenceStore for DeniedStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Denied("SecurityError".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Denied("QuotaExceededError".to_string()))
        }
    }

    struct UnavailableStore;

    impl PreferenceStore for UnavailableStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_load_defaults_to_auto() {
        assert_eq!(load_theme(&MemoryStore::default(), "theme"), Theme::Auto);
    }

    #[test]
    fn test_load_survives_denied_storage() {
        assert_eq!(load_theme(&DeniedStore, "theme"), Theme::Auto);
        assert_eq!(load_theme(&UnavailableStore, "theme"), Theme::Auto);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::default();

        save_theme(&store, "theme", Theme::Dark);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(load_theme(&store, "theme"), Theme::Dark);
    }

    #[test]
    fn test_save_ignores_denied_storage() {
        save_theme(&DeniedStore, "theme", Theme::Light);
    }

    #[test]
    fn test_unknown_stored_value_falls_back() {
        let store = MemoryStore::default();
        store.set("theme", "sepia").unwrap();
        assert_eq!(load_theme(&store, "theme"), Theme::Auto);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Theme::Light.resolve(Some(true)), EffectiveTheme::Light);
        assert_eq!(Theme::Dark.resolve(None), EffectiveTheme::Dark);
        assert_eq!(Theme::Auto.resolve(Some(true)), EffectiveTheme::Dark);
        assert_eq!(Theme::Auto.resolve(Some(false)), EffectiveTheme::Light);
        assert_eq!(Theme::Auto.resolve(None), EffectiveTheme::Light);
    }

    #[test]
    fn test_dom_attribute() {
        assert_eq!(Theme::Light.dom_attribute(), Some("light"));
        assert_eq!(Theme::Dark.dom_attribute(), Some("dark"));
        assert_eq!(Theme::Auto.dom_attribute(), None);
    }

    #[test]
    fn test_toggle_picks_opposite_explicit_theme() {
        assert_eq!(EffectiveTheme::Light.toggled(), Theme::Dark);
        assert_eq!(EffectiveTheme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_parse() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
        assert!("Dark".parse::<Theme>().is_err());
    }
}
