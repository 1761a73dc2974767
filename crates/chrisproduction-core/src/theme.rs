//! Dark/light theme preference.
//!
//! The preference is read once when the page starts and written back on every
//! toggle. A toggle writes storage first and only then commits the new value
//! in memory, so a failed write leaves both sides on the old theme.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Storage key of the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Color theme of the site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (default).
    #[default]
    Dark,
    /// Light theme.
    Light,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value written to storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Whether this is the dark theme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Parse a stored value. Anything but `dark` or `light` is `None`.
    #[must_use]
    pub fn parse_stored(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme preference backed by a persistence slot.
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Load the preference stored under `key`.
    ///
    /// Missing, unreadable or unrecognized values fall back to `default`.
    pub fn load(store: S, key: impl Into<String>, default: Theme) -> Self {
        let key = key.into();
        let current = match store.get(&key) {
            Ok(Some(value)) => Theme::parse_stored(&value).unwrap_or_else(|| {
                warn!("Ignoring unrecognized stored theme {:?}", value);
                default
            }),
            Ok(None) => default,
            Err(e) => {
                warn!("Failed to read theme preference: {}", e);
                default
            }
        };
        debug!("Initial theme: {}", current);
        Self {
            store,
            key,
            current,
        }
    }

    /// The theme currently in effect.
    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Switch to the other theme and persist it.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the write fails; the current theme is
    /// left unchanged in that case.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.toggled();
        self.store.set(&self.key, next.as_str())?;
        self.current = next;
        info!("Theme switched to {}", next);
        Ok(next)
    }

    /// The backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Storage key of the preference.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::error::Error;
    use crate::storage::{MemoryStore, MockKeyValueStore};

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_parse_stored() {
        assert_eq!(Theme::parse_stored("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse_stored("light"), Some(Theme::Light));
        assert_eq!(Theme::parse_stored("Dark"), None);
        assert_eq!(Theme::parse_stored("system"), None);
        assert_eq!(Theme::parse_stored(""), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_load_defaults_to_dark_when_absent() {
        let pref = ThemePreference::load(MemoryStore::new(), THEME_STORAGE_KEY, Theme::Dark);
        assert_eq!(pref.current(), Theme::Dark);
    }

    #[test]
    fn test_load_reads_stored_value() {
        let store = MemoryStore::with_entry("theme", "light");
        let pref = ThemePreference::load(store, THEME_STORAGE_KEY, Theme::Dark);
        assert_eq!(pref.current(), Theme::Light);
    }

    #[test]
    fn test_load_ignores_unrecognized_value() {
        let store = MemoryStore::with_entry("theme", "solarized");
        let pref = ThemePreference::load(store, THEME_STORAGE_KEY, Theme::Dark);
        assert_eq!(pref.current(), Theme::Dark);
    }

    #[test]
    fn test_load_survives_read_error() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .with(eq("theme"))
            .returning(|_| Err(Error::StorageUnavailable("blocked".to_string())));
        let pref = ThemePreference::load(store, THEME_STORAGE_KEY, Theme::Dark);
        assert_eq!(pref.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_new_value() {
        let mut pref = ThemePreference::load(MemoryStore::new(), THEME_STORAGE_KEY, Theme::Dark);
        let next = pref.toggle().unwrap();
        assert_eq!(next, Theme::Light);
        assert_eq!(pref.current(), Theme::Light);
        assert_eq!(
            pref.store().get("theme").unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_toggle_twice_returns_to_original() {
        let mut pref = ThemePreference::load(MemoryStore::new(), THEME_STORAGE_KEY, Theme::Dark);
        pref.toggle().unwrap();
        pref.toggle().unwrap();
        assert_eq!(pref.current(), Theme::Dark);
        assert_eq!(pref.store().get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_failed_write_keeps_current_theme() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| Ok(Some("light".to_string())));
        store
            .expect_set()
            .with(eq("theme"), eq("dark"))
            .times(1)
            .returning(|key, _| {
                Err(Error::StorageWrite {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                })
            });

        let mut pref = ThemePreference::load(store, THEME_STORAGE_KEY, Theme::Dark);
        assert_eq!(pref.current(), Theme::Light);
        assert!(pref.toggle().is_err());
        assert_eq!(pref.current(), Theme::Light);
    }

    #[test]
    fn test_custom_key() {
        let mut pref = ThemePreference::load(MemoryStore::new(), "site-theme", Theme::Light);
        assert_eq!(pref.key(), "site-theme");
        pref.toggle().unwrap();
        assert_eq!(
            pref.store().get("site-theme").unwrap().as_deref(),
            Some("dark")
        );
        assert_eq!(pref.store().get("theme").unwrap(), None);
    }
}
