//! Site configuration.
//!
//! The site ships a `site.json` next to the UI crate. Every field has a
//! default, so a partial (or empty) object is a valid configuration.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::embed::DEFAULT_EMBED_HOST;
use crate::error::{Error, Result};
use crate::navigation::DEFAULT_SCROLL_THRESHOLD_PX;
use crate::reveal::DEFAULT_REVEAL_THRESHOLD;
use crate::theme::{THEME_STORAGE_KEY, Theme};

/// Message shown after the contact form is submitted.
pub const DEFAULT_CONTACT_ACKNOWLEDGEMENT: &str =
    "Tak for din besked! Vi vender tilbage hurtigst muligt.";

/// Video player settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Host serving the embeddable player.
    #[serde(default = "default_embed_host")]
    pub host: String,
    /// Start playback as soon as the player loads.
    #[serde(default = "default_true")]
    pub autoplay: bool,
}

fn default_embed_host() -> String {
    DEFAULT_EMBED_HOST.to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            host: default_embed_host(),
            autoplay: true,
        }
    }
}

/// Theme persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Key of the persisted preference.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Theme used when nothing valid is stored.
    #[serde(default)]
    pub default_theme: Theme,
}

fn default_storage_key() -> String {
    THEME_STORAGE_KEY.to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_theme: Theme::default(),
        }
    }
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Video player settings.
    #[serde(default)]
    pub embed: EmbedConfig,
    /// Theme persistence settings.
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Fraction of a section that must be visible before it fades in.
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    /// Scroll offset after which the navigation bar turns solid.
    #[serde(default = "default_scroll_threshold")]
    pub nav_scroll_threshold_px: f64,
    /// Message shown after the contact form is submitted.
    #[serde(default = "default_acknowledgement")]
    pub contact_acknowledgement: String,
}

const fn default_reveal_threshold() -> f64 {
    DEFAULT_REVEAL_THRESHOLD
}

const fn default_scroll_threshold() -> f64 {
    DEFAULT_SCROLL_THRESHOLD_PX
}

fn default_acknowledgement() -> String {
    DEFAULT_CONTACT_ACKNOWLEDGEMENT.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            embed: EmbedConfig::default(),
            theme: ThemeConfig::default(),
            reveal_threshold: default_reveal_threshold(),
            nav_scroll_threshold_px: default_scroll_threshold(),
            contact_acknowledgement: default_acknowledgement(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        debug!(
            "Loaded site config (embed host {}, storage key {})",
            config.embed.host, config.theme.storage_key
        );
        Ok(config)
    }

    /// Parse a configuration, falling back to defaults on any error.
    #[must_use]
    pub fn from_json_or_default(content: &str) -> Self {
        Self::from_json(content).unwrap_or_else(|e| {
            warn!("Invalid site config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.embed.host.trim().is_empty() {
            return Err(Error::Configuration(
                "embed.host cannot be empty".to_string(),
            ));
        }
        if self.theme.storage_key.trim().is_empty() {
            return Err(Error::Configuration(
                "theme.storage_key cannot be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(Error::Configuration(format!(
                "reveal_threshold must be between 0 and 1, got {}",
                self.reveal_threshold
            )));
        }
        if !self.nav_scroll_threshold_px.is_finite() || self.nav_scroll_threshold_px < 0.0 {
            return Err(Error::Configuration(format!(
                "nav_scroll_threshold_px must be a non-negative number, got {}",
                self.nav_scroll_threshold_px
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.embed.host, "www.youtube.com");
        assert!(config.embed.autoplay);
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.theme.default_theme, Theme::Dark);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.nav_scroll_threshold_px, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(
            r#"{"embed": {"autoplay": false}, "theme": {"default_theme": "light"}}"#,
        )
        .unwrap();
        assert!(!config.embed.autoplay);
        assert_eq!(config.embed.host, "www.youtube.com");
        assert_eq!(config.theme.default_theme, Theme::Light);
        assert_eq!(config.theme.storage_key, "theme");
    }

    #[test]
    fn test_threshold_out_of_range() {
        let err = SiteConfig::from_json(r#"{"reveal_threshold": 1.5}"#).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let err = SiteConfig::from_json(r#"{"theme": {"storage_key": " "}}"#).unwrap_err();
        assert!(err.to_string().contains("storage_key"));
    }

    #[test]
    fn test_negative_scroll_threshold_rejected() {
        let err = SiteConfig::from_json(r#"{"nav_scroll_threshold_px": -1}"#).unwrap_err();
        assert!(err.to_string().contains("nav_scroll_threshold_px"));
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let config = SiteConfig::from_json_or_default("{ not json");
        assert_eq!(config, SiteConfig::default());
    }
}
