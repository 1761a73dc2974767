//! `YouTube` embed URL resolution.
//!
//! Turns whatever link an editor pasted into the site content (short links,
//! watch pages, legacy `/v/` paths, channel pages) into a URL that plays
//! inline in an iframe.
//!
//! Resolution is total: input without a recognizable video id is returned
//! unchanged, so the player falls back to loading the raw link.
//!
//! ```rust
//! use chrisproduction_core::embed::resolve_embed_url;
//!
//! assert_eq!(
//!     resolve_embed_url("https://youtu.be/K1YzToa-EoA"),
//!     "https://www.youtube.com/embed/K1YzToa-EoA?autoplay=1"
//! );
//! assert_eq!(resolve_embed_url("not a url"), "not a url");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::EmbedConfig;

/// Length of a `YouTube` video id.
pub const VIDEO_ID_LEN: usize = 11;

/// Host serving the embeddable player.
pub const DEFAULT_EMBED_HOST: &str = "www.youtube.com";

/// Markers after which a video id may appear, followed by the id itself.
///
/// `/user/` and `/watch?feature=` take arbitrary non-space runs before the id;
/// the id is then the last 11-character run that still lets the match succeed.
#[allow(clippy::expect_used)]
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        concat!(
            r"(?:youtu\.be/|youtube\.com(?:",
            r"/embed/|/v/|/watch\?v=|/user/\S+|/ytscreeningroom\?v=",
            r"|/sandalsRes49849s/v/|/watch\?feature=\S*&v=",
            r"))([A-Za-z0-9_-]{{{len}}})",
        ),
        len = VIDEO_ID_LEN,
    ))
    .expect("video id pattern is valid")
});

/// Extract the 11-character video id from a `YouTube` link.
///
/// Returns `None` when no known marker is followed by an id. When the
/// character run after the marker is longer than an id, the first 11
/// characters are taken.
#[must_use]
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Resolve `url` with the default player settings.
#[must_use]
pub fn resolve_embed_url(url: &str) -> String {
    EmbedResolver::default().resolve(url)
}

/// Builds embed URLs for a configured player host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmbedResolver {
    config: EmbedConfig,
}

impl EmbedResolver {
    /// Create a resolver for the given player settings.
    #[must_use]
    pub const fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    /// The player settings in use.
    #[must_use]
    pub const fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Build the embed URL for a known video id.
    #[must_use]
    pub fn embed_url_for_id(&self, video_id: &str) -> String {
        let host = &self.config.host;
        if self.config.autoplay {
            format!("https://{host}/embed/{video_id}?autoplay=1")
        } else {
            format!("https://{host}/embed/{video_id}")
        }
    }

    /// Map any string to something an iframe can load.
    ///
    /// Never fails: unrecognized input is passed through unchanged.
    #[must_use]
    pub fn resolve(&self, url: &str) -> String {
        if let Some(video_id) = extract_video_id(url) {
            self.embed_url_for_id(video_id)
        } else {
            debug!("No video id found in {:?}, passing through", url);
            url.to_string()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const ID: &str = "K1YzToa-EoA";

    fn embed(id: &str) -> String {
        format!("https://www.youtube.com/embed/{id}?autoplay=1")
    }

    mod extraction {
        use super::*;

        #[test]
        fn test_short_link() {
            assert_eq!(extract_video_id("https://youtu.be/K1YzToa-EoA"), Some(ID));
        }

        #[test]
        fn test_short_link_with_query() {
            assert_eq!(extract_video_id("https://youtu.be/K1YzToa-EoA?t=42"), Some(ID));
        }

        #[test]
        fn test_watch_link() {
            assert_eq!(
                extract_video_id("https://www.youtube.com/watch?v=K1YzToa-EoA"),
                Some(ID)
            );
        }

        #[test]
        fn test_watch_link_with_trailing_params() {
            assert_eq!(
                extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123&t=10s"),
                Some("dQw4w9WgXcQ")
            );
        }

        #[test]
        fn test_embed_and_v_paths() {
            assert_eq!(
                extract_video_id("https://www.youtube.com/embed/a_b-c_d-e_f"),
                Some("a_b-c_d-e_f")
            );
            assert_eq!(
                extract_video_id("http://youtube.com/v/K1YzToa-EoA?version=3"),
                Some(ID)
            );
        }

        #[test]
        fn test_screening_room() {
            assert_eq!(
                extract_video_id("https://www.youtube.com/ytscreeningroom?v=K1YzToa-EoA"),
                Some(ID)
            );
        }

        #[test]
        fn test_watch_with_feature_param_first() {
            assert_eq!(
                extract_video_id("https://www.youtube.com/watch?feature=player_embedded&v=K1YzToa-EoA"),
                Some(ID)
            );
        }

        #[test]
        fn test_user_channel_path() {
            assert_eq!(
                extract_video_id("https://www.youtube.com/user/SomeChannel#p/u/1/K1YzToa-EoA"),
                Some(ID)
            );
        }

        #[test]
        fn test_longer_run_takes_first_eleven() {
            assert_eq!(
                extract_video_id("https://youtu.be/ABCDEFGHIJKLMNOP"),
                Some("ABCDEFGHIJK")
            );
        }

        #[test]
        fn test_extracted_id_has_fixed_length() {
            for url in [
                "https://youtu.be/dQw4w9WgXcQ",
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42",
                "https://www.youtube.com/embed/dQw4w9WgXcQXYZ",
            ] {
                let id = extract_video_id(url).unwrap();
                assert_eq!(id.len(), VIDEO_ID_LEN, "{url}");
            }
        }

        #[test]
        fn test_too_short_id() {
            assert_eq!(extract_video_id("https://youtu.be/short"), None);
        }

        #[test]
        fn test_invalid_characters_break_the_id() {
            assert_eq!(extract_video_id("https://youtu.be/K1Yz%oa-EoA"), None);
        }

        #[test]
        fn test_unrelated_host() {
            assert_eq!(extract_video_id("https://vimeo.com/123456789012"), None);
        }

        #[test]
        fn test_marker_is_case_sensitive() {
            assert_eq!(extract_video_id("https://YOUTU.BE/K1YzToa-EoA"), None);
        }
    }

    mod resolving {
        use super::*;

        #[test]
        fn test_short_link_example() {
            assert_eq!(resolve_embed_url("https://youtu.be/K1YzToa-EoA"), embed(ID));
        }

        #[test]
        fn test_not_a_url_passes_through() {
            assert_eq!(resolve_embed_url("not a url"), "not a url");
        }

        #[test]
        fn test_empty_string_passes_through() {
            assert_eq!(resolve_embed_url(""), "");
        }

        #[test]
        fn test_resolving_is_idempotent() {
            let once = resolve_embed_url("https://www.youtube.com/watch?v=K1YzToa-EoA&t=3");
            let twice = resolve_embed_url(&once);
            assert_eq!(once, embed(ID));
            assert_eq!(twice, once);
        }

        #[test]
        fn test_custom_host_without_autoplay() {
            let resolver = EmbedResolver::new(EmbedConfig {
                host: "www.youtube-nocookie.com".to_string(),
                autoplay: false,
            });
            assert_eq!(
                resolver.resolve("https://youtu.be/K1YzToa-EoA"),
                "https://www.youtube-nocookie.com/embed/K1YzToa-EoA"
            );
        }

        #[test]
        fn test_default_resolver_uses_youtube_host() {
            let resolver = EmbedResolver::default();
            assert_eq!(resolver.config().host, DEFAULT_EMBED_HOST);
            assert!(resolver.config().autoplay);
        }
    }
}
