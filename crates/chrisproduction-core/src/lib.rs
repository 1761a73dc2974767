//! ChrisProduction Core Library
//!
//! Target-independent logic behind the ChrisProduction website:
//! - Resolving `YouTube` links into embeddable player URLs
//! - The video modal lifecycle (scroll lock, Escape listener)
//! - The persisted dark/light theme preference
//! - Scroll-triggered reveal latches and header navigation helpers
//! - Contact form validation
//! - Static page content and site configuration
//!
//! Browser specifics (`localStorage`, DOM listeners) live behind the
//! [`KeyValueStore`] and [`ModalHost`] traits and are implemented by the UI
//! crate.
//!
//! ```rust
//! use chrisproduction_core::{MemoryStore, Theme, ThemePreference};
//!
//! let mut theme = ThemePreference::load(MemoryStore::new(), "theme", Theme::Dark);
//! assert_eq!(theme.toggle().unwrap(), Theme::Light);
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod embed;
pub mod error;
pub mod modal;
pub mod navigation;
pub mod reveal;
pub mod storage;
pub mod theme;

pub use config::{DEFAULT_CONTACT_ACKNOWLEDGEMENT, EmbedConfig, SiteConfig, ThemeConfig};
pub use contact::{ContactField, ContactForm, ContactSubmission, is_valid_email};
pub use content::{
    BRAND_NAME, CATEGORIES, COMPANIES, COPYRIGHT, Category, CategoryIcon, Company, PROJECTS,
    Project, SOCIAL_LINKS, SocialLink, SocialNetwork, TESTIMONIALS, Testimonial,
};
pub use embed::{
    DEFAULT_EMBED_HOST, EmbedResolver, VIDEO_ID_LEN, extract_video_id, resolve_embed_url,
};
pub use error::{ContactFormError, Error, Result};
pub use modal::{
    CloseTrigger, ESCAPE_KEY, ListenerId, ModalHost, ModalState, PointerTarget, VideoModal,
};
pub use navigation::{
    ABOUT_PATH, DEFAULT_SCROLL_THRESHOLD_PX, NAV_LINKS, NavLink, Page, is_scrolled,
};
pub use reveal::{DEFAULT_REVEAL_THRESHOLD, RevealLatch, stagger_delay_ms};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{THEME_STORAGE_KEY, Theme, ThemePreference};
