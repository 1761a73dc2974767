//! Inline SVG icons.

use chrisproduction_core::{CategoryIcon, SocialNetwork};
use leptos::prelude::*;

/// SVG path data, 24x24 viewBox.
pub mod paths {
    /// Sun (shown while dark, switches to light).
    pub const SUN: &str = "M12 7c-2.76 0-5 2.24-5 5s2.24 5 5 5 5-2.24 5-5-2.24-5-5-5zM2 13h2c.55 0 1-.45 1-1s-.45-1-1-1H2c-.55 0-1 .45-1 1s.45 1 1 1zm18 0h2c.55 0 1-.45 1-1s-.45-1-1-1h-2c-.55 0-1 .45-1 1s.45 1 1 1zM11 2v2c0 .55.45 1 1 1s1-.45 1-1V2c0-.55-.45-1-1-1s-1 .45-1 1zm0 18v2c0 .55.45 1 1 1s1-.45 1-1v-2c0-.55-.45-1-1-1s-1 .45-1 1zM5.99 4.58a.996.996 0 0 0-1.41 0 .996.996 0 0 0 0 1.41l1.06 1.06c.39.39 1.03.39 1.41 0s.39-1.03 0-1.41L5.99 4.58zm12.37 12.37a.996.996 0 0 0-1.41 0 .996.996 0 0 0 0 1.41l1.06 1.06c.39.39 1.03.39 1.41 0a.996.996 0 0 0 0-1.41l-1.06-1.06zm1.06-10.96a.996.996 0 0 0 0-1.41.996.996 0 0 0-1.41 0l-1.06 1.06c-.39.39-.39 1.03 0 1.41s1.03.39 1.41 0l1.06-1.06zM7.05 18.36a.996.996 0 0 0 0-1.41.996.996 0 0 0-1.41 0l-1.06 1.06c-.39.39-.39 1.03 0 1.41s1.03.39 1.41 0l1.06-1.06z";
    /// Crescent moon (shown while light, switches to dark).
    pub const MOON: &str = "M12 3a9 9 0 1 0 9 9c0-.46-.04-.92-.1-1.36a5.389 5.389 0 0 1-4.4 2.26 5.403 5.403 0 0 1-3.14-9.8c-.44-.06-.9-.1-1.36-.1z";
    /// Hamburger.
    pub const MENU: &str = "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z";
    /// Close cross.
    pub const CLOSE: &str = "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z";
    /// Play triangle.
    pub const PLAY: &str = "M8 5v14l11-7z";
    /// Quotation mark.
    pub const QUOTE: &str = "M6 17h3l2-4V7H5v6h3zm8 0h3l2-4V7h-6v6h3z";
    /// Camcorder.
    pub const VIDEO: &str = "M17 10.5V7c0-.55-.45-1-1-1H4c-.55 0-1 .45-1 1v10c0 .55.45 1 1 1h12c.55 0 1-.45 1-1v-3.5l4 4v-11l-4 4z";
    /// Film strip.
    pub const FILM: &str = "M18 4l2 4h-3l-2-4h-2l2 4h-3l-2-4H8l2 4H7L5 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V4h-4z";
    /// Music note.
    pub const MUSIC: &str = "M12 3v10.55c-.59-.34-1.27-.55-2-.55-2.21 0-4 1.79-4 4s1.79 4 4 4 4-1.79 4-4V7h4V3h-6z";
    /// Video file.
    pub const FILE_VIDEO: &str = "M14 2H6c-1.1 0-1.99.9-1.99 2L4 20c0 1.1.89 2 1.99 2H18c1.1 0 2-.9 2-2V8l-6-6zm-4 16v-6l5 3-5 3zm3-9V3.5L18.5 9H13z";
    /// YouTube logo.
    pub const YOUTUBE: &str = "M21.582 7.186c-.23-.869-.908-1.553-1.775-1.784C18.254 5 12 5 12 5s-6.254 0-7.807.402c-.867.23-1.545.915-1.775 1.784C2 8.746 2 12 2 12s0 3.254.418 4.814c.23.869.908 1.553 1.775 1.784C5.746 19 12 19 12 19s6.254 0 7.807-.402c.867-.23 1.545-.915 1.775-1.784C22 15.254 22 12 22 12s0-3.254-.418-4.814zM10 15V9l5.196 3L10 15z";
    /// Instagram logo.
    pub const INSTAGRAM: &str = "M7.8 2h8.4C19.4 2 22 4.6 22 7.8v8.4a5.8 5.8 0 0 1-5.8 5.8H7.8C4.6 22 2 19.4 2 16.2V7.8A5.8 5.8 0 0 1 7.8 2m-.2 2A3.6 3.6 0 0 0 4 7.6v8.8C4 18.39 5.61 20 7.6 20h8.8a3.6 3.6 0 0 0 3.6-3.6V7.6C20 5.61 18.39 4 16.4 4H7.6m9.65 1.5a1.25 1.25 0 0 1 1.25 1.25A1.25 1.25 0 0 1 17.25 8 1.25 1.25 0 0 1 16 6.75a1.25 1.25 0 0 1 1.25-1.25M12 7a5 5 0 0 1 5 5 5 5 0 0 1-5 5 5 5 0 0 1-5-5 5 5 0 0 1 5-5m0 2a3 3 0 0 0-3 3 3 3 0 0 0 3 3 3 3 0 0 0 3-3 3 3 0 0 0-3-3z";
    /// Facebook logo.
    pub const FACEBOOK: &str = "M22 12c0-5.52-4.48-10-10-10S2 6.48 2 12c0 4.84 3.44 8.87 8 9.8V15H8v-3h2V9.5C10 7.57 11.57 6 13.5 6H16v3h-2c-.55 0-1 .45-1 1v2h3v3h-3v6.95c5.05-.5 9-4.76 9-9.95z";
}

/// Path for a category card icon.
pub const fn category_path(icon: CategoryIcon) -> &'static str {
    match icon {
        CategoryIcon::Video => paths::VIDEO,
        CategoryIcon::Film => paths::FILM,
        CategoryIcon::Music => paths::MUSIC,
        CategoryIcon::FileVideo => paths::FILE_VIDEO,
    }
}

/// Path for a footer social icon.
pub const fn social_path(network: SocialNetwork) -> &'static str {
    match network {
        SocialNetwork::YouTube => paths::YOUTUBE,
        SocialNetwork::Instagram => paths::INSTAGRAM,
        SocialNetwork::Facebook => paths::FACEBOOK,
    }
}

/// A single-path icon.
#[component]
pub fn Icon(
    /// SVG path data.
    path: &'static str,
    /// Rendered width and height in pixels.
    #[prop(default = 24)]
    size: u32,
    /// Extra classes.
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {class}")
            viewBox="0 0 24 24"
            width=size
            height=size
            fill="currentColor"
            aria-hidden="true"
        >
            <path d=path />
        </svg>
    }
}
