//! Design tokens for the ChrisProduction site.
//!
//! Black and white surfaces with a gold accent. Both palettes are emitted as
//! CSS custom properties scoped by the `data-theme` attribute on `<html>`, so
//! switching themes is a single attribute write.

use chrisproduction_core::Theme;

/// Color palette for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background.
    pub bg_primary: &'static str,
    /// Alternate section background.
    pub bg_secondary: &'static str,
    /// Testimonial section background.
    pub bg_tertiary: &'static str,
    /// Card and tile background.
    pub bg_card: &'static str,
    /// Placeholder behind images.
    pub bg_media: &'static str,
    /// Contact section background.
    pub bg_contact: &'static str,
    /// Contact input background.
    pub bg_input: &'static str,
    /// Header background once scrolled.
    pub nav_solid: &'static str,
    /// Headings and body copy.
    pub text_primary: &'static str,
    /// Secondary copy.
    pub text_secondary: &'static str,
    /// Captions and fine print.
    pub text_muted: &'static str,
    /// Hairlines and tile borders.
    pub border: &'static str,
    /// Theme toggle background.
    pub toggle_bg: &'static str,
    /// Theme toggle icon color.
    pub toggle_fg: &'static str,
    /// Gradient over category and portfolio images.
    pub image_scrim: &'static str,
}

/// Color palette for the application.
pub mod colors {
    use super::Palette;

    /// Accent colors shared by both themes.
    pub mod accent {
        /// Gold accent.
        pub const GOLD: &str = "#D4AF37";
        /// Gold accent hover state.
        pub const GOLD_HOVER: &str = "#B8962E";
        /// Gold accent at 20% for icon halos.
        pub const GOLD_SOFT: &str = "rgba(212, 175, 55, 0.2)";
    }

    /// Overlay colors.
    pub mod shadow {
        /// Video modal backdrop.
        pub const OVERLAY: &str = "rgba(0, 0, 0, 0.9)";
        /// Card shadow.
        pub const SOFT: &str = "0 10px 25px rgba(0, 0, 0, 0.15)";
        /// Card shadow on hover.
        pub const LIFTED: &str = "0 20px 40px rgba(0, 0, 0, 0.25)";
    }

    /// Dark theme (default).
    pub const DARK: Palette = Palette {
        bg_primary: "#000000",
        bg_secondary: "#09090b",
        bg_tertiary: "#18181b",
        bg_card: "#27272a",
        bg_media: "#18181b",
        bg_contact: "#09090b",
        bg_input: "#18181b",
        nav_solid: "rgba(0, 0, 0, 0.9)",
        text_primary: "#ffffff",
        text_secondary: "#a1a1aa",
        text_muted: "#71717a",
        border: "#3f3f46",
        toggle_bg: "#27272a",
        toggle_fg: "#facc15",
        image_scrim: "linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4), transparent)",
    };

    /// Light theme.
    pub const LIGHT: Palette = Palette {
        bg_primary: "#ffffff",
        bg_secondary: "#f9fafb",
        bg_tertiary: "#f3f4f6",
        bg_card: "#ffffff",
        bg_media: "#e5e7eb",
        bg_contact: "#111827",
        bg_input: "#1f2937",
        nav_solid: "rgba(255, 255, 255, 0.9)",
        text_primary: "#111827",
        text_secondary: "#4b5563",
        text_muted: "#6b7280",
        border: "#e5e7eb",
        toggle_bg: "#f3f4f6",
        toggle_fg: "#111827",
        image_scrim: "linear-gradient(to top, rgba(17, 24, 39, 0.8), rgba(17, 24, 39, 0.4), transparent)",
    };
}

/// Palette for `theme`.
#[must_use]
pub const fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &colors::DARK,
        Theme::Light => &colors::LIGHT,
    }
}

/// Typography configuration.
pub mod typography {
    /// Body font stack.
    pub const FONT_FAMILY: &str =
        "'Geist', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
    /// Monospace font stack.
    pub const FONT_FAMILY_MONO: &str = "'Geist Mono', ui-monospace, SFMono-Regular, monospace";
}

/// Border radius values.
pub mod radius {
    /// Buttons and inputs.
    pub const SM: &str = "0.25rem";
    /// Cards and tiles.
    pub const MD: &str = "0.5rem";
    /// Testimonial cards.
    pub const LG: &str = "0.75rem";
    /// Full/pill radius.
    pub const FULL: &str = "9999px";
}

/// Animation/transition configuration.
pub mod animation {
    /// Hover color changes.
    pub const FAST: &str = "0.2s ease";
    /// Theme and header background changes.
    pub const NORMAL: &str = "0.3s ease";
    /// Card scale and reveal of grid items.
    pub const SMOOTH: &str = "0.5s ease";
    /// Section heading reveal.
    pub const SLOW: &str = "0.7s ease";
    /// Hero reveal.
    pub const HERO: &str = "1s ease";
}

fn palette_block(selector: &str, p: &Palette) -> String {
    format!(
        r"{selector} {{
  --bg-primary: {bg_primary};
  --bg-secondary: {bg_secondary};
  --bg-tertiary: {bg_tertiary};
  --bg-card: {bg_card};
  --bg-media: {bg_media};
  --bg-contact: {bg_contact};
  --bg-input: {bg_input};
  --nav-solid: {nav_solid};
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --text-muted: {text_muted};
  --border-default: {border};
  --toggle-bg: {toggle_bg};
  --toggle-fg: {toggle_fg};
  --image-scrim: {image_scrim};
}}",
        bg_primary = p.bg_primary,
        bg_secondary = p.bg_secondary,
        bg_tertiary = p.bg_tertiary,
        bg_card = p.bg_card,
        bg_media = p.bg_media,
        bg_contact = p.bg_contact,
        bg_input = p.bg_input,
        nav_solid = p.nav_solid,
        text_primary = p.text_primary,
        text_secondary = p.text_secondary,
        text_muted = p.text_muted,
        border = p.border,
        toggle_bg = p.toggle_bg,
        toggle_fg = p.toggle_fg,
        image_scrim = p.image_scrim,
    )
}

/// Generate CSS custom properties for both themes.
///
/// The dark palette also applies to `:root` without a `data-theme`
/// attribute, which covers the first paint before the preference is read.
pub fn generate_css_variables() -> String {
    let shared = format!(
        r":root {{
  --accent-gold: {gold};
  --accent-gold-hover: {gold_hover};
  --accent-gold-soft: {gold_soft};
  --overlay-bg: {overlay};
  --shadow-soft: {shadow_soft};
  --shadow-lifted: {shadow_lifted};
  --font-family: {font_family};
  --font-family-mono: {font_family_mono};
  --radius-sm: {radius_sm};
  --radius-md: {radius_md};
  --radius-lg: {radius_lg};
  --radius-full: {radius_full};
  --transition-fast: {transition_fast};
  --transition-normal: {transition_normal};
  --transition-smooth: {transition_smooth};
  --transition-slow: {transition_slow};
  --transition-hero: {transition_hero};
}}",
        gold = colors::accent::GOLD,
        gold_hover = colors::accent::GOLD_HOVER,
        gold_soft = colors::accent::GOLD_SOFT,
        overlay = colors::shadow::OVERLAY,
        shadow_soft = colors::shadow::SOFT,
        shadow_lifted = colors::shadow::LIFTED,
        font_family = typography::FONT_FAMILY,
        font_family_mono = typography::FONT_FAMILY_MONO,
        radius_sm = radius::SM,
        radius_md = radius::MD,
        radius_lg = radius::LG,
        radius_full = radius::FULL,
        transition_fast = animation::FAST,
        transition_normal = animation::NORMAL,
        transition_smooth = animation::SMOOTH,
        transition_slow = animation::SLOW,
        transition_hero = animation::HERO,
    );

    format!(
        "{shared}\n{dark}\n{light}",
        dark = palette_block(r#":root, :root[data-theme="dark"]"#, palette(Theme::Dark)),
        light = palette_block(r#":root[data-theme="light"]"#, palette(Theme::Light)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.contains(":root"));
        assert!(css.contains(r#":root[data-theme="light"]"#));
        assert!(css.contains("--accent-gold: #D4AF37"));
        assert!(css.contains("--bg-primary: #000000"));
        assert!(css.contains("--bg-primary: #ffffff"));
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(palette(Theme::Dark), palette(Theme::Light));
        assert_eq!(palette(Theme::Dark).text_primary, "#ffffff");
    }

    #[test]
    fn test_color_values() {
        assert!(colors::accent::GOLD.starts_with('#'));
        assert!(colors::DARK.bg_primary.starts_with('#'));
    }
}
