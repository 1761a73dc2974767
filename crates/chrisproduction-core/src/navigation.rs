//! Site navigation: pages, section links and the scroll-aware header.

/// Scroll offset after which the header gets a solid background.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Path of the about page.
pub const ABOUT_PATH: &str = "/om-mig";

/// Top-level pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Landing page with all sections.
    #[default]
    Home,
    /// "Om mig" page.
    About,
}

impl Page {
    /// Page served at `path`. Unknown paths show the home page.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed == ABOUT_PATH || trimmed == format!("{ABOUT_PATH}/index.html") {
            Self::About
        } else {
            Self::Home
        }
    }

    /// Canonical path of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => ABOUT_PATH,
        }
    }
}

/// A header link to a section of the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Link text.
    pub label: &'static str,
    /// Element id of the target section.
    pub section_id: &'static str,
}

impl NavLink {
    /// Anchor used from pages other than home.
    #[must_use]
    pub fn href_from_other_page(&self) -> String {
        format!("/#{}", self.section_id)
    }
}

/// Header links, in display order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Video",
        section_id: "kategori",
    },
    NavLink {
        label: "Grafik",
        section_id: "portfolio",
    },
    NavLink {
        label: "Virksomheder",
        section_id: "virksomheder",
    },
    NavLink {
        label: "Kontakt",
        section_id: "kontakt",
    },
];

/// Whether the header should render solid at this scroll offset.
#[must_use]
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/om-mig"), Page::About);
        assert_eq!(Page::from_path("/om-mig/"), Page::About);
        assert_eq!(Page::from_path("/om-mig/index.html"), Page::About);
        assert_eq!(Page::from_path("/unknown"), Page::Home);
    }

    #[test]
    fn test_page_path() {
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::from_path(Page::About.path()), Page::About);
    }

    #[test]
    fn test_nav_links_target_sections() {
        let ids: Vec<_> = NAV_LINKS.iter().map(|l| l.section_id).collect();
        assert_eq!(ids, ["kategori", "portfolio", "virksomheder", "kontakt"]);
        assert_eq!(NAV_LINKS[3].href_from_other_page(), "/#kontakt");
    }

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0.0, DEFAULT_SCROLL_THRESHOLD_PX));
        assert!(!is_scrolled(50.0, DEFAULT_SCROLL_THRESHOLD_PX));
        assert!(is_scrolled(50.5, DEFAULT_SCROLL_THRESHOLD_PX));
    }
}
