//! Static content of the home page.

/// Number of distinct portfolio thumbnails shipped with the site.
pub const PORTFOLIO_IMAGE_COUNT: u32 = 12;

/// Showreel every card currently links to.
pub const SHOWREEL_URL: &str = "https://youtu.be/K1YzToa-EoA";

/// Icon drawn on a service category card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    /// Camcorder.
    Video,
    /// Film strip.
    Film,
    /// Music note.
    Music,
    /// Video file.
    FileVideo,
}

/// A service category with its sample video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Card title.
    pub title: &'static str,
    /// Icon on the card.
    pub icon: CategoryIcon,
    /// Background image path.
    pub image: &'static str,
    /// Link played in the modal.
    pub video_url: &'static str,
}

/// A portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// 1-based project number.
    pub id: u32,
    /// Title shown on hover.
    pub title: &'static str,
    /// Link played in the modal.
    pub video_url: &'static str,
}

impl Project {
    /// Thumbnail path; thumbnails repeat after [`PORTFOLIO_IMAGE_COUNT`].
    #[must_use]
    pub fn image_path(&self) -> String {
        let n = self.id.saturating_sub(1) % PORTFOLIO_IMAGE_COUNT + 1;
        format!("/images/portfolio-{n}.png")
    }
}

/// A client quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    /// Person quoted.
    pub name: &'static str,
    /// Quote.
    pub text: &'static str,
    /// Their company.
    pub company: &'static str,
}

impl Testimonial {
    /// Portrait path for the `index`-th testimonial.
    #[must_use]
    pub fn image_path(index: usize) -> String {
        format!("/images/testimonial-{}.png", index + 1)
    }
}

/// A client the studio has worked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Company {
    /// Display order.
    pub id: u32,
    /// Name rendered as a logo tile.
    pub name: &'static str,
}

/// Social network a footer link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    /// YouTube channel.
    YouTube,
    /// Instagram profile.
    Instagram,
    /// Facebook page.
    Facebook,
}

/// A footer link to a social profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    /// Network.
    pub network: SocialNetwork,
    /// Profile URL.
    pub url: &'static str,
    /// Accessible label.
    pub label: &'static str,
}

/// Service categories.
pub const CATEGORIES: [Category; 4] = [
    Category {
        title: "BRYLLUPSVIDEO",
        icon: CategoryIcon::Video,
        image: "/images/category-wedding.png",
        video_url: SHOWREEL_URL,
    },
    Category {
        title: "REKLAME VIDEO",
        icon: CategoryIcon::Film,
        image: "/images/category-commercial.png",
        video_url: SHOWREEL_URL,
    },
    Category {
        title: "MUSIK VIDEO",
        icon: CategoryIcon::Music,
        image: "/images/category-music.png",
        video_url: SHOWREEL_URL,
    },
    Category {
        title: "DOKUMENTAR",
        icon: CategoryIcon::FileVideo,
        image: "/images/category-documentary.png",
        video_url: SHOWREEL_URL,
    },
];

const fn project(id: u32, title: &'static str) -> Project {
    Project {
        id,
        title,
        video_url: SHOWREEL_URL,
    }
}

/// Portfolio projects.
pub const PROJECTS: [Project; 12] = [
    project(1, "SUSTAINABLE GREENPLAY"),
    project(2, "CULTURE CAMP"),
    project(3, "ODENSE FILMVÆRKSTED"),
    project(4, "FILM SKABER"),
    project(5, "TILMELD DIG NU"),
    project(6, "SHOWREEL 2020"),
    project(7, "COFFEE WITH QUALITY"),
    project(8, "BULGARIA WINE TASTING"),
    project(9, "CREATIVE STUDIO PROJECT"),
    project(10, "VISUAL STORYTELLING"),
    project(11, "BRAND DOCUMENTARY"),
    project(12, "EVENT HIGHLIGHTS"),
];

const PLACEHOLDER_TESTIMONIAL: Testimonial = Testimonial {
    name: "Navn",
    text: "Kort udtalelse tekst om virksomhedens arbejde og kvalitet.",
    company: "Virksomhed",
};

/// Client quotes.
pub const TESTIMONIALS: [Testimonial; 3] = [PLACEHOLDER_TESTIMONIAL; 3];

/// Clients shown as logo tiles.
pub const COMPANIES: [Company; 4] = [
    Company {
        id: 1,
        name: "MURER OG BYGGERÅDGIVNING",
    },
    Company { id: 2, name: "VITEC" },
    Company { id: 3, name: "CFU" },
    Company {
        id: 4,
        name: "ODENSE FILMVÆRKSTED",
    },
];

/// Footer social links.
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        network: SocialNetwork::YouTube,
        url: "https://youtube.com",
        label: "YouTube",
    },
    SocialLink {
        network: SocialNetwork::Instagram,
        url: "https://instagram.com",
        label: "Instagram",
    },
    SocialLink {
        network: SocialNetwork::Facebook,
        url: "https://facebook.com",
        label: "Facebook",
    },
];

/// Brand name used in the header, footer and page titles.
pub const BRAND_NAME: &str = "ChrisProduction";

/// Copyright line in the footer.
pub const COPYRIGHT: &str = "© 2025 ChrisProduction. All rights reserved.";
