//! UI components for the ChrisProduction site.

pub mod about;
pub mod categories;
pub mod companies;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod navigation;
pub mod portfolio;
pub mod reveal;
pub mod testimonials;
pub mod toast;
pub mod video_modal;

pub use about::AboutSection;
pub use categories::CategoriesSection;
pub use companies::CompaniesSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use icons::Icon;
pub use navigation::Navigation;
pub use portfolio::PortfolioSection;
pub use reveal::use_reveal;
pub use testimonials::TestimonialsSection;
pub use toast::{ToastProvider, Toasts, use_toasts};
pub use video_modal::VideoModal;
