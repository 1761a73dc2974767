//! ChrisProduction UI - Leptos-based front end.
//!
//! Renders the home page and the "Om mig" page, and adapts the core crate's
//! storage and modal traits to the browser.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod browser;
pub mod components;
pub mod theme;
pub mod types;

pub use app::App;
pub use types::{ToastKind, ToastMessage};
