//! Full-height banner at the top of the home page.

use leptos::prelude::*;

use crate::components::reveal::{reveal_class, use_reveal};

/// Hero banner.
#[component]
pub fn HeroSection(
    /// Visible fraction that triggers the fade-in.
    reveal_threshold: f64,
) -> impl IntoView {
    let (node_ref, revealed) = use_reveal(reveal_threshold);

    view! {
        <section node_ref=node_ref class="hero">
            <div class="hero-background">
                <img src="/hero-banner.png" alt="Hero Banner" class="hero-image" />
                <div class="hero-scrim"></div>
            </div>

            <div class=move || reveal_class("hero-content reveal-hero", revealed.get())>
                <h1 class="hero-title">"VISUEL FORTÆLLING"</h1>
            </div>

            <div class="hero-scroll-indicator" aria-hidden="true">
                <div class="hero-scroll-wheel"></div>
            </div>
        </section>
    }
}
