//! Service categories, each opening a showreel in the video modal.

use chrisproduction_core::{CATEGORIES, Category};
use leptos::prelude::*;

use crate::components::icons::{Icon, category_path};
use crate::components::reveal::{reveal_class, stagger_style, use_reveal};

/// Delay between consecutive cards.
const STAGGER_MS: u32 = 100;

/// "KATEGORI" section.
#[component]
pub fn CategoriesSection(
    /// Open the video modal with a watch URL.
    on_play: Callback<String>,
    /// Visible fraction that triggers the fade-in.
    reveal_threshold: f64,
) -> impl IntoView {
    let (node_ref, revealed) = use_reveal(reveal_threshold);

    view! {
        <section id="kategori" node_ref=node_ref class="section section-primary">
            <div class="section-inner">
                <h2 class=move || reveal_class("section-title", revealed.get())>"KATEGORI"</h2>
                <div class="category-grid">
                    {CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| view! {
                            <CategoryCard
                                category=*category
                                index=index
                                revealed=revealed
                                on_play=on_play
                            />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(
    category: Category,
    index: usize,
    revealed: ReadSignal<bool>,
    on_play: Callback<String>,
) -> impl IntoView {
    view! {
        <div
            class=move || reveal_class("category-card", revealed.get())
            style=stagger_style(index, STAGGER_MS)
            on:click=move |_| on_play.run(category.video_url.to_string())
            data-testid="category-card"
        >
            <div class="category-media">
                <img src=category.image alt=category.title class="category-image" loading="lazy" />
                <div class="image-scrim"></div>
                <div class="category-overlay">
                    <div class="category-icon">
                        <Icon path=category_path(category.icon) size=40 />
                    </div>
                    <h3 class="category-title">{category.title}</h3>
                    <button class="btn-gold">"KLIK HER"</button>
                </div>
            </div>
        </div>
    }
}
