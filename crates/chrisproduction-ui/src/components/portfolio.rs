//! Portfolio grid.

use chrisproduction_core::{PROJECTS, Project};
use leptos::prelude::*;

use crate::components::icons::{Icon, paths};
use crate::components::reveal::{reveal_class, stagger_style, use_reveal};

const STAGGER_MS: u32 = 50;

/// "PORTFOLIO" section. Clicking a tile plays the project video.
#[component]
pub fn PortfolioSection(
    /// Open the video modal with a watch URL.
    on_play: Callback<String>,
    /// Visible fraction that triggers the fade-in.
    reveal_threshold: f64,
) -> impl IntoView {
    let (node_ref, revealed) = use_reveal(reveal_threshold);

    view! {
        <section id="portfolio" node_ref=node_ref class="section section-secondary">
            <div class="section-inner section-inner-wide">
                <h2 class=move || reveal_class("section-title", revealed.get())>"PORTFOLIO"</h2>
                <div class="portfolio-grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! {
                            <PortfolioTile
                                project=*project
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
fn PortfolioTile(
    project: Project,
    index: usize,
    revealed: ReadSignal<bool>,
    on_play: Callback<String>,
) -> impl IntoView {
    view! {
        <div
            class=move || reveal_class("portfolio-tile", revealed.get())
            style=stagger_style(index, STAGGER_MS)
            on:click=move |_| on_play.run(project.video_url.to_string())
            data-testid="portfolio-tile"
        >
            <div class="portfolio-media">
                <img src=project.image_path() alt=project.title class="portfolio-image" loading="lazy" />
                <div class="portfolio-hover-scrim"></div>
                <div class="portfolio-overlay">
                    <div class="portfolio-play">
                        <Icon path=paths::PLAY size=32 />
                    </div>
                    <h3 class="portfolio-title">{project.title}</h3>
                </div>
            </div>
        </div>
    }
}
