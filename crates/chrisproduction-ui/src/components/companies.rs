//! Client list.

use chrisproduction_core::COMPANIES;
use leptos::prelude::*;

use crate::components::reveal::{reveal_class, stagger_style, use_reveal};

const STAGGER_MS: u32 = 100;

/// "VIRKSOMHEDER" section.
#[component]
pub fn CompaniesSection(
    /// Visible fraction that triggers the fade-in.
    reveal_threshold: f64,
) -> impl IntoView {
    let (node_ref, revealed) = use_reveal(reveal_threshold);

    view! {
        <section id="virksomheder" node_ref=node_ref class="section section-primary">
            <div class="section-inner">
                <h2 class=move || reveal_class("section-title section-title-small", revealed.get())>
                    "VIRKSOMHEDER"
                </h2>
                <p class=move || reveal_class("section-subtitle", revealed.get())>
                    "CHRISPRODUCTION HAR ARBEJDET MED:"
                </p>
                <div class="company-list">
                    {COMPANIES
                        .iter()
                        .enumerate()
                        .map(|(index, company)| view! {
                            <div
                                class=move || reveal_class("company-badge", revealed.get())
                                style=stagger_style(index, STAGGER_MS)
                            >
                                <span>{company.name}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
