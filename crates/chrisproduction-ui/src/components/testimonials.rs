//! Customer testimonials.

use chrisproduction_core::{TESTIMONIALS, Testimonial};
use leptos::prelude::*;

use crate::components::icons::{Icon, paths};
use crate::components::reveal::{reveal_class, stagger_style, use_reveal};

const STAGGER_MS: u32 = 150;

/// "KUNDER" section.
#[component]
pub fn TestimonialsSection(
    /// Visible fraction that triggers the fade-in.
    reveal_threshold: f64,
) -> impl IntoView {
    let (node_ref, revealed) = use_reveal(reveal_threshold);

    view! {
        <section id="testimonials" node_ref=node_ref class="section section-tertiary">
            <div class="section-inner">
                <h2 class=move || reveal_class("section-title", revealed.get())>"KUNDER"</h2>
                <div class="testimonial-grid">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, testimonial)| {
                            let testimonial: Testimonial = *testimonial;
                            view! {
                                <div
                                    class=move || reveal_class("testimonial-card", revealed.get())
                                    style=stagger_style(index, STAGGER_MS)
                                >
                                    <div class="testimonial-avatar">
                                        <img
                                            src=Testimonial::image_path(index)
                                            alt=testimonial.name
                                            loading="lazy"
                                        />
                                    </div>
                                    <h4 class="testimonial-name">{testimonial.name}</h4>
                                    <p class="testimonial-text">{testimonial.text}</p>
                                    <Icon path=paths::QUOTE size=32 class="testimonial-quote" />
                                    <p class="testimonial-company">{testimonial.company}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
