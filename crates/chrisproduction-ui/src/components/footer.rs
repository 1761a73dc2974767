//! Page footer.

use chrisproduction_core::{COPYRIGHT, SOCIAL_LINKS};
use leptos::prelude::*;

use crate::components::icons::{Icon, social_path};

/// Social links and copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <div class="site-footer-social">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| view! {
                            <a
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.label
                            >
                                <Icon path=social_path(link.network) />
                            </a>
                        })
                        .collect_view()}
                </div>
                <p class="site-footer-copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
