//! Overlay with an embedded `YouTube` player.

use chrisproduction_core::PointerTarget;
use leptos::ev;
use leptos::prelude::*;

use crate::components::icons::{Icon, paths};

/// Permissions granted to the embedded player.
const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Video modal.
///
/// Rendered only while `embed_src` holds a URL. Clicks are reported as
/// [`PointerTarget::Backdrop`] when they land on the dimmed overlay itself
/// and as [`PointerTarget::Content`] when they land inside the player box.
#[component]

pub fn VideoModal(
    /// Player URL while the modal is open.
    #[prop(into)]
    embed_src: Signal<Option<String>>,
    /// Close button pressed.
    on_close: Callback<()>,
    /// Click anywhere on the overlay.
    on_pointer: Callback<PointerTarget>,
) -> impl IntoView {
    let on_overlay_click = move |e: ev::MouseEvent| {
        let target = if e.target() == e.current_target() {
            PointerTarget::Backdrop
        } else {
            PointerTarget::Content
        };
        on_pointer.run(target);
    };

    move || {
        embed_src.get().map(|src| {
            view! {
                <div
                    class="video-modal-backdrop"
                    on:click=on_overlay_click
                    role="dialog"
                    aria-modal="true"
                    data-testid="video-modal"
                >
                    <div class="video-modal">
                        <button
                            class="video-modal-close"
                            on:click=move |e| {
                                e.stop_propagation();
                                on_close.run(());
                            }
                            aria-label="Luk video"
                        >
                            <Icon path=paths::CLOSE size=32 />
                        </button>
                        <div class="video-modal-frame">
                            <iframe
                                src=src
                                title="YouTube video player"
                                {leptos::tachys::html::attribute::custom::custom_attribute("frameborder", "0")}
                                allow=PLAYER_ALLOW
                                allowfullscreen=true
                            ></iframe>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
