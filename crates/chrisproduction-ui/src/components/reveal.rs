//! Scroll-triggered fade-in for page sections.
//!
//! Each section gets its own `IntersectionObserver` feeding a
//! [`RevealLatch`]. The observer disconnects itself as soon as the latch
//! flips, and on unmount if it never did.

use chrisproduction_core::{RevealLatch, stagger_delay_ms};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Class for an element that fades in once its section is revealed.
pub fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("{base} reveal is-revealed")
    } else {
        format!("{base} reveal")
    }
}

/// Inline transition delay for the `index`-th item of a staggered grid.
pub fn stagger_style(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms", stagger_delay_ms(index, step_ms))
}

/// Observe a section and report when it first becomes visible.
///
/// Attach the returned `NodeRef` to the `<section>`; the signal turns `true`
/// once at least `threshold` of it has intersected the viewport and stays
/// `true` afterwards.
pub fn use_reveal(threshold: f64) -> (NodeRef<html::Section>, ReadSignal<bool>) {
    let node_ref = NodeRef::<html::Section>::new();
    let (revealed, set_revealed) = signal(false);
    let observer = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

    Effect::new(move |_| {
        let Some(section) = node_ref.get() else {
            return;
        };
        if observer.with_value(Option::is_some) || revealed.get_untracked() {
            return;
        }

        let mut latch = RevealLatch::new(threshold);
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(latch.threshold()));

        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, io: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                        set_revealed.set(true);
                        io.disconnect();
                        break;
                    }
                }
            },
        );

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(io) => {
                io.observe(&section);
                observer.set_value(Some((io, callback)));
            }
            Err(e) => {
                // Without an observer the content would stay hidden.
                leptos::logging::warn!("IntersectionObserver unavailable: {:?}", e);
                set_revealed.set(true);
            }
        }
    });

    on_cleanup(move || {
        let io = observer
            .try_with_value(|o| o.as_ref().map(|(io, _)| io.clone()))
            .flatten();
        if let Some(io) = io {
            io.disconnect();
        }
    });

    (node_ref, revealed)
}
