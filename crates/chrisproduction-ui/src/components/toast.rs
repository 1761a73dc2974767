//! Toast stack for the contact acknowledgement and failure reports.

use chrisproduction_core::Error;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::icons::{Icon, paths};
use crate::types::ToastMessage;

/// Handle for showing toasts, provided by [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts {
    stack: RwSignal<Vec<ToastMessage>>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
        }
    }

    /// Thank the visitor for a contact submission.
    pub fn acknowledge(&self, text: impl Into<String>) {
        self.show(ToastMessage::acknowledgement(text));
    }

    /// Tell the visitor an action failed.
    pub fn report(&self, error: &Error) {
        self.show(ToastMessage::failure(error));
    }

    fn show(&self, toast: ToastMessage) {
        let id = toast.id;
        let delay = toast.kind.dismiss_after_ms();
        self.stack.update(|stack| stack.push(toast));

        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            this.dismiss(id);
        });
    }

    fn dismiss(&self, id: u64) {
        // The provider may already be gone when a timer fires.
        let _ = self.stack.try_update(|stack| stack.retain(|t| t.id != id));
    }
}

/// Makes [`Toasts`] available to `children` and renders the stack after them.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = Toasts::new();
    provide_context(toasts);

    view! {
        {children()}
        <div class="toast-container" data-testid="toast-container">
            <For
                each=move || toasts.stack.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.css_class())
                            role=toast.kind.role()
                            aria-live="polite"
                            data-testid="toast"
                        >
                            <div class="toast-message">{toast.text}</div>
                            <button
                                class="toast-dismiss"
                                on:click=move |_| toasts.dismiss(id)
                                aria-label="Luk besked"
                            >
                                <Icon path=paths::CLOSE size=16 />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// The [`Toasts`] handle from the enclosing [`ToastProvider`].
///
/// # Panics
/// Panics if called outside of a `ToastProvider`.
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}
