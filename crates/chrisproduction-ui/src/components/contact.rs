//! Contact form.
//!
//! Nothing is sent anywhere: a valid submission is logged, the form is
//! cleared and the visitor gets a toast.

use chrisproduction_core::{ContactField, ContactForm, Error};
use leptos::ev;
use leptos::prelude::*;

use crate::components::reveal::{reveal_class, use_reveal};
use crate::components::toast::use_toasts;

/// "KONTAKT" section.
#[component]
pub fn ContactSection(
    /// Message shown after a successful submission.
    #[prop(into)]
    acknowledgement: String,
    /// Visible fraction that triggers the fade-in.
    reveal_threshold: f64,
) -> impl IntoView {
    let toasts = use_toasts();
    let (node_ref, revealed) = use_reveal(reveal_threshold);
    let form = RwSignal::new(ContactForm::default());
    let acknowledgement = StoredValue::new(acknowledgement);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::submit) {
            Some(Ok(_)) => toasts.acknowledge(acknowledgement.get_value()),
            Some(Err(e)) => {
                leptos::logging::log!("Contact form rejected: {}", e);
                toasts.report(&Error::from(e));
            }
            None => {}
        }
    };

    view! {
        <section id="kontakt" node_ref=node_ref class="section section-contact">
            <div class="section-inner section-inner-narrow">
                <h2 class=move || reveal_class("section-title section-title-inverse", revealed.get())>
                    "KONTAKT"
                </h2>
                <p class=move || reveal_class("section-subtitle", revealed.get())>"SIG HEJ"</p>
                <form
                    class=move || reveal_class("contact-form", revealed.get())
                    on:submit=on_submit
                    data-testid="contact-form"
                >
                    <ContactInput form=form field=ContactField::Name input_type="text" />
                    <ContactInput form=form field=ContactField::Email input_type="email" />
                    <ContactInput form=form field=ContactField::Subject input_type="text" />
                    <textarea
                        class="contact-input contact-textarea"
                        placeholder=ContactField::Message.label()
                        rows=5
                        required=ContactField::Message.is_required()
                        prop:value=move || form.with(|f| f.get(ContactField::Message).to_string())
                        on:input=move |ev| {
                            form.update(|f| f.set(ContactField::Message, event_target_value(&ev)));
                        }
                    ></textarea>
                    <button type="submit" class="btn-gold btn-block">"SEND"</button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn ContactInput(
    form: RwSignal<ContactForm>,
    field: ContactField,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            class="contact-input"
            placeholder=field.label()
            required=field.is_required()
            prop:value=move || form.with(|f| f.get(field).to_string())
            on:input=move |ev| {
                form.update(|f| f.set(field, event_target_value(&ev)));
            }
        />
    }
}
