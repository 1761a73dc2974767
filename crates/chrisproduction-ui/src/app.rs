//! Main application component.

use chrisproduction_core::modal::VideoModal as VideoModalController;
use chrisproduction_core::{
    CloseTrigger, EmbedResolver, Page, PointerTarget, SiteConfig, ThemePreference,
};
use leptos::prelude::*;

use crate::browser::{BrowserStore, DomModalHost, apply_theme, current_page};
use crate::components::{
    AboutSection, CategoriesSection, CompaniesSection, ContactSection, Footer, HeroSection,
    Navigation, PortfolioSection, TestimonialsSection, ToastProvider, VideoModal, use_toasts,
};
use crate::theme::generate_css_variables;

/// Main application component.
#[component]

pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <ToastProvider>
            <AppContent />
        </ToastProvider>
    }
}

/// Inner application content with access to the toast stack.
#[component]
fn AppContent() -> impl IntoView {
    let toasts = use_toasts();
    let config = SiteConfig::from_json_or_default(include_str!("../site.json"));
    let page = current_page();

    // Theme preference, backed by localStorage when available
    let preference = StoredValue::new_local(ThemePreference::load(
        BrowserStore::open(),
        config.theme.storage_key.clone(),
        config.theme.default_theme,
    ));
    let (theme, set_theme) = signal(preference.with_value(ThemePreference::current));
    apply_theme(theme.get_untracked());

    tracing::info!(
        ?page,
        theme = %theme.get_untracked(),
        persistent = preference.with_value(|p| p.store().is_persistent()),
        "Site mounted"
    );

    let toggle_theme = Callback::new(move |()| {
        match preference.try_update_value(ThemePreference::toggle) {
            Some(Ok(next)) => {
                apply_theme(next);
                set_theme.set(next);
            }
            Some(Err(e)) => {
                leptos::logging::error!("Failed to save theme: {}", e);
                toasts.report(&e);
            }
            None => {}
        }
    });

    // Video modal. The controller owns the Escape listener; the signal only
    // mirrors the player URL for rendering.
    let (embed_src, set_embed_src) = signal::<Option<String>>(None);
    let modal = StoredValue::new_local(None::<VideoModalController<DomModalHost>>);
    let sync = move || {
        set_embed_src.set(modal.with_value(|m| m.as_ref().and_then(VideoModalController::embed_src)));
        modal.with_value(|m| {
            if let Some(m) = m {
                debug_assert_eq!(m.host().active_listeners(), usize::from(m.is_open()));
            }
        });
    };

    let on_key = Callback::new(move |key: String| {
        let closed = modal
            .try_update_value(|m| m.as_mut().is_some_and(|m| m.handle_key(&key)))
            .unwrap_or(false);
        if closed {
            sync();
        }
    });
    modal.set_value(Some(VideoModalController::with_resolver(
        DomModalHost::new(on_key),
        EmbedResolver::new(config.embed.clone()),
    )));

    let play = Callback::new(move |url: String| {
        modal.update_value(|m| {
            if let Some(m) = m {
                m.open(url);
            }
        });
        sync();
    });

    let close = Callback::new(move |()| {
        let closed = modal
            .try_update_value(|m| m.as_mut().is_some_and(|m| m.close(CloseTrigger::Button)))
            .unwrap_or(false);
        if closed {
            sync();
        }
    });

    let pointer = Callback::new(move |target: PointerTarget| {
        let closed = modal
            .try_update_value(|m| m.as_mut().is_some_and(|m| m.handle_pointer(target)))
            .unwrap_or(false);
        if closed {
            sync();
        }
    });

    let reveal_threshold = config.reveal_threshold;
    let acknowledgement = config.contact_acknowledgement.clone();

    view! {
        <main class="site">
            <Navigation
                page=page
                theme=theme
                on_toggle_theme=toggle_theme
                scroll_threshold=config.nav_scroll_threshold_px
            />
            {match page {
                Page::Home => view! {
                    <HeroSection reveal_threshold=reveal_threshold />
                    <CategoriesSection on_play=play reveal_threshold=reveal_threshold />
                    <PortfolioSection on_play=play reveal_threshold=reveal_threshold />
                    <TestimonialsSection reveal_threshold=reveal_threshold />
                    <CompaniesSection reveal_threshold=reveal_threshold />
                    <ContactSection
                        acknowledgement=acknowledgement
                        reveal_threshold=reveal_threshold
                    />
                }
                .into_any(),
                Page::About => view! {
                    <AboutSection reveal_threshold=reveal_threshold />
                }
                .into_any(),
            }}
            <Footer />
            <VideoModal embed_src=embed_src on_close=close on_pointer=pointer />
        </main>
    }
}
