//! Fixed header with section links, the theme toggle and the mobile menu.

use chrisproduction_core::{ABOUT_PATH, BRAND_NAME, NAV_LINKS, NavLink, Page, Theme, is_scrolled};
use leptos::ev;
use leptos::prelude::*;

use crate::browser::{scroll_to_section, scroll_y};
use crate::components::icons::{Icon, paths};

/// Site header.
///
/// On the home page section links smooth-scroll in place; elsewhere they
/// link back to `/#<section>`. The header turns solid once the page has
/// scrolled past `scroll_threshold` pixels.
#[component]

pub fn Navigation(
    /// Page the header is rendered on.
    page: Page,
    /// Active theme.
    #[prop(into)]
    theme: Signal<Theme>,
    /// Flip the theme.
    on_toggle_theme: Callback<()>,
    /// Scroll offset after which the header turns solid.
    scroll_threshold: f64,
) -> impl IntoView {
    let (scrolled, set_scrolled) = signal(is_scrolled(scroll_y(), scroll_threshold));
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(is_scrolled(scroll_y(), scroll_threshold));
    });
    on_cleanup(move || handle.remove());

    let toggle_menu = move |_| {
        set_mobile_menu_open.update(|open| *open = !*open);
    };

    let theme_label = move || {
        if theme.get().is_dark() {
            "Skift til lyst tema"
        } else {
            "Skift til mørkt tema"
        }
    };

    let theme_button = move |class: &'static str| {
        view! {
            <button
                class=class
                on:click=move |_| on_toggle_theme.run(())
                aria-label=theme_label
                data-testid="theme-toggle"
            >
                {move || if theme.get().is_dark() {
                    view! { <Icon path=paths::SUN size=20 /> }.into_any()
                } else {
                    view! { <Icon path=paths::MOON size=20 /> }.into_any()
                }}
            </button>
        }
    };

    view! {
        <nav class="site-nav" class:scrolled=move || scrolled.get()>
            <div class="site-nav-inner">
                <a href="/" class="site-nav-brand">{BRAND_NAME}</a>

                <div class="site-nav-links">
                    <a href=ABOUT_PATH class="site-nav-link" class:active={page == Page::About}>
                        "Om mig"
                    </a>
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <SectionLink link=*link page=page class="site-nav-link" />
                        })
                        .collect_view()}
                    {theme_button("theme-toggle")}
                </div>

                <div class="site-nav-mobile-actions">
                    {theme_button("theme-toggle")}
                    <button
                        class="site-nav-menu-toggle"
                        on:click=toggle_menu
                        aria-label="Menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || if mobile_menu_open.get() {
                            view! { <Icon path=paths::CLOSE /> }.into_any()
                        } else {
                            view! { <Icon path=paths::MENU /> }.into_any()
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || mobile_menu_open.get()>
                <div class="site-nav-mobile-menu">
                    <a
                        href=ABOUT_PATH
                        class="site-nav-mobile-link"
                        on:click=move |_| set_mobile_menu_open.set(false)
                    >
                        "Om mig"
                    </a>
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <SectionLink
                                link=*link
                                page=page
                                class="site-nav-mobile-link"
                                on_follow=Callback::new(move |()| set_mobile_menu_open.set(false))
                            />
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

/// Link to a home page section.
#[component]
fn SectionLink(
    link: NavLink,
    page: Page,
    class: &'static str,
    #[prop(optional)] on_follow: Option<Callback<()>>,
) -> impl IntoView {
    let follow = move || {
        if let Some(cb) = on_follow {
            cb.run(());
        }
    };

    match page {
        Page::Home => view! {
            <button
                class=class
                on:click=move |_| {
                    scroll_to_section(link.section_id);
                    follow();
                }
            >
                {link.label}
            </button>
        }
        .into_any(),
        Page::About => view! {
            <a class=class href=link.href_from_other_page() on:click=move |_| follow()>
                {link.label}
            </a>
        }
        .into_any(),
    }
}
