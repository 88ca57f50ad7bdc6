//! Site Header
//!
//! Fixed bar with in-page navigation, theme toggle and a collapsible mobile
//! menu. The menu closes on outside click, on link click, and once the
//! viewport reaches the desktop breakpoint.

use landing_core::content::{GET_STARTED_ANCHOR, NAVIGATION};
use landing_core::theme::DARK_CLASS;
use landing_core::{NavMenu, Theme};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::Brand;
use crate::config::use_site_config;
use crate::icons::{self, Icon};
use crate::viewport::{prefers_dark, set_root_class, use_scroll_y, use_viewport_width};

const MOBILE_MENU_SELECTOR: &str = ".nav-mobile-menu";

#[component]
pub fn Header() -> impl IntoView {
    let layout = use_site_config().layout;
    let menu = RwSignal::new(NavMenu::default());
    let theme = RwSignal::new(Theme::from_prefers_dark(prefers_dark()));

    Effect::new(move |_| set_root_class(DARK_CLASS, theme.get().is_dark()));

    let scroll_y = use_scroll_y();
    Effect::new(move |_| {
        let y = scroll_y.get();
        menu.update(|m| m.on_scroll(y, &layout));
    });

    let width = use_viewport_width();
    Effect::new(move |_| {
        let w = width.get();
        menu.update(|m| m.on_resize(w, &layout));
    });

    let outside_click = window_event_listener(ev::click, move |ev| {
        if menu.with_untracked(NavMenu::is_open) {
            let inside_menu = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|element| element.closest(MOBILE_MENU_SELECTOR).ok().flatten())
                .is_some();
            menu.update(|m| m.on_document_click(inside_menu));
        }
    });
    on_cleanup(move || outside_click.remove());

    let toggle_theme = move |_| theme.update(|t| *t = t.toggled());
    let toggle_menu = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        menu.update(NavMenu::toggle);
    };
    let theme_icon = move || {
        let name = if theme.get().is_dark() { icons::MOON } else { icons::SUN };
        view! { <Icon name=name /> }
    };

    view! {
        <header class=move || menu.with(NavMenu::header_class)>
            <div class="container header-bar">
                <a href="/" class="brand-link">
                    <Brand />
                </a>

                <nav class="nav-desktop">
                    <ul class="nav-links">
                        {NAVIGATION
                            .iter()
                            .map(|item| view! { <li><a href=item.href class="nav-link">{item.label}</a></li> })
                            .collect_view()}
                    </ul>
                    <div class="nav-actions">
                        <button class="btn btn-ghost btn-icon" aria-label="Toggle theme" on:click=toggle_theme>
                            {theme_icon}
                        </button>
                        <a href=GET_STARTED_ANCHOR class="btn btn-primary btn-sm">"Get Started"</a>
                    </div>
                </nav>

                <div class="nav-mobile-controls">
                    <button class="btn btn-ghost btn-icon" aria-label="Toggle theme" on:click=toggle_theme>
                        {theme_icon}
                    </button>
                    <button
                        class="btn btn-ghost btn-icon"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu.with(NavMenu::is_open).to_string()
                        on:click=toggle_menu
                    >
                        {move || {
                            let name = if menu.with(NavMenu::is_open) { icons::X } else { icons::MENU };
                            view! { <Icon name=name /> }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu.with(NavMenu::is_open)>
                <div class="nav-mobile-menu">
                    <ul class="container">
                        {NAVIGATION
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <a
                                            href=item.href
                                            class="nav-link"
                                            on:click=move |_| menu.update(NavMenu::close)
                                        >
                                            {item.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                        <li>
                            <a
                                href=GET_STARTED_ANCHOR
                                class="btn btn-primary btn-block"
                                on:click=move |_| menu.update(NavMenu::close)
                            >
                                "Get Started"
                            </a>
                        </li>
                    </ul>
                </div>
            </Show>
        </header>
    }
}
