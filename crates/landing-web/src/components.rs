//! UI Components

use landing_core::content::BRAND;
use landing_core::{EmailCapture, Motion, Reveal};
use leptos::html;
use leptos::prelude::*;

use crate::config::use_site_config;
use crate::icons::{self, Icon};
use crate::viewport::observe_reveal;

/// Wrapper that animates its children in when scrolled into view
#[component]
pub fn AnimatedSection(
    #[prop(optional)] motion: Motion,
    /// Seconds added before the transition starts
    #[prop(optional)]
    delay: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let options = use_site_config().reveal.with_delay(delay);
    let reveal = RwSignal::new(Reveal::new(motion, options));
    let target = NodeRef::<html::Div>::new();
    observe_reveal(target, reveal);

    let style = reveal.with_untracked(Reveal::style);

    view! {
        <div
            node_ref=target
            class=move || format!("{} {class}", reveal.with(Reveal::class))
            style=style
        >
            {children()}
        </div>
    }
}

/// Outline pill above section headings
#[component]
pub fn Badge(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <span class=format!("badge {class}")>{children()}</span> }
}

/// Badge, heading and lead paragraph shared by the content sections
#[component]
pub fn SectionHeading(
    badge: &'static str,
    title: &'static str,
    lead: &'static str,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            <AnimatedSection>
                <Badge>{badge}</Badge>
                <h2>{title}</h2>
                <p class="lead">{lead}</p>
            </AnimatedSection>
        </div>
    }
}

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="logo-mark">
            <Icon name=icons::BAR_CHART />
        </div>
    }
}

/// Logo mark with the brand name beside it
#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <span class="brand">
            <Logo />
            <span class="brand-name">{BRAND}</span>
        </span>
    }
}

/// Decorative email input with a "Get Started" button.
///
/// Nothing is submitted; the button only reflects whether the field is empty.
#[component]
pub fn EmailCaptureForm() -> impl IntoView {
    let capture = RwSignal::new(EmailCapture::default());

    view! {
        <div class="email-capture">
            <input
                type="email"
                class="input"
                placeholder="Enter your email"
                prop:value=move || capture.with(|c| c.value().to_owned())
                on:input=move |ev| capture.update(|c| c.set(event_target_value(&ev)))
            />
            <button
                type="button"
                class=move || capture.with(EmailCapture::button_class)
                disabled=move || !capture.with(EmailCapture::submit_enabled)
            >
                "Get Started"
                <Icon name=icons::ARROW_RIGHT class="icon-trailing" />
            </button>
        </div>
    }
}
