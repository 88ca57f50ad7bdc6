//! Window and visibility signals
//!
//! Every listener and observer registered here is released when the owning
//! component is disposed.

use landing_core::Reveal;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

fn inner_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}

fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Viewport width, updated on resize
pub fn use_viewport_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(inner_width());
    let handle = window_event_listener(ev::resize, move |_| set_width.set(inner_width()));
    on_cleanup(move || handle.remove());
    width
}

/// Vertical scroll offset, updated on scroll
pub fn use_scroll_y() -> ReadSignal<f64> {
    let (offset, set_offset) = signal(scroll_y());
    let handle = window_event_listener(ev::scroll, move |_| set_offset.set(scroll_y()));
    on_cleanup(move || handle.remove());
    offset
}

/// `prefers-color-scheme: dark` at call time
pub fn prefers_dark() -> bool {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Add or remove a class on `<html>`
pub fn set_root_class(class: &str, present: bool) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(err) = root.class_list().toggle_with_force(class, present) {
        tracing::warn!(?err, class, "failed to update root class");
    }
}

/// Feed intersection results for `target` into `reveal`.
///
/// Without `IntersectionObserver` support the element is revealed at once.
pub fn observe_reveal(target: NodeRef<html::Div>, reveal: RwSignal<Reveal>) {
    let threshold = reveal.with_untracked(|r| r.options.threshold);

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                reveal.update(|r| {
                    r.observe(entry.is_intersecting());
                });
            }
            if reveal.with_untracked(Reveal::is_settled) {
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            tracing::warn!(?err, "IntersectionObserver unavailable, revealing immediately");
            reveal.update(|r| {
                r.observe(true);
            });
            return;
        }
    };

    // The closure must live as long as the observer that calls it
    let observer = StoredValue::new_local((observer, callback));

    Effect::new(move |_| {
        if let Some(element) = target.get() {
            observer.with_value(|(observer, _)| observer.observe(&element));
        }
    });

    on_cleanup(move || observer.with_value(|(observer, _)| observer.disconnect()));
}
