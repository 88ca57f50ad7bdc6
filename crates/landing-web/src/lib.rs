//! FlowVision Landing Frontend
//!
//! Leptos-based WASM single page: header, hero, features, testimonials
//! carousel, pricing, FAQ, closing call-to-action and footer.

mod app;
mod components;
mod config;
mod icons;
mod pages;
mod sections;
mod telemetry;
mod timer;
mod viewport;

pub use app::App;

use landing_core::SiteConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let site_config = loaded.as_ref().map_or_else(|_| SiteConfig::default(), Clone::clone);

    if let Err(err) = telemetry::init(&site_config.log_filter) {
        leptos::logging::warn!("logging disabled: {err:#}");
    }
    if let Err(err) = loaded {
        tracing::warn!("using default site config: {err:#}");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");
    leptos::mount::mount_to_body(move || view! { <App config=site_config /> });
}
