//! Main App Component

use landing_core::SiteConfig;
use leptos::prelude::*;

use crate::pages::HomePage;
use crate::sections::{Footer, Header};

/// Root application component
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Header />
        <main class="site-main">
            <HomePage />
        </main>
        <Footer />
    }
}
