//! Home Page

use leptos::prelude::*;

use crate::sections::{ClosingCta, Faq, Features, Hero, Pricing, Testimonials};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <Features />
            <Testimonials />
            <Pricing />
            <Faq />
            <ClosingCta />
        </div>
    }
}
