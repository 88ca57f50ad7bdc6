//! FAQ

use landing_core::Accordion;
use landing_core::content::{FAQS, SUPPORT_EMAIL};
use leptos::prelude::*;

use crate::components::{AnimatedSection, SectionHeading};
use crate::icons::{self, Icon};

#[component]
pub fn Faq() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <section id="faq" class="section">
            <div class="container narrow">
                <SectionHeading
                    badge="FAQ"
                    title="Frequently asked questions"
                    lead="Find answers to common questions about FlowVision, pricing, security, and more."
                />

                <AnimatedSection class="accordion">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(i, faq)| {
                            view! {
                                <div class="accordion-item" data-state=move || accordion.with(|a| a.state_attr(i))>
                                    <button
                                        type="button"
                                        class="accordion-trigger"
                                        aria-expanded=move || accordion.with(|a| a.is_open(i)).to_string()
                                        on:click=move |_| accordion.update(|a| a.toggle(i))
                                    >
                                        <span>{faq.question}</span>
                                        <Icon name=icons::CHEVRON_DOWN class="accordion-chevron" />
                                    </button>
                                    <Show when=move || accordion.with(|a| a.is_open(i))>
                                        <div class="accordion-content">{faq.answer}</div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </AnimatedSection>

                <AnimatedSection class="faq-contact">
                    <p class="muted">"Still have questions?"</p>
                    <p class="strong">
                        "Contact our support team at "
                        <a href=format!("mailto:{SUPPORT_EMAIL}") class="link">{SUPPORT_EMAIL}</a>
                    </p>
                </AnimatedSection>
            </div>
        </section>
    }
}
