//! Closing Call-to-Action
//!
//! Target of every "Get Started" link on the page.

use landing_core::content::{BRAND, client_logos, social_proof_avatars};
use landing_core::reveal::stagger;
use leptos::prelude::*;

use crate::components::{AnimatedSection, EmailCaptureForm};
use crate::icons::{self, Icon};

#[component]
pub fn ClosingCta() -> impl IntoView {
    view! {
        <section id="get-started" class="section closing-cta">
            <div class="container">
                <AnimatedSection class="card cta-panel">
                    <div class="cta-heading">
                        <h2>"Ready to transform your business with data?"</h2>
                        <p class="lead">
                            {format!("Join over 10,000 companies using {BRAND} to make better decisions and drive growth.")}
                        </p>
                    </div>

                    <EmailCaptureForm />

                    <div class="social-proof">
                        <div class="social-proof-item">
                            <div class="avatar-stack">
                                {social_proof_avatars()
                                    .map(|src| view! { <img src=src alt="User avatar" class="avatar-small" /> })
                                    .collect_view()}
                            </div>
                            <div class="small">
                                <p class="strong">"Trusted by 10,000+"</p>
                                <p class="muted">"companies worldwide"</p>
                            </div>
                        </div>
                        <div class="divider-vertical"></div>
                        <div class="social-proof-item">
                            <div class="icon-bubble">
                                <Icon name=icons::ARROW_RIGHT />
                            </div>
                            <div class="small">
                                <p class="strong">"30-day free trial"</p>
                                <p class="muted">"No credit card required"</p>
                            </div>
                        </div>
                    </div>
                </AnimatedSection>

                <div class="client-logos">
                    {client_logos()
                        .enumerate()
                        .map(|(i, src)| {
                            view! {
                                <AnimatedSection delay=stagger(i + 1, 0.1)>
                                    <img src=src alt="Client logo" class="client-logo" />
                                </AnimatedSection>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
