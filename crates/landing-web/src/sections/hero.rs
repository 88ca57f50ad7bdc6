//! Hero

use landing_core::content::{BRAND, DASHBOARD_IMAGE, HERO_HIGHLIGHTS, TRUSTED_BY_IMAGE};
use landing_core::reveal::stagger;
use leptos::prelude::*;

use crate::components::{AnimatedSection, EmailCaptureForm};
use crate::icons::{self, Icon};

/// Floating metric card over the dashboard preview
#[component]
fn StatCard(label: &'static str, value: &'static str, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("stat-card {class}")>
            <div class="stat-card-icon">
                <Icon name=icons::ARROW_RIGHT />
            </div>
            <div>
                <p class="stat-card-label">{label}</p>
                <p class="stat-card-value">{value}</p>
            </div>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop"></div>
            <div class="container hero-body">
                <AnimatedSection>
                    <span class="hero-badge">{format!("Introducing {BRAND} 2.0")}</span>
                </AnimatedSection>
                <AnimatedSection delay=0.1>
                    <h1>
                        "Transform Your Business with "
                        <span class="highlight">"Smart Analytics"</span>
                    </h1>
                </AnimatedSection>
                <AnimatedSection delay=0.2>
                    <p class="lead">
                        "Unlock actionable insights, optimize performance, and drive growth with our powerful analytics platform designed for modern businesses."
                    </p>
                </AnimatedSection>
                <AnimatedSection delay=0.3>
                    <EmailCaptureForm />
                </AnimatedSection>
                <AnimatedSection delay=0.4 class="hero-highlights">
                    {HERO_HIGHLIGHTS
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="hero-highlight">
                                    <Icon name=icons::CHECK_CIRCLE class="text-primary" />
                                    {*item}
                                </div>
                            }
                        })
                        .collect_view()}
                </AnimatedSection>
            </div>

            <AnimatedSection delay=0.5 class="container hero-preview">
                <div class="hero-preview-frame">
                    <img src=DASHBOARD_IMAGE alt=format!("{BRAND} Dashboard") loading="lazy" />
                    <div class="hero-preview-overlay"></div>
                </div>
                <StatCard label="Conversion Rate" value="+24.8%" class="stat-card-top" />
                <StatCard label="Active Users" value="12.4k" class="stat-card-side" />
            </AnimatedSection>

            <div class="container trusted-by">
                {(0..4)
                    .map(|i| {
                        view! {
                            <AnimatedSection delay={1.2 + stagger(i, 0.1)}>
                                <img src=TRUSTED_BY_IMAGE alt="Trusted by" class="trusted-logo" />
                            </AnimatedSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
