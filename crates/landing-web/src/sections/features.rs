//! Features

use landing_core::Motion;
use landing_core::content::{FEATURES, VISUALIZATION_IMAGE, WHY_CHOOSE_US};
use landing_core::reveal::stagger;
use leptos::prelude::*;

use crate::components::{AnimatedSection, Badge, SectionHeading};
use crate::icons::{self, Icon};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="container">
                <SectionHeading
                    badge="Features"
                    title="Everything you need to scale your business"
                    lead="Our platform provides comprehensive tools and insights to help you make data-driven decisions and grow your business."
                />

                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| {
                            view! {
                                <AnimatedSection motion=Motion::ScaleIn delay=stagger(i, 0.1) class="card feature-card">
                                    <div class="feature-icon">
                                        <Icon name=icons::feature(feature.icon) />
                                    </div>
                                    <h3>{feature.title}</h3>
                                    <p class="muted">{feature.description}</p>
                                </AnimatedSection>
                            }
                        })
                        .collect_view()}
                </div>

                <AnimatedSection class="card why-panel">
                    <div class="why-copy">
                        <Badge class="badge-outline">"Why Choose Us"</Badge>
                        <h3>"Data-driven decisions with powerful visualizations"</h3>
                        <p class="muted">
                            "Our intuitive dashboard brings your data to life with interactive charts, graphs, and customizable widgets. Spot trends, identify opportunities, and make informed decisions faster than ever before."
                        </p>
                        <ul class="why-list">
                            {WHY_CHOOSE_US
                                .iter()
                                .enumerate()
                                .map(|(i, item)| {
                                    view! {
                                        <li>
                                            <AnimatedSection motion=Motion::FadeRight delay=stagger(i, 0.1) class="why-item">
                                                <span class="dot-marker"></span>
                                                <span>{*item}</span>
                                            </AnimatedSection>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="why-visual">
                        <img src=VISUALIZATION_IMAGE alt="Dashboard visualization" loading="lazy" />
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}
