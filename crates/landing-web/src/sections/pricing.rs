//! Pricing

use landing_core::content::{CORE_PLAN_FEATURES, PRICING_TIERS};
use landing_core::model::PlanFeature;
use landing_core::reveal::stagger;
use landing_core::{BillingPeriod, PricingTier};
use leptos::prelude::*;

use crate::components::{AnimatedSection, Badge, SectionHeading};
use crate::icons::{self, Icon};

#[component]
pub fn Pricing() -> impl IntoView {
    let period = RwSignal::new(BillingPeriod::default());

    view! {
        <section id="pricing" class="section section-muted">
            <div class="container">
                <SectionHeading
                    badge="Pricing"
                    title="Simple, transparent pricing"
                    lead="Choose the plan that's right for your business. All plans include a 30-day free trial with no credit card required."
                />

                <div class="tabs" role="tablist">
                    {BillingPeriod::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    class="tab"
                                    aria-selected=move || (period.get() == option).to_string()
                                    on:click=move |_| period.set(option)
                                >
                                    {option.label()}
                                    {(option == BillingPeriod::Annually)
                                        .then(|| view! { <Badge class="badge-soft">"Save 20%"</Badge> })}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="pricing-grid">
                    {PRICING_TIERS
                        .iter()
                        .enumerate()
                        .map(|(i, tier)| {
                            view! {
                                <AnimatedSection delay=stagger(i, 0.1) class="pricing-cell">
                                    <PricingCard tier=*tier period=period />
                                </AnimatedSection>
                            }
                        })
                        .collect_view()}
                </div>

                <AnimatedSection class="core-features">
                    <p class="muted">"All plans include core features:"</p>
                    <div class="core-feature-list">
                        {CORE_PLAN_FEATURES
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="core-feature">
                                        <Icon name=icons::CHECK class="text-primary" />
                                        {*feature}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

fn feature_line(feature: PlanFeature) -> impl IntoView {
    let (icon, class) = if feature.included {
        (icons::CHECK, "plan-feature")
    } else {
        (icons::X, "plan-feature is-excluded")
    };
    view! {
        <li class=class>
            <Icon name=icon />
            <span>{feature.text}</span>
        </li>
    }
}

#[component]
fn PricingCard(tier: PricingTier, period: RwSignal<BillingPeriod>) -> impl IntoView {
    let (card_class, cta_class) = if tier.highlighted {
        ("card pricing-card is-highlighted", "btn btn-primary btn-block")
    } else {
        ("card pricing-card", "btn btn-outline btn-block")
    };

    view! {
        <div class=card_class>
            {tier.highlighted.then(|| view! { <div class="popular-badge"><Badge>"Most Popular"</Badge></div> })}
            <div class="pricing-card-header">
                <h3>{tier.name}</h3>
                <p class="muted">{tier.description}</p>
            </div>
            <div class="pricing-card-body">
                <div class="price">
                    <span class="price-amount">{move || tier.price_for(period.get())}</span>
                    <span class="muted">"/month"</span>
                </div>
                <ul class="plan-features">
                    {tier.features.iter().copied().map(feature_line).collect_view()}
                </ul>
            </div>
            <div class="pricing-card-footer">
                <button type="button" class=cta_class>{tier.cta}</button>
            </div>
        </div>
    }
}
