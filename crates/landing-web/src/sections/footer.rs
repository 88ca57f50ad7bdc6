//! Site Footer

use chrono::Datelike;
use landing_core::content::{FOOTER_COLUMNS, PAYMENT_METHODS_IMAGE, SOCIAL_LINKS, SUPPORT_EMAIL, copyright};
use landing_core::reveal::stagger;
use leptos::prelude::*;

use crate::components::{AnimatedSection, Brand};
use crate::icons::{self, Icon};

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <AnimatedSection class="footer-about">
                        <Brand />
                        <p class="muted">
                            "Empowering businesses with cutting-edge solutions to transform their digital presence and maximize growth potential."
                        </p>
                        <div class="social-links">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|label| {
                                    view! {
                                        <a href="#" class="social-link" aria-label=*label>
                                            <Icon name=icons::social(label) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </AnimatedSection>

                    {FOOTER_COLUMNS
                        .iter()
                        .enumerate()
                        .map(|(i, column)| {
                            view! {
                                <AnimatedSection delay=stagger(i + 1, 0.1)>
                                    <h3 class="footer-title">{column.title}</h3>
                                    <ul class="footer-links">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| view! { <li><a href="#" class="footer-link">{*link}</a></li> })
                                            .collect_view()}
                                    </ul>
                                </AnimatedSection>
                            }
                        })
                        .collect_view()}
                </div>

                <hr class="separator" />

                <div class="footer-bottom">
                    <div class="footer-badges">
                        <img src=PAYMENT_METHODS_IMAGE alt="Payment Methods" class="payment-methods" />
                        <div class="footer-badge">
                            <Icon name=icons::GITHUB />
                            <span>"GDPR Compliant"</span>
                        </div>
                        <div class="footer-badge">
                            <Icon name=icons::MAIL />
                            <span>{SUPPORT_EMAIL}</span>
                        </div>
                    </div>
                    <p class="copyright">{copyright(year)}</p>
                </div>
            </div>
        </footer>
    }
}
