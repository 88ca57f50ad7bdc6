//! Testimonials Carousel
//!
//! All state changes go through `CarouselState::handle`; the returned effect
//! is applied to the autoplay timer owned by this component. Desktop pages
//! through groups of cards with chevrons and page dots, mobile shows a single
//! swipeable card with one dot per testimonial.

use landing_core::carousel::card_key;
use landing_core::content::{STATS, TESTIMONIALS};
use landing_core::reveal::stagger;
use landing_core::{Autoplay, CarouselInput, CarouselState, SwipeTracker, Testimonial, ViewMode};
use leptos::ev;
use leptos::prelude::*;

use crate::components::{AnimatedSection, SectionHeading};
use crate::config::use_site_config;
use crate::icons::{self, Icon};
use crate::timer::BrowserInterval;
use crate::viewport::use_viewport_width;

#[component]
pub fn Testimonials() -> impl IntoView {
    let config = use_site_config();
    let breakpoint = config.layout.desktop_breakpoint_px;
    let threshold = config.carousel.swipe_threshold_px;

    let width = use_viewport_width();
    let view_mode = Memo::new(move |_| ViewMode::from_width(width.get(), breakpoint));

    let carousel = RwSignal::new(
        CarouselState::from_config(TESTIMONIALS.len(), &config.carousel)
            .with_mode(view_mode.get_untracked()),
    );

    let timer = BrowserInterval::new(move || {
        carousel.update(|c| {
            c.tick();
        });
    });
    let autoplay = StoredValue::new_local(Autoplay::new(timer, config.autoplay_interval()));
    autoplay.update_value(Autoplay::start);
    on_cleanup(move || autoplay.update_value(Autoplay::stop));

    let dispatch = move |input: CarouselInput| match carousel.try_update(|c| c.handle(input)) {
        Some(Ok(effect)) => autoplay.update_value(|a| a.apply(effect)),
        Some(Err(err)) if err.is_input_error() => tracing::warn!(?input, "carousel input ignored: {err}"),
        Some(Err(err)) => tracing::error!(?input, "carousel input failed: {err}"),
        None => {}
    };

    Effect::new(move |_| dispatch(CarouselInput::Resize(view_mode.get())));

    let mode = Memo::new(move |_| carousel.with(CarouselState::mode));

    view! {
        <section id="testimonials" class="section testimonials">
            <div class="container">
                <SectionHeading
                    badge="Testimonials"
                    title="Loved by forward-thinking teams"
                    lead="FlowVision empowers companies to unlock actionable insights and scale with confidence."
                />

                {move || match mode.get() {
                    ViewMode::Desktop => {
                        view! { <DesktopCarousel carousel=carousel dispatch=dispatch /> }.into_any()
                    }
                    ViewMode::Mobile => {
                        view! { <MobileCarousel carousel=carousel dispatch=dispatch threshold=threshold /> }
                            .into_any()
                    }
                }}

                <AnimatedSection class="stats-grid">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat">
                                    <p class="stat-value">{stat.value}</p>
                                    <p class="muted">{stat.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </AnimatedSection>
            </div>
        </section>
    }
}

fn dot_class(active: bool) -> &'static str {
    if active { "carousel-dot is-active" } else { "carousel-dot" }
}

/// Indicator dots for the active view's index domain
#[component]
fn Dots(
    carousel: RwSignal<CarouselState>,
    dispatch: impl Fn(CarouselInput) + Copy + Send + 'static,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="carousel-dots">
            {move || {
                let count = carousel.with(CarouselState::dot_count);
                (0..count)
                    .map(|i| {
                        view! {
                            <button
                                type="button"
                                class=move || dot_class(carousel.with(CarouselState::active_index) == i)
                                aria-label=format!("{label} {}", i + 1)
                                on:click=move |_| dispatch(CarouselInput::GoTo(i))
                            ></button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn DesktopCarousel(
    carousel: RwSignal<CarouselState>,
    dispatch: impl Fn(CarouselInput) + Copy + Send + 'static,
) -> impl IntoView {
    let cards = move || {
        carousel.with(|c| {
            let page = c.page();
            c.visible(TESTIMONIALS)
                .iter()
                .enumerate()
                .map(|(slot, testimonial)| (page, slot, *testimonial))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            class="carousel carousel-desktop"
            on:mouseenter=move |_| dispatch(CarouselInput::PointerEnter)
            on:mouseleave=move |_| dispatch(CarouselInput::PointerLeave)
        >
            <div class="carousel-track">
                <For
                    each=cards
                    key=|(page, _, testimonial)| card_key(*page, testimonial.id)
                    children=move |(_, slot, testimonial)| {
                        view! {
                            <div
                                class="carousel-slide slide-enter-up"
                                style=format!("animation-delay: {:.2}s;", stagger(slot, 0.1))
                            >
                                <TestimonialCard testimonial=testimonial />
                            </div>
                        }
                    }
                />
            </div>

            <button
                type="button"
                class="btn btn-outline btn-icon carousel-prev"
                aria-label="Previous testimonials"
                on:click=move |_| dispatch(CarouselInput::Prev)
            >
                <Icon name=icons::CHEVRON_LEFT />
            </button>
            <button
                type="button"
                class="btn btn-outline btn-icon carousel-next"
                aria-label="Next testimonials"
                on:click=move |_| dispatch(CarouselInput::Next)
            >
                <Icon name=icons::CHEVRON_RIGHT />
            </button>

            <Dots carousel=carousel dispatch=dispatch label="Go to testimonial page" />
        </div>
    }
}

#[component]
fn MobileCarousel(
    carousel: RwSignal<CarouselState>,
    dispatch: impl Fn(CarouselInput) + Copy + Send + 'static,
    threshold: f64,
) -> impl IntoView {
    let swipe = StoredValue::new(SwipeTracker::new(threshold));

    let cards = move || {
        carousel.with(|c| {
            let start = c.visible_range().start;
            c.visible(TESTIMONIALS)
                .iter()
                .enumerate()
                .map(|(offset, testimonial)| (start + offset, *testimonial))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            class="carousel carousel-mobile"
            on:pointerdown=move |ev: ev::PointerEvent| {
                swipe.update_value(|s| s.begin(f64::from(ev.client_x()), f64::from(ev.client_y())));
            }
            on:pointerup=move |ev: ev::PointerEvent| {
                let direction = swipe
                    .try_update_value(|s| s.end(f64::from(ev.client_x()), f64::from(ev.client_y())))
                    .flatten();
                if let Some(direction) = direction {
                    dispatch(CarouselInput::Swipe(direction));
                }
            }
            on:pointercancel=move |_| swipe.update_value(SwipeTracker::cancel)
            on:touchstart=move |_| dispatch(CarouselInput::PointerEnter)
            on:touchend=move |_| dispatch(CarouselInput::PointerLeave)
            on:touchcancel=move |_| dispatch(CarouselInput::PointerLeave)
        >
            <AnimatedSection class="carousel-track">
                <For
                    each=cards
                    key=|(index, _)| *index
                    children=move |(_, testimonial)| {
                        view! {
                            <div class="carousel-slide slide-enter-side">
                                <TestimonialCard testimonial=testimonial />
                            </div>
                        }
                    }
                />
            </AnimatedSection>

            <Dots carousel=carousel dispatch=dispatch label="Go to testimonial" />
        </div>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let avatar_failed = RwSignal::new(false);

    view! {
        <article class="testimonial-card">
            <Icon name=icons::QUOTE class="testimonial-quote" />
            <div class="stars">
                {testimonial
                    .stars()
                    .map(|filled| {
                        let class = if filled { "star is-filled" } else { "star" };
                        view! { <Icon name=icons::STAR class=class /> }
                    })
                    .collect_view()}
            </div>
            <p class="testimonial-content">{format!("\"{}\"", testimonial.content)}</p>
            <div class="testimonial-author">
                <div class="avatar">
                    <Show
                        when=move || !avatar_failed.get()
                        fallback=move || view! { <span class="avatar-fallback">{testimonial.initials()}</span> }
                    >
                        <img
                            src=testimonial.avatar_url
                            alt=testimonial.name
                            on:error=move |_| avatar_failed.set(true)
                        />
                    </Show>
                </div>
                <div>
                    <p class="testimonial-name">{testimonial.name}</p>
                    <p class="muted small">{testimonial.byline()}</p>
                </div>
            </div>
        </article>
    }
}
