//! Carousel and autoplay driven together on virtual time, the way the
//! frontend wires them: ticks feed `CarouselInput::Tick`, effects feed
//! `Autoplay::apply`.

use std::time::Duration;

use landing_core::content::TESTIMONIALS;
use landing_core::{
    Autoplay, CarouselInput, CarouselState, SiteConfig, SwipeDirection, VirtualInterval, ViewMode,
};

struct Harness {
    carousel: CarouselState,
    autoplay: Autoplay<VirtualInterval>,
}

impl Harness {
    fn new(mode: ViewMode) -> Self {
        let config = SiteConfig::default();
        let carousel = CarouselState::from_config(TESTIMONIALS.len(), &config.carousel).with_mode(mode);
        let mut autoplay = Autoplay::new(VirtualInterval::new(), config.autoplay_interval());
        autoplay.start();
        Self { carousel, autoplay }
    }

    fn wait(&mut self, millis: u64) {
        let ticks = self.autoplay.timer_mut().advance(Duration::from_millis(millis));
        for _ in 0..ticks {
            let effect = self.carousel.handle(CarouselInput::Tick).unwrap();
            self.autoplay.apply(effect);
        }
    }

    fn send(&mut self, input: CarouselInput) {
        let effect = self.carousel.handle(input).unwrap();
        self.autoplay.apply(effect);
    }

    fn visible_ids(&self) -> Vec<u32> {
        self.carousel.visible(TESTIMONIALS).iter().map(|t| t.id).collect()
    }
}

#[test]
fn autoplay_pages_through_desktop() {
    let mut harness = Harness::new(ViewMode::Desktop);
    assert_eq!(harness.visible_ids(), vec![1, 2, 3]);

    harness.wait(5000);
    assert_eq!(harness.visible_ids(), vec![4, 5]);

    harness.wait(5000);
    assert_eq!(harness.visible_ids(), vec![1, 2, 3]);
}

#[test]
fn manual_navigation_defers_next_advance() {
    let mut harness = Harness::new(ViewMode::Desktop);
    harness.wait(4500);
    harness.send(CarouselInput::Next);
    assert_eq!(harness.carousel.active_index(), 1);

    harness.wait(4999);
    assert_eq!(harness.carousel.active_index(), 1);
    harness.wait(1);
    assert_eq!(harness.carousel.active_index(), 0);
}

#[test]
fn every_navigation_input_restarts_the_interval() {
    let inputs = [
        CarouselInput::Next,
        CarouselInput::Prev,
        CarouselInput::GoTo(1),
        CarouselInput::Swipe(SwipeDirection::Left),
        CarouselInput::Swipe(SwipeDirection::Right),
    ];
    for input in inputs {
        let mut harness = Harness::new(ViewMode::Mobile);
        harness.wait(3000);
        harness.send(input);
        assert_eq!(
            harness.autoplay.timer().until_next_tick(),
            Some(Duration::from_millis(5000)),
            "{input:?} did not restart autoplay"
        );
    }
}

#[test]
fn hover_pauses_without_stopping_the_timer() {
    let mut harness = Harness::new(ViewMode::Desktop);
    harness.send(CarouselInput::PointerEnter);
    harness.wait(15_000);
    assert_eq!(harness.carousel.active_index(), 0);
    assert!(harness.autoplay.is_running());

    harness.send(CarouselInput::PointerLeave);
    harness.wait(5000);
    assert_eq!(harness.carousel.active_index(), 1);
}

#[test]
fn mobile_shows_one_card_and_wraps() {
    let mut harness = Harness::new(ViewMode::Mobile);
    harness.send(CarouselInput::GoTo(4));
    assert_eq!(harness.visible_ids(), vec![5]);

    harness.send(CarouselInput::Swipe(SwipeDirection::Left));
    assert_eq!(harness.visible_ids(), vec![1]);
}

#[test]
fn resize_keeps_current_card_on_screen() {
    let mut harness = Harness::new(ViewMode::Mobile);
    harness.send(CarouselInput::GoTo(3));
    harness.send(CarouselInput::Resize(ViewMode::Desktop));
    assert!(harness.visible_ids().contains(&4));
    assert_eq!(harness.carousel.dot_count(), 2);
}

#[test]
fn narrowing_the_window_while_hovered_keeps_autoplay_alive() {
    let mut harness = Harness::new(ViewMode::Desktop);
    harness.send(CarouselInput::PointerEnter);
    harness.wait(5000);
    assert_eq!(harness.visible_ids(), vec![1, 2, 3]);

    harness.send(CarouselInput::Resize(ViewMode::Mobile));
    harness.wait(5000);
    assert_eq!(harness.visible_ids(), vec![2]);
}
