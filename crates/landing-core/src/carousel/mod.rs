//! Testimonials Carousel
//!
//! Pagination over a fixed slide list. The stored position is always an
//! absolute item index; the desktop page is derived from it, so switching
//! between mobile and desktop never strands the carousel on a position the
//! other layout cannot show.

pub mod autoplay;

use std::ops::Range;

use tracing::debug;

use crate::config::CarouselConfig;
use crate::error::{LandingError, Result};
use crate::gesture::SwipeDirection;

/// Layout class chosen by viewport width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Mobile,
    Desktop,
}

impl ViewMode {
    pub fn from_width(width_px: f64, desktop_breakpoint_px: f64) -> Self {
        if width_px >= desktop_breakpoint_px {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }
}

/// Anything that can move or pause the carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselInput {
    /// Autoplay interval elapsed
    Tick,
    Next,
    Prev,
    /// Indicator dot click, in the active view's dot domain
    GoTo(usize),
    Swipe(SwipeDirection),
    PointerEnter,
    PointerLeave,
    Resize(ViewMode),
}

impl CarouselInput {
    /// Inputs that restart the autoplay interval
    pub const fn is_manual_navigation(self) -> bool {
        matches!(self, Self::Next | Self::Prev | Self::GoTo(_) | Self::Swipe(_))
    }
}

/// Side effect the host must carry out after an input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Effect {
    #[default]
    None,
    RestartAutoplay,
}

/// Carousel position and pause flag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    item_index: usize,
    item_count: usize,
    mobile_page_size: usize,
    desktop_page_size: usize,
    mode: ViewMode,
    paused: bool,
}

impl CarouselState {
    /// Create a carousel over `item_count` slides.
    ///
    /// Page sizes of zero are treated as one.
    pub fn new(item_count: usize, mobile_page_size: usize, desktop_page_size: usize) -> Self {
        Self {
            item_index: 0,
            item_count,
            mobile_page_size: mobile_page_size.max(1),
            desktop_page_size: desktop_page_size.max(1),
            mode: ViewMode::default(),
            paused: false,
        }
    }

    pub fn from_config(item_count: usize, config: &CarouselConfig) -> Self {
        Self::new(item_count, config.mobile_page_size, config.desktop_page_size)
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Canonical absolute item index
    pub const fn item_index(&self) -> usize {
        self.item_index
    }

    pub const fn page_size(&self) -> usize {
        match self.mode {
            ViewMode::Mobile => self.mobile_page_size,
            ViewMode::Desktop => self.desktop_page_size,
        }
    }

    /// Number of desktop pages (`ceil(items / desktop_page_size)`)
    pub const fn total_pages(&self) -> usize {
        self.item_count.div_ceil(self.desktop_page_size)
    }

    /// Desktop page containing the current item
    pub const fn page(&self) -> usize {
        self.item_index / self.desktop_page_size
    }

    /// Position in the active view's index domain
    pub const fn active_index(&self) -> usize {
        match self.mode {
            ViewMode::Mobile => self.item_index,
            ViewMode::Desktop => self.page(),
        }
    }

    /// Number of indicator dots for the active view
    pub const fn dot_count(&self) -> usize {
        match self.mode {
            ViewMode::Mobile => self.item_count,
            ViewMode::Desktop => self.total_pages(),
        }
    }

    /// Item range currently on screen.
    ///
    /// Desktop pages are never padded: the last page may be shorter.
    pub fn visible_range(&self) -> Range<usize> {
        if self.item_count == 0 {
            return 0..0;
        }
        let start = match self.mode {
            ViewMode::Mobile => self.item_index,
            ViewMode::Desktop => self.page() * self.desktop_page_size,
        };
        let end = (start + self.page_size()).min(self.item_count);
        start..end
    }

    /// Slice of `items` currently on screen
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let end = range.end.min(items.len());
        items.get(range.start..end).unwrap_or_default()
    }

    /// Advance one step in the active view, wrapping at the end
    pub fn next(&mut self) {
        let count = self.dot_count();
        if count == 0 {
            return;
        }
        self.select((self.active_index() + 1) % count);
    }

    /// Go back one step in the active view, wrapping at the start
    pub fn prev(&mut self) {
        let count = self.dot_count();
        if count == 0 {
            return;
        }
        self.select((self.active_index() + count - 1) % count);
    }

    /// Jump to `index` in the active view's dot domain
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        let len = self.dot_count();
        if index >= len {
            return Err(LandingError::IndexOutOfRange { index, len });
        }
        self.select(index);
        Ok(())
    }

    pub const fn pause(&mut self) {
        self.paused = true;
    }

    pub const fn resume(&mut self) {
        self.paused = false;
    }

    /// Switch layout. The item index is kept; the desktop page follows it.
    ///
    /// The view that held the pointer is gone after a switch and will never
    /// report the pointer leaving, so a hover pause is lifted here.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if self.mode != mode {
            debug!(?mode, item = self.item_index, "carousel view mode changed");
            self.mode = mode;
            self.paused = false;
        }
    }

    /// Autoplay tick: advance unless paused. Returns whether it moved.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        let before = self.item_index;
        self.next();
        before != self.item_index
    }

    /// Apply an input and report what the host has to do next
    pub fn handle(&mut self, input: CarouselInput) -> Result<Effect> {
        match input {
            CarouselInput::Tick => {
                self.tick();
            }
            CarouselInput::Next | CarouselInput::Swipe(SwipeDirection::Left) => self.next(),
            CarouselInput::Prev | CarouselInput::Swipe(SwipeDirection::Right) => self.prev(),
            CarouselInput::GoTo(index) => self.go_to(index)?,
            CarouselInput::PointerEnter => self.pause(),
            CarouselInput::PointerLeave => self.resume(),
            CarouselInput::Resize(mode) => self.set_mode(mode),
        }

        if input.is_manual_navigation() {
            debug!(?input, active = self.active_index(), "carousel navigated");
            Ok(Effect::RestartAutoplay)
        } else {
            Ok(Effect::None)
        }
    }

    fn select(&mut self, index: usize) {
        self.item_index = match self.mode {
            ViewMode::Mobile => index,
            ViewMode::Desktop => index * self.desktop_page_size,
        };
    }
}

/// Render key for a desktop card: distinct per page so cards re-enter on page change
pub fn card_key(page: usize, id: u32) -> String {
    format!("{page}-{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop(count: usize) -> CarouselState {
        CarouselState::new(count, 1, 3).with_mode(ViewMode::Desktop)
    }

    fn mobile(count: usize) -> CarouselState {
        CarouselState::new(count, 1, 3).with_mode(ViewMode::Mobile)
    }

    #[test]
    fn test_next_cycles_through_pages() {
        let mut carousel = desktop(5);
        assert_eq!(carousel.total_pages(), 2);
        let mut seen = vec![carousel.active_index()];
        for _ in 0..carousel.total_pages() {
            carousel.next();
            seen.push(carousel.active_index());
        }
        assert_eq!(seen, vec![0, 1, 0]);
    }

    #[test]
    fn test_prev_wraps_from_zero() {
        let mut carousel = desktop(5);
        carousel.prev();
        assert_eq!(carousel.active_index(), 1);

        let mut carousel = mobile(5);
        carousel.prev();
        assert_eq!(carousel.active_index(), 4);
    }

    #[test]
    fn test_desktop_pages_are_not_padded() {
        let items = [0, 1, 2, 3, 4];
        let mut carousel = desktop(items.len());
        assert_eq!(carousel.visible(&items), &[0, 1, 2]);
        carousel.next();
        assert_eq!(carousel.visible(&items), &[3, 4]);
    }

    #[test]
    fn test_mobile_last_item_then_swipe_left_wraps() {
        let ids = [1, 2, 3, 4, 5];
        let mut carousel = mobile(ids.len());
        carousel.go_to(4).unwrap();
        assert_eq!(carousel.visible(&ids), &[5]);

        let effect = carousel.handle(CarouselInput::Swipe(SwipeDirection::Left)).unwrap();
        assert_eq!(effect, Effect::RestartAutoplay);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_go_to_out_of_range_rejected() {
        let mut carousel = desktop(5);
        carousel.next();
        let err = carousel.go_to(2).unwrap_err();
        assert!(matches!(err, LandingError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn test_paused_tick_does_not_move() {
        let mut carousel = desktop(5);
        carousel.handle(CarouselInput::PointerEnter).unwrap();
        assert!(carousel.is_paused());
        assert!(!carousel.tick());
        assert_eq!(carousel.handle(CarouselInput::Tick).unwrap(), Effect::None);
        assert_eq!(carousel.active_index(), 0);

        carousel.handle(CarouselInput::PointerLeave).unwrap();
        assert!(carousel.tick());
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn test_mode_change_keeps_item_visible() {
        let mut carousel = mobile(5);
        carousel.go_to(4).unwrap();

        carousel.set_mode(ViewMode::Desktop);
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(carousel.visible_range(), 3..5);
        assert_eq!(carousel.dot_count(), 2);

        carousel.set_mode(ViewMode::Mobile);
        assert_eq!(carousel.active_index(), 4);
        assert_eq!(carousel.dot_count(), 5);
    }

    #[test]
    fn test_mode_change_lifts_hover_pause() {
        let mut carousel = mobile(5).with_mode(ViewMode::Desktop);
        carousel.handle(CarouselInput::PointerEnter).unwrap();
        carousel.handle(CarouselInput::Resize(ViewMode::Desktop)).unwrap();
        assert!(carousel.is_paused());

        carousel.handle(CarouselInput::Resize(ViewMode::Mobile)).unwrap();
        assert!(!carousel.is_paused());
        assert!(carousel.tick());
        assert_eq!(carousel.item_index(), 1);
    }

    #[test]
    fn test_desktop_navigation_snaps_to_page_start() {
        let mut carousel = mobile(5);
        carousel.go_to(4).unwrap();
        carousel.set_mode(ViewMode::Desktop);
        carousel.prev();
        assert_eq!(carousel.item_index(), 0);
        carousel.set_mode(ViewMode::Mobile);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = desktop(0);
        assert_eq!(carousel.total_pages(), 0);
        carousel.next();
        carousel.prev();
        assert!(!carousel.tick());
        assert_eq!(carousel.visible_range(), 0..0);
        assert!(carousel.go_to(0).is_err());
    }

    #[test]
    fn test_non_navigation_inputs_keep_timer() {
        let mut carousel = desktop(5);
        for input in [
            CarouselInput::Tick,
            CarouselInput::PointerEnter,
            CarouselInput::PointerLeave,
            CarouselInput::Resize(ViewMode::Mobile),
        ] {
            assert_eq!(carousel.handle(input).unwrap(), Effect::None);
        }
        for input in [CarouselInput::Next, CarouselInput::Prev, CarouselInput::GoTo(0)] {
            assert_eq!(carousel.handle(input).unwrap(), Effect::RestartAutoplay);
        }
    }

    #[test]
    fn test_view_mode_from_width() {
        assert_eq!(ViewMode::from_width(767.0, 768.0), ViewMode::Mobile);
        assert_eq!(ViewMode::from_width(768.0, 768.0), ViewMode::Desktop);
    }

    #[test]
    fn test_card_key() {
        assert_eq!(card_key(1, 4), "1-4");
    }
}
