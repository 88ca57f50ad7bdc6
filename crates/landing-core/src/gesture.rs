//! Swipe Recognition

/// Direction the pointer travelled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Tracks one pointer from press to release.
///
/// A release counts as a swipe when horizontal travel reaches the threshold
/// and outweighs vertical travel, so scrolling the page never flips slides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeTracker {
    threshold_px: f64,
    origin: Option<(f64, f64)>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl SwipeTracker {
    pub const fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            origin: None,
        }
    }

    pub const fn begin(&mut self, x: f64, y: f64) {
        self.origin = Some((x, y));
    }

    pub const fn cancel(&mut self) {
        self.origin = None;
    }

    pub const fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Finish tracking and classify the gesture
    pub fn end(&mut self, x: f64, y: f64) -> Option<SwipeDirection> {
        let (start_x, start_y) = self.origin.take()?;
        let dx = x - start_x;
        let dy = y - start_y;
        if dx.abs() < self.threshold_px || dx.abs() <= dy.abs() {
            return None;
        }
        if dx < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_and_right() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0, 50.0);
        assert_eq!(tracker.end(120.0, 55.0), Some(SwipeDirection::Left));

        tracker.begin(100.0, 50.0);
        assert_eq!(tracker.end(180.0, 40.0), Some(SwipeDirection::Right));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_below_threshold_ignored() {
        let mut tracker = SwipeTracker::new(10.0);
        tracker.begin(100.0, 0.0);
        assert_eq!(tracker.end(91.0, 0.0), None);
    }

    #[test]
    fn test_vertical_scroll_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(100.0, 0.0);
        assert_eq!(tracker.end(60.0, 120.0), None);
    }

    #[test]
    fn test_end_without_begin() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.end(0.0, 0.0), None);
        tracker.begin(0.0, 0.0);
        tracker.cancel();
        assert_eq!(tracker.end(-50.0, 0.0), None);
    }
}
