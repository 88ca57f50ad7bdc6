//! Autoplay Timer
//!
//! A repeating interval owned by the carousel. Manual navigation restarts it
//! so the next automatic advance is a full interval away; dropping the
//! `Autoplay` stops it on every exit path.

use std::time::Duration;

use tracing::debug;

use super::Effect;

/// A cancellable repeating timer.
///
/// Implementations deliver ticks to whatever callback they were built with.
pub trait IntervalTimer {
    /// Start ticking every `period`. Must not stack a second interval.
    fn start(&mut self, period: Duration);

    /// Cancel the interval. Safe to call when not running.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Owns the carousel's interval timer
#[derive(Debug)]
pub struct Autoplay<T: IntervalTimer> {
    timer: T,
    interval: Duration,
}

impl<T: IntervalTimer> Autoplay<T> {
    pub const fn new(timer: T, interval: Duration) -> Self {
        Self { timer, interval }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub const fn timer(&self) -> &T {
        &self.timer
    }

    pub const fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Start the interval unless it is already running
    pub fn start(&mut self) {
        if self.timer.is_running() {
            return;
        }
        self.timer.start(self.interval);
    }

    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// Stop, then start: the next tick is a full interval away
    pub fn restart(&mut self) {
        debug!(interval_ms = self.interval.as_millis(), "restarting autoplay");
        self.timer.stop();
        self.timer.start(self.interval);
    }

    /// Carry out an effect returned by `CarouselState::handle`
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::RestartAutoplay => self.restart(),
        }
    }
}

impl<T: IntervalTimer> Drop for Autoplay<T> {
    fn drop(&mut self) {
        self.timer.stop();
    }
}

/// Deterministic interval driven by explicit `advance` calls
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VirtualInterval {
    period: Option<Duration>,
    elapsed: Duration,
    starts: u32,
}

impl VirtualInterval {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward and return how many ticks fired
    pub fn advance(&mut self, by: Duration) -> u32 {
        let Some(period) = self.period else {
            return 0;
        };
        let before = self.elapsed.as_nanos() / period.as_nanos();
        self.elapsed += by;
        let after = self.elapsed.as_nanos() / period.as_nanos();
        u32::try_from(after - before).unwrap_or(u32::MAX)
    }

    /// Time left until the next tick, if running
    pub fn until_next_tick(&self) -> Option<Duration> {
        let period = self.period?;
        let period_nanos = period.as_nanos();
        let into_period = self.elapsed.as_nanos() % period_nanos;
        let remaining = u64::try_from(period_nanos - into_period).unwrap_or(u64::MAX);
        Some(Duration::from_nanos(remaining))
    }

    /// How many times the interval has been (re)started
    pub const fn starts(&self) -> u32 {
        self.starts
    }
}

impl IntervalTimer for VirtualInterval {
    fn start(&mut self, period: Duration) {
        if self.period.is_some() || period.is_zero() {
            return;
        }
        self.period = Some(period);
        self.elapsed = Duration::ZERO;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.period = None;
        self.elapsed = Duration::ZERO;
    }

    fn is_running(&self) -> bool {
        self.period.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(5000);

    #[test]
    fn test_start_is_idempotent() {
        let mut autoplay = Autoplay::new(VirtualInterval::new(), INTERVAL);
        autoplay.start();
        autoplay.start();
        assert!(autoplay.is_running());
        assert_eq!(autoplay.timer().starts(), 1);
    }

    #[test]
    fn test_ticks_fire_every_interval() {
        let mut autoplay = Autoplay::new(VirtualInterval::new(), INTERVAL);
        autoplay.start();
        let timer = autoplay.timer_mut();
        assert_eq!(timer.advance(Duration::from_millis(4999)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
        assert_eq!(timer.advance(Duration::from_millis(10_000)), 2);
    }

    #[test]
    fn test_restart_pushes_next_tick_a_full_interval_out() {
        let mut autoplay = Autoplay::new(VirtualInterval::new(), INTERVAL);
        autoplay.start();
        assert_eq!(autoplay.timer_mut().advance(Duration::from_millis(4000)), 0);

        autoplay.apply(Effect::RestartAutoplay);
        assert_eq!(autoplay.timer().until_next_tick(), Some(INTERVAL));
        assert_eq!(autoplay.timer_mut().advance(Duration::from_millis(4999)), 0);
        assert_eq!(autoplay.timer_mut().advance(Duration::from_millis(1)), 1);
        assert_eq!(autoplay.timer().starts(), 2);
    }

    #[test]
    fn test_effect_none_keeps_phase() {
        let mut autoplay = Autoplay::new(VirtualInterval::new(), INTERVAL);
        autoplay.start();
        autoplay.timer_mut().advance(Duration::from_millis(3000));
        autoplay.apply(Effect::None);
        assert_eq!(autoplay.timer().until_next_tick(), Some(Duration::from_millis(2000)));
    }

    #[test]
    fn test_stopped_timer_never_ticks() {
        let mut autoplay = Autoplay::new(VirtualInterval::new(), INTERVAL);
        autoplay.start();
        autoplay.stop();
        assert!(!autoplay.is_running());
        assert_eq!(autoplay.timer_mut().advance(INTERVAL * 3), 0);
        assert_eq!(autoplay.timer().until_next_tick(), None);
    }

    /// Records stop calls so drop behaviour is observable from outside
    struct CountingTimer<'a> {
        running: bool,
        stops: &'a std::cell::Cell<u32>,
    }

    impl IntervalTimer for CountingTimer<'_> {
        fn start(&mut self, _period: Duration) {
            self.running = true;
        }

        fn stop(&mut self) {
            self.running = false;
            self.stops.set(self.stops.get() + 1);
        }

        fn is_running(&self) -> bool {
            self.running
        }
    }

    #[test]
    fn test_drop_stops_timer() {
        let stops = std::cell::Cell::new(0);
        {
            let mut autoplay = Autoplay::new(CountingTimer { running: false, stops: &stops }, INTERVAL);
            autoplay.start();
        }
        assert_eq!(stops.get(), 1);
    }
}
