//! Browser interval behind the autoplay `IntervalTimer` seam

use std::rc::Rc;
use std::time::Duration;

use landing_core::IntervalTimer;
use leptos::prelude::*;

/// `setInterval` wrapper; at most one interval is live at a time
pub struct BrowserInterval {
    on_tick: Rc<dyn Fn()>,
    handle: Option<IntervalHandle>,
}

impl BrowserInterval {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
            handle: None,
        }
    }
}

impl IntervalTimer for BrowserInterval {
    fn start(&mut self, period: Duration) {
        if self.handle.is_some() {
            return;
        }
        let on_tick = Rc::clone(&self.on_tick);
        match set_interval_with_handle(move || on_tick(), period) {
            Ok(handle) => self.handle = Some(handle),
            Err(err) => tracing::error!(?err, "failed to start autoplay interval"),
        }
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}
