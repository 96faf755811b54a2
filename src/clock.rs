//! Wall-clock capability
//!
//! The double-tap window and the restart delay are measured in real time,
//! not ticks. The simulation reads time only through [`Clock`] so tests can
//! move time by hand.

use std::cell::Cell;

/// Source of wall-clock time in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Clock advanced explicitly by the caller
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// `Date.now()` in the browser
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserClock;

#[cfg(target_arch = "wasm32")]
impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}
