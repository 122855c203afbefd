//! Frame timing
//!
//! A [`Clock`] supplies monotonic milliseconds. [`FrameClock`] turns successive
//! readings into per-frame deltas: raw milliseconds for the cycle timers and
//! capped seconds for integrating decay and heat.

use std::cell::Cell;
use std::rc::Rc;

use crate::tuning::consts::MAX_FRAME_SECS;

/// Monotonic time source in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Hand-driven clock for tests and headless sessions
///
/// Clones share the same reading, so a test can keep a handle while the game
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Elapsed time for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameDelta {
    /// Seconds to integrate, capped at [`MAX_FRAME_SECS`]
    pub secs: f64,
    /// Uncapped milliseconds since the previous frame
    pub millis: f64,
}

impl FrameDelta {
    /// Build a delta from raw milliseconds, applying the integration cap
    pub fn from_millis(millis: f64) -> Self {
        let millis = millis.max(0.0);
        Self {
            secs: (millis / 1000.0).min(MAX_FRAME_SECS),
            millis,
        }
    }
}

/// Tracks the previous frame timestamp
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_tick_ms: f64,
}

impl FrameClock {
    pub fn new(now_ms: f64) -> Self {
        Self { last_tick_ms: now_ms }
    }

    /// Move the baseline to `now_ms` without producing a delta
    pub fn reset(&mut self, now_ms: f64) {
        self.last_tick_ms = now_ms;
    }

    /// Delta since the previous tick; the baseline moves to `now_ms`
    pub fn tick(&mut self, now_ms: f64) -> FrameDelta {
        let delta = FrameDelta::from_millis(now_ms - self.last_tick_ms);
        self.last_tick_ms = now_ms;
        delta
    }

    pub fn last_tick_ms(&self) -> f64 {
        self.last_tick_ms
    }
}
