//! Presentation boundary
//!
//! The game loop pushes state out through [`Presenter`]; it never reads back.
//! The browser build implements it against the DOM, tests record the calls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Snapshot;

/// Transient feedback for one accepted tap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapFeedback {
    /// Pointer position in client coordinates; `None` for keyboard taps
    pub pointer: Option<Vec2>,
    /// Tap landed in the good window
    pub good: bool,
}

/// Result of a finished run, delivered after the announce delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub final_score: u64,
    pub is_new_record: bool,
}

/// Consumer of game output
pub trait Presenter {
    /// Show the start prompt (first launch only)
    fn ready(&mut self, best_score: u64);

    /// A run began; hide any overlay
    fn run_started(&mut self) {}

    /// Draw the current state. `dt_secs` is the capped frame time.
    fn render(&mut self, snapshot: &Snapshot, dt_secs: f64);

    fn tap_feedback(&mut self, feedback: TapFeedback);

    /// Show the result overlay
    fn game_over(&mut self, announcement: Announcement);
}

/// Presenter that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn ready(&mut self, _best_score: u64) {}

    fn render(&mut self, _snapshot: &Snapshot, _dt_secs: f64) {}

    fn tap_feedback(&mut self, _feedback: TapFeedback) {}

    fn game_over(&mut self, _announcement: Announcement) {}
}
