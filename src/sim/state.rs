//! Game state and core simulation types
//!
//! One [`SimState`] exists per game; it is owned by the game loop and only
//! mutated through `sim::tick`, `sim::input`, and the lifecycle transitions
//! below.

use serde::{Deserialize, Serialize};

use crate::tuning::consts::RUN_START_SPEED;

/// Current phase of the game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LifecyclePhase {
    /// Waiting for the first start; never re-entered
    #[default]
    Ready,
    /// Active run
    Running,
    /// Run ended (overheat or explicit end)
    GameOver,
}

/// Events produced by a simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Heat reached the top of the gauge
    Overheated,
}

/// Mutable simulation record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimState {
    pub phase: LifecyclePhase,
    /// Spin rate, `[0, speed_max]`
    pub speed: f64,
    /// Failure pressure, `[0, 100]`
    pub heat: f64,
    /// Accumulated score; floor it for display
    pub score: f64,
    /// Position in the timing cycle (ms)
    pub good_timer: f64,
    /// Time since the last score award (ms)
    pub score_timer: f64,
}

impl SimState {
    /// Fresh state in the Ready phase
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.phase == LifecyclePhase::Running
    }

    /// Score as shown to the player and compared against the best
    pub fn final_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }

    /// Reset run quantities and enter Running
    pub fn begin_run(&mut self) {
        self.phase = LifecyclePhase::Running;
        self.speed = RUN_START_SPEED;
        self.score = 0.0;
        self.heat = 0.0;
        self.good_timer = 0.0;
        self.score_timer = 0.0;
    }

    /// Enter GameOver and stop the wheel. Returns false if already over.
    pub fn enter_game_over(&mut self) -> bool {
        if self.phase == LifecyclePhase::GameOver {
            return false;
        }
        self.phase = LifecyclePhase::GameOver;
        self.speed = 0.0;
        true
    }
}

/// Read-only view published to the presenter each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: LifecyclePhase,
    pub speed: f64,
    pub heat: f64,
    /// Floored score
    pub score: u64,
    pub is_good_timing: bool,
    pub best_score: u64,
    /// The last finished run set a new best (cleared on the next start)
    pub new_record: bool,
}
