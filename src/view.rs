//! Visual derivations
//!
//! Everything a presenter needs beyond the raw snapshot: which hamster sprite
//! to show, how far the wheel has turned, bounce animation parameters, and the
//! timing chip flags. Pure functions, so the DOM code stays thin.

use crate::sim::{LifecyclePhase, Snapshot};
use crate::tuning::Tuning;

/// Wheel turn rate per unit of speed (degrees/sec)
pub const DEGREES_PER_SPEED: f64 = 6.0;
/// Heat at which the hamster shows the overheat sprite
pub const OVERHEAT_MOOD_HEAT: f64 = 99.0;
/// Speed at which the hamster shows the fast sprite
pub const FAST_MOOD_SPEED: f64 = 70.0;
/// How far below the threshold the timing chip starts warning
pub const HOT_MARGIN: f64 = 4.0;

/// Hamster sprite selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HamsterMood {
    #[default]
    Normal,
    Fast,
    Overheat,
}

impl HamsterMood {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        if snapshot.heat >= OVERHEAT_MOOD_HEAT {
            HamsterMood::Overheat
        } else if snapshot.speed >= FAST_MOOD_SPEED {
            HamsterMood::Fast
        } else {
            HamsterMood::Normal
        }
    }

    /// Image asset for this mood
    pub fn asset(&self) -> &'static str {
        match self {
            HamsterMood::Normal => "hokotan_normal.png",
            HamsterMood::Fast => "hokotan_fast.png",
            HamsterMood::Overheat => "hokotan_overheat.png",
        }
    }
}

/// Wheel image asset
pub const WHEEL_ASSET: &str = "wheel.png";

/// Accumulated wheel rotation
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelSpin {
    /// Degrees in `[0, 360)`
    pub angle: f64,
}

impl WheelSpin {
    /// Turn the wheel for one frame; it only spins during a run
    pub fn advance(&mut self, snapshot: &Snapshot, dt_secs: f64) -> f64 {
        let spin = if snapshot.phase == LifecyclePhase::Running {
            snapshot.speed
        } else {
            0.0
        };
        self.angle = (self.angle + spin * DEGREES_PER_SPEED * dt_secs).rem_euclid(360.0);
        self.angle
    }
}

/// Hamster bounce animation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    /// Jump height (px)
    pub height_px: f64,
    /// Animation period (s)
    pub period_secs: f64,
}

impl Bounce {
    pub fn for_speed(speed: f64) -> Self {
        Self {
            height_px: (8.0 + speed * 0.12).clamp(8.0, 26.0),
            period_secs: (1.2 - speed * 0.01).clamp(0.42, 1.2),
        }
    }
}

/// Timing chip / tap zone highlight flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingChip {
    pub is_good: bool,
    pub is_hot: bool,
}

impl TimingChip {
    pub fn from_snapshot(snapshot: &Snapshot, tuning: &Tuning) -> Self {
        Self {
            is_good: snapshot.is_good_timing,
            is_hot: snapshot.speed >= tuning.overheat_threshold - HOT_MARGIN,
        }
    }
}

/// HUD parts a snapshot should redraw
///
/// Score, heat, and mood are drawn for GameOver as well, since the frame that
/// ends a run is already published in that phase. Chip and bounce only move
/// while Running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudFrame {
    pub score: Option<u64>,
    pub heat: Option<f64>,
    pub mood: Option<HamsterMood>,
    pub chip: Option<TimingChip>,
    pub bounce: Option<Bounce>,
}

impl HudFrame {
    pub fn from_snapshot(snapshot: &Snapshot, tuning: &Tuning) -> Self {
        let live = snapshot.phase == LifecyclePhase::Running;
        let drawn = live || snapshot.phase == LifecyclePhase::GameOver;
        Self {
            score: drawn.then_some(snapshot.score),
            heat: drawn.then_some(snapshot.heat),
            mood: drawn.then(|| HamsterMood::from_snapshot(snapshot)),
            chip: live.then(|| TimingChip::from_snapshot(snapshot, tuning)),
            bounce: live.then(|| Bounce::for_speed(snapshot.speed)),
        }
    }
}
