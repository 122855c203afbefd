//! Demo pilot
//!
//! Plays the game without a human: taps in the good window while the boost
//! keeps the wheel under the overheat threshold, and nudges the wheel with
//! normal taps when it is about to stall.

use super::state::{LifecyclePhase, Snapshot};
use crate::tuning::Tuning;

/// Below this speed the pilot taps even outside the good window
pub const STALL_SPEED: f64 = 12.0;

/// Decide whether to tap this frame
pub fn wants_tap(snapshot: &Snapshot, tuning: &Tuning) -> bool {
    if snapshot.phase != LifecyclePhase::Running {
        return false;
    }

    if snapshot.is_good_timing {
        snapshot.speed + tuning.tap_boost_good < tuning.overheat_threshold
    } else {
        snapshot.speed < STALL_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(speed: f64, is_good_timing: bool) -> Snapshot {
        Snapshot {
            phase: LifecyclePhase::Running,
            speed,
            heat: 0.0,
            score: 0,
            is_good_timing,
            best_score: 0,
            new_record: false,
        }
    }

    #[test]
    fn test_taps_in_good_window_below_threshold() {
        let tuning = Tuning::default();
        assert!(wants_tap(&snapshot(40.0, true), &tuning));
        assert!(wants_tap(&snapshot(69.0, true), &tuning));
        // 70 + 10 would reach the threshold
        assert!(!wants_tap(&snapshot(70.0, true), &tuning));
    }

    #[test]
    fn test_only_stall_taps_outside_window() {
        let tuning = Tuning::default();
        assert!(!wants_tap(&snapshot(40.0, false), &tuning));
        assert!(wants_tap(&snapshot(5.0, false), &tuning));
    }

    #[test]
    fn test_idle_outside_running() {
        let tuning = Tuning::default();
        let mut s = snapshot(5.0, true);
        s.phase = LifecyclePhase::GameOver;
        assert!(!wants_tap(&s, &tuning));
    }
}
