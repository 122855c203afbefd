//! Tap handling
//!
//! A tap only matters while a run is active. Taps inside the good window of
//! the timing cycle give the large boost.

use super::state::SimState;
use crate::tuning::Tuning;

/// What a tap did to the wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapOutcome {
    /// Boost granted before clamping
    pub boost: f64,
    /// Tap landed inside the good window
    pub good: bool,
    /// Speed after the boost
    pub speed: f64,
}

/// Apply a tap. Returns `None` when no run is active.
pub fn tap(state: &mut SimState, tuning: &Tuning) -> Option<TapOutcome> {
    if !state.is_running() {
        return None;
    }

    let good = tuning.is_good_timing(state.good_timer);
    let boost = if good {
        tuning.tap_boost_good
    } else {
        tuning.tap_boost_normal
    };
    state.speed = tuning.clamp_speed(state.speed + boost);

    Some(TapOutcome {
        boost,
        good,
        speed: state.speed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> SimState {
        let mut state = SimState::new();
        state.begin_run();
        state
    }

    #[test]
    fn test_tap_ignored_unless_running() {
        let tuning = Tuning::default();
        let mut state = SimState::new();
        assert_eq!(tap(&mut state, &tuning), None);
        assert_eq!(state.speed, 0.0);

        state.begin_run();
        state.enter_game_over();
        assert_eq!(tap(&mut state, &tuning), None);
        assert_eq!(state.speed, 0.0);
    }

    #[test]
    fn test_good_window_boost() {
        let tuning = Tuning::default();
        let mut state = running();
        state.good_timer = 100.0;
        let outcome = tap(&mut state, &tuning).unwrap();
        assert!(outcome.good);
        assert_eq!(outcome.boost, 10.0);
        assert_eq!(state.speed, 20.0);
    }

    #[test]
    fn test_normal_boost_outside_window() {
        let tuning = Tuning::default();
        let mut state = running();
        state.good_timer = 1000.0;
        let outcome = tap(&mut state, &tuning).unwrap();
        assert!(!outcome.good);
        assert_eq!(outcome.boost, 3.0);
        assert_eq!(state.speed, 13.0);
    }

    #[test]
    fn test_boost_clamps_at_max() {
        let tuning = Tuning::default();
        let mut state = running();
        state.speed = 95.0;
        let outcome = tap(&mut state, &tuning).unwrap();
        assert_eq!(outcome.speed, 100.0);
        assert_eq!(state.speed, 100.0);
    }
}
