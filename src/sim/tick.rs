//! Per-frame simulation step
//!
//! Advances a running [`SimState`] by one rendered frame. The step order is
//! fixed: speed decay, timing cycle, score accrual, heat.

use super::state::{GameEvent, SimState};
use crate::clock::FrameDelta;
use crate::tuning::Tuning;
use crate::tuning::consts::HEAT_MAX;

/// Advance the simulation by one frame
///
/// Does nothing outside the Running phase. Returns [`GameEvent::Overheated`]
/// when heat reaches the top of the gauge; the caller owns the GameOver
/// transition.
pub fn advance(state: &mut SimState, tuning: &Tuning, delta: FrameDelta) -> Option<GameEvent> {
    if !state.is_running() {
        return None;
    }

    decay_speed(state, tuning, delta.secs);
    update_timing(state, tuning, delta.millis);
    update_score(state, tuning, delta.millis);
    update_heat(state, tuning, delta.secs)
}

fn decay_speed(state: &mut SimState, tuning: &Tuning, dt: f64) {
    state.speed = tuning.clamp_speed(state.speed - tuning.decay_per_sec * dt);
}

/// The cycle counter restarts at zero once it passes the period; the excess
/// is dropped, not carried.
fn update_timing(state: &mut SimState, tuning: &Tuning, dt_ms: f64) {
    state.good_timer += dt_ms;
    if state.good_timer > tuning.good_period_ms {
        state.good_timer = 0.0;
    }
}

/// At most one award per frame; the accumulator is zeroed, not reduced by the
/// interval.
fn update_score(state: &mut SimState, tuning: &Tuning, dt_ms: f64) {
    state.score_timer += dt_ms;
    if state.score_timer >= tuning.score_interval_ms {
        state.score_timer = 0.0;
        state.score += (state.speed / 5.0).floor();
    }
}

fn update_heat(state: &mut SimState, tuning: &Tuning, dt: f64) -> Option<GameEvent> {
    let rate = if state.speed >= tuning.overheat_threshold {
        tuning.heat_build_per_sec
    } else {
        -tuning.heat_cool_per_sec
    };
    state.heat = (state.heat + rate * dt).clamp(0.0, HEAT_MAX);

    if state.heat >= HEAT_MAX {
        Some(GameEvent::Overheated)
    } else {
        None
    }
}
