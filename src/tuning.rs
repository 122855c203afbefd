//! Game balance table
//!
//! Every rate and threshold the simulation reads lives in [`Tuning`]. The
//! defaults are the shipped values; changing any of them changes game feel.

use serde::{Deserialize, Serialize};

/// Fixed values that are not part of the balance table
pub mod consts {
    /// Speed every run starts at
    pub const RUN_START_SPEED: f64 = 10.0;
    /// Delay between the GameOver transition and the result overlay (ms)
    pub const GAME_OVER_ANNOUNCE_DELAY_MS: f64 = 900.0;
    /// Cap on the seconds integrated per frame (backgrounded tabs)
    pub const MAX_FRAME_SECS: f64 = 0.08;
    /// Upper bound of the heat gauge
    pub const HEAT_MAX: f64 = 100.0;
    /// LocalStorage key holding the best score
    pub const BEST_SCORE_KEY: &str = "hokotan_best_score";
    /// How long the tap zone stays pressed after a tap (ms)
    pub const TAP_PULSE_MS: i32 = 160;
}

/// Rates and thresholds driving the per-frame update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Speed lost per second
    pub decay_per_sec: f64,
    /// Length of one timing cycle (ms)
    pub good_period_ms: f64,
    /// Leading part of each cycle where taps count as good (ms)
    pub good_window_ms: f64,
    /// Score is awarded once per interval (ms)
    pub score_interval_ms: f64,
    /// Speed at or above which heat builds
    pub overheat_threshold: f64,
    /// Heat gained per second while overheating
    pub heat_build_per_sec: f64,
    /// Heat shed per second below the threshold
    pub heat_cool_per_sec: f64,
    pub speed_max: f64,
    pub tap_boost_good: f64,
    pub tap_boost_normal: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            decay_per_sec: 8.0,
            good_period_ms: 2300.0,
            good_window_ms: 720.0,
            score_interval_ms: 110.0,
            overheat_threshold: 80.0,
            heat_build_per_sec: 28.0,
            heat_cool_per_sec: 20.0,
            speed_max: 100.0,
            tap_boost_good: 10.0,
            tap_boost_normal: 3.0,
        }
    }
}

impl Tuning {
    /// Whether a timing-cycle position falls inside the good window
    #[inline]
    pub fn is_good_timing(&self, good_timer_ms: f64) -> bool {
        good_timer_ms <= self.good_window_ms
    }

    /// Clamp a speed value into `[0, speed_max]`
    #[inline]
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        speed.clamp(0.0, self.speed_max)
    }

    /// Seconds of sustained overheating needed to fill an empty gauge
    pub fn secs_to_overheat(&self) -> f64 {
        consts::HEAT_MAX / self.heat_build_per_sec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let t = Tuning::default();
        assert_eq!(t.decay_per_sec, 8.0);
        assert_eq!(t.good_period_ms, 2300.0);
        assert_eq!(t.good_window_ms, 720.0);
        assert_eq!(t.score_interval_ms, 110.0);
        assert_eq!(t.overheat_threshold, 80.0);
        assert_eq!(t.heat_build_per_sec, 28.0);
        assert_eq!(t.heat_cool_per_sec, 20.0);
        assert_eq!(t.speed_max, 100.0);
        assert_eq!(t.tap_boost_good, 10.0);
        assert_eq!(t.tap_boost_normal, 3.0);
    }

    #[test]
    fn test_good_window_is_front_loaded() {
        let t = Tuning::default();
        assert!(t.is_good_timing(0.0));
        assert!(t.is_good_timing(720.0));
        assert!(!t.is_good_timing(720.5));
        assert!(!t.is_good_timing(2200.0));
    }

    #[test]
    fn test_clamp_speed() {
        let t = Tuning::default();
        assert_eq!(t.clamp_speed(-3.0), 0.0);
        assert_eq!(t.clamp_speed(42.0), 42.0);
        assert_eq!(t.clamp_speed(140.0), 100.0);
    }

    #[test]
    fn test_table_from_json() {
        let json = serde_json::to_string(&Tuning::default()).unwrap();
        assert!(json.contains("\"good_window_ms\":720.0"));
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tuning::default());
    }
}
