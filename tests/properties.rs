mod common;

use common::new_game;
use proptest::prelude::*;
use wheel_dash::clock::FrameDelta;
use wheel_dash::sim::{self, SimState};
use wheel_dash::tuning::consts::BEST_SCORE_KEY;
use wheel_dash::{LifecyclePhase, MemoryStore, Tuning};

proptest! {
    #[test]
    fn prop_speed_and_heat_stay_in_range(
        speed in 0.0f64..=100.0,
        heat in 0.0f64..=100.0,
        steps in prop::collection::vec((0.0f64..400.0, any::<bool>()), 1..200)
    ) {
        let tuning = Tuning::default();
        let mut state = SimState::new();
        state.begin_run();
        state.speed = speed;
        state.heat = heat;

        for (dt_ms, tap) in steps {
            if tap {
                sim::tap(&mut state, &tuning);
            }
            if sim::advance(&mut state, &tuning, FrameDelta::from_millis(dt_ms)).is_some() {
                state.enter_game_over();
            }

            prop_assert!((0.0..=tuning.speed_max).contains(&state.speed));
            prop_assert!((0.0..=100.0).contains(&state.heat));
            prop_assert!(state.good_timer <= tuning.good_period_ms);
            if state.phase == LifecyclePhase::GameOver {
                prop_assert_eq!(state.speed, 0.0);
            }
        }
    }

    #[test]
    fn prop_score_never_decreases_while_running(
        steps in prop::collection::vec((0.0f64..200.0, any::<bool>()), 1..300)
    ) {
        let tuning = Tuning::default();
        let mut state = SimState::new();
        state.begin_run();

        let mut last = state.score;
        for (dt_ms, tap) in steps {
            if tap {
                sim::tap(&mut state, &tuning);
            }
            sim::advance(&mut state, &tuning, FrameDelta::from_millis(dt_ms));
            prop_assert!(state.score >= last);
            last = state.score;
        }
    }

    #[test]
    fn prop_tap_boost_matches_window(good_timer in 0.0f64..2300.0, speed in 0.0f64..=100.0) {
        let tuning = Tuning::default();
        let mut state = SimState::new();
        state.begin_run();
        state.speed = speed;
        state.good_timer = good_timer;

        let outcome = sim::tap(&mut state, &tuning).unwrap();
        let expected = if good_timer <= 720.0 { 10.0 } else { 3.0 };
        prop_assert_eq!(outcome.boost, expected);
        prop_assert_eq!(state.speed, (speed + expected).min(100.0));
    }

    #[test]
    fn prop_game_over_is_idempotent(score in 0.0f64..10_000.0, heat in 0.0f64..=100.0) {
        let (_, mut game) = new_game(MemoryStore::new());
        game.start();
        game.state_mut().score = score;
        game.state_mut().heat = heat;

        prop_assert!(game.end());
        let once = game.snapshot();
        let best_once = game.best_score();

        prop_assert!(!game.end());
        prop_assert_eq!(game.snapshot(), once);
        prop_assert_eq!(game.best_score(), best_once);
    }

    #[test]
    fn prop_best_score_is_running_max(
        initial in 0u64..1_000,
        scores in prop::collection::vec(0u64..2_000, 1..20)
    ) {
        let stored = initial.to_string();
        let (clock, mut game) = new_game(MemoryStore::with_item(BEST_SCORE_KEY, &stored));
        let mut expected = initial;

        for score in scores {
            let before = game.best_score();
            game.start();
            game.state_mut().score = score as f64;
            game.end();
            clock.advance(1_000.0);
            game.frame();

            expected = expected.max(score);
            prop_assert!(game.best_score() >= before);
            prop_assert_eq!(game.best_score(), expected);
            prop_assert_eq!(game.snapshot().new_record, score > before);
        }

        let stored = game.store().get(BEST_SCORE_KEY).map(str::to_string);
        prop_assert_eq!(stored, Some(expected.to_string()));
    }
}
