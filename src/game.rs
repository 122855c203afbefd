//! Game loop
//!
//! [`Game`] owns the simulation record and mediates every command against it:
//! - `start`: Ready/GameOver -> Running (also the restart command)
//! - `tap`: speed boost while Running
//! - `end`: explicit Running -> GameOver
//! - `frame`: one rendered frame; advances the sim, fires due timers, renders
//!
//! The result overlay is announced 900ms after GameOver through a cancellable
//! timer so a quick restart never shows a stale result.

use glam::Vec2;

use crate::clock::{Clock, FrameClock};
use crate::persistence::{BestScore, KeyValueStore};
use crate::presenter::{Announcement, Presenter, TapFeedback};
use crate::schedule::{Scheduler, TimerHandle};
use crate::sim::{self, GameEvent, LifecyclePhase, SimState, Snapshot, TapOutcome};
use crate::tuning::Tuning;
use crate::tuning::consts::GAME_OVER_ANNOUNCE_DELAY_MS;

/// Game instance holding all state
pub struct Game<C, S, P> {
    clock: C,
    tuning: Tuning,
    state: SimState,
    frame_clock: FrameClock,
    best: BestScore<S>,
    timers: Scheduler<Announcement>,
    announce_timer: Option<TimerHandle>,
    /// The last finished run set a new best
    new_record: bool,
    presenter: P,
}

impl<C: Clock, S: KeyValueStore, P: Presenter> Game<C, S, P> {
    /// Create a game in the Ready phase with the shipped tuning
    pub fn new(clock: C, store: S, presenter: P) -> Self {
        Self::with_tuning(clock, store, presenter, Tuning::default())
    }

    pub fn with_tuning(clock: C, store: S, presenter: P, tuning: Tuning) -> Self {
        let best = BestScore::load(store);
        let frame_clock = FrameClock::new(clock.now_ms());
        let mut game = Self {
            clock,
            tuning,
            state: SimState::new(),
            frame_clock,
            best,
            timers: Scheduler::new(),
            announce_timer: None,
            new_record: false,
            presenter,
        };

        game.presenter.ready(game.best.best());
        let snapshot = game.snapshot();
        game.presenter.render(&snapshot, 0.0);
        game
    }

    /// Begin a run from Ready or GameOver. Ignored while Running.
    pub fn start(&mut self) -> bool {
        if self.state.is_running() {
            return false;
        }

        let restart = self.state.phase == LifecyclePhase::GameOver;
        self.state.begin_run();
        self.new_record = false;
        self.cancel_announcement();
        self.frame_clock.reset(self.clock.now_ms());
        self.presenter.run_started();

        if restart {
            log::info!("Run restarted (best {})", self.best.best());
        } else {
            log::info!("Run started (best {})", self.best.best());
        }
        true
    }

    /// Boost the wheel. `pointer` positions the tap pulse; `None` centres it.
    pub fn tap(&mut self, pointer: Option<Vec2>) -> Option<TapOutcome> {
        let outcome = sim::tap(&mut self.state, &self.tuning)?;
        self.presenter.tap_feedback(TapFeedback {
            pointer,
            good: outcome.good,
        });
        Some(outcome)
    }

    /// End the current run now. Ignored unless Running.
    pub fn end(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        let now = self.clock.now_ms();
        self.game_over(now);
        true
    }

    /// Run one frame against the clock's current time
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        let delta = self.frame_clock.tick(now);

        if let Some(GameEvent::Overheated) = sim::advance(&mut self.state, &self.tuning, delta) {
            log::debug!("Heat gauge full");
            self.game_over(now);
        }

        self.deliver_due(now);

        let snapshot = self.snapshot();
        self.presenter.render(&snapshot, delta.secs);
    }

    fn game_over(&mut self, now_ms: f64) {
        if !self.state.is_running() || !self.state.enter_game_over() {
            return;
        }

        let final_score = self.state.final_score();
        let is_new_record = self.best.record(final_score);
        self.new_record = is_new_record;

        self.cancel_announcement();
        let handle = self.timers.schedule(
            now_ms + GAME_OVER_ANNOUNCE_DELAY_MS,
            Announcement {
                final_score,
                is_new_record,
            },
        );
        self.announce_timer = Some(handle);

        log::info!(
            "Game over: score {}{}",
            final_score,
            if is_new_record { " (new record)" } else { "" }
        );
    }

    fn cancel_announcement(&mut self) {
        if let Some(handle) = self.announce_timer.take() {
            if self.timers.cancel(handle) {
                log::debug!("Pending game-over announcement cancelled");
            }
        }
    }

    fn deliver_due(&mut self, now_ms: f64) {
        for (handle, announcement) in self.timers.take_due(now_ms) {
            if self.announce_timer == Some(handle) {
                self.announce_timer = None;
            }
            log::debug!("Announcing result {:?}", announcement);
            self.presenter.game_over(announcement);
        }
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> Snapshot {
        let running = self.state.is_running();
        Snapshot {
            phase: self.state.phase,
            speed: self.state.speed,
            heat: self.state.heat,
            score: self.state.final_score(),
            is_good_timing: running && self.tuning.is_good_timing(self.state.good_timer),
            best_score: self.best.best(),
            new_record: self.new_record,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.state.phase
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Direct access to the simulation record (tools and tests)
    ///
    /// Callers are responsible for keeping speed and heat in range.
    pub fn state_mut(&mut self) -> &mut SimState {
        &mut self.state
    }

    pub fn best_score(&self) -> u64 {
        self.best.best()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn has_pending_announcement(&self) -> bool {
        self.announce_timer.is_some_and(|handle| self.timers.is_pending(handle))
    }

    pub fn store(&self) -> &S {
        self.best.store()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
