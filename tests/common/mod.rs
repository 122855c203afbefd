#![allow(dead_code)]

use wheel_dash::presenter::{Announcement, Presenter, TapFeedback};
use wheel_dash::{Game, ManualClock, MemoryStore, Snapshot};

pub const FRAME_MS: f64 = 16.0;

/// Presenter call, as recorded
#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Ready(u64),
    RunStarted,
    Tap(TapFeedback),
    GameOver(Announcement),
}

/// Presenter that remembers everything it was told
#[derive(Debug, Default)]
pub struct Recorder {
    pub shown: Vec<Shown>,
    pub last: Option<Snapshot>,
    pub frames: usize,
}

impl Recorder {
    pub fn announcements(&self) -> Vec<Announcement> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::GameOver(a) => Some(*a),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for Recorder {
    fn ready(&mut self, best_score: u64) {
        self.shown.push(Shown::Ready(best_score));
    }

    fn run_started(&mut self) {
        self.shown.push(Shown::RunStarted);
    }

    fn render(&mut self, snapshot: &Snapshot, _dt_secs: f64) {
        self.last = Some(*snapshot);
        self.frames += 1;
    }

    fn tap_feedback(&mut self, feedback: TapFeedback) {
        self.shown.push(Shown::Tap(feedback));
    }

    fn game_over(&mut self, announcement: Announcement) {
        self.shown.push(Shown::GameOver(announcement));
    }
}

pub type TestGame = Game<ManualClock, MemoryStore, Recorder>;

pub fn new_game(store: MemoryStore) -> (ManualClock, TestGame) {
    let clock = ManualClock::new(1_000.0);
    let game = Game::new(clock.clone(), store, Recorder::default());
    (clock, game)
}

/// Advance `ms` of wall time in fixed frames
pub fn run_for(clock: &ManualClock, game: &mut TestGame, ms: f64) {
    let frames = (ms / FRAME_MS).ceil() as usize;
    for _ in 0..frames {
        clock.advance(FRAME_MS);
        game.frame();
    }
}
