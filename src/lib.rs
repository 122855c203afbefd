//! Wheel Dash - a one-button hamster wheel arcade toy
//!
//! Tap to spin the wheel, tap inside the timing window for a bigger boost,
//! and keep the speed under the overheat line.
//!
//! Core modules:
//! - `sim`: Simulation state, per-frame step, tap handling
//! - `game`: Game loop and lifecycle state machine
//! - `clock`: Frame timing
//! - `schedule`: Cancellable deferred tasks
//! - `persistence`: Best-score storage
//! - `presenter`: Output boundary
//! - `view`: Visual derivations for presenters
//! - `platform`: Browser clock and storage
//! - `tuning`: Game balance

pub mod clock;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod presenter;
pub mod schedule;
pub mod sim;
pub mod tuning;
pub mod view;

pub use clock::{Clock, FrameClock, FrameDelta, ManualClock};
pub use game::Game;
pub use persistence::{BestScore, KeyValueStore, MemoryStore, StorageError};
pub use presenter::{Announcement, NullPresenter, Presenter, TapFeedback};
pub use sim::{LifecyclePhase, SimState, Snapshot};
pub use tuning::Tuning;
