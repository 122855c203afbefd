//! Simulation module
//!
//! All gameplay rules live here. This module must stay pure:
//! - Time only arrives as a `FrameDelta`
//! - No persistence, scheduling, or presentation
//! - One owned `SimState`, no globals

pub mod autoplay;
pub mod input;
pub mod state;
pub mod tick;

pub use input::{TapOutcome, tap};
pub use state::{GameEvent, LifecyclePhase, SimState, Snapshot};
pub use tick::advance;
