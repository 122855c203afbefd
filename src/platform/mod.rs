//! Platform abstraction layer
//!
//! Browser implementations of the library seams:
//! - Time: `performance.now()` behind `Clock`
//! - Storage: LocalStorage behind `KeyValueStore`
//!
//! Native builds use `ManualClock` and `MemoryStore` instead.

#[cfg(target_arch = "wasm32")]
pub mod web;
