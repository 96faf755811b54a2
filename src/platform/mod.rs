//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keyboard + touch buttons)
//! - Storage (LocalStorage on web)
//!
//! Time lives in [`crate::clock`] since the simulation reads it directly.

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod storage;

pub use input::{InputState, TouchButton};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorageStore;
