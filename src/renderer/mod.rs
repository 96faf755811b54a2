//! Presentation
//!
//! Reads the simulation state and draws it. Nothing here feeds back into
//! the simulation.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::GameState;

/// HUD lines shown over the slope
pub fn hud_text(state: &GameState) -> (String, String) {
    (
        format!("Distance: {} m", state.distance.floor() as u64),
        format!("Record: {} m", state.best_distance()),
    )
}
