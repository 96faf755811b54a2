//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame increments only
//! - Seeded RNG only
//! - Wall-clock time only through the injected `Clock`
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Rect, check};
pub use obstacle::{Obstacle, ObstacleKind, ObstacleStream, spawn_rock, spawn_tree};
pub use player::{Player, VerticalAction};
pub use state::{GameEvent, GamePhase, GameState, Viewport};
pub use tick::{TickInput, tick};
