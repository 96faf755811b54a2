//! Slope Skier - A downhill obstacle-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, obstacles, collisions, game state)
//! - `clock`: Wall-clock capability used by the simulation timers
//! - `records`: Best-distance tracking and the record store interface
//! - `tuning`: Data-driven game balance
//! - `platform`: Browser/native input and storage glue
//! - `renderer`: Canvas presentation

pub mod clock;
pub mod error;
pub mod platform;
pub mod records;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use clock::{Clock, ManualClock};
pub use error::{StoreError, TuningError};
pub use records::{BestDistance, MemoryStore, RecordStore};
pub use tuning::Tuning;

/// Host configuration constants
pub mod consts {
    /// Frame interval the headless host simulates (60 Hz display)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Viewport used when the host cannot measure one
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;

    /// Environment variable naming a tuning JSON file (native only)
    pub const TUNING_ENV_VAR: &str = "SKI_TUNING";
}
