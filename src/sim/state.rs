//! Game state and core simulation types
//!
//! Everything one run of the game mutates is owned by [`GameState`]. Several
//! independent states can exist side by side; each carries its own RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleStream;
use super::player::Player;
use crate::records::{BestDistance, RecordStore};
use crate::tuning::Tuning;

/// Visible play area in pixels, supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Crashed at wall-clock time `since_ms`; restarts automatically
    GameOver { since_ms: f64 },
}

/// Things that happened during a tick, for sound and HUD hooks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Flipped,
    Crashed { distance: f64 },
    NewRecord { best: u64 },
    Restarted,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub player: Player,
    pub rocks: ObstacleStream,
    pub trees: ObstacleStream,
    /// Distance of the current run (meters)
    pub distance: f64,
    pub record: BestDistance,
    pub phase: GamePhase,
    /// Ticks since the run started; drives spawning
    pub time_ticks: u64,
    /// Time of the previous jump press, for double-tap detection
    pub last_jump_ms: Option<f64>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self::with_tuning(seed, viewport, Tuning::default())
    }

    pub fn with_tuning(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        Self {
            player: Player::new(viewport, &tuning),
            tuning,
            viewport,
            rocks: ObstacleStream::new(),
            trees: ObstacleStream::new(),
            distance: 0.0,
            record: BestDistance::default(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            last_jump_ms: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed the best distance from persistent storage
    pub fn load_record(&mut self, store: &dyn RecordStore) {
        self.record = BestDistance::load(store);
    }

    pub fn best_distance(&self) -> u64 {
        self.record.best()
    }

    /// Host window changed size; takes effect on the next tick
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// Start a fresh run. The best distance and RNG carry over.
    pub fn reset(&mut self) {
        self.player = Player::new(self.viewport, &self.tuning);
        self.rocks.clear();
        self.trees.clear();
        self.distance = 0.0;
        self.time_ticks = 0;
        self.last_jump_ms = None;
        self.phase = GamePhase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::MemoryStore;

    #[test]
    fn test_new_state() {
        let state = GameState::new(1, Viewport::new(800.0, 600.0));
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.rocks.is_empty() && state.trees.is_empty());
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.best_distance(), 0);
        assert_eq!(state.last_jump_ms, None);
    }

    #[test]
    fn test_load_record() {
        let mut state = GameState::new(1, Viewport::new(800.0, 600.0));
        state.load_record(&MemoryStore::with_value(321));
        assert_eq!(state.best_distance(), 321);
    }

    #[test]
    fn test_reset_uses_current_viewport() {
        let mut state = GameState::new(1, Viewport::new(800.0, 600.0));
        state.resize(400.0, 300.0);
        state.distance = 12.0;
        state.time_ticks = 99;
        state.last_jump_ms = Some(5.0);
        state.phase = GamePhase::GameOver { since_ms: 1.0 };
        state.reset();

        assert_eq!(state.player.pos.x, 200.0);
        assert_eq!(state.player.pos.y, 200.0);
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.last_jump_ms, None);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
