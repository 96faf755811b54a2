//! Data-driven game balance
//!
//! Every gameplay constant lives here. `Tuning::default()` is the shipped
//! balance; hosts may load a partial JSON document on top of it.

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Half-open range `[min, max)` sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Distance of the spawn point above the bottom edge
    pub player_start_offset: f32,
    /// Horizontal speed while steering (pixels/tick)
    pub steer_speed: f32,
    /// Visual tilt while steering (radians)
    pub steer_tilt: f32,
    pub start_speed: f32,
    pub max_speed: f32,
    pub speed_up_step: f32,
    pub speed_down_step: f32,

    // === Vertical actions ===
    pub jump_lift: f32,
    pub jump_ticks: u32,
    pub flip_lift: f32,
    pub flip_ticks: u32,
    /// Two jump presses closer than this trigger a flip
    pub double_tap_ms: f64,

    // === Obstacles ===
    pub rock_size: Span,
    pub obstacle_speed: Span,
    pub tree_width: f32,
    pub tree_height: f32,
    /// Left lane x position
    pub tree_left_x: f32,
    /// Right lane distance from the right edge
    pub tree_right_inset: f32,
    /// Share of player speed added to obstacle descent
    pub parallax: f32,
    pub rock_every_ticks: u64,
    pub tree_every_ticks: u64,

    // === Scoring / flow ===
    pub distance_per_tick: f64,
    pub restart_delay_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_width: 40.0,
            player_height: 60.0,
            player_start_offset: 100.0,
            steer_speed: 6.0,
            steer_tilt: std::f32::consts::PI / 10.0,
            start_speed: 4.0,
            max_speed: 10.0,
            speed_up_step: 0.1,
            speed_down_step: 0.2,

            jump_lift: 12.0,
            jump_ticks: 15,
            flip_lift: 16.0,
            flip_ticks: 25,
            double_tap_ms: 300.0,

            rock_size: Span::new(40.0, 60.0),
            obstacle_speed: Span::new(3.0, 5.0),
            tree_width: 50.0,
            tree_height: 80.0,
            tree_left_x: 15.0,
            tree_right_inset: 45.0,
            parallax: 0.5,
            rock_every_ticks: 40,
            tree_every_ticks: 60,

            distance_per_tick: 0.05,
            restart_delay_ms: 2000.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f64) -> Result<(), TuningError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(TuningError::OutOfRange {
                    field,
                    reason: format!("{value} must be positive"),
                })
            }
        }
        fn non_negative(field: &'static str, value: f64) -> Result<(), TuningError> {
            if value >= 0.0 {
                Ok(())
            } else {
                Err(TuningError::OutOfRange {
                    field,
                    reason: format!("{value} cannot be negative"),
                })
            }
        }
        fn span(field: &'static str, s: Span) -> Result<(), TuningError> {
            if s.min > 0.0 && s.min < s.max {
                Ok(())
            } else {
                Err(TuningError::OutOfRange {
                    field,
                    reason: format!("need 0 < min < max, got [{}, {})", s.min, s.max),
                })
            }
        }

        positive("player_width", self.player_width as f64)?;
        positive("player_height", self.player_height as f64)?;
        positive("max_speed", self.max_speed as f64)?;
        positive("jump_ticks", self.jump_ticks as f64)?;
        positive("flip_ticks", self.flip_ticks as f64)?;
        positive("rock_every_ticks", self.rock_every_ticks as f64)?;
        positive("tree_every_ticks", self.tree_every_ticks as f64)?;
        positive("tree_width", self.tree_width as f64)?;
        positive("tree_height", self.tree_height as f64)?;
        span("rock_size", self.rock_size)?;
        span("obstacle_speed", self.obstacle_speed)?;
        if !(0.0..=self.max_speed).contains(&self.start_speed) {
            return Err(TuningError::OutOfRange {
                field: "start_speed",
                reason: format!("{} outside [0, {}]", self.start_speed, self.max_speed),
            });
        }
        non_negative("double_tap_ms", self.double_tap_ms)?;
        non_negative("restart_delay_ms", self.restart_delay_ms)?;
        Ok(())
    }
}
