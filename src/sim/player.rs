//! Skier kinematics
//!
//! Fixed per-tick increments, no integration. Vertical motion only happens
//! during a jump or a flip; forward speed always pushes the skier downhill.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{GameEvent, Viewport};
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Vertical action in progress. `ticks` counts ticks since the action began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAction {
    #[default]
    Grounded,
    Jumping { ticks: u32 },
    Flipping { ticks: u32 },
}

impl VerticalAction {
    pub fn is_grounded(&self) -> bool {
        matches!(self, VerticalAction::Grounded)
    }

    pub fn is_flipping(&self) -> bool {
        matches!(self, VerticalAction::Flipping { .. })
    }
}

/// The player's skier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Per-tick displacement from steering and actions (forward speed excluded)
    pub vel: Vec2,
    /// Forward (downhill) speed, kept within [0, max_speed]
    pub speed: f32,
    pub action: VerticalAction,
}

impl Player {
    /// Fresh skier at the spawn point for this viewport
    pub fn new(viewport: Viewport, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                viewport.width / 2.0,
                viewport.height - tuning.player_start_offset,
            ),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vel: Vec2::ZERO,
            speed: tuning.start_speed,
            action: VerticalAction::Grounded,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Lean in the steering direction, upright otherwise
    pub fn rotation(&self, tuning: &Tuning) -> f32 {
        if self.vel.x < 0.0 {
            -tuning.steer_tilt
        } else if self.vel.x > 0.0 {
            tuning.steer_tilt
        } else {
            0.0
        }
    }

    /// On-screen label for the current action
    pub fn action_label(&self) -> Option<&'static str> {
        match self.action {
            VerticalAction::Grounded => None,
            VerticalAction::Jumping { .. } => Some("Jump!"),
            VerticalAction::Flipping { .. } => Some("Flip!"),
        }
    }

    /// Handle a jump press at `now_ms`.
    ///
    /// A press within the double-tap window of the previous press starts a
    /// flip (cutting a jump short); any other press starts a jump from the
    /// ground. `last_jump_ms` is updated on every press.
    pub fn press_jump(
        &mut self,
        now_ms: f64,
        last_jump_ms: &mut Option<f64>,
        tuning: &Tuning,
    ) -> Option<GameEvent> {
        let double_tap = last_jump_ms.is_some_and(|last| now_ms - last < tuning.double_tap_ms);
        *last_jump_ms = Some(now_ms);

        if double_tap && !self.action.is_flipping() {
            self.action = VerticalAction::Flipping { ticks: 0 };
            log::debug!("Flip at {now_ms:.0} ms");
            Some(GameEvent::Flipped)
        } else if self.action.is_grounded() {
            self.action = VerticalAction::Jumping { ticks: 0 };
            log::debug!("Jump at {now_ms:.0} ms");
            Some(GameEvent::Jumped)
        } else {
            None
        }
    }

    /// Advance one tick
    pub fn advance(
        &mut self,
        input: &TickInput,
        now_ms: f64,
        last_jump_ms: &mut Option<f64>,
        viewport: Viewport,
        tuning: &Tuning,
    ) -> Option<GameEvent> {
        // Steering: binary response, left wins
        self.vel.x = if input.left {
            -tuning.steer_speed
        } else if input.right {
            tuning.steer_speed
        } else {
            0.0
        };

        if input.speed_up {
            self.speed = (self.speed + tuning.speed_up_step).min(tuning.max_speed);
        }
        if input.speed_down {
            self.speed = (self.speed - tuning.speed_down_step).max(0.0);
        }

        let event = if input.jump {
            self.press_jump(now_ms, last_jump_ms, tuning)
        } else {
            None
        };

        self.vel.y = match &mut self.action {
            VerticalAction::Grounded => 0.0,
            VerticalAction::Jumping { ticks } => {
                *ticks += 1;
                -tuning.jump_lift
            }
            VerticalAction::Flipping { ticks } => {
                *ticks += 1;
                -tuning.flip_lift
            }
        };

        self.pos.x += self.vel.x;
        self.pos.y += self.vel.y + self.speed;

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.x + self.size.x > viewport.width {
            self.pos.x = viewport.width - self.size.x;
        }
        if self.pos.y > viewport.height - self.size.y {
            self.pos.y = viewport.height - self.size.y;
        }

        // Expire after the lift of the final tick has been applied
        let expired = match self.action {
            VerticalAction::Grounded => false,
            VerticalAction::Jumping { ticks } => ticks >= tuning.jump_ticks,
            VerticalAction::Flipping { ticks } => ticks >= tuning.flip_ticks,
        };
        if expired {
            self.action = VerticalAction::Grounded;
            self.vel.y = 0.0;
        }

        event
    }
}
