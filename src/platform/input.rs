//! Host input aggregation
//!
//! Keyboard and on-screen touch buttons both feed one [`InputState`]. Held
//! keys are level-triggered; the jump key is an edge that is consumed by the
//! next tick.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Key codes the game reacts to (`KeyboardEvent.code` names)
pub const KEY_LEFT: &str = "ArrowLeft";
pub const KEY_RIGHT: &str = "ArrowRight";
pub const KEY_UP: &str = "ArrowUp";
pub const KEY_DOWN: &str = "ArrowDown";
pub const KEY_JUMP: &str = "Space";

/// On-screen steering buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Left,
    Right,
}

#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<String>,
    touch_left: bool,
    touch_right: bool,
    jump_pending: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the key was not already held
    pub fn key_down(&mut self, code: &str) -> bool {
        let newly = self.held.insert(code.to_string());
        // Auto-repeat keydowns do not count as new presses
        if code == KEY_JUMP && newly {
            self.jump_pending = true;
        }
        newly
    }

    pub fn key_up(&mut self, code: &str) {
        self.held.remove(code);
    }

    pub fn touch(&mut self, button: TouchButton, pressed: bool) {
        match button {
            TouchButton::Left => self.touch_left = pressed,
            TouchButton::Right => self.touch_right = pressed,
        }
    }

    /// Release everything (window lost focus)
    pub fn clear(&mut self) {
        self.held.clear();
        self.touch_left = false;
        self.touch_right = false;
        self.jump_pending = false;
    }

    fn is_held(&self, code: &str) -> bool {
        self.held.contains(code)
    }

    /// Snapshot for the next tick; consumes the pending jump
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            left: self.is_held(KEY_LEFT) || self.touch_left,
            right: self.is_held(KEY_RIGHT) || self.touch_right,
            speed_up: self.is_held(KEY_UP),
            speed_down: self.is_held(KEY_DOWN),
            jump: self.jump_pending,
        };
        self.jump_pending = false;
        input
    }
}
