//! Canvas 2D renderer (WASM only)

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::hud_text;
use crate::sim::{GameState, Obstacle};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let view = state.viewport;
        ctx.clear_rect(0.0, 0.0, view.width as f64, view.height as f64);

        for tree in state.trees.iter() {
            self.draw_tree(tree)?;
        }
        self.draw_player(state)?;
        for rock in state.rocks.iter() {
            self.draw_rock(rock)?;
        }

        let (distance, record) = hud_text(state);
        ctx.set_fill_style_str("#000");
        ctx.set_font("bold 24px sans-serif");
        ctx.fill_text(&distance, 20.0, 40.0)?;
        ctx.fill_text(&record, view.width as f64 - 250.0, view.height as f64 - 20.0)?;

        if state.is_game_over() {
            ctx.set_fill_style_str("#d32f2f");
            ctx.set_font("bold 48px sans-serif");
            ctx.fill_text(
                "Game Over!",
                view.width as f64 / 2.0 - 120.0,
                view.height as f64 / 2.0,
            )?;
        }
        Ok(())
    }

    fn draw_player(&self, state: &GameState) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let p = &state.player;
        let (x, y) = (p.pos.x as f64, p.pos.y as f64);
        let (w, h) = (p.size.x as f64, p.size.y as f64);

        ctx.save();
        ctx.translate(x + w / 2.0, y + h / 2.0)?;
        ctx.rotate(p.rotation(&state.tuning) as f64)?;
        ctx.translate(-(x + w / 2.0), -(y + h / 2.0))?;

        // Head
        ctx.set_fill_style_str("#ffdbac");
        ctx.begin_path();
        ctx.arc(x + w / 2.0, y - 15.0, 8.0, 0.0, TAU)?;
        ctx.fill();
        // Body
        ctx.set_fill_style_str("#1976d2");
        ctx.fill_rect(x, y, w, 30.0);
        // Skis
        ctx.set_fill_style_str("#ff6b35");
        ctx.fill_rect(x - 5.0, y + 30.0, 20.0, 4.0);
        ctx.fill_rect(x + w - 15.0, y + 30.0, 20.0, 4.0);

        if let Some(label) = p.action_label() {
            ctx.set_fill_style_str(if p.action.is_flipping() { "#ffeb3b" } else { "#4caf50" });
            ctx.set_font("bold 16px sans-serif");
            ctx.fill_text(label, x, y - 40.0)?;
        }
        ctx.restore();
        Ok(())
    }

    fn draw_rock(&self, rock: &Obstacle) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let r = rock.size.x as f64 / 2.0;
        ctx.set_fill_style_str("#424242");
        ctx.begin_path();
        ctx.arc(rock.pos.x as f64 + r, rock.pos.y as f64 + r, r, 0.0, TAU)?;
        ctx.fill();
        Ok(())
    }

    fn draw_tree(&self, tree: &Obstacle) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let (w, h) = (tree.size.x as f64, tree.size.y as f64);
        let cx = tree.pos.x as f64 + w / 2.0;
        let top = tree.pos.y as f64;

        // Trunk
        ctx.set_fill_style_str("#4a2c1f");
        ctx.fill_rect(cx - 6.0, top + h * 0.5, 12.0, h * 0.5);
        // Crown
        ctx.set_fill_style_str("#1b5e20");
        ctx.begin_path();
        ctx.move_to(cx, top);
        ctx.line_to(cx - w * 0.5, top + h * 0.8);
        ctx.line_to(cx + w * 0.5, top + h * 0.8);
        ctx.close_path();
        ctx.fill();
        Ok(())
    }
}
