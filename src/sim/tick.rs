//! Per-frame simulation tick
//!
//! Core game loop step. Motion is frame-coupled: every tick applies the same
//! fixed increments regardless of how much real time passed. Only the
//! double-tap window and the restart delay read the wall clock.

use super::collision;
use super::obstacle::{spawn_rock, spawn_tree};
use super::state::{GameEvent, GamePhase, GameState};
use crate::clock::Clock;
use crate::records::RecordStore;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Increase forward speed
    pub speed_up: bool,
    /// Decrease forward speed
    pub speed_down: bool,
    /// Jump pressed since the previous tick (edge, not held)
    pub jump: bool,
}

/// Advance the game by one frame
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    clock: &dyn Clock,
    store: &mut dyn RecordStore,
) -> Vec<GameEvent> {
    let now_ms = clock.now_ms();
    let mut events = Vec::new();

    if let GamePhase::GameOver { since_ms } = state.phase {
        if now_ms - since_ms >= state.tuning.restart_delay_ms {
            state.reset();
            log::info!("Restarting run");
            events.push(GameEvent::Restarted);
        }
        return events;
    }

    let viewport = state.viewport;
    events.extend(state.player.advance(
        input,
        now_ms,
        &mut state.last_jump_ms,
        viewport,
        &state.tuning,
    ));

    let speed = state.player.speed;
    for stream in [&mut state.rocks, &mut state.trees] {
        stream.advance(speed, state.tuning.parallax);
        stream.cull(viewport.height);
    }

    if collision::check(&state.player, &state.rocks, &state.trees) {
        let distance = state.distance;
        log::info!("Crashed after {distance:.2} m");
        events.push(GameEvent::Crashed { distance });
        if let Some(best) = state.record.submit(distance, store) {
            log::info!("New best distance: {best} m");
            events.push(GameEvent::NewRecord { best });
        }
        state.phase = GamePhase::GameOver { since_ms: now_ms };
        return events;
    }

    state.distance += state.tuning.distance_per_tick;
    state.time_ticks += 1;

    if state.time_ticks.is_multiple_of(state.tuning.rock_every_ticks) {
        let rock = spawn_rock(&mut state.rng, viewport, &state.tuning);
        log::debug!("Rock d={:.1} at x={:.1}", rock.size.x, rock.pos.x);
        state.rocks.push(rock);
    }
    if state.time_ticks.is_multiple_of(state.tuning.tree_every_ticks) {
        let tree = spawn_tree(&mut state.rng, viewport, &state.tuning);
        log::debug!("Tree at x={:.1}", tree.pos.x);
        state.trees.push(tree);
    }

    events
}
