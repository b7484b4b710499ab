//! Fixed-order simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::collides;
use super::events::{GameEvent, process_tile_events};
use super::state::GameState;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Jump pressed this tick (edge, not held)
    pub jump: bool,
}

/// Advance the game state by one timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    if state.is_frozen() {
        // Run over: no movement, collision or tile events
        state.body.clear_intent();
    } else {
        move_body(state, input, dt);

        process_tile_events(
            &mut state.grid,
            &state.zones,
            &state.body,
            &mut state.progress,
            &state.tuning.rules,
            &mut state.events,
        );

        if let Some(outcome) = state.progress.outcome() {
            log::info!(
                "{} at tick {} (score {}, health {})",
                outcome.banner(),
                state.time_ticks,
                state.progress.score(),
                state.progress.health()
            );
            state.events.push(GameEvent::Finished(outcome));
        }
    }

    let map_size = state.map_size();
    state
        .camera
        .update(state.body.center(), state.body.intent_dx(), map_size, dt);
}

/// Integrate the body, then commit X and Y candidates in that order
fn move_body(state: &mut GameState, input: &TickInput, dt: f32) {
    let physics = state.tuning.physics;
    let body = &mut state.body;

    body.propose_x(input.left, input.right, physics.move_speed, dt);
    if input.jump {
        body.try_jump(physics.jump_velocity);
    }
    body.integrate(&physics, dt);

    let size = body.size;
    let candidate = body.candidate();

    if !collides(&state.grid, candidate.x, body.pos().y, size.x, size.y) {
        body.commit_x();
    }

    // Uses the X just committed (or kept)
    if !collides(&state.grid, body.pos().x, candidate.y, size.x, size.y) {
        body.commit_y();
    } else {
        let was_airborne = body.airborne;
        body.block_y();
        if was_airborne && !body.airborne {
            log::debug!("Landed at ({:.2}, {:.2})", body.pos().x, body.pos().y);
        }
    }
}
