//! Fixed timestep simulation tick
//!
//! Order matters: reap, then paddle, then ball. The paddle therefore reacts
//! to where the ball was last tick, and the ball collides against blocks that
//! were killed last tick but are already gone.

use super::state::{BallHits, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> BallHits {
    state.time_ticks += 1;

    state.blocks.update();
    state.paddle.update(&state.ball, input, state.viewport);
    let hits = state
        .ball
        .update(&mut state.blocks, &state.paddle, state.viewport);

    log::trace!(
        "tick {}: ball ({:.2}, {:.2}) vel ({}, {}) hits {:?}",
        state.time_ticks,
        state.ball.body.left(),
        state.ball.body.top(),
        state.ball.vel.x,
        state.ball.vel.y,
        hits
    );

    hits
}
