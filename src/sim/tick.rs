//! Per-tick simulation advance and the discrete control adapter
//!
//! One `tick` call advances the match by exactly one fixed timestep,
//! regardless of wall-clock time. Frame pacing and event polling belong to
//! the external harness.

use serde::{Deserialize, Serialize};

use super::collision::{resolve_paddle_hit, resolve_wall_bounce};
use super::state::{GameInfo, GameState, MoveDirection, Side};

/// Discrete per-paddle action, shared by human and agent drivers.
///
/// Keyboard polling and controller arg-max both reduce to this enum, so
/// driver identity never reaches the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Action {
    #[default]
    Stay,
    MoveUp,
    MoveDown,
}

/// Both sides' actions for a single tick (deterministic input)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: Action,
    pub right: Action,
}

impl GameState {
    /// Map a discrete action to zero or one paddle-move request.
    ///
    /// `Stay` issues no request and returns true; the move actions return
    /// `move_paddle`'s accept/reject result.
    pub fn apply_action(&mut self, side: Side, action: Action) -> bool {
        match action {
            Action::Stay => true,
            Action::MoveUp => self.move_paddle(side, MoveDirection::Up),
            Action::MoveDown => self.move_paddle(side, MoveDirection::Down),
        }
    }
}

/// Advance the match by one fixed timestep.
///
/// Applies both sides' actions (left first), integrates the ball, bounces
/// off the horizontal walls, resolves at most one paddle contact, then
/// checks scoring. Returns the post-tick counter snapshot.
pub fn tick(state: &mut GameState, input: &TickInput) -> GameInfo {
    state.apply_action(Side::Left, input.left);
    state.apply_action(Side::Right, input.right);
    advance(state)
}

/// Advance one tick without paddle input, for callers that issue
/// `move_paddle` requests directly before stepping.
pub fn advance(state: &mut GameState) -> GameInfo {
    state.ball.advance(state.config.dt);

    resolve_wall_bounce(&mut state.ball, state.config.field_height);
    match resolve_paddle_hit(&mut state.ball, &state.left_paddle, &state.right_paddle) {
        Some(Side::Left) => state.left_hits += 1,
        Some(Side::Right) => state.right_hits += 1,
        None => {}
    }

    // Out of bounds: the side the ball exited past concedes the point and
    // the ball recenters for the next serve
    if state.ball.pos.x < 0.0 {
        state.ball.reset(&mut state.rng);
        state.right_score += 1;
        log::debug!("Right scores: {}-{}", state.left_score, state.right_score);
    } else if state.ball.pos.x > state.config.field_width {
        state.ball.reset(&mut state.rng);
        state.left_score += 1;
        log::debug!("Left scores: {}-{}", state.left_score, state.right_score);
    }

    state.snapshot()
}
