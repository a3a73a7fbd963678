//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, input-polling or platform dependencies
//!
//! Each `GameState` exclusively owns its ball, paddles and counters, so any
//! number of matches can run side by side (one per training pairing) with
//! no synchronization.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{deflection_y_vel, resolve_paddle_hit, resolve_wall_bounce};
pub use state::{Ball, GameInfo, GameState, MoveDirection, Paddle, Side};
pub use tick::{Action, TickInput, advance, tick};
