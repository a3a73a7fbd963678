//! Evo Pong - a deterministic two-paddle Pong core for training AI players
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Construction-time numeric configuration
//!
//! Rendering, input polling, frame pacing and the evolutionary trainer are
//! external: they drive the core through `Action` / `move_paddle` and read
//! back `GameInfo` snapshots and entity positions each tick.

pub mod config;
pub mod sim;

pub use config::GameConfig;
pub use sim::{
    Action, Ball, GameInfo, GameState, MoveDirection, Paddle, Side, TickInput, advance, tick,
};

/// Game configuration constants (defaults match `GameConfig::default()`)
pub mod consts {
    /// Fixed simulation timestep (one frame-unit per tick)
    pub const SIM_DT: f32 = 1.0;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 700.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle defaults - paddles sit just inside the left/right edges
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_VEL: f32 = 4.0;
    /// Horizontal gap between a paddle and its field edge
    pub const PADDLE_INSET: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    /// Maximum ball speed along either axis; also the launch speed
    pub const BALL_MAX_VEL: f32 = 5.0;

    /// Launch angle envelope, integer degrees in [-LAUNCH_ANGLE_DEG, LAUNCH_ANGLE_DEG)
    pub const LAUNCH_ANGLE_DEG: i32 = 30;
}
