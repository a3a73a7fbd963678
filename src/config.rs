//! Construction-time game configuration
//!
//! Every physical constant of the simulation lives here, fixed for the
//! lifetime of a `GameState`. The defaults reproduce the classic 700x500
//! field. JSON helpers exist so an external harness can ship tuned
//! configurations alongside trained controllers.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fixed numeric configuration for one simulation instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Field width in world units
    pub field_width: f32,
    /// Field height in world units
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle displacement per accepted move
    pub paddle_vel: f32,
    /// Horizontal gap between each paddle and its field edge
    pub paddle_inset: f32,
    pub ball_radius: f32,
    /// Ball launch speed and per-axis speed cap
    pub ball_max_vel: f32,
    /// Fixed timestep per tick (1.0 = one frame-unit, the classic behavior)
    pub dt: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_vel: PADDLE_VEL,
            paddle_inset: PADDLE_INSET,
            ball_radius: BALL_RADIUS,
            ball_max_vel: BALL_MAX_VEL,
            dt: SIM_DT,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON, falling back to defaults for
    /// missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
