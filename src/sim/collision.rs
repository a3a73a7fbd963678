//! Collision detection and response for the two-paddle court
//!
//! Pure functions over ball/paddle state, called once per tick against the
//! ball's post-integration position. Wall bounces tolerate overlap (no
//! position correction), which keeps the math trivial and the overshoot
//! bounded by one frame's velocity.

use super::state::{Ball, Paddle, Side};

/// Flip vertical velocity when the ball touches the top or bottom wall.
/// Returns true if a bounce occurred.
pub fn resolve_wall_bounce(ball: &mut Ball, field_height: f32) -> bool {
    if ball.pos.y + ball.radius >= field_height || ball.pos.y - ball.radius <= 0.0 {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Vertical velocity after a paddle contact: proportional to the ball's
/// offset from paddle center, saturating at +-max_vel at the paddle edges.
/// A dead-center hit returns the ball flat.
pub fn deflection_y_vel(paddle: &Paddle, ball_y: f32, max_vel: f32) -> f32 {
    let difference_in_y = paddle.center_y() - ball_y;
    let reduction_factor = (paddle.height / 2.0) / max_vel;
    -(difference_in_y / reduction_factor)
}

/// Resolve this tick's paddle contact, if any.
///
/// The ball's horizontal direction selects the only paddle it can hit this
/// tick. On contact the horizontal velocity flips and the vertical velocity
/// is recomputed from the contact offset. At most one contact resolves per
/// tick; nothing is re-checked after the flip.
pub fn resolve_paddle_hit(ball: &mut Ball, left: &Paddle, right: &Paddle) -> Option<Side> {
    if ball.vel.x < 0.0 {
        let in_span = left.pos.y <= ball.pos.y && ball.pos.y <= left.pos.y + left.height;
        if in_span && ball.pos.x - ball.radius <= left.pos.x + left.width {
            ball.vel.x = -ball.vel.x;
            ball.vel.y = deflection_y_vel(left, ball.pos.y, ball.max_vel);
            return Some(Side::Left);
        }
    } else {
        let in_span = right.pos.y <= ball.pos.y && ball.pos.y <= right.pos.y + right.height;
        if in_span && ball.pos.x + ball.radius >= right.pos.x {
            ball.vel.x = -ball.vel.x;
            ball.vel.y = deflection_y_vel(right, ball.pos.y, ball.max_vel);
            return Some(Side::Right);
        }
    }
    None
}
