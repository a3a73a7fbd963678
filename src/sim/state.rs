//! Game state and core simulation types
//!
//! All state the simulation owns lives here: the ball, both paddles, the
//! score/hit counters and the seeded RNG. Everything is held by value so
//! independent `GameState` instances can run in parallel with no sharing.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::LAUNCH_ANGLE_DEG;

/// Which paddle a request refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Vertical movement direction for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Up,
    Down,
}

/// A player paddle
///
/// Pure kinematic object: `shift` moves unconditionally, bounds enforcement
/// is `GameState::move_paddle`'s job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    /// Construction-time position, restored by `reset`
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
    /// Displacement per accepted move
    pub vel: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(x, y),
            origin: Vec2::new(x, y),
            width: config.paddle_width,
            height: config.paddle_height,
            vel: config.paddle_vel,
        }
    }

    /// Move one step up or down. No bounds checking here.
    pub fn shift(&mut self, dir: MoveDirection, dt: f32) {
        match dir {
            MoveDirection::Up => self.pos.y -= self.vel * dt,
            MoveDirection::Down => self.pos.y += self.vel * dt,
        }
    }

    /// Restore the construction-time position
    pub fn reset(&mut self) {
        self.pos = self.origin;
    }

    /// Vertical center of the paddle face
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Field center, restored by `reset`
    pub origin: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Launch speed and per-axis speed cap
    pub max_vel: f32,
}

impl Ball {
    /// Create a centered ball with a random launch direction (either side)
    pub fn new(x: f32, y: f32, config: &GameConfig, rng: &mut Pcg32) -> Self {
        let angle = random_launch_angle(rng);
        let sign = if rng.random::<f32>() < 0.5 { 1.0 } else { -1.0 };
        let max_vel = config.ball_max_vel;
        Self {
            pos: Vec2::new(x, y),
            origin: Vec2::new(x, y),
            vel: Vec2::new(sign * (angle.cos() * max_vel).abs(), angle.sin() * max_vel),
            radius: config.ball_radius,
            max_vel,
        }
    }

    /// Integrate position over one fixed timestep
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Recenter with a fresh random angle.
    ///
    /// Always relaunches leftward, matching the classic behavior where the
    /// serve direction does not depend on who scored.
    pub fn reset(&mut self, rng: &mut Pcg32) {
        self.pos = self.origin;
        let angle = random_launch_angle(rng);
        self.vel = Vec2::new(
            -(angle.cos() * self.max_vel).abs(),
            angle.sin() * self.max_vel,
        );
    }
}

/// Draw a launch angle in radians from the integer-degree range
/// [-LAUNCH_ANGLE_DEG, LAUNCH_ANGLE_DEG), resampling until nonzero so the
/// ball is never perfectly horizontal.
fn random_launch_angle(rng: &mut Pcg32) -> f32 {
    let mut deg = 0;
    while deg == 0 {
        deg = rng.random_range(-LAUNCH_ANGLE_DEG..LAUNCH_ANGLE_DEG);
    }
    (deg as f32).to_radians()
}

/// Immutable per-tick snapshot of the match counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameInfo {
    pub left_hits: u32,
    pub right_hits: u32,
    pub left_score: u32,
    pub right_score: u32,
}

impl GameInfo {
    /// Combined paddle hits, the rally length so far
    pub fn total_hits(&self) -> u32 {
        self.left_hits + self.right_hits
    }
}

/// One complete match: ball, paddles, counters and seeded RNG
///
/// Deterministic: two instances built with equal config and seed evolve
/// identically under identical inputs.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub left_score: u32,
    pub right_score: u32,
    pub left_hits: u32,
    pub right_hits: u32,
    /// Seed this match was built with, for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new match: paddles inset from the left/right edges and
    /// vertically centered, ball at field center with a random launch.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let paddle_y = config.field_height / 2.0 - config.paddle_height / 2.0;
        let left_paddle = Paddle::new(config.paddle_inset, paddle_y, &config);
        let right_paddle = Paddle::new(
            config.field_width - config.paddle_inset - config.paddle_width,
            paddle_y,
            &config,
        );

        let ball = Ball::new(
            config.field_width / 2.0,
            config.field_height / 2.0,
            &config,
            &mut rng,
        );

        Self {
            config,
            ball,
            left_paddle,
            right_paddle,
            left_score: 0,
            right_score: 0,
            left_hits: 0,
            right_hits: 0,
            seed,
            rng,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    /// Request a paddle move. Returns true iff the move was applied; moves
    /// that would push the paddle past the top or bottom edge are rejected
    /// with no mutation. This is the sole bounds-enforcement point.
    pub fn move_paddle(&mut self, side: Side, dir: MoveDirection) -> bool {
        let step = self.config.paddle_vel * self.config.dt;
        let field_height = self.config.field_height;
        let paddle = match side {
            Side::Left => &mut self.left_paddle,
            Side::Right => &mut self.right_paddle,
        };

        match dir {
            MoveDirection::Up => {
                if paddle.pos.y - step < 0.0 {
                    return false;
                }
            }
            MoveDirection::Down => {
                if paddle.pos.y + step + paddle.height > field_height {
                    return false;
                }
            }
        }

        paddle.shift(dir, self.config.dt);
        true
    }

    /// Observation triple for the given side's controller:
    /// `(paddle.y, ball.y, |paddle.x - ball.x|)`.
    ///
    /// Both human and agent drivers must see the same vector, so it is
    /// built here rather than in each driver.
    pub fn observation(&self, side: Side) -> [f32; 3] {
        let paddle = self.paddle(side);
        [
            paddle.pos.y,
            self.ball.pos.y,
            (paddle.pos.x - self.ball.pos.x).abs(),
        ]
    }

    /// Snapshot the match counters
    pub fn snapshot(&self) -> GameInfo {
        GameInfo {
            left_hits: self.left_hits,
            right_hits: self.right_hits,
            left_score: self.left_score,
            right_score: self.right_score,
        }
    }

    /// Full reset between episodes: ball and paddles back to their origins,
    /// all counters zeroed.
    pub fn reset(&mut self) {
        self.ball.reset(&mut self.rng);
        self.left_paddle.reset();
        self.right_paddle.reset();
        self.left_score = 0;
        self.right_score = 0;
        self.left_hits = 0;
        self.right_hits = 0;
        log::debug!("Match reset (seed {})", self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rng(seed: u64) -> Pcg32 {
        Pcg32::seed_from_u64(seed)
    }

    #[test]
    fn test_paddle_shift_and_reset() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(10.0, 200.0, &config);

        paddle.shift(MoveDirection::Up, 1.0);
        assert_eq!(paddle.pos.y, 196.0);
        paddle.shift(MoveDirection::Down, 1.0);
        paddle.shift(MoveDirection::Down, 1.0);
        assert_eq!(paddle.pos.y, 204.0);
        assert_eq!(paddle.pos.x, 10.0);

        paddle.reset();
        assert_eq!(paddle.pos, Vec2::new(10.0, 200.0));
    }

    #[test]
    fn test_ball_launch_never_horizontal() {
        // 10k draws across many seeds: y_vel is never exactly zero
        let config = GameConfig::default();
        for seed in 0..10_000u64 {
            let ball = Ball::new(350.0, 250.0, &config, &mut rng(seed));
            assert_ne!(ball.vel.y, 0.0, "horizontal launch at seed {seed}");
        }
    }

    #[test]
    fn test_ball_reset_always_launches_left() {
        // Serve direction after a point is leftward no matter who scored
        let config = GameConfig::default();
        for seed in 0..100u64 {
            let mut r = rng(seed);
            let mut ball = Ball::new(350.0, 250.0, &config, &mut r);
            ball.pos = Vec2::new(-20.0, 100.0);
            ball.reset(&mut r);
            assert_eq!(ball.pos, Vec2::new(350.0, 250.0));
            assert!(ball.vel.x < 0.0, "rightward relaunch at seed {seed}");
            assert_ne!(ball.vel.y, 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_state() {
        let a = GameState::new(GameConfig::default(), 42);
        let b = GameState::new(GameConfig::default(), 42);
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.left_paddle, b.left_paddle);
        assert_eq!(a.right_paddle, b.right_paddle);
    }

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(GameConfig::default(), 7);
        assert_eq!(state.left_paddle.pos, Vec2::new(10.0, 200.0));
        assert_eq!(state.right_paddle.pos, Vec2::new(670.0, 200.0));
        assert_eq!(state.ball.pos, Vec2::new(350.0, 250.0));
        assert_eq!(state.snapshot(), GameInfo::default());
    }

    #[test]
    fn test_observation_triple() {
        let mut state = GameState::new(GameConfig::default(), 7);
        state.ball.pos = Vec2::new(100.0, 333.0);

        let obs = state.observation(Side::Right);
        assert_eq!(obs, [200.0, 333.0, 570.0]);

        let obs = state.observation(Side::Left);
        assert_eq!(obs, [200.0, 333.0, 90.0]);
    }

    #[test]
    fn test_reset_zeroes_counters_and_positions() {
        let mut state = GameState::new(GameConfig::default(), 9);
        state.left_score = 3;
        state.right_hits = 17;
        state.left_paddle.pos.y = 40.0;
        state.ball.pos = Vec2::new(12.0, 480.0);

        state.reset();
        assert_eq!(state.snapshot(), GameInfo::default());
        assert_eq!(state.left_paddle.pos, state.left_paddle.origin);
        assert_eq!(state.right_paddle.pos, state.right_paddle.origin);
        assert_eq!(state.ball.pos, state.ball.origin);
    }

    #[test]
    fn test_reset_twice_identical() {
        // Positions and counters repeat exactly; only the serve angle is
        // freshly drawn
        let mut state = GameState::new(GameConfig::default(), 11);
        state.reset();
        let first = (
            state.ball.pos,
            state.left_paddle.pos,
            state.right_paddle.pos,
            state.snapshot(),
        );
        state.reset();
        let second = (
            state.ball.pos,
            state.left_paddle.pos,
            state.right_paddle.pos,
            state.snapshot(),
        );
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_launch_velocity_in_envelope(seed in any::<u64>()) {
            let config = GameConfig::default();
            let ball = Ball::new(350.0, 250.0, &config, &mut rng(seed));

            // |x_vel| <= max and nonzero; |y_vel| bounded by sin(30 deg)*max
            prop_assert!(ball.vel.x.abs() <= config.ball_max_vel);
            prop_assert!(ball.vel.x != 0.0);
            let y_cap = (30f32).to_radians().sin() * config.ball_max_vel + 1e-4;
            prop_assert!(ball.vel.y.abs() <= y_cap);
            prop_assert!(ball.vel.y != 0.0);
        }

        #[test]
        fn prop_move_paddle_keeps_bounds(
            seed in any::<u64>(),
            moves in proptest::collection::vec(any::<bool>(), 0..400),
        ) {
            let mut state = GameState::new(GameConfig::default(), seed);
            for up in moves {
                let dir = if up { MoveDirection::Up } else { MoveDirection::Down };
                state.move_paddle(Side::Left, dir);
                state.move_paddle(Side::Right, dir);

                for side in [Side::Left, Side::Right] {
                    let paddle = state.paddle(side);
                    prop_assert!(paddle.pos.y >= 0.0);
                    prop_assert!(paddle.pos.y + paddle.height <= 500.0);
                }
            }
        }
    }
}
