//! Game state and core simulation types
//!
//! One `GameState` value owns everything the loop mutates. The platform
//! shell passes it by reference through the input, update, and render
//! phases each frame.

use glam::Vec2;

use crate::consts::*;

/// An axis-aligned rectangle with motion
///
/// Position is the top-left corner in window pixels (y grows downward).
/// Size is fixed after setup; position is re-derived each frame from
/// velocity and elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameObject {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per second. The ball's velocity holds magnitudes only; its
    /// signs live in [`BallDirection`]. The paddle's x velocity carries
    /// its own sign.
    pub vel: Vec2,
}

impl GameObject {
    /// Ball at its serve position: horizontally centered near the top,
    /// moving at full speed.
    pub fn ball() -> Self {
        Self {
            pos: Vec2::new(
                (WINDOW_WIDTH / 2.0) - (BALL_SIZE / 2.0),
                BALL_START_Y,
            ),
            size: Vec2::new(BALL_SIZE, BALL_SIZE),
            vel: Vec2::new(BALL_SPEED, BALL_SPEED),
        }
    }

    /// Paddle at its serve position: horizontally centered just above the
    /// bottom edge, at rest.
    pub fn paddle() -> Self {
        Self {
            pos: Vec2::new(
                (WINDOW_WIDTH / 2.0) - (PADDLE_WIDTH / 2.0),
                WINDOW_HEIGHT - PADDLE_BOTTOM_OFFSET,
            ),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            vel: Vec2::ZERO,
        }
    }
}

/// Sign of the ball's motion along each axis, independent of speed
///
/// Collision handling toggles these; the integration step reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallDirection {
    pub right: bool,
    pub down: bool,
}

impl Default for BallDirection {
    fn default() -> Self {
        Self {
            right: true,
            down: true,
        }
    }
}

impl BallDirection {
    pub fn flip_x(&mut self) {
        self.right = !self.right;
    }

    pub fn flip_y(&mut self) {
        self.down = !self.down;
    }

    /// +1.0 when moving right, -1.0 when moving left
    #[inline]
    pub fn sign_x(&self) -> f32 {
        if self.right { 1.0 } else { -1.0 }
    }

    /// +1.0 when moving down, -1.0 when moving up
    #[inline]
    pub fn sign_y(&self) -> f32 {
        if self.down { 1.0 } else { -1.0 }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub ball: GameObject,
    pub paddle: GameObject,
    pub ball_direction: BallDirection,
    /// Main loop keeps iterating while this is set. Cleared by quit input;
    /// never touched by [`GameState::reset`].
    pub running: bool,
}

impl GameState {
    /// Fresh state at the serve position, ready to run
    pub fn new() -> Self {
        Self {
            ball: GameObject::ball(),
            paddle: GameObject::paddle(),
            ball_direction: BallDirection::default(),
            running: true,
        }
    }

    /// Put ball, paddle, and direction flags back to their serve values
    ///
    /// Triggered when the ball passes the bottom edge. The running flag is
    /// left alone.
    pub fn reset(&mut self) {
        self.ball = GameObject::ball();
        self.paddle = GameObject::paddle();
        self.ball_direction = BallDirection::default();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_positions() {
        let state = GameState::new();

        // Ball: horizontally centered, top edge 20px down, full speed
        assert_eq!(state.ball.pos, Vec2::new(392.5, 20.0));
        assert_eq!(state.ball.size, Vec2::new(15.0, 15.0));
        assert_eq!(state.ball.vel, Vec2::new(300.0, 300.0));

        // Paddle: horizontally centered, 40px above the bottom, at rest
        assert_eq!(state.paddle.pos, Vec2::new(350.0, 560.0));
        assert_eq!(state.paddle.size, Vec2::new(100.0, 20.0));
        assert_eq!(state.paddle.vel, Vec2::ZERO);

        assert!(state.ball_direction.right);
        assert!(state.ball_direction.down);
        assert!(state.running);
    }

    #[test]
    fn test_reset_restores_serve_state() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(123.0, 456.0);
        state.paddle.pos.x = 0.0;
        state.paddle.vel.x = -400.0;
        state.ball_direction = BallDirection {
            right: false,
            down: false,
        };

        state.reset();

        assert_eq!(state.ball, GameObject::ball());
        assert_eq!(state.paddle, GameObject::paddle());
        assert_eq!(state.ball_direction, BallDirection::default());
    }

    #[test]
    fn test_reset_preserves_running_flag() {
        let mut state = GameState::new();
        state.running = false;
        state.reset();
        assert!(!state.running);

        let mut state = GameState::new();
        state.reset();
        assert!(state.running);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut once = GameState::new();
        once.ball.pos = Vec2::new(700.0, 500.0);
        once.reset();

        let mut twice = once.clone();
        twice.reset();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_direction_flips_toggle() {
        let mut dir = BallDirection::default();
        assert_eq!(dir.sign_x(), 1.0);
        assert_eq!(dir.sign_y(), 1.0);

        dir.flip_x();
        assert!(!dir.right);
        assert_eq!(dir.sign_x(), -1.0);

        dir.flip_y();
        assert!(!dir.down);
        assert_eq!(dir.sign_y(), -1.0);

        dir.flip_x();
        assert!(dir.right);
    }
}
