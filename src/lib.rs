//! Solo Pong - a minimal single-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Window, input, and frame pacing

pub mod platform;
pub mod renderer;
pub mod sim;

pub use sim::{GameState, update};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Window dimensions in pixels
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Pacing target for the main loop (~60 Hz)
    pub const FRAME_TARGET_TIME: Duration = Duration::from_millis(16);

    /// Ball defaults
    pub const BALL_SIZE: f32 = 15.0;
    /// Ball speed along each axis, pixels/sec
    pub const BALL_SPEED: f32 = 300.0;
    /// Vertical serve position of the ball's top edge
    pub const BALL_START_Y: f32 = 20.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Horizontal paddle speed while an arrow key is held, pixels/sec
    pub const PADDLE_SPEED: f32 = 400.0;
    /// Distance from the bottom of the window to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
}
