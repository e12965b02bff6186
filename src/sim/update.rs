//! Per-frame simulation step
//!
//! Advances ball and paddle kinematics by a frame delta and resolves
//! wall and paddle contacts. Pure state-in, state-out: the platform layer
//! supplies the delta, nothing here touches the clock or the window.

use super::state::{GameObject, GameState};
use crate::consts::*;

/// Advance the world by one frame
///
/// A bottom-wall miss resets the game and ends the frame early, so the
/// fresh serve state is never run through the paddle checks below it.
pub fn update(state: &mut GameState, dt: f32) {
    // --- INTEGRATE MOTION ---
    state.ball.pos.x += state.ball_direction.sign_x() * state.ball.vel.x * dt;
    state.ball.pos.y += state.ball_direction.sign_y() * state.ball.vel.y * dt;
    state.paddle.pos.x += state.paddle.vel.x * dt;

    // --- WALL CONTACT, EACH AXIS ON ITS OWN ---
    let hit_left = state.ball.pos.x <= 0.0;
    let hit_right = state.ball.pos.x >= WINDOW_WIDTH - state.ball.size.x;
    let hit_top = state.ball.pos.y <= 0.0;
    let hit_bottom = state.ball.pos.y >= WINDOW_HEIGHT - state.ball.size.y;

    if hit_left || hit_right {
        state.ball_direction.flip_x();
    }

    if hit_top {
        state.ball_direction.flip_y();
    }

    if hit_bottom {
        state.reset();
        return;
    }

    // --- PADDLE CONTACT ---
    if paddle_deflects(&state.ball, &state.paddle) {
        state.ball_direction.flip_x();
        state.ball_direction.flip_y();
    }

    // --- KEEP THE PADDLE INSIDE THE WINDOW ---
    if state.paddle.pos.x <= 0.0 {
        state.paddle.pos.x = 0.0;
    }

    if state.paddle.pos.x + state.paddle.size.x >= WINDOW_WIDTH {
        state.paddle.pos.x = WINDOW_WIDTH - state.paddle.size.x;
    }
}

/// Paddle contact test
///
/// Coarse box on purpose: only the ball's x origin is ranged against the
/// paddle span (its width is ignored), and anything with its bottom edge at
/// or below the paddle's top edge counts as contact.
#[inline]
fn paddle_deflects(ball: &GameObject, paddle: &GameObject) -> bool {
    let in_x = ball.pos.x >= paddle.pos.x && ball.pos.x <= paddle.pos.x + paddle.size.x;
    let in_y = ball.pos.y + ball.size.y >= paddle.pos.y;
    in_x && in_y
}
