//! Keyboard input mapping
//!
//! Translates winit key codes into the small set of keys the game cares
//! about and applies their effects to the game state. Events are applied
//! in arrival order, so within one frame the last press wins and no
//! release is ever dropped.

use winit::keyboard::KeyCode;

use crate::consts::PADDLE_SPEED;
use crate::sim::GameState;

/// Keys with a gameplay effect; everything else is ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Escape,
}

/// Map a winit key code to a game key, or `None` for keys without effect
pub fn map_key_code(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::ArrowLeft => Some(GameKey::Left),
        KeyCode::ArrowRight => Some(GameKey::Right),
        KeyCode::Escape => Some(GameKey::Escape),
        _ => None,
    }
}

/// Apply a key press or release to the game state
///
/// Press of an arrow sets the paddle velocity; release of either arrow
/// zeroes it, even when the other arrow is still held. Escape quits on
/// press only.
pub fn handle_key(state: &mut GameState, key: GameKey, pressed: bool) {
    match (key, pressed) {
        (GameKey::Escape, true) => state.running = false,
        (GameKey::Escape, false) => {}
        (GameKey::Left, true) => state.paddle.vel.x = -PADDLE_SPEED,
        (GameKey::Right, true) => state.paddle.vel.x = PADDLE_SPEED,
        (GameKey::Left, false) | (GameKey::Right, false) => state.paddle.vel.x = 0.0,
    }
}

/// Apply a window close request
pub fn handle_quit(state: &mut GameState) {
    state.running = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_press_sets_paddle_velocity() {
        let mut state = GameState::new();

        handle_key(&mut state, GameKey::Left, true);
        assert_eq!(state.paddle.vel.x, -PADDLE_SPEED);

        handle_key(&mut state, GameKey::Right, true);
        assert_eq!(state.paddle.vel.x, PADDLE_SPEED);
    }

    #[test]
    fn test_later_press_wins() {
        // Left then Right arriving before the next frame: the second
        // press's effect is what the simulation sees
        let mut state = GameState::new();

        handle_key(&mut state, GameKey::Left, true);
        handle_key(&mut state, GameKey::Right, true);

        assert_eq!(state.paddle.vel.x, PADDLE_SPEED);
    }

    #[test]
    fn test_release_of_either_arrow_stops_the_paddle() {
        let mut state = GameState::new();

        handle_key(&mut state, GameKey::Left, true);
        handle_key(&mut state, GameKey::Left, false);
        assert_eq!(state.paddle.vel.x, 0.0);

        // Release of the other arrow also stops it
        handle_key(&mut state, GameKey::Left, true);
        handle_key(&mut state, GameKey::Right, false);
        assert_eq!(state.paddle.vel.x, 0.0);
    }

    #[test]
    fn test_escape_quits_on_press_only() {
        let mut state = GameState::new();
        handle_key(&mut state, GameKey::Escape, false);
        assert!(state.running);

        handle_key(&mut state, GameKey::Escape, true);
        assert!(!state.running);
    }

    #[test]
    fn test_escape_leaves_paddle_velocity_alone() {
        let mut state = GameState::new();
        handle_key(&mut state, GameKey::Left, true);
        handle_key(&mut state, GameKey::Escape, true);

        assert_eq!(state.paddle.vel.x, -PADDLE_SPEED);
    }

    #[test]
    fn test_close_request_clears_running() {
        let mut state = GameState::new();
        handle_quit(&mut state);
        assert!(!state.running);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_key_code(KeyCode::KeyA), None);
        assert_eq!(map_key_code(KeyCode::Space), None);
        assert_eq!(map_key_code(KeyCode::ArrowUp), None);
    }

    #[test]
    fn test_game_keys_map() {
        assert_eq!(map_key_code(KeyCode::ArrowLeft), Some(GameKey::Left));
        assert_eq!(map_key_code(KeyCode::ArrowRight), Some(GameKey::Right));
        assert_eq!(map_key_code(KeyCode::Escape), Some(GameKey::Escape));
    }
}
