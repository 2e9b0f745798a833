//! # Input Module
//!
//! Maps keys to player inputs. Which keys mean what depends on the screen the
//! game is on and on whether a quit is waiting for confirmation.

pub mod commands;

pub use commands::*;

use crate::game::{Direction, Game};
use macroquad::prelude::{is_key_pressed, KeyCode};

/// Keys polled every frame.
const WATCHED_KEYS: [KeyCode; 15] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::H,
    KeyCode::J,
    KeyCode::K,
    KeyCode::L,
    KeyCode::Y,
    KeyCode::U,
    KeyCode::B,
    KeyCode::N,
    KeyCode::Q,
    KeyCode::Escape,
    KeyCode::Space,
];

/// Input handler for processing player keys.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Whether to enable Vi-style movement keys (hjkl, yubn)
    pub vi_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprawlrunner::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// assert!(input_handler.vi_keys_enabled);
    /// ```
    pub fn new() -> Self {
        Self {
            vi_keys_enabled: true,
        }
    }

    /// Gets the input for the first mapped key pressed this frame.
    pub fn get_input(&self, game: &Game) -> Option<PlayerInput> {
        WATCHED_KEYS
            .iter()
            .filter(|&&key| is_key_pressed(key))
            .find_map(|&key| self.key_to_input(key, game))
    }

    /// Maps a key to an input given the game's current state.
    pub fn key_to_input(&self, key: KeyCode, game: &Game) -> Option<PlayerInput> {
        if !game.is_playing() {
            return match key {
                KeyCode::Space => Some(PlayerInput::Start),
                KeyCode::Q | KeyCode::Escape => Some(PlayerInput::Quit),
                _ => None,
            };
        }

        if game.is_confirming_quit() {
            return match key {
                KeyCode::Y => Some(PlayerInput::Confirm),
                KeyCode::N | KeyCode::Escape => Some(PlayerInput::Cancel),
                _ => None,
            };
        }

        match key {
            KeyCode::Q | KeyCode::Escape => Some(PlayerInput::Quit),
            _ => self.movement_direction(key).map(PlayerInput::Move),
        }
    }

    fn movement_direction(&self, key: KeyCode) -> Option<Direction> {
        let direction = match key {
            KeyCode::Up => Direction::North,
            KeyCode::Down => Direction::South,
            KeyCode::Left => Direction::West,
            KeyCode::Right => Direction::East,
            _ if !self.vi_keys_enabled => return None,
            KeyCode::K => Direction::North,
            KeyCode::J => Direction::South,
            KeyCode::H => Direction::West,
            KeyCode::L => Direction::East,
            KeyCode::Y => Direction::Northwest,
            KeyCode::U => Direction::Northeast,
            KeyCode::B => Direction::Southwest,
            KeyCode::N => Direction::Southeast,
            _ => return None,
        };
        Some(direction)
    }

    /// Maps a key and applies the result. Returns true if the caller should
    /// terminate.
    pub fn handle_key(&self, key: KeyCode, game: &mut Game) -> bool {
        match self.key_to_input(key, game) {
            Some(input) => input.apply(game),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_title_screen_keys() {
        let handler = InputHandler::new();
        let game = Game::new_fixed_layout();

        assert_eq!(handler.key_to_input(KeyCode::Space, &game), Some(PlayerInput::Start));
        assert_eq!(handler.key_to_input(KeyCode::Q, &game), Some(PlayerInput::Quit));
        assert_eq!(handler.key_to_input(KeyCode::Escape, &game), Some(PlayerInput::Quit));
        assert_eq!(handler.key_to_input(KeyCode::Right, &game), None);
    }

    #[test]
    fn test_playing_movement_keys() {
        let handler = InputHandler::new();
        let mut game = Game::new_fixed_layout();
        game.start_game();

        let cases = [
            (KeyCode::Up, Direction::North),
            (KeyCode::Down, Direction::South),
            (KeyCode::Left, Direction::West),
            (KeyCode::Right, Direction::East),
            (KeyCode::K, Direction::North),
            (KeyCode::J, Direction::South),
            (KeyCode::H, Direction::West),
            (KeyCode::L, Direction::East),
            (KeyCode::Y, Direction::Northwest),
            (KeyCode::U, Direction::Northeast),
            (KeyCode::B, Direction::Southwest),
            (KeyCode::N, Direction::Southeast),
        ];

        for (key, direction) in cases {
            assert_eq!(
                handler.key_to_input(key, &game),
                Some(PlayerInput::Move(direction)),
                "{:?}",
                key
            );
        }
        assert_eq!(handler.key_to_input(KeyCode::Q, &game), Some(PlayerInput::Quit));
        assert_eq!(handler.key_to_input(KeyCode::Space, &game), None);
    }

    #[test]
    fn test_vi_keys_can_be_disabled() {
        let handler = InputHandler {
            vi_keys_enabled: false,
        };
        let mut game = Game::new_fixed_layout();
        game.start_game();

        assert_eq!(handler.key_to_input(KeyCode::H, &game), None);
        assert_eq!(
            handler.key_to_input(KeyCode::Left, &game),
            Some(PlayerInput::Move(Direction::West))
        );
    }

    #[test]
    fn test_quit_prompt_keys() {
        let handler = InputHandler::new();
        let mut game = Game::new_fixed_layout();
        game.start_game();
        game.request_quit();

        assert_eq!(handler.key_to_input(KeyCode::Y, &game), Some(PlayerInput::Confirm));
        assert_eq!(handler.key_to_input(KeyCode::N, &game), Some(PlayerInput::Cancel));
        assert_eq!(handler.key_to_input(KeyCode::Escape, &game), Some(PlayerInput::Cancel));
        assert_eq!(handler.key_to_input(KeyCode::Up, &game), None);
    }

    #[test]
    fn test_handle_key_session() {
        let handler = InputHandler::new();
        let mut game = Game::new_fixed_layout();

        assert!(!handler.handle_key(KeyCode::Space, &mut game));
        assert!(!handler.handle_key(KeyCode::L, &mut game));
        assert_eq!(game.player().position, Position::new(18, 9));

        assert!(!handler.handle_key(KeyCode::Q, &mut game));
        assert!(!handler.handle_key(KeyCode::N, &mut game));
        assert!(!handler.handle_key(KeyCode::Q, &mut game));
        assert!(handler.handle_key(KeyCode::Y, &mut game));
    }
}
