//! # Command Definitions
//!
//! What the player can ask for, and how each request changes a [`Game`].

use crate::game::{Direction, Game};

/// Player input types produced by the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Step one tile in a direction
    Move(Direction),
    /// Leave the title screen
    Start,
    /// Quit, directly on the title screen or via confirmation while playing
    Quit,
    /// Answer yes to the quit prompt
    Confirm,
    /// Answer no to the quit prompt
    Cancel,
}

impl PlayerInput {
    /// Applies this input to the game.
    ///
    /// Returns true if the caller should terminate.
    pub fn apply(self, game: &mut Game) -> bool {
        match self {
            PlayerInput::Start => {
                game.start_game();
                false
            }
            PlayerInput::Quit if !game.is_playing() => {
                log::info!("Quit from title screen");
                true
            }
            PlayerInput::Quit => {
                game.request_quit();
                false
            }
            PlayerInput::Confirm => game.confirm_quit(true),
            PlayerInput::Cancel => game.confirm_quit(false),
            PlayerInput::Move(direction) => {
                if game.is_playing() && !game.is_confirming_quit() {
                    game.move_in_direction(direction);
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn playing_game() -> Game {
        let mut game = Game::new_fixed_layout();
        game.start_game();
        game
    }

    #[test]
    fn test_start_leaves_title() {
        let mut game = Game::new_fixed_layout();
        assert!(!PlayerInput::Start.apply(&mut game));
        assert!(game.is_playing());
    }

    #[test]
    fn test_quit_on_title_terminates() {
        let mut game = Game::new_fixed_layout();
        assert!(PlayerInput::Quit.apply(&mut game));
        assert!(!game.is_confirming_quit());
    }

    #[test]
    fn test_quit_while_playing_asks_first() {
        let mut game = playing_game();

        assert!(!PlayerInput::Quit.apply(&mut game));
        assert!(game.is_confirming_quit());

        assert!(!PlayerInput::Cancel.apply(&mut game));
        assert!(!game.is_confirming_quit());

        PlayerInput::Quit.apply(&mut game);
        assert!(PlayerInput::Confirm.apply(&mut game));
    }

    #[test]
    fn test_move_only_while_playing() {
        let mut game = Game::new_fixed_layout();
        let spawn = game.player().position;

        PlayerInput::Move(Direction::East).apply(&mut game);
        assert_eq!(game.player().position, spawn);
        assert_eq!(game.turn_count(), 0);

        game.start_game();
        PlayerInput::Move(Direction::East).apply(&mut game);
        assert_eq!(game.player().position, Position::new(18, 9));
    }

    #[test]
    fn test_move_ignored_while_confirming_quit() {
        let mut game = playing_game();
        game.request_quit();

        PlayerInput::Move(Direction::South).apply(&mut game);
        assert_eq!(game.player().position, Position::new(17, 9));
        assert!(game.is_confirming_quit());
    }
}
