//! # Entities
//!
//! The player character. There is exactly one per [`Game`](crate::Game).

use crate::config;
use crate::game::{GlyphColor, Position};
use serde::{Deserialize, Serialize};

/// The runner controlled by the user.
///
/// Only [`Game::move_player`](crate::Game::move_player) changes the position.
/// Level and health are set at construction and have no mutator in the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Position in tile coordinates
    pub position: Position,
    /// Character used to draw the player
    pub glyph: char,
    /// Display color of the glyph
    pub color: GlyphColor,
    /// Runner name shown in the stats panel
    pub name: String,
    /// Experience level, starting at 1
    pub level: u32,
    /// Current health
    pub health: u32,
    /// Maximum health
    pub max_health: u32,
}

impl Player {
    /// Creates a player with default stats at the given position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprawlrunner::{Player, Position};
    ///
    /// let player = Player::new(Position::new(3, 4));
    /// assert_eq!(player.glyph, '@');
    /// assert_eq!(player.level, 1);
    /// ```
    pub fn new(position: Position) -> Self {
        Self {
            position,
            glyph: '@',
            color: GlyphColor::White,
            name: config::DEFAULT_PLAYER_NAME.to_string(),
            level: config::DEFAULT_PLAYER_LEVEL,
            health: config::DEFAULT_PLAYER_HEALTH,
            max_health: config::DEFAULT_PLAYER_HEALTH,
        }
    }
}
