//! # Sprawlrunner
//!
//! An ASCII cyberpunk roguelike prototype.
//!
//! ## Architecture Overview
//!
//! The core of the crate is a small, rendering-independent model:
//!
//! - **Game**: the aggregate root owning the tile grid, the player, the camera,
//!   the turn counter and the quit/title state machines
//! - **Generation**: construction of maps, either a single bordered room or a
//!   fixed three-room layout joined by corridors
//! - **Viewport**: the visible sub-rectangle of a map around the camera
//!
//! Input mapping and macroquad rendering are thin layers on top that only read
//! from and call into [`Game`].

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

use std::path::PathBuf;

/// Core error type for Sprawlrunner.
///
/// Movement never produces an error; bumping into a wall is a normal outcome
/// reported through the boolean returned by [`Game::move_player`].
#[derive(thiserror::Error, Debug)]
pub enum SprawlError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested map is too small to hold a room with a floor
    #[error("Invalid map dimensions {width}x{height}: a room needs at least 3x3 tiles")]
    InvalidDimensions { width: i32, height: i32 },

    /// Font file does not exist
    #[error("Font file not found: {}", .0.display())]
    FontNotFound(PathBuf),

    /// Font file exists but could not be parsed
    #[error("Font file could not be parsed: {0}")]
    FontParseFailed(String),
}

/// Result type used throughout the Sprawlrunner codebase.
pub type SprawlResult<T> = Result<T, SprawlError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Width of the fixed three-room layout in tiles
    pub const MAP_WIDTH: i32 = 80;

    /// Height of the fixed three-room layout in tiles
    pub const MAP_HEIGHT: i32 = 24;

    /// Width of the visible map area in tiles
    pub const VIEWPORT_WIDTH: i32 = 56;

    /// Height of the visible map area in tiles
    pub const VIEWPORT_HEIGHT: i32 = 20;

    /// Width of the stats panel to the right of the viewport, in tiles
    pub const STATS_PANEL_WIDTH: i32 = 24;

    /// Height of the message log below the viewport, in tiles
    pub const MESSAGE_LOG_HEIGHT: i32 = 4;

    /// Pixels per tile
    pub const TILE_SIZE: f32 = 16.0;

    /// Smallest width or height of a bordered room. Keep in sync with the
    /// message of `SprawlError::InvalidDimensions`.
    pub const MIN_ROOM_DIMENSION: i32 = 3;

    /// Default player name
    pub const DEFAULT_PLAYER_NAME: &str = "Decker";

    /// Default player starting level
    pub const DEFAULT_PLAYER_LEVEL: u32 = 1;

    /// Default player starting health
    pub const DEFAULT_PLAYER_HEALTH: u32 = 15;
}
