//! # Game State Module
//!
//! The `Game` aggregate: the tile grid, the player, and everything that
//! changes as the session is played.
//!
//! `Game` is the only thing the presentation layer mutates. All operations run
//! to completion on the caller's thread; a session owns exactly one `Game`.

use crate::game::{Direction, Player, Position, Tile, TileGrid};
use crate::generation::{dungeon, FixedRoomsBuilder, GeneratedMap, MapLayout, Room};
use crate::SprawlResult;
use serde::{Deserialize, Serialize};

/// Two-step quit confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuitState {
    /// No quit pending
    #[default]
    Idle,
    /// The player asked to quit and must confirm
    ConfirmingQuit,
}

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    /// Title art, waiting for the player to start
    #[default]
    TitleScreen,
    /// Gameplay input is live
    Playing,
}

/// Central game state.
///
/// Invariants upheld by every method:
/// - `tiles` holds exactly `height` rows of `width` cells
/// - the player is on the map and on a walkable tile
/// - after a successful move the camera equals the player position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    width: i32,
    height: i32,
    tiles: TileGrid,
    player: Player,
    camera: Position,
    turn_count: u64,
    quit_state: QuitState,
    screen: Screen,
}

impl Game {
    /// Creates a game on the fixed 80x24 three-room map.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprawlrunner::{Game, Position};
    ///
    /// let game = Game::new_fixed_layout();
    /// assert_eq!((game.width(), game.height()), (80, 24));
    /// assert_eq!(game.player().position, Position::new(17, 9));
    /// ```
    pub fn new_fixed_layout() -> Self {
        Self::from_map(FixedRoomsBuilder.build_map())
    }

    /// Creates a game with a single room bordered by walls and the player in
    /// the middle.
    ///
    /// Fails with [`SprawlError::InvalidDimensions`](crate::SprawlError::InvalidDimensions)
    /// when either dimension is below 3.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprawlrunner::{Game, Position};
    ///
    /// let game = Game::new_bounded_room(20, 10).unwrap();
    /// assert_eq!(game.player().position, Position::new(10, 5));
    /// ```
    pub fn new_bounded_room(width: i32, height: i32) -> SprawlResult<Self> {
        Self::from_layout(MapLayout::BoundedRoom { width, height })
    }

    /// Creates a game from a layout.
    pub fn from_layout(layout: MapLayout) -> SprawlResult<Self> {
        Ok(Self::from_map(layout.build()?))
    }

    /// Creates a game on a map built by one of the layouts.
    fn from_map(map: GeneratedMap) -> Self {
        let spawn = map.player_spawn;
        log::info!(
            "New game on a {}x{} map, player at {:?}",
            map.width,
            map.height,
            spawn
        );
        Self {
            width: map.width,
            height: map.height,
            tiles: map.tiles,
            player: Player::new(spawn),
            camera: spawn,
            turn_count: 0,
            quit_state: QuitState::Idle,
            screen: Screen::TitleScreen,
        }
    }

    /// Map width in tiles.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Map height in tiles.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Tile grid indexed `tiles[y][x]`.
    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    /// Gets the player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Camera focus point.
    pub fn camera(&self) -> Position {
        self.camera
    }

    /// Number of movement attempts so far.
    pub fn turn_count(&self) -> u64 {
        self.turn_count
    }

    /// Current state of the quit prompt.
    pub fn quit_state(&self) -> QuitState {
        self.quit_state
    }

    /// Screen the session is on.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Checks whether `pos` lies on the map.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Gets the tile at `pos`, or None off the map.
    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.tiles.get(pos.y as usize)?.get(pos.x as usize)
    }

    /// Checks whether the player could stand at `pos`.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tile_at(pos).is_some_and(Tile::is_walkable)
    }

    /// Attempts to move the player by `(dx, dy)`.
    ///
    /// The move only happens if the target is on the map and walkable; the
    /// camera follows a successful move. Any delta is accepted, and one whose
    /// target overflows `i32` is treated as off the map. Every call counts as
    /// one turn, even when the player bumps into something. Returns whether
    /// the player's position changed.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> bool {
        let from = self.player.position;
        self.turn_count += 1;

        let target = match from.checked_offset(dx, dy) {
            Some(target) if self.is_walkable(target) => target,
            _ => {
                log::debug!("Move {:?} by ({}, {}) blocked", from, dx, dy);
                return false;
            }
        };

        self.player.position = target;
        self.camera = target;
        log::debug!("Moved {:?} -> {:?}", from, target);

        target != from
    }

    /// Attempts a one-step move in `direction`.
    pub fn move_in_direction(&mut self, direction: Direction) -> bool {
        let delta = direction.to_delta();
        self.move_player(delta.x, delta.y)
    }

    /// Sets every cell in `[x, x+width) x [y, y+height)` to floor.
    ///
    /// Cells off the map are skipped; non-positive sizes carve nothing.
    pub fn create_room(&mut self, x: i32, y: i32, width: i32, height: i32) {
        dungeon::carve_room(&mut self.tiles, &Room::new(Position::new(x, y), width, height));
    }

    /// Carves an L-shaped floor corridor: horizontally along row `y1` from
    /// `x1` to `x2`, then vertically along column `x2` from `y1` to `y2`.
    ///
    /// Cells off the map are skipped.
    pub fn create_corridor(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        dungeon::carve_corridor(&mut self.tiles, Position::new(x1, y1), Position::new(x2, y2));
    }

    /// Asks for quit confirmation. Repeated requests keep the prompt open.
    pub fn request_quit(&mut self) {
        if self.quit_state == QuitState::Idle {
            log::debug!("Quit requested, awaiting confirmation");
        }
        self.quit_state = QuitState::ConfirmingQuit;
    }

    /// Answers the quit prompt and closes it.
    ///
    /// Returns `confirmed`, which tells the caller whether to terminate. The
    /// prompt is closed either way, even if no quit was requested.
    pub fn confirm_quit(&mut self, confirmed: bool) -> bool {
        self.quit_state = QuitState::Idle;
        if confirmed {
            log::info!("Quit confirmed after {} turns", self.turn_count);
        } else {
            log::debug!("Quit cancelled");
        }
        confirmed
    }

    /// Checks whether the quit prompt is open.
    pub fn is_confirming_quit(&self) -> bool {
        self.quit_state == QuitState::ConfirmingQuit
    }

    /// Leaves the title screen. There is no way back.
    pub fn start_game(&mut self) {
        if self.screen == Screen::TitleScreen {
            log::info!("Starting game as {}", self.player.name);
            self.screen = Screen::Playing;
        }
    }

    /// Checks whether the title screen has been left.
    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Playing
    }

    /// Places the player directly, bypassing the movement rule.
    ///
    /// Only for setting up test scenarios; the camera is moved along.
    #[cfg(test)]
    pub(crate) fn place_player(&mut self, pos: Position) {
        self.player.position = pos;
        self.camera = pos;
    }
}
