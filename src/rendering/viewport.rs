//! # Viewport
//!
//! The part of the map that is visible on screen, centered on the camera and
//! clamped so it never shows space beyond the map edges.

use crate::config;
use crate::game::{Game, Position};

/// Size of the visible map area in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

/// Half-open tile rectangle `[min_x, max_x) x [min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl ViewportBounds {
    /// Number of visible columns.
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    /// Number of visible rows.
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// Checks if a world position is visible.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.min_x && pos.x < self.max_x && pos.y >= self.min_y && pos.y < self.max_y
    }

    /// Converts a world position to viewport-relative tile coordinates.
    pub fn to_screen(&self, pos: Position) -> Position {
        pos - Position::new(self.min_x, self.min_y)
    }

    /// Iterates the visible world positions row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (min_x, max_x) = (self.min_x, self.max_x);
        (self.min_y..self.max_y).flat_map(move |y| (min_x..max_x).map(move |x| Position::new(x, y)))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(config::VIEWPORT_WIDTH, config::VIEWPORT_HEIGHT)
    }
}

impl Viewport {
    /// Creates a viewport of `width` x `height` tiles.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Computes the visible rectangle for a camera on a map of the given size.
    ///
    /// Each axis is clamped independently: first against the low edge, then
    /// against the high edge. When the map is narrower than the viewport the
    /// high-edge clamp would push the minimum below zero, so the minimum is
    /// clamped to 0 last and the rectangle shrinks to the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprawlrunner::{Position, Viewport};
    ///
    /// let bounds = Viewport::new(56, 20).bounds(Position::new(30, 12), 80, 24);
    /// assert_eq!((bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y), (2, 2, 58, 22));
    /// ```
    pub fn bounds(&self, camera: Position, map_width: i32, map_height: i32) -> ViewportBounds {
        let (min_x, max_x) = clamp_axis(camera.x, self.width, map_width);
        let (min_y, max_y) = clamp_axis(camera.y, self.height, map_height);

        ViewportBounds {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Computes the visible rectangle around the game's camera.
    pub fn bounds_for(&self, game: &Game) -> ViewportBounds {
        self.bounds(game.camera(), game.width(), game.height())
    }

    /// Gets the player's position relative to the viewport origin.
    pub fn player_screen_position(&self, game: &Game) -> Position {
        self.bounds_for(game).to_screen(game.player().position)
    }
}

fn clamp_axis(center: i32, size: i32, map_size: i32) -> (i32, i32) {
    let mut min = center - size / 2;
    let mut max = min + size;

    if min < 0 {
        min = 0;
        max = size;
    }

    if max > map_size {
        max = map_size;
        min = max - size;
    }

    (min.max(0), max)
}
