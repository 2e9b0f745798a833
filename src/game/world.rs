//! # World Representation
//!
//! Terrain tiles and the tile grid they are stored in.

use serde::{Deserialize, Serialize};

/// Semantic color of a glyph.
///
/// The model only names colors; the renderer decides what they look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlyphColor {
    Black,
    Gray,
    White,
    Yellow,
}

/// A single map cell.
///
/// Tiles are plain values. The canonical [`Tile::FLOOR`] and [`Tile::WALL`]
/// are copied into every cell of that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Character used to draw the tile
    pub glyph: char,
    /// Display color, `None` meaning the renderer's default
    pub color: Option<GlyphColor>,
    /// Whether entities can move onto this tile
    pub walkable: bool,
}

impl Tile {
    /// Open floor.
    pub const FLOOR: Tile = Tile {
        glyph: '.',
        color: Some(GlyphColor::Gray),
        walkable: true,
    };

    /// Solid wall.
    pub const WALL: Tile = Tile {
        glyph: '#',
        color: Some(GlyphColor::Gray),
        walkable: false,
    };

    /// Checks whether the player can stand on this tile.
    pub fn is_walkable(&self) -> bool {
        self.walkable
    }
}

/// Dense row-major tile storage, indexed `tiles[y][x]`.
pub type TileGrid = Vec<Vec<Tile>>;
