//! # Generation Module
//!
//! Map construction for new games.
//!
//! Two layouts exist: a single bordered room sized by the caller, and a fixed
//! 80x24 map with three rooms joined by L-shaped corridors. Both produce a
//! [`GeneratedMap`] that [`Game`](crate::Game) takes ownership of.

pub mod dungeon;

pub use dungeon::*;

use crate::game::{Position, Tile, TileGrid};
use crate::{config, SprawlError, SprawlResult};
use serde::{Deserialize, Serialize};

/// Represents a rectangular room on the map.
///
/// Unlike walled rooms, every cell of a `Room` is floor; the walls are the
/// uncarved cells around it. A non-positive width or height makes the room
/// empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Top-left corner of the room
    pub top_left: Position,
    /// Width of the room in tiles
    pub width: i32,
    /// Height of the room in tiles
    pub height: i32,
}

impl Room {
    /// Creates a new room with the given parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprawlrunner::{Position, Room};
    ///
    /// let room = Room::new(Position::new(10, 5), 15, 8);
    /// assert_eq!(room.center(), Position::new(17, 9));
    /// ```
    pub const fn new(top_left: Position, width: i32, height: i32) -> Self {
        Self {
            top_left,
            width,
            height,
        }
    }

    /// Gets the center position of the room, rounding towards the top-left.
    pub fn center(&self) -> Position {
        Position::new(
            self.top_left.x.saturating_add(self.width.max(0) / 2),
            self.top_left.y.saturating_add(self.height.max(0) / 2),
        )
    }

    /// Gets the area of the room in tiles.
    pub fn area(&self) -> i64 {
        i64::from(self.width.max(0)) * i64::from(self.height.max(0))
    }

    /// Column just past the right edge, saturating at `i32::MAX`.
    fn right(&self) -> i32 {
        self.top_left.x.saturating_add(self.width.max(0))
    }

    /// Row just past the bottom edge, saturating at `i32::MAX`.
    fn bottom(&self) -> i32 {
        self.top_left.y.saturating_add(self.height.max(0))
    }

    /// Gets the part of this room that lies on a `grid_width` x `grid_height`
    /// grid anchored at the origin.
    pub fn clipped_to(&self, grid_width: i32, grid_height: i32) -> Room {
        let (grid_width, grid_height) = (grid_width.max(0), grid_height.max(0));
        let left = self.top_left.x.clamp(0, grid_width);
        let top = self.top_left.y.clamp(0, grid_height);
        let right = self.right().clamp(left, grid_width);
        let bottom = self.bottom().clamp(top, grid_height);
        Room::new(Position::new(left, top), right - left, bottom - top)
    }

    /// Gets all positions within this room.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let (left, right) = (self.top_left.x, self.right());
        (self.top_left.y..self.bottom())
            .flat_map(move |y| (left..right).map(move |x| Position::new(x, y)))
    }
}

/// Rooms of the fixed layout, in corridor order.
pub const FIXED_ROOMS: [Room; 3] = [
    Room::new(Position::new(10, 5), 15, 8),
    Room::new(Position::new(35, 3), 12, 10),
    Room::new(Position::new(55, 12), 18, 9),
];

/// A fully built map ready to be handed to a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMap {
    pub width: i32,
    pub height: i32,
    pub tiles: TileGrid,
    /// Where the player starts
    pub player_spawn: Position,
}

impl GeneratedMap {
    /// Gets the tile grid cell at `pos`, if it lies on the map.
    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        self.tiles.get(pos.y as usize)?.get(pos.x as usize)
    }
}

/// Construction strategy for a new map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapLayout {
    /// A single room of the given size with walls along the map border
    BoundedRoom { width: i32, height: i32 },
    /// The fixed 80x24 three-room layout
    #[default]
    FixedRooms,
}

/// Trait for map builders.
///
/// Each layout has a builder; [`MapLayout::build`] picks the right one.
pub trait MapBuilder {
    /// Builds the map.
    fn build(&self) -> SprawlResult<GeneratedMap>;

    /// Gets the builder type name for logging and debugging.
    fn builder_type(&self) -> &'static str;
}

/// Builds a single room bordered by walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedRoomBuilder {
    pub width: i32,
    pub height: i32,
}

impl MapBuilder for BoundedRoomBuilder {
    fn build(&self) -> SprawlResult<GeneratedMap> {
        if self.width < config::MIN_ROOM_DIMENSION || self.height < config::MIN_ROOM_DIMENSION {
            return Err(SprawlError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        Ok(GeneratedMap {
            width: self.width,
            height: self.height,
            tiles: dungeon::bordered_room(self.width, self.height),
            player_spawn: Position::new(self.width / 2, self.height / 2),
        })
    }

    fn builder_type(&self) -> &'static str {
        "bounded_room"
    }
}

/// Builds the fixed three-room layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedRoomsBuilder;

impl FixedRoomsBuilder {
    /// Builds the layout. It is hand-placed inside the map, so this cannot fail.
    pub fn build_map(&self) -> GeneratedMap {
        let mut tiles = dungeon::filled_grid(config::MAP_WIDTH, config::MAP_HEIGHT, Tile::WALL);

        for room in &FIXED_ROOMS {
            dungeon::carve_room(&mut tiles, room);
        }

        for pair in FIXED_ROOMS.windows(2) {
            dungeon::carve_corridor(&mut tiles, pair[0].center(), pair[1].center());
        }

        GeneratedMap {
            width: config::MAP_WIDTH,
            height: config::MAP_HEIGHT,
            tiles,
            player_spawn: FIXED_ROOMS[0].center(),
        }
    }
}

impl MapBuilder for FixedRoomsBuilder {
    fn build(&self) -> SprawlResult<GeneratedMap> {
        Ok(self.build_map())
    }

    fn builder_type(&self) -> &'static str {
        "fixed_rooms"
    }
}

impl MapLayout {
    /// Builds a map for this layout.
    pub fn build(&self) -> SprawlResult<GeneratedMap> {
        match *self {
            MapLayout::BoundedRoom { width, height } => {
                Self::build_with(&BoundedRoomBuilder { width, height })
            }
            MapLayout::FixedRooms => Self::build_with(&FixedRoomsBuilder),
        }
    }

    fn build_with(builder: &dyn MapBuilder) -> SprawlResult<GeneratedMap> {
        let map = builder.build()?;
        log::debug!(
            "Built {} map {}x{}",
            builder.builder_type(),
            map.width,
            map.height
        );

        // Both layouts are hand-placed, so an unwalkable spawn is a layout bug.
        debug_assert!(
            map.tile_at(map.player_spawn).is_some_and(|tile| tile.is_walkable()),
            "spawn {:?} is not on a floor tile",
            map.player_spawn
        );

        Ok(map)
    }
}
