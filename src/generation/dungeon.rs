//! # Dungeon Carving
//!
//! Low-level operations on a [`TileGrid`]: filling, bordering, and carving
//! rooms and corridors into solid rock.
//!
//! Carving only ever writes floor, so carving is a set union over floor cells.
//! Cells that fall outside the grid are skipped.

use crate::game::{Position, Tile, TileGrid};
use crate::generation::Room;

/// Creates a `width` x `height` grid with every cell set to `tile`.
///
/// Non-positive dimensions produce an empty grid.
pub fn filled_grid(width: i32, height: i32, tile: Tile) -> TileGrid {
    let width = width.max(0) as usize;
    let height = height.max(0) as usize;
    vec![vec![tile; width]; height]
}

/// Creates a grid whose border cells are walls and whose interior is floor.
pub fn bordered_room(width: i32, height: i32) -> TileGrid {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let is_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                    if is_border {
                        Tile::WALL
                    } else {
                        Tile::FLOOR
                    }
                })
                .collect()
        })
        .collect()
}

/// Overwrites the cell at `pos`. Returns false when `pos` is off the grid.
pub fn set_tile(tiles: &mut TileGrid, pos: Position, tile: Tile) -> bool {
    if pos.x < 0 || pos.y < 0 {
        return false;
    }

    match tiles
        .get_mut(pos.y as usize)
        .and_then(|row| row.get_mut(pos.x as usize))
    {
        Some(cell) => {
            *cell = tile;
            true
        }
        None => false,
    }
}

/// Gets the `(width, height)` of a grid, saturating at `i32::MAX`.
pub fn grid_size(tiles: &TileGrid) -> (i32, i32) {
    let height = i32::try_from(tiles.len()).unwrap_or(i32::MAX);
    let width = tiles
        .first()
        .map_or(0, |row| i32::try_from(row.len()).unwrap_or(i32::MAX));
    (width, height)
}

/// Sets every cell of `room` that lies on the grid to floor.
pub fn carve_room(tiles: &mut TileGrid, room: &Room) {
    let (width, height) = grid_size(tiles);
    let on_grid = room.clipped_to(width, height);

    for pos in on_grid.positions() {
        set_tile(tiles, pos, Tile::FLOOR);
    }

    let skipped = room.area() - on_grid.area();
    if skipped > 0 {
        log::warn!("Room {:?} extends {} cells past the map edge", room, skipped);
    }
}

/// Carves an L-shaped corridor: along row `from.y` to column `to.x`, then
/// along column `to.x` to row `to.y`. Both ends are inclusive.
pub fn carve_corridor(tiles: &mut TileGrid, from: Position, to: Position) {
    let (width, height) = grid_size(tiles);
    let mut skipped = 0;

    skipped += carve_span(from.x, to.x, width, |x| {
        set_tile(tiles, Position::new(x, from.y), Tile::FLOOR)
    });
    skipped += carve_span(from.y, to.y, height, |y| {
        set_tile(tiles, Position::new(to.x, y), Tile::FLOOR)
    });

    if skipped > 0 {
        log::warn!(
            "Corridor {:?} -> {:?} extends {} cells past the map edge",
            from,
            to,
            skipped
        );
    }
}

/// Calls `carve` for every coordinate between `a` and `b` (inclusive) that
/// lies in `[0, limit)`, and returns how many coordinates were skipped.
fn carve_span(a: i32, b: i32, limit: i32, mut carve: impl FnMut(i32) -> bool) -> i64 {
    let (low, high) = (a.min(b), a.max(b));
    let total = i64::from(high) - i64::from(low) + 1;

    let mut carved = 0;
    if high >= 0 && low < limit {
        for i in low.max(0)..=high.min(limit - 1) {
            if carve(i) {
                carved += 1;
            }
        }
    }
    total - carved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: i32, height: i32) -> TileGrid {
        filled_grid(width, height, Tile::WALL)
    }

    #[test]
    fn test_filled_grid_dimensions() {
        let tiles = solid(20, 15);
        assert_eq!(tiles.len(), 15);
        assert!(tiles.iter().all(|row| row.len() == 20));
        assert!(filled_grid(-1, 5, Tile::WALL).iter().all(|row| row.is_empty()));
    }

    #[test]
    fn test_bordered_room() {
        let tiles = bordered_room(6, 4);
        let rendered: Vec<String> = tiles
            .iter()
            .map(|row| row.iter().map(|tile| tile.glyph).collect())
            .collect();

        assert_eq!(rendered, vec!["######", "#....#", "#....#", "######"]);
    }

    #[test]
    fn test_carve_room() {
        let mut tiles = solid(20, 15);
        carve_room(&mut tiles, &Room::new(Position::new(5, 3), 8, 6));

        for y in 3..9 {
            for x in 5..13 {
                assert_eq!(tiles[y][x], Tile::FLOOR, "({}, {}) should be floor", x, y);
            }
        }

        assert_eq!(tiles[3][4], Tile::WALL);
        assert_eq!(tiles[3][13], Tile::WALL);
        assert_eq!(tiles[2][5], Tile::WALL);
        assert_eq!(tiles[9][5], Tile::WALL);
    }

    #[test]
    fn test_carve_corridor_both_directions() {
        for (from, to) in [
            (Position::new(5, 5), Position::new(10, 10)),
            (Position::new(10, 10), Position::new(5, 5)),
        ] {
            let mut tiles = solid(20, 20);
            carve_corridor(&mut tiles, from, to);

            for x in from.x.min(to.x)..=from.x.max(to.x) {
                assert_eq!(tiles[from.y as usize][x as usize], Tile::FLOOR);
            }
            for y in from.y.min(to.y)..=from.y.max(to.y) {
                assert_eq!(tiles[y as usize][to.x as usize], Tile::FLOOR);
            }

            assert_eq!(tiles[0][0], Tile::WALL);
            // The elbow sits at (to.x, from.y); the opposite corner stays solid.
            assert_eq!(tiles[to.y as usize][from.x as usize], Tile::WALL);
        }
    }

    #[test]
    fn test_overlapping_corridors_keep_floor() {
        let mut tiles = solid(20, 20);
        carve_corridor(&mut tiles, Position::new(2, 5), Position::new(15, 12));
        let first: Vec<Position> = (0..20)
            .flat_map(|y| (0..20).map(move |x| Position::new(x, y)))
            .filter(|pos| tiles[pos.y as usize][pos.x as usize].is_walkable())
            .collect();

        carve_corridor(&mut tiles, Position::new(15, 2), Position::new(4, 5));

        for pos in first {
            assert!(tiles[pos.y as usize][pos.x as usize].is_walkable());
        }
    }

    #[test]
    fn test_carving_past_the_edge_is_clipped() {
        let mut tiles = solid(10, 10);
        carve_room(&mut tiles, &Room::new(Position::new(8, 8), 5, 5));
        carve_corridor(&mut tiles, Position::new(-3, 0), Position::new(2, -2));

        assert_eq!(tiles.len(), 10);
        assert!(tiles.iter().all(|row| row.len() == 10));
        assert_eq!(tiles[9][9], Tile::FLOOR);
        assert_eq!(tiles[0][0], Tile::FLOOR);
        assert_eq!(tiles[0][2], Tile::FLOOR);
        assert!(!set_tile(&mut tiles, Position::new(10, 0), Tile::FLOOR));
    }

    #[test]
    fn test_extreme_coordinates_only_touch_the_grid() {
        let mut tiles = solid(12, 8);
        assert_eq!(grid_size(&tiles), (12, 8));

        carve_corridor(&mut tiles, Position::new(i32::MIN, 3), Position::new(i32::MAX, i32::MIN));
        carve_room(&mut tiles, &Room::new(Position::new(4, 6), i32::MAX, i32::MAX));

        for x in 0..12 {
            assert_eq!(tiles[3][x], Tile::FLOOR);
            assert_eq!(tiles[2][x], Tile::WALL);
        }
        assert_eq!(tiles[6][3], Tile::WALL);
        assert_eq!(tiles[6][4], Tile::FLOOR);
        assert_eq!(tiles[7][11], Tile::FLOOR);
    }
}
