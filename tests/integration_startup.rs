//! Integration test to ensure a session can be started, played and ended.

use sprawlrunner::{
    Direction, Game, InputHandler, MapLayout, PlayerInput, Position, SprawlError, SprawlResult,
    Viewport,
};

#[test]
fn test_basic_startup() -> SprawlResult<()> {
    let mut game = Game::from_layout(MapLayout::BoundedRoom {
        width: 10,
        height: 10,
    })?;

    // Verify the game state is properly initialized
    assert!(!game.is_playing());
    assert_eq!(game.turn_count(), 0);
    assert_eq!(game.player().position, Position::new(5, 5));
    assert_eq!(game.camera(), game.player().position);
    assert!(game.is_walkable(game.player().position));

    // Start and walk into the east wall
    PlayerInput::Start.apply(&mut game);
    for _ in 0..10 {
        PlayerInput::Move(Direction::East).apply(&mut game);
    }

    assert_eq!(game.player().position, Position::new(8, 5));
    assert_eq!(game.turn_count(), 10);

    Ok(())
}

#[test]
fn test_default_layout_is_fixed_rooms() -> SprawlResult<()> {
    let game = Game::from_layout(MapLayout::default())?;
    assert_eq!(game, Game::new_fixed_layout());
    Ok(())
}

#[test]
fn test_rejects_tiny_map() {
    let err = Game::new_bounded_room(1, 20).unwrap_err();
    assert!(matches!(err, SprawlError::InvalidDimensions { width: 1, height: 20 }));
    assert!(err.to_string().contains("1x20"));
}

#[test]
fn test_walk_between_fixed_rooms() {
    let mut game = Game::new_fixed_layout();
    game.start_game();

    // Follow the first corridor east along row 9 into room 2.
    while game.player().position.x < 41 {
        assert!(game.move_in_direction(Direction::East));
    }
    assert!(game.move_in_direction(Direction::North));
    assert_eq!(game.player().position, Position::new(41, 8));

    // Then along row 8 to column 64 and down into room 3.
    while game.player().position.x < 64 {
        assert!(game.move_in_direction(Direction::East));
    }
    while game.player().position.y < 16 {
        assert!(game.move_in_direction(Direction::South));
    }

    assert_eq!(game.player().position, Position::new(64, 16));
    assert_eq!(game.camera(), Position::new(64, 16));
}

#[test]
fn test_viewport_tracks_player() {
    let mut game = Game::new_fixed_layout();
    let viewport = Viewport::default();
    game.start_game();

    // Spawn (17, 9) sits near the top-left, so the viewport is pinned there.
    let bounds = viewport.bounds_for(&game);
    assert_eq!((bounds.min_x, bounds.min_y), (0, 0));
    assert_eq!(viewport.player_screen_position(&game), Position::new(17, 9));

    // Walk to room 3; the viewport scrolls to the right edge of the map.
    while game.player().position.x < 41 {
        game.move_in_direction(Direction::East);
    }
    game.move_in_direction(Direction::North);
    while game.player().position.x < 64 {
        game.move_in_direction(Direction::East);
    }

    let bounds = viewport.bounds_for(&game);
    assert_eq!((bounds.min_x, bounds.max_x), (24, 80));
    assert_eq!(bounds.width(), 56);
    assert_eq!(viewport.player_screen_position(&game), Position::new(40, 8));
}

#[test]
fn test_quit_flow_through_input_handler() {
    use macroquad::prelude::KeyCode;

    let handler = InputHandler::new();
    let mut game = Game::new_fixed_layout();

    assert!(!handler.handle_key(KeyCode::Space, &mut game));
    assert!(!handler.handle_key(KeyCode::Escape, &mut game));
    assert!(game.is_confirming_quit());

    // Movement keys do nothing while the prompt is open.
    assert!(!handler.handle_key(KeyCode::Right, &mut game));
    assert_eq!(game.turn_count(), 0);

    assert!(handler.handle_key(KeyCode::Y, &mut game));
    assert!(!game.is_confirming_quit());
}
