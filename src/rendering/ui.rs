//! # User Interface Elements
//!
//! Text content of the title screen and HUD, and the palette that turns the
//! model's semantic colors into concrete ones.

use crate::game::{Game, GlyphColor};
use macroquad::prelude::{Color, BLACK, WHITE, YELLOW};

/// Gray used for terrain and as the default glyph color.
pub const DEFAULT_GLYPH_COLOR: Color = Color::new(0.75, 0.75, 0.75, 1.0);

pub const TITLE_ART: [&str; 6] = [
    "  _________                          .__                                          ",
    " /   _____/_________________ __  _  _|  |_______ __ __  ____   ____   ___________ ",
    " \\_____  \\\\____ \\_  __ \\__  \\\\ \\/ \\/ /  |\\_  __ \\  |  \\/    \\ /    \\_/ __ \\_  __ \\",
    " /        \\  |_> >  | \\// __ \\\\     /|  |_|  | \\/  |  /   |  \\   |  \\  ___/|  | \\/",
    "/_______  /   __/|__|  (____  /\\/\\_/ |____/__|  |____/|___|  /___|  /\\___  >__|   ",
    "        \\/|__|              \\/                             \\/     \\/     \\/       ",
];

pub const TITLE_SUBTITLE: &str = "A Cyberpunk Roguelike";
pub const TITLE_COPYRIGHT: &str = "Copyright 2025";
pub const TITLE_INSTRUCTION: &str = "Press SPACE to start or Q to quit";
pub const QUIT_PROMPT: &str = "Really quit? (Y/N)";

/// Maps a semantic glyph color to a concrete color.
pub fn palette(color: GlyphColor) -> Color {
    match color {
        GlyphColor::Black => BLACK,
        GlyphColor::Gray => DEFAULT_GLYPH_COLOR,
        GlyphColor::White => WHITE,
        GlyphColor::Yellow => YELLOW,
    }
}

/// Resolves an optional tile color, falling back to the default gray.
pub fn resolve_color(color: Option<GlyphColor>) -> Color {
    color.map(palette).unwrap_or(DEFAULT_GLYPH_COLOR)
}

/// Lines of the stats panel, top to bottom. Empty strings are spacer lines.
pub fn stats_lines(game: &Game) -> Vec<String> {
    let player = game.player();
    vec![
        "== Runner ==".to_string(),
        String::new(),
        player.name.clone(),
        String::new(),
        format!("Level: {}", player.level),
        format!("Health: {}/{}", player.health, player.max_health),
        format!("Turn: {}", game.turn_count()),
    ]
}

/// Lines of the message log below the separator.
pub fn message_lines(game: &Game) -> Vec<&'static str> {
    if game.is_confirming_quit() {
        vec![QUIT_PROMPT]
    } else {
        Vec::new()
    }
}
