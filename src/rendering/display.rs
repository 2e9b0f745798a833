//! # Display Management
//!
//! Draws a [`Game`] with macroquad: the title screen, the map viewport, the
//! player, the stats panel and the message log.

use crate::config;
use crate::game::{Game, Position};
use crate::rendering::ui;
use crate::rendering::Viewport;
use crate::{SprawlError, SprawlResult};
use macroquad::prelude::*;
use std::path::Path;

/// Macroquad display manager for the game.
pub struct MacroquadDisplay {
    /// Tile size in pixels
    pub tile_size: f32,
    /// Visible map area
    pub viewport: Viewport,
    /// Font for glyphs and text; macroquad's built-in font when None
    pub font: Option<Font>,
}

impl MacroquadDisplay {
    /// Creates a display, loading the font at `font_path` if one is given.
    pub fn new(tile_size: f32, font_path: Option<&Path>) -> SprawlResult<Self> {
        let font = match font_path {
            Some(path) => Some(load_font(path)?),
            None => None,
        };

        Ok(Self {
            tile_size,
            viewport: Viewport::default(),
            font,
        })
    }

    /// Screen size in pixels: the viewport and stats panel side by side, with
    /// the message log underneath.
    pub fn screen_size(tile_size: f32) -> (f32, f32) {
        let columns = config::VIEWPORT_WIDTH + config::STATS_PANEL_WIDTH;
        let rows = config::VIEWPORT_HEIGHT + config::MESSAGE_LOG_HEIGHT;
        (columns as f32 * tile_size, rows as f32 * tile_size)
    }

    /// Renders the screen the game is currently on.
    pub fn render(&self, game: &Game) {
        clear_background(BLACK);

        if game.is_playing() {
            self.render_map(game);
            self.render_player(game);
            self.render_stats_panel(game);
            self.render_message_log(game);
        } else {
            self.render_title_screen();
        }
    }

    /// Draws the title art and instructions.
    fn render_title_screen(&self) {
        let line_height = self.tile_size;
        let start_y = 5.0 * line_height;

        for (i, line) in ui::TITLE_ART.iter().enumerate() {
            self.center_text(line, start_y + i as f32 * line_height, YELLOW);
        }

        let meta_y = start_y + (ui::TITLE_ART.len() + 3) as f32 * line_height;
        self.center_text(ui::TITLE_SUBTITLE, meta_y, WHITE);
        self.center_text(ui::TITLE_COPYRIGHT, meta_y + line_height * 2.0, WHITE);

        let rows = config::VIEWPORT_HEIGHT + config::MESSAGE_LOG_HEIGHT;
        let instruction_y = (rows - 3) as f32 * line_height;
        self.center_text(ui::TITLE_INSTRUCTION, instruction_y, YELLOW);
    }

    /// Draws every tile inside the viewport.
    fn render_map(&self, game: &Game) {
        let bounds = self.viewport.bounds_for(game);

        for pos in bounds.positions() {
            if let Some(tile) = game.tile_at(pos) {
                let screen = bounds.to_screen(pos);
                self.draw_glyph(tile.glyph, screen, ui::resolve_color(tile.color));
            }
        }
    }

    fn render_player(&self, game: &Game) {
        let player = game.player();
        let screen = self.viewport.player_screen_position(game);
        self.draw_glyph(player.glyph, screen, ui::palette(player.color));
    }

    /// Draws the stats panel to the right of the viewport.
    fn render_stats_panel(&self, game: &Game) {
        let panel_x = self.viewport.width as f32 * self.tile_size;

        for (i, line) in ui::stats_lines(game).iter().enumerate() {
            let color = if i == 0 { YELLOW } else { WHITE };
            self.draw_text_at(line, panel_x, i as f32 * self.tile_size, color);
        }
    }

    /// Draws the separator and message log below the viewport.
    fn render_message_log(&self, game: &Game) {
        let log_row = self.viewport.height;
        let columns = self.viewport.width + config::STATS_PANEL_WIDTH;

        for x in 0..columns {
            self.draw_glyph('=', Position::new(x, log_row), YELLOW);
        }

        for (i, line) in ui::message_lines(game).iter().enumerate() {
            let y = (log_row + 1 + i as i32) as f32 * self.tile_size;
            self.draw_text_at(line, self.tile_size, y, YELLOW);
        }
    }

    /// Draws one glyph at tile coordinates.
    fn draw_glyph(&self, glyph: char, tile: Position, color: Color) {
        let mut buffer = [0u8; 4];
        self.draw_text_at(
            glyph.encode_utf8(&mut buffer),
            tile.x as f32 * self.tile_size,
            tile.y as f32 * self.tile_size,
            color,
        );
    }

    /// Draws text with its top-left corner at pixel coordinates.
    fn draw_text_at(&self, text: &str, x: f32, y: f32, color: Color) {
        draw_text_ex(
            text,
            x,
            // macroquad positions text by its baseline
            y + self.tile_size * 0.8,
            TextParams {
                font: self.font.as_ref(),
                font_size: self.tile_size as u16,
                color,
                ..Default::default()
            },
        );
    }

    /// Draws text horizontally centered on the screen.
    fn center_text(&self, text: &str, y: f32, color: Color) {
        let (screen_width, _) = Self::screen_size(self.tile_size);
        let dimensions = measure_text(text, self.font.as_ref(), self.tile_size as u16, 1.0);
        let x = (screen_width - dimensions.width) / 2.0;
        self.draw_text_at(text, x, y, color);
    }
}

/// Reads a font file, distinguishing a missing file from other I/O errors.
pub fn read_font_bytes(path: &Path) -> SprawlResult<Vec<u8>> {
    if !path.exists() {
        return Err(SprawlError::FontNotFound(path.to_path_buf()));
    }
    Ok(std::fs::read(path)?)
}

/// Loads a TTF font for rendering.
pub fn load_font(path: &Path) -> SprawlResult<Font> {
    let bytes = read_font_bytes(path)?;
    let font = load_ttf_font_from_bytes(&bytes)
        .map_err(|e| SprawlError::FontParseFailed(format!("{}: {:?}", path.display(), e)))?;
    log::info!("Loaded font {}", path.display());
    Ok(font)
}
