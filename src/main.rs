//! # Sprawlrunner Main Entry Point
//!
//! Parses the command line, initializes logging, builds the game and runs the
//! macroquad frame loop.

use clap::Parser;
use macroquad::prelude::*;
use sprawlrunner::{config, Game, InputHandler, MacroquadDisplay, MapLayout, SprawlResult};
use std::path::PathBuf;

/// Command line arguments for Sprawlrunner.
#[derive(Parser, Debug)]
#[command(name = "sprawlrunner")]
#[command(about = "A cyberpunk roguelike")]
#[command(version)]
struct Args {
    /// Map width in tiles; builds a single bordered room instead of the fixed layout
    #[arg(long, requires = "height")]
    width: Option<i32>,

    /// Map height in tiles; builds a single bordered room instead of the fixed layout
    #[arg(long, requires = "width")]
    height: Option<i32>,

    /// TTF font used for glyphs and text
    #[arg(long)]
    font: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn layout(&self) -> MapLayout {
        match (self.width, self.height) {
            (Some(width), Some(height)) => MapLayout::BoundedRoom { width, height },
            _ => MapLayout::FixedRooms,
        }
    }
}

fn window_conf() -> Conf {
    let (width, height) = MacroquadDisplay::screen_size(config::TILE_SIZE);
    Conf {
        window_title: "Sprawlrunner".to_string(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> SprawlResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    log::info!("Starting Sprawlrunner v{}", sprawlrunner::VERSION);

    let result = run_game(&args).await;
    if let Err(e) = &result {
        log::error!("Error running game: {}", e);
    }
    result
}

/// Initializes the logger; `RUST_LOG` takes precedence over `--log-level`.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

/// Runs the frame loop until the player quits.
async fn run_game(args: &Args) -> SprawlResult<()> {
    let mut game = Game::from_layout(args.layout())?;
    let display = MacroquadDisplay::new(config::TILE_SIZE, args.font.as_deref())?;
    let input_handler = InputHandler::new();

    loop {
        if let Some(input) = input_handler.get_input(&game) {
            if input.apply(&mut game) {
                break;
            }
        }

        display.render(&game);

        next_frame().await;
    }

    log::info!("Game loop ended after {} turns", game.turn_count());
    Ok(())
}
