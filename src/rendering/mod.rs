//! # Rendering Module
//!
//! Everything that turns a [`Game`](crate::Game) into pixels. Only
//! [`viewport`] carries logic worth testing; the rest hands glyphs and text to
//! macroquad.

pub mod display;
pub mod ui;
pub mod viewport;

pub use display::*;
pub use viewport::*;
