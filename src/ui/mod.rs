//! GUI module for peg gomoku
//!
//! This module provides a native Rust GUI using egui/eframe. It drives a
//! [`crate::Session`] and redraws from the events the session emits.

mod app;
mod board_view;
mod hud;
mod theme;

pub use app::GomokuApp;
pub use hud::Hud;
