//! Terminal player for ternary puzzles.
//!
//! Provides an interactive terminal front-end with:
//! - The rendered expression with slot positions
//! - A slot list with cursor and lock markers
//! - Live evaluation of the left side
//! - Check/reset/next-puzzle controls

mod app;
mod ui;

pub use app::{PlayerApp, run_player};
