//! # Ternary Puzzle
//!
//! Expression puzzles over three-valued logic (False, Neutral, True).
//!
//! A puzzle is a small tree of value slots and operator slots. Each slot is
//! either locked by the designer or open for the player to fill. The solver
//! evaluates the tree to one trit, and the puzzle is solved when that trit
//! matches the template's answer.

pub mod ternary;
pub mod ast;
pub mod catalog;
pub mod config;
pub mod play;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use ternary::{Arity, Operator, Trit, TritError};
pub use ast::{
    AstNode, AstTemplate, NodeId, OperatorSlotNode, SlotError, SlotState, SolveError,
    TemplateBuilder, TemplateError, ValueSlotNode, check, render, solve,
};
pub use catalog::{CatalogError, Puzzle};
pub use config::{Config, ConfigError};
pub use play::{PuzzleLoader, SlotEvent, SolutionChecker, Verdict};

#[cfg(feature = "tui")]
pub use tui::run_player;
