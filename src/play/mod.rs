//! Adapter layer between front-ends and the puzzle kernel.
//!
//! - [`PuzzleLoader`] owns the active template
//! - [`SlotEvent`] carries player input to slot setters
//! - [`SolutionChecker`] judges submitted attempts

pub mod loader;
pub mod input;
pub mod checker;

pub use loader::{PuzzleInfo, PuzzleLoader};
pub use input::{apply_event, InputError, InputOutcome, SlotEvent};
pub use checker::{current_result, SolutionChecker, Verdict};
