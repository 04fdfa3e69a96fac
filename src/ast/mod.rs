//! Slot trees over ternary logic.
//!
//! This module implements the puzzle kernel:
//! - Value and operator slot nodes, each locked or open
//! - A recursive solver producing one trit per tree
//! - Templates pairing a tree with its expected answer
//! - Factories and a builder for assembling templates

pub mod slot;
pub mod node;
pub mod template;
pub mod builder;
pub mod solve;
pub mod factory;
pub mod render;

pub use slot::{SlotError, SlotState};
pub use node::{AstNode, NodeId, OperatorSlotNode, ValueSlotNode};
pub use template::AstTemplate;
pub use builder::{TemplateBuilder, TemplateError};
pub use solve::{check, solve, SolveError};
pub use factory::ComplexOperators;
pub use render::{render, render_with_slots};
