//! Three-valued logic primitives.
//!
//! This module provides the core types for working with ternary logic:
//! - [`Trit`] - A single truth value (False, Neutral, True)
//! - [`Operator`] - The five logic operators (NOT, AND, OR, XOR, IMPLY)

mod trit;
mod ops;

pub use trit::{Trit, TritError};
pub use ops::{Arity, Operator};
