//! Named puzzles.
//!
//! Each entry pairs a template constructor with the fill its designer had
//! in mind. Solutions address slots by binding position and only list the
//! slots that are not locked.

use thiserror::Error;
use tracing::debug;
use crate::ternary::{Operator, Trit};
use crate::ast::{
    factory, AstTemplate, ComplexOperators, SlotError, SlotState, TemplateBuilder, TemplateError,
};

/// Designer-intended fill for the open slots of a puzzle.
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    pub values: &'static [(usize, Trit)],
    pub operators: &'static [(usize, Operator)],
}

/// A catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct Puzzle {
    pub name: &'static str,
    pub description: &'static str,
    pub solution: Solution,
    build: fn() -> Result<AstTemplate, TemplateError>,
}

impl Puzzle {
    /// Build a fresh template.
    pub fn template(&self) -> Result<AstTemplate, CatalogError> {
        debug!(puzzle = self.name, "building template");
        Ok((self.build)()?)
    }

    /// Build a fresh template with the intended solution filled in.
    pub fn solved_template(&self) -> Result<AstTemplate, CatalogError> {
        let mut template = self.template()?;
        for &(slot, value) in self.solution.values {
            template
                .value_slot_mut(slot)
                .ok_or(CatalogError::NoSuchSlot(slot))?
                .set_value(value)?;
        }
        for &(slot, op) in self.solution.operators {
            template
                .operator_slot_mut(slot)
                .ok_or(CatalogError::NoSuchSlot(slot))?
                .set_operator(op)?;
        }
        Ok(template)
    }
}

/// All catalog puzzles in presentation order.
pub fn all() -> &'static [Puzzle] {
    &PUZZLES
}

/// Look a puzzle up by name.
pub fn find(name: &str) -> Result<&'static Puzzle, CatalogError> {
    PUZZLES
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| CatalogError::UnknownPuzzle(name.to_string()))
}

static PUZZLES: [Puzzle; 12] = [
    Puzzle {
        name: "neutral-or-x",
        description: "1 OR X = 2 with the operator locked",
        solution: Solution { values: &[(1, Trit::True)], operators: &[] },
        build: neutral_or_x,
    },
    Puzzle {
        name: "neutral-or-x-unlocked",
        description: "1 OR X = 2 with the operator open",
        solution: Solution { values: &[(1, Trit::True)], operators: &[(0, Operator::Or)] },
        build: neutral_or_x_unlocked,
    },
    Puzzle {
        name: "and-or-neutral-xy",
        description: "(1 OR X) AND Y = 2",
        solution: Solution { values: &[(1, Trit::True), (2, Trit::True)], operators: &[] },
        build: and_or_neutral_xy,
    },
    Puzzle {
        name: "or-x-and-false-y",
        description: "X OR (0 AND Y) = 1",
        solution: Solution { values: &[(0, Trit::Neutral), (2, Trit::False)], operators: &[] },
        build: or_x_and_false_y,
    },
    Puzzle {
        name: "complex-xor-and-or",
        description: "(X AND Y) XOR (1 OR Z) = 0",
        solution: Solution {
            values: &[(0, Trit::True), (1, Trit::True), (3, Trit::True)],
            operators: &[],
        },
        build: complex_xor_and_or,
    },
    Puzzle {
        name: "not-x",
        description: "NOT X = 2",
        solution: Solution { values: &[(0, Trit::False)], operators: &[] },
        build: not_x,
    },
    Puzzle {
        name: "not-x-and-y",
        description: "(NOT X) ? Y = 1, find the operator",
        solution: Solution {
            values: &[(0, Trit::Neutral), (1, Trit::True)],
            operators: &[(1, Operator::And)],
        },
        build: not_x_and_y,
    },
    Puzzle {
        name: "imply-xy-unlocked",
        description: "X IMPLY Y = 1 with the operator open",
        solution: Solution {
            values: &[(0, Trit::Neutral), (1, Trit::Neutral)],
            operators: &[(0, Operator::Imply)],
        },
        build: imply_xy_unlocked,
    },
    Puzzle {
        name: "find-operator",
        description: "2 ? 1 = 1, pick the operator",
        solution: Solution { values: &[], operators: &[(0, Operator::And)] },
        build: find_operator,
    },
    Puzzle {
        name: "calculate-result",
        description: "(X OR 1) AND (Y XOR 2) = 1",
        solution: Solution { values: &[(0, Trit::False), (2, Trit::False)], operators: &[] },
        build: calculate_result,
    },
    Puzzle {
        name: "x-and-y-or-z",
        description: "(X AND 2) OR 0 = 2",
        solution: Solution { values: &[(0, Trit::True)], operators: &[] },
        build: x_and_y_or_z,
    },
    Puzzle {
        name: "not-xor-xy",
        description: "NOT (1 XOR Y) = 0, the XOR may be swapped",
        solution: Solution { values: &[(1, Trit::True)], operators: &[(0, Operator::Or)] },
        build: not_xor_xy,
    },
];

fn neutral_or_x() -> Result<AstTemplate, TemplateError> {
    factory::binary(Operator::Or, Trit::True, true, [Some(Trit::Neutral), None])
}

fn neutral_or_x_unlocked() -> Result<AstTemplate, TemplateError> {
    factory::binary(Operator::Or, Trit::True, false, [Some(Trit::Neutral), None])
}

fn and_or_neutral_xy() -> Result<AstTemplate, TemplateError> {
    factory::chain_left(
        [Operator::Or, Operator::And],
        Trit::True,
        true,
        [Some(Trit::Neutral), None, None],
    )
}

fn or_x_and_false_y() -> Result<AstTemplate, TemplateError> {
    factory::chain_right(
        [Operator::Or, Operator::And],
        Trit::Neutral,
        true,
        [None, Some(Trit::False), None],
    )
}

fn complex_xor_and_or() -> Result<AstTemplate, TemplateError> {
    factory::complex(
        ComplexOperators { left: Operator::And, right: Operator::Or, root: Operator::Xor },
        Trit::False,
        true,
        [None, None, Some(Trit::Neutral), None],
    )
}

fn not_x() -> Result<AstTemplate, TemplateError> {
    factory::unary(Operator::Not, Trit::True, true, [None])
}

fn not_x_and_y() -> Result<AstTemplate, TemplateError> {
    let mut b = TemplateBuilder::new();
    let y = b.open_value();
    let x = b.open_value();
    let not = b.operator(SlotState::Locked(Operator::Not), x, None)?;
    let and = b.operator(SlotState::Unset, not, Some(y))?;
    // X binds to value slot 0 even though Y was created first.
    b.finish_ordered(and, Trit::Neutral, &[x, y], &[not, and])
}

fn imply_xy_unlocked() -> Result<AstTemplate, TemplateError> {
    factory::binary(Operator::Imply, Trit::Neutral, false, [None, None])
}

fn find_operator() -> Result<AstTemplate, TemplateError> {
    factory::binary(Operator::Or, Trit::Neutral, false, [Some(Trit::True), Some(Trit::Neutral)])
}

fn calculate_result() -> Result<AstTemplate, TemplateError> {
    factory::complex(
        ComplexOperators { left: Operator::Or, right: Operator::Xor, root: Operator::And },
        Trit::Neutral,
        true,
        [None, Some(Trit::Neutral), None, Some(Trit::True)],
    )
}

fn x_and_y_or_z() -> Result<AstTemplate, TemplateError> {
    let mut b = TemplateBuilder::new();
    let x = b.open_value();
    let y = b.open_value();
    let z = b.open_value();
    b.lock_value(y, Trit::True)?;
    b.lock_value(z, Trit::False)?;

    let and = b.operator(SlotState::Unset, x, Some(y))?;
    b.lock_operator(and, Operator::And)?;
    let or = b.operator(SlotState::Unset, and, Some(z))?;
    b.lock_operator(or, Operator::Or)?;

    b.finish(or, Trit::True)
}

fn not_xor_xy() -> Result<AstTemplate, TemplateError> {
    let mut b = TemplateBuilder::new();
    let x = b.locked_value(Trit::Neutral);
    let y = b.open_value();
    let xor = b.operator(SlotState::Open(Operator::Xor), x, Some(y))?;
    let not = b.operator(SlotState::Locked(Operator::Not), xor, None)?;
    b.finish(not, Trit::False)
}

/// Errors that can occur when loading catalog puzzles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown puzzle: {0}")]
    UnknownPuzzle(String),

    #[error("template construction failed: {0}")]
    Template(#[from] TemplateError),

    #[error("solution refers to missing slot {0}")]
    NoSuchSlot(usize),

    #[error("solution touches a slot it cannot change: {0}")]
    Slot(#[from] SlotError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeId;
    use crate::ast::SolveError;

    #[test]
    fn test_every_puzzle_builds() {
        for puzzle in all() {
            assert!(puzzle.template().is_ok(), "{} failed to build", puzzle.name);
        }
    }

    #[test]
    fn test_every_intended_solution_checks() {
        for puzzle in all() {
            let template = puzzle.solved_template().unwrap();
            assert_eq!(template.check(), Ok(true), "{} does not reach its answer", puzzle.name);
        }
    }

    #[test]
    fn test_unsolved_puzzles_are_not_wrong_but_incomplete() {
        let template = find("neutral-or-x").unwrap().template().unwrap();
        assert_eq!(template.check(), Err(SolveError::UnassignedSlot(NodeId::Value(1))));

        let template = find("not-x-and-y").unwrap().template().unwrap();
        assert!(template.check().unwrap_err().is_incomplete());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = all().iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_unknown_puzzle() {
        assert_eq!(
            find("no-such-puzzle").unwrap_err(),
            CatalogError::UnknownPuzzle("no-such-puzzle".into())
        );
    }

    #[test]
    fn test_explicit_slot_order() {
        let t = find("not-x-and-y").unwrap().template().unwrap();
        let not = &t.operator_slots()[0];
        assert_eq!(not.operator(), Some(Operator::Not));
        assert_eq!(not.left(), NodeId::Value(0));
        assert_eq!(t.operator_slots()[1].right(), Some(NodeId::Value(1)));
    }

    #[test]
    fn test_not_xor_needs_operator_swap() {
        let mut t = find("not-xor-xy").unwrap().template().unwrap();
        // Neutral absorbs XOR, so no value of Y works without swapping it.
        for y in Trit::ALL {
            t.value_slot_mut(1).unwrap().set_value(y).unwrap();
            assert_eq!(t.check(), Ok(false));
        }
        t.operator_slot_mut(0).unwrap().set_operator(Operator::Or).unwrap();
        t.value_slot_mut(1).unwrap().set_value(Trit::True).unwrap();
        assert_eq!(t.check(), Ok(true));
    }

    #[test]
    fn test_locked_slots_are_untouched_by_solution() {
        for puzzle in all() {
            let t = puzzle.template().unwrap();
            for &(slot, _) in puzzle.solution.values {
                assert!(!t.value_slots()[slot].is_locked(), "{} v{}", puzzle.name, slot);
            }
            for &(slot, _) in puzzle.solution.operators {
                assert!(!t.operator_slots()[slot].is_locked(), "{} o{}", puzzle.name, slot);
            }
        }
    }
}
