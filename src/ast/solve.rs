//! Recursive tree evaluation.
//!
//! Evaluation is pure: it reads slot content and never mutates it, so it is
//! safe to call after every input event.

use thiserror::Error;
use tracing::trace;
use crate::ternary::{Operator, Trit};
use crate::ast::node::NodeId;
use crate::ast::template::AstTemplate;

/// Evaluate the subtree rooted at `node`.
///
/// The left child is evaluated before the right one, so an incomplete tree
/// reports its leftmost empty slot.
pub fn solve(template: &AstTemplate, node: NodeId) -> Result<Trit, SolveError> {
    match node {
        NodeId::Value(i) => {
            let leaf = template
                .value_slots()
                .get(i)
                .ok_or(SolveError::MalformedNode(node))?;
            leaf.value().ok_or(SolveError::UnassignedSlot(node))
        }
        NodeId::Operator(i) => {
            let interior = template
                .operator_slots()
                .get(i)
                .ok_or(SolveError::MalformedNode(node))?;
            let op = interior
                .operator()
                .ok_or(SolveError::UnassignedOperator(node))?;

            let result = match (op, interior.right()) {
                (Operator::Not, None) => solve(template, interior.left())?.not(),
                (Operator::Not, Some(_)) | (_, None) => {
                    return Err(SolveError::MalformedNode(node));
                }
                (binary, Some(right)) => {
                    let lhs = solve(template, interior.left())?;
                    let rhs = solve(template, right)?;
                    binary
                        .apply(lhs, Some(rhs))
                        .ok_or(SolveError::MalformedNode(node))?
                }
            };

            trace!(%node, %op, %result, "solved operator node");
            Ok(result)
        }
    }
}

/// Does the tree evaluate to the template's answer?
///
/// Incomplete trees are an error, never a wrong answer.
pub fn check(template: &AstTemplate) -> Result<bool, SolveError> {
    Ok(solve(template, template.root())? == template.answer())
}

/// Errors that can occur while evaluating a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("value slot {0} is unassigned")]
    UnassignedSlot(NodeId),

    #[error("operator slot {0} is unassigned")]
    UnassignedOperator(NodeId),

    #[error("node {0} is malformed")]
    MalformedNode(NodeId),
}

impl SolveError {
    /// The player has not filled everything yet.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, SolveError::UnassignedSlot(_) | SolveError::UnassignedOperator(_))
    }

    pub fn node(&self) -> NodeId {
        match *self {
            SolveError::UnassignedSlot(id)
            | SolveError::UnassignedOperator(id)
            | SolveError::MalformedNode(id) => id,
        }
    }
}
