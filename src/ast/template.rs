//! Puzzle template: a slot tree, its expected answer and the ordered slot
//! lists that front-ends bind to.

use serde::Serialize;
use crate::ternary::Trit;
use crate::ast::node::{AstNode, NodeId, OperatorSlotNode, ValueSlotNode};
use crate::ast::solve::{self, SolveError};

/// A complete puzzle.
///
/// The template owns every node of its tree. `value_slots` and
/// `operator_slots` are in binding order: position `i` is what the `i`-th
/// slot view of that kind is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AstTemplate {
    root: NodeId,
    answer: Trit,
    value_slots: Vec<ValueSlotNode>,
    operator_slots: Vec<OperatorSlotNode>,
}

impl AstTemplate {
    /// Assemble from parts that the builder has already validated.
    pub(crate) fn from_parts(
        root: NodeId,
        answer: Trit,
        value_slots: Vec<ValueSlotNode>,
        operator_slots: Vec<OperatorSlotNode>,
    ) -> Self {
        Self { root, answer, value_slots, operator_slots }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn answer(&self) -> Trit {
        self.answer
    }

    pub fn value_slots(&self) -> &[ValueSlotNode] {
        &self.value_slots
    }

    pub fn operator_slots(&self) -> &[OperatorSlotNode] {
        &self.operator_slots
    }

    /// Mutable access to a leaf for input handling.
    ///
    /// Only the node's own setters are reachable from here, so lock checks
    /// always apply.
    pub fn value_slot_mut(&mut self, index: usize) -> Option<&mut ValueSlotNode> {
        self.value_slots.get_mut(index)
    }

    pub fn operator_slot_mut(&mut self, index: usize) -> Option<&mut OperatorSlotNode> {
        self.operator_slots.get_mut(index)
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<AstNode<'_>> {
        match id {
            NodeId::Value(i) => self.value_slots.get(i).map(AstNode::Value),
            NodeId::Operator(i) => self.operator_slots.get(i).map(AstNode::Operator),
        }
    }

    /// Evaluate the whole tree.
    pub fn solve(&self) -> Result<Trit, SolveError> {
        solve::solve(self, self.root)
    }

    /// Compare the tree's value against the expected answer.
    pub fn check(&self) -> Result<bool, SolveError> {
        solve::check(self)
    }

    /// True once every value slot and operator slot holds something.
    pub fn is_complete(&self) -> bool {
        self.value_slots.iter().all(|v| v.value().is_some())
            && self.operator_slots.iter().all(|o| o.operator().is_some())
    }

    /// Indices of value slots the player may still change.
    pub fn open_value_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.value_slots
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_locked())
            .map(|(i, _)| i)
    }

    /// Indices of operator slots the player may still change.
    pub fn open_operator_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.operator_slots
            .iter()
            .enumerate()
            .filter(|(_, o)| !o.is_locked())
            .map(|(i, _)| i)
    }
}
