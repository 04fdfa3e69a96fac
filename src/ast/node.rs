//! Value and operator slot nodes.
//!
//! Nodes live in the arenas of an [`AstTemplate`](crate::ast::AstTemplate)
//! and refer to their children by [`NodeId`]. Children are wired once by
//! the builder; after that only slot content may change.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::ternary::{Arity, Operator, Trit};
use crate::ast::slot::{SlotError, SlotState};

/// Address of a node inside its template.
///
/// The index is the node's position in the matching slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeId {
    Value(usize),
    Operator(usize),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Value(i) => write!(f, "v{}", i),
            NodeId::Operator(i) => write!(f, "o{}", i),
        }
    }
}

/// Leaf node holding a trit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueSlotNode {
    state: SlotState<Trit>,
}

impl ValueSlotNode {
    pub(crate) fn new(state: SlotState<Trit>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> SlotState<Trit> {
        self.state
    }

    pub fn value(&self) -> Option<Trit> {
        self.state.value()
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// Replace the value. Fails on a locked slot and leaves it unchanged.
    pub fn set_value(&mut self, value: Trit) -> Result<(), SlotError> {
        self.state.set(value)
    }

    pub(crate) fn lock_value(&mut self, value: Trit) -> Result<(), SlotError> {
        self.state.lock(value)
    }
}

/// Interior node applying an operator to one or two children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorSlotNode {
    state: SlotState<Operator>,
    left: NodeId,
    right: Option<NodeId>,
}

impl OperatorSlotNode {
    /// Build a node, rejecting an operator whose arity does not fit the
    /// children.
    pub(crate) fn new(
        state: SlotState<Operator>,
        left: NodeId,
        right: Option<NodeId>,
    ) -> Result<Self, SlotError> {
        if let Some(op) = state.value() {
            check_arity(op, right.is_some())?;
        }
        Ok(Self { state, left, right })
    }

    pub fn state(&self) -> SlotState<Operator> {
        self.state
    }

    pub fn operator(&self) -> Option<Operator> {
        self.state.value()
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    pub fn left(&self) -> NodeId {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Arity dictated by the node's children.
    pub fn arity(&self) -> Arity {
        if self.right.is_some() { Arity::Binary } else { Arity::Unary }
    }

    /// Replace the operator.
    ///
    /// The node's shape is fixed: NOT is rejected when a right child is
    /// present, and a binary operator is rejected when it is absent. On any
    /// error the node is left unchanged.
    pub fn set_operator(&mut self, op: Operator) -> Result<(), SlotError> {
        if self.is_locked() {
            return Err(SlotError::LockedSlot);
        }
        check_arity(op, self.right.is_some())?;
        self.state.set(op)
    }

    pub(crate) fn lock_operator(&mut self, op: Operator) -> Result<(), SlotError> {
        if self.is_locked() {
            return Err(SlotError::LockedSlot);
        }
        check_arity(op, self.right.is_some())?;
        self.state.lock(op)
    }

    pub(crate) fn remap_children(&mut self, map: impl Fn(NodeId) -> NodeId) {
        self.left = map(self.left);
        self.right = self.right.map(&map);
    }
}

fn check_arity(op: Operator, has_right: bool) -> Result<(), SlotError> {
    match (op.arity(), has_right) {
        (Arity::Unary, true) => Err(SlotError::UnexpectedOperand(op)),
        (Arity::Binary, false) => Err(SlotError::MissingOperand(op)),
        _ => Ok(()),
    }
}

/// Borrowed view of either node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstNode<'a> {
    Value(&'a ValueSlotNode),
    Operator(&'a OperatorSlotNode),
}

impl AstNode<'_> {
    pub fn is_locked(&self) -> bool {
        match self {
            AstNode::Value(node) => node.is_locked(),
            AstNode::Operator(node) => node.is_locked(),
        }
    }
}
