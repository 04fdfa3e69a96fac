//! Hand-wired template construction.
//!
//! The canned factories cover the common puzzle shapes; anything else is
//! assembled node by node here. Children must exist before their parent, so
//! the result is always acyclic. The builder additionally guarantees that
//! every node has exactly one parent except the root.

use thiserror::Error;
use crate::ternary::{Operator, Trit};
use crate::ast::node::{NodeId, OperatorSlotNode, ValueSlotNode};
use crate::ast::slot::{SlotError, SlotState};
use crate::ast::template::AstTemplate;

/// Incremental builder for an [`AstTemplate`].
///
/// Nodes are appended to the slot lists in creation order.
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    values: Vec<ValueSlotNode>,
    operators: Vec<OperatorSlotNode>,
    value_parented: Vec<bool>,
    operator_parented: Vec<bool>,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leaf with the given slot content.
    pub fn value(&mut self, state: SlotState<Trit>) -> NodeId {
        self.values.push(ValueSlotNode::new(state));
        self.value_parented.push(false);
        NodeId::Value(self.values.len() - 1)
    }

    /// Add an empty leaf for the player to fill.
    pub fn open_value(&mut self) -> NodeId {
        self.value(SlotState::Unset)
    }

    /// Add a leaf fixed to `value`.
    pub fn locked_value(&mut self, value: Trit) -> NodeId {
        self.value(SlotState::Locked(value))
    }

    /// Add a leaf that is locked when `value` is given and open otherwise.
    pub fn preset_value(&mut self, value: Option<Trit>) -> NodeId {
        self.value(SlotState::preset(value))
    }

    /// Add an operator node over existing, still parentless children.
    ///
    /// A NOT node takes no right child; binary operators need one. An
    /// unset operator adopts the arity implied by its children.
    pub fn operator(
        &mut self,
        state: SlotState<Operator>,
        left: NodeId,
        right: Option<NodeId>,
    ) -> Result<NodeId, TemplateError> {
        self.ensure_free(left)?;
        if let Some(right) = right {
            if right == left {
                return Err(TemplateError::SharedNode(right));
            }
            self.ensure_free(right)?;
        }

        let node = OperatorSlotNode::new(state, left, right)?;

        self.mark_parented(left);
        if let Some(right) = right {
            self.mark_parented(right);
        }
        self.operators.push(node);
        self.operator_parented.push(false);
        Ok(NodeId::Operator(self.operators.len() - 1))
    }

    /// Permanently fix the value of a leaf created earlier.
    pub fn lock_value(&mut self, id: NodeId, value: Trit) -> Result<(), TemplateError> {
        let leaf = match id {
            NodeId::Value(i) => self.values.get_mut(i),
            NodeId::Operator(_) => None,
        }
        .ok_or(TemplateError::UnknownNode(id))?;
        Ok(leaf.lock_value(value)?)
    }

    /// Permanently fix the operator of a node created earlier.
    pub fn lock_operator(&mut self, id: NodeId, op: Operator) -> Result<(), TemplateError> {
        let node = match id {
            NodeId::Operator(i) => self.operators.get_mut(i),
            NodeId::Value(_) => None,
        }
        .ok_or(TemplateError::UnknownNode(id))?;
        Ok(node.lock_operator(op)?)
    }

    /// Finish with slot lists in creation order.
    pub fn finish(self, root: NodeId, answer: Trit) -> Result<AstTemplate, TemplateError> {
        self.validate_root(root)?;
        Ok(AstTemplate::from_parts(root, answer, self.values, self.operators))
    }

    /// Finish with explicit slot lists.
    ///
    /// Each list must name every node of its kind exactly once; the nodes
    /// are re-indexed so that list position becomes the binding position.
    pub fn finish_ordered(
        self,
        root: NodeId,
        answer: Trit,
        value_order: &[NodeId],
        operator_order: &[NodeId],
    ) -> Result<AstTemplate, TemplateError> {
        self.validate_root(root)?;

        let value_map = permutation(value_order, self.values.len(), |id| match id {
            NodeId::Value(i) => Some(i),
            NodeId::Operator(_) => None,
        })?;
        let operator_map = permutation(operator_order, self.operators.len(), |id| match id {
            NodeId::Operator(i) => Some(i),
            NodeId::Value(_) => None,
        })?;

        let remap = |id: NodeId| match id {
            NodeId::Value(i) => NodeId::Value(value_map[i]),
            NodeId::Operator(i) => NodeId::Operator(operator_map[i]),
        };

        let mut values: Vec<Option<ValueSlotNode>> = (0..self.values.len()).map(|_| None).collect();
        for (old, node) in self.values.into_iter().enumerate() {
            values[value_map[old]] = Some(node);
        }
        let mut operators: Vec<Option<OperatorSlotNode>> =
            (0..self.operators.len()).map(|_| None).collect();
        for (old, mut node) in self.operators.into_iter().enumerate() {
            node.remap_children(remap);
            operators[operator_map[old]] = Some(node);
        }

        Ok(AstTemplate::from_parts(
            remap(root),
            answer,
            values.into_iter().flatten().collect(),
            operators.into_iter().flatten().collect(),
        ))
    }

    fn ensure_free(&self, id: NodeId) -> Result<(), TemplateError> {
        match self.parented(id) {
            None => Err(TemplateError::UnknownNode(id)),
            Some(true) => Err(TemplateError::SharedNode(id)),
            Some(false) => Ok(()),
        }
    }

    fn parented(&self, id: NodeId) -> Option<bool> {
        match id {
            NodeId::Value(i) => self.value_parented.get(i).copied(),
            NodeId::Operator(i) => self.operator_parented.get(i).copied(),
        }
    }

    fn mark_parented(&mut self, id: NodeId) {
        match id {
            NodeId::Value(i) => self.value_parented[i] = true,
            NodeId::Operator(i) => self.operator_parented[i] = true,
        }
    }

    /// The root must be the one and only parentless node.
    fn validate_root(&self, root: NodeId) -> Result<(), TemplateError> {
        match self.parented(root) {
            None => return Err(TemplateError::UnknownNode(root)),
            Some(true) => return Err(TemplateError::RootHasParent(root)),
            Some(false) => {}
        }

        let orphan_values = self
            .value_parented
            .iter()
            .enumerate()
            .filter(|(_, p)| !**p)
            .map(|(i, _)| NodeId::Value(i));
        let orphan_operators = self
            .operator_parented
            .iter()
            .enumerate()
            .filter(|(_, p)| !**p)
            .map(|(i, _)| NodeId::Operator(i));

        match orphan_values.chain(orphan_operators).find(|id| *id != root) {
            Some(orphan) => Err(TemplateError::Unreachable(orphan)),
            None => Ok(()),
        }
    }
}

/// Build an old-index -> new-index map from an explicit ordering.
fn permutation(
    order: &[NodeId],
    len: usize,
    index_of: impl Fn(NodeId) -> Option<usize>,
) -> Result<Vec<usize>, TemplateError> {
    if order.len() != len {
        return Err(TemplateError::SlotOrder(format!(
            "expected {} entries, found {}",
            len,
            order.len()
        )));
    }

    let mut map = vec![usize::MAX; len];
    for (position, id) in order.iter().enumerate() {
        let old = index_of(*id)
            .filter(|i| *i < len)
            .ok_or(TemplateError::UnknownNode(*id))?;
        if map[old] != usize::MAX {
            return Err(TemplateError::SlotOrder(format!("{} listed twice", id)));
        }
        map[old] = position;
    }
    Ok(map)
}

/// Errors that can occur while assembling a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error(transparent)]
    Slot(#[from] SlotError),

    #[error("node {0} does not exist in this builder")]
    UnknownNode(NodeId),

    #[error("node {0} already has a parent")]
    SharedNode(NodeId),

    #[error("root {0} is a child of another node")]
    RootHasParent(NodeId),

    #[error("node {0} is not reachable from the root")]
    Unreachable(NodeId),

    #[error("invalid slot order: {0}")]
    SlotOrder(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_order_is_slot_order() {
        let mut b = TemplateBuilder::new();
        let x = b.open_value();
        let y = b.open_value();
        let not = b.operator(SlotState::Locked(Operator::Not), x, None).unwrap();
        let and = b.operator(SlotState::Unset, not, Some(y)).unwrap();
        let t = b.finish(and, Trit::Neutral).unwrap();

        assert_eq!(t.root(), NodeId::Operator(1));
        assert_eq!(t.operator_slots()[0].operator(), Some(Operator::Not));
        assert_eq!(t.operator_slots()[1].operator(), None);
        assert_eq!(t.operator_slots()[1].left(), NodeId::Operator(0));
        assert_eq!(t.operator_slots()[1].right(), Some(NodeId::Value(1)));
    }

    #[test]
    fn test_preset_value_locks() {
        let mut b = TemplateBuilder::new();
        let a = b.preset_value(Some(Trit::True));
        let c = b.preset_value(None);
        let or = b.operator(SlotState::Open(Operator::Or), a, Some(c)).unwrap();
        let t = b.finish(or, Trit::True).unwrap();

        assert_eq!(t.value_slots()[0].state(), SlotState::Locked(Trit::True));
        assert_eq!(t.value_slots()[1].state(), SlotState::Unset);
        assert_eq!(t.operator_slots()[0].state(), SlotState::Open(Operator::Or));
    }

    #[test]
    fn test_lock_after_creation() {
        let mut b = TemplateBuilder::new();
        let x = b.open_value();
        let y = b.open_value();
        b.lock_value(y, Trit::True).unwrap();
        let and = b.operator(SlotState::Unset, x, Some(y)).unwrap();
        b.lock_operator(and, Operator::And).unwrap();

        assert_eq!(
            b.lock_operator(and, Operator::Or),
            Err(TemplateError::Slot(SlotError::LockedSlot))
        );
        assert_eq!(b.lock_value(and, Trit::True), Err(TemplateError::UnknownNode(and)));

        let t = b.finish(and, Trit::True).unwrap();
        assert_eq!(t.value_slots()[1].state(), SlotState::Locked(Trit::True));
        assert_eq!(t.operator_slots()[0].state(), SlotState::Locked(Operator::And));
    }

    #[test]
    fn test_shared_child_rejected() {
        let mut b = TemplateBuilder::new();
        let x = b.open_value();
        let y = b.open_value();
        b.operator(SlotState::Locked(Operator::And), x, Some(y)).unwrap();
        let err = b.operator(SlotState::Locked(Operator::Not), x, None).unwrap_err();
        assert_eq!(err, TemplateError::SharedNode(x));
    }

    #[test]
    fn test_same_child_twice_rejected() {
        let mut b = TemplateBuilder::new();
        let x = b.open_value();
        let err = b.operator(SlotState::Locked(Operator::And), x, Some(x)).unwrap_err();
        assert_eq!(err, TemplateError::SharedNode(x));
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        let mut b = TemplateBuilder::new();
        let x = b.open_value();
        let y = b.open_value();
        assert_eq!(
            b.operator(SlotState::Locked(Operator::Not), x, Some(y)),
            Err(TemplateError::Slot(SlotError::UnexpectedOperand(Operator::Not)))
        );
        assert_eq!(
            b.operator(SlotState::Open(Operator::Imply), x, None),
            Err(TemplateError::Slot(SlotError::MissingOperand(Operator::Imply)))
        );
        // Failed attempts leave the children free.
        assert!(b.operator(SlotState::Locked(Operator::Xor), x, Some(y)).is_ok());
    }

    #[test]
    fn test_unknown_node_rejected() {
        let mut b = TemplateBuilder::new();
        let x = b.open_value();
        let err = b
            .operator(SlotState::Locked(Operator::Or), x, Some(NodeId::Value(3)))
            .unwrap_err();
        assert_eq!(err, TemplateError::UnknownNode(NodeId::Value(3)));
    }

    #[test]
    fn test_root_with_parent_rejected() {
        let mut b = TemplateBuilder::new();
        let x = b.open_value();
        b.operator(SlotState::Locked(Operator::Not), x, None).unwrap();
        assert_eq!(b.finish(x, Trit::True), Err(TemplateError::RootHasParent(x)));
    }

    #[test]
    fn test_orphan_rejected() {
        let mut b = TemplateBuilder::new();
        let x = b.open_value();
        let stray = b.open_value();
        let not = b.operator(SlotState::Locked(Operator::Not), x, None).unwrap();
        assert_eq!(b.finish(not, Trit::True), Err(TemplateError::Unreachable(stray)));
    }

    #[test]
    fn test_single_leaf_template() {
        let mut b = TemplateBuilder::new();
        let x = b.locked_value(Trit::Neutral);
        let t = b.finish(x, Trit::Neutral).unwrap();
        assert_eq!(t.check(), Ok(true));
        assert!(t.operator_slots().is_empty());
    }

    #[test]
    fn test_finish_ordered_reindexes() {
        let mut b = TemplateBuilder::new();
        let y = b.locked_value(Trit::True);
        let x = b.open_value();
        let and = b.operator(SlotState::Locked(Operator::And), x, Some(y)).unwrap();
        let t = b
            .finish_ordered(and, Trit::True, &[x, y], &[and])
            .unwrap();

        // x was created second but is bound first.
        assert_eq!(t.value_slots()[0].state(), SlotState::Unset);
        assert_eq!(t.value_slots()[1].state(), SlotState::Locked(Trit::True));
        assert_eq!(t.operator_slots()[0].left(), NodeId::Value(0));
        assert_eq!(t.operator_slots()[0].right(), Some(NodeId::Value(1)));
    }

    #[test]
    fn test_finish_ordered_rejects_bad_orders() {
        let build = || {
            let mut b = TemplateBuilder::new();
            let x = b.open_value();
            let y = b.open_value();
            let or = b.operator(SlotState::Locked(Operator::Or), x, Some(y)).unwrap();
            (b, x, or)
        };

        let (b, x, or) = build();
        assert!(matches!(
            b.finish_ordered(or, Trit::True, &[x], &[or]),
            Err(TemplateError::SlotOrder(_))
        ));

        let (b, x, or) = build();
        assert!(matches!(
            b.finish_ordered(or, Trit::True, &[x, x], &[or]),
            Err(TemplateError::SlotOrder(_))
        ));

        let (b, x, or) = build();
        assert_eq!(
            b.finish_ordered(or, Trit::True, &[x, or], &[or]),
            Err(TemplateError::UnknownNode(or))
        );
    }
}
