//! Canned puzzle shapes.
//!
//! Every factory takes the operator(s), the expected answer, an operator
//! lock flag and one optional preset per leaf. A preset leaf is locked; a
//! leaf without one is left empty for the player. When `lock_operators` is
//! false the operators start out open, so the player may replace them.
//!
//! Slot lists follow construction order: leaves left to right, operators
//! bottom-up (children before parents, left subtree before right).

use crate::ternary::{Operator, Trit};
use crate::ast::builder::{TemplateBuilder, TemplateError};
use crate::ast::node::NodeId;
use crate::ast::slot::SlotState;
use crate::ast::template::AstTemplate;

/// Operators of the three-operator shape `root(left(a, b), right(c, d))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexOperators {
    pub left: Operator,
    pub right: Operator,
    pub root: Operator,
}

fn operator_state(op: Operator, lock: bool) -> SlotState<Operator> {
    if lock { SlotState::Locked(op) } else { SlotState::Open(op) }
}

fn leaves<const N: usize>(b: &mut TemplateBuilder, presets: [Option<Trit>; N]) -> [NodeId; N] {
    presets.map(|preset| b.preset_value(preset))
}

/// `left op right`.
pub fn binary(
    op: Operator,
    answer: Trit,
    lock_operator: bool,
    values: [Option<Trit>; 2],
) -> Result<AstTemplate, TemplateError> {
    let mut b = TemplateBuilder::new();
    let [left, right] = leaves(&mut b, values);
    let root = b.operator(operator_state(op, lock_operator), left, Some(right))?;
    b.finish(root, answer)
}

/// `op value`. Only NOT is unary; any other operator is rejected.
pub fn unary(
    op: Operator,
    answer: Trit,
    lock_operator: bool,
    values: [Option<Trit>; 1],
) -> Result<AstTemplate, TemplateError> {
    let mut b = TemplateBuilder::new();
    let [value] = leaves(&mut b, values);
    let root = b.operator(operator_state(op, lock_operator), value, None)?;
    b.finish(root, answer)
}

/// `(a op1 b) op2 c`. Operator slots: `[op1, op2]`.
pub fn chain_left(
    ops: [Operator; 2],
    answer: Trit,
    lock_operators: bool,
    values: [Option<Trit>; 3],
) -> Result<AstTemplate, TemplateError> {
    let [op1, op2] = ops;
    let mut b = TemplateBuilder::new();
    let [a, bv, c] = leaves(&mut b, values);
    let inner = b.operator(operator_state(op1, lock_operators), a, Some(bv))?;
    let root = b.operator(operator_state(op2, lock_operators), inner, Some(c))?;
    b.finish(root, answer)
}

/// `a op1 (b op2 c)`. Operator slots: `[op2, op1]` (inner first).
pub fn chain_right(
    ops: [Operator; 2],
    answer: Trit,
    lock_operators: bool,
    values: [Option<Trit>; 3],
) -> Result<AstTemplate, TemplateError> {
    let [op1, op2] = ops;
    let mut b = TemplateBuilder::new();
    let [a, bv, c] = leaves(&mut b, values);
    let inner = b.operator(operator_state(op2, lock_operators), bv, Some(c))?;
    let root = b.operator(operator_state(op1, lock_operators), a, Some(inner))?;
    b.finish(root, answer)
}

/// `(a left b) root (c right d)`. Operator slots: `[left, right, root]`.
pub fn complex(
    ops: ComplexOperators,
    answer: Trit,
    lock_operators: bool,
    values: [Option<Trit>; 4],
) -> Result<AstTemplate, TemplateError> {
    let mut b = TemplateBuilder::new();
    let [a, bv, c, d] = leaves(&mut b, values);
    let left = b.operator(operator_state(ops.left, lock_operators), a, Some(bv))?;
    let right = b.operator(operator_state(ops.right, lock_operators), c, Some(d))?;
    let root = b.operator(operator_state(ops.root, lock_operators), left, Some(right))?;
    b.finish(root, answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::slot::SlotError;

    fn fill(t: &mut AstTemplate, values: &[(usize, Trit)]) {
        for (i, v) in values {
            t.value_slot_mut(*i).unwrap().set_value(*v).unwrap();
        }
    }

    #[test]
    fn test_binary_locking() {
        let t = binary(Operator::Xor, Trit::True, true, [Some(Trit::True), None]).unwrap();
        assert!(t.value_slots()[0].is_locked());
        assert!(!t.value_slots()[1].is_locked());
        assert_eq!(t.operator_slots()[0].state(), SlotState::Locked(Operator::Xor));

        let t = binary(Operator::Xor, Trit::True, false, [None, None]).unwrap();
        assert_eq!(t.operator_slots()[0].state(), SlotState::Open(Operator::Xor));
    }

    #[test]
    fn test_binary_rejects_not() {
        assert_eq!(
            binary(Operator::Not, Trit::True, true, [None, None]),
            Err(TemplateError::Slot(SlotError::UnexpectedOperand(Operator::Not)))
        );
    }

    #[test]
    fn test_unary_rejects_binary_operator() {
        assert_eq!(
            unary(Operator::And, Trit::True, true, [None]),
            Err(TemplateError::Slot(SlotError::MissingOperand(Operator::And)))
        );
    }

    #[test]
    fn test_unary_shape() {
        let t = unary(Operator::Not, Trit::True, true, [None]).unwrap();
        let not = &t.operator_slots()[0];
        assert_eq!(not.left(), NodeId::Value(0));
        assert_eq!(not.right(), None);
    }

    #[test]
    fn test_chain_left_shape_and_answer() {
        // (1 OR X) AND Y = 2, intended X = 2, Y = 2
        let mut t = chain_left(
            [Operator::Or, Operator::And],
            Trit::True,
            true,
            [Some(Trit::Neutral), None, None],
        )
        .unwrap();

        let ops = t.operator_slots();
        assert_eq!(ops[0].operator(), Some(Operator::Or));
        assert_eq!(ops[0].left(), NodeId::Value(0));
        assert_eq!(ops[0].right(), Some(NodeId::Value(1)));
        assert_eq!(ops[1].operator(), Some(Operator::And));
        assert_eq!(ops[1].left(), NodeId::Operator(0));
        assert_eq!(ops[1].right(), Some(NodeId::Value(2)));
        assert_eq!(t.root(), NodeId::Operator(1));

        fill(&mut t, &[(1, Trit::True), (2, Trit::True)]);
        assert_eq!(t.check(), Ok(true));
    }

    #[test]
    fn test_chain_right_shape_and_answer() {
        // X OR (0 AND Y) = 1, intended X = 1
        let mut t = chain_right(
            [Operator::Or, Operator::And],
            Trit::Neutral,
            true,
            [None, Some(Trit::False), None],
        )
        .unwrap();

        let ops = t.operator_slots();
        assert_eq!(ops[0].operator(), Some(Operator::And));
        assert_eq!(ops[0].left(), NodeId::Value(1));
        assert_eq!(ops[0].right(), Some(NodeId::Value(2)));
        assert_eq!(ops[1].operator(), Some(Operator::Or));
        assert_eq!(ops[1].left(), NodeId::Value(0));
        assert_eq!(ops[1].right(), Some(NodeId::Operator(0)));

        fill(&mut t, &[(0, Trit::Neutral), (2, Trit::False)]);
        assert_eq!(t.check(), Ok(true));
    }

    #[test]
    fn test_complex_shape_and_answer() {
        // (X AND Y) XOR (1 OR Z) = 0, intended X = Y = Z = 2
        let ops = ComplexOperators {
            left: Operator::And,
            right: Operator::Or,
            root: Operator::Xor,
        };
        let mut t = complex(ops, Trit::False, true, [None, None, Some(Trit::Neutral), None]).unwrap();

        let slots = t.operator_slots();
        assert_eq!(slots[0].operator(), Some(Operator::And));
        assert_eq!(slots[1].operator(), Some(Operator::Or));
        assert_eq!(slots[1].left(), NodeId::Value(2));
        assert_eq!(slots[2].operator(), Some(Operator::Xor));
        assert_eq!(slots[2].left(), NodeId::Operator(0));
        assert_eq!(slots[2].right(), Some(NodeId::Operator(1)));

        fill(&mut t, &[(0, Trit::True), (1, Trit::True), (3, Trit::True)]);
        assert_eq!(t.check(), Ok(true));

        t.value_slot_mut(3).unwrap().set_value(Trit::False).unwrap();
        assert_eq!(t.check(), Ok(false));
    }

    #[test]
    fn test_unlocked_operators_can_be_changed() {
        let mut t = chain_left(
            [Operator::And, Operator::And],
            Trit::True,
            false,
            [Some(Trit::True), Some(Trit::False), Some(Trit::False)],
        )
        .unwrap();
        assert_eq!(t.check(), Ok(false));

        t.operator_slot_mut(0).unwrap().set_operator(Operator::Or).unwrap();
        assert_eq!(t.check(), Ok(false));
        t.operator_slot_mut(1).unwrap().set_operator(Operator::Or).unwrap();
        assert_eq!(t.check(), Ok(true));
    }
}
