//! Input events from slot views.
//!
//! Front-ends translate their own key presses, clicks or JS calls into
//! [`SlotEvent`]s. Every event goes through the node setters, so a locked
//! slot can never be changed from here.

use serde::{Serialize, Deserialize};
use thiserror::Error;
use tracing::debug;
use crate::ternary::{Operator, Trit};
use crate::ast::{AstTemplate, NodeId, OperatorSlotNode, SlotError, ValueSlotNode};

/// A player action on one slot, addressed by binding position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotEvent {
    SetValue { slot: usize, value: Trit },
    /// Unset → 0 → 1 → 2 → 0 …
    CycleValue { slot: usize },
    SetOperator { slot: usize, op: Operator },
    /// Next operator in NOT, AND, OR, XOR, IMPLY order that fits the node.
    CycleOperator { slot: usize },
}

/// What happened to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The slot now holds new content.
    Applied(NodeId),
    /// The slot is locked; nothing changed.
    Ignored(NodeId),
}

impl SlotEvent {
    pub fn target(&self) -> NodeId {
        match *self {
            SlotEvent::SetValue { slot, .. } | SlotEvent::CycleValue { slot } => NodeId::Value(slot),
            SlotEvent::SetOperator { slot, .. } | SlotEvent::CycleOperator { slot } => {
                NodeId::Operator(slot)
            }
        }
    }
}

/// Apply one event to a template.
pub fn apply_event(template: &mut AstTemplate, event: SlotEvent) -> Result<InputOutcome, InputError> {
    let target = event.target();

    let result = match event {
        SlotEvent::SetValue { slot, value } => value_slot(template, slot)?.set_value(value),
        SlotEvent::CycleValue { slot } => {
            let leaf = value_slot(template, slot)?;
            let next = leaf.value().map_or(Trit::False, Trit::next);
            leaf.set_value(next)
        }
        SlotEvent::SetOperator { slot, op } => operator_slot(template, slot)?.set_operator(op),
        SlotEvent::CycleOperator { slot } => {
            let node = operator_slot(template, slot)?;
            let arity = node.arity();
            let next = node
                .operator()
                .map_or_else(|| Operator::first_with_arity(arity), |op| op.next_with_arity(arity));
            node.set_operator(next)
        }
    };

    match result {
        Ok(()) => {
            debug!(%target, ?event, "slot updated");
            Ok(InputOutcome::Applied(target))
        }
        Err(SlotError::LockedSlot) => {
            debug!(%target, "input ignored, slot is locked");
            Ok(InputOutcome::Ignored(target))
        }
        Err(err) => Err(InputError::Rejected { slot: target, source: err }),
    }
}

fn value_slot(template: &mut AstTemplate, slot: usize) -> Result<&mut ValueSlotNode, InputError> {
    template
        .value_slot_mut(slot)
        .ok_or(InputError::NoSuchSlot(NodeId::Value(slot)))
}

fn operator_slot(template: &mut AstTemplate, slot: usize) -> Result<&mut OperatorSlotNode, InputError> {
    template
        .operator_slot_mut(slot)
        .ok_or(InputError::NoSuchSlot(NodeId::Operator(slot)))
}

/// Errors that can occur while applying input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no puzzle is loaded")]
    NoPuzzle,

    #[error("slot {0} does not exist")]
    NoSuchSlot(NodeId),

    #[error("slot {slot} rejected the change: {source}")]
    Rejected { slot: NodeId, source: SlotError },
}
