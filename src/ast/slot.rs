//! Slot content shared by value and operator nodes.

use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::ternary::Operator;

/// What a slot currently holds.
///
/// A locked slot always carries content; there is no "locked but empty".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotState<T> {
    /// Nothing chosen yet. The player may fill it.
    Unset,
    /// Holds a value the player may still change.
    Open(T),
    /// Fixed by the puzzle designer.
    Locked(T),
}

impl<T: Copy> SlotState<T> {
    /// Open with a starting value, or unset when `None`.
    pub fn open(value: Option<T>) -> Self {
        value.map_or(SlotState::Unset, SlotState::Open)
    }

    /// Locked to a value, or unset when `None`.
    pub fn preset(value: Option<T>) -> Self {
        value.map_or(SlotState::Unset, SlotState::Locked)
    }

    #[inline]
    pub fn value(&self) -> Option<T> {
        match *self {
            SlotState::Unset => None,
            SlotState::Open(v) | SlotState::Locked(v) => Some(v),
        }
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        matches!(self, SlotState::Locked(_))
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        !matches!(self, SlotState::Unset)
    }

    /// Overwrite the content, keeping the slot open.
    pub(crate) fn set(&mut self, value: T) -> Result<(), SlotError> {
        if self.is_locked() {
            return Err(SlotError::LockedSlot);
        }
        *self = SlotState::Open(value);
        Ok(())
    }

    /// Set and permanently lock. Fails if already locked.
    pub(crate) fn lock(&mut self, value: T) -> Result<(), SlotError> {
        if self.is_locked() {
            return Err(SlotError::LockedSlot);
        }
        *self = SlotState::Locked(value);
        Ok(())
    }
}

/// Errors raised by slot mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("slot is locked")]
    LockedSlot,

    #[error("{0} needs a right operand but the node has none")]
    MissingOperand(Operator),

    #[error("{0} takes a single operand but the node has a right child")]
    UnexpectedOperand(Operator),
}
