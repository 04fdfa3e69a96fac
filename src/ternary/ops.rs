//! Logical operators over trits.
//!
//! NOT is the only unary operator and reads just the left (sole) operand.
//! The binary operators all use both operands.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::ternary::{Trit, TritError};

/// Number of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    Unary,
    Binary,
}

/// A ternary logic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Not,
    And,
    Or,
    Xor,
    Imply,
}

impl Operator {
    /// All operators in slot cycling order.
    pub const ALL: [Operator; 5] = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Imply,
    ];

    #[inline]
    pub const fn arity(self) -> Arity {
        match self {
            Operator::Not => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    #[inline]
    pub const fn is_unary(self) -> bool {
        matches!(self.arity(), Arity::Unary)
    }

    /// Apply the operator's truth table.
    ///
    /// `right` is ignored for NOT. Binary operators need `Some(right)`;
    /// `None` is returned when it is missing.
    #[inline]
    pub fn apply(self, left: Trit, right: Option<Trit>) -> Option<Trit> {
        match self {
            Operator::Not => Some(left.not()),
            Operator::And => right.map(|r| left.and(r)),
            Operator::Or => right.map(|r| left.or(r)),
            Operator::Xor => right.map(|r| left.xor(r)),
            Operator::Imply => right.map(|r| left.imply(r)),
        }
    }

    /// Keyword used in rendered expressions.
    pub const fn keyword(self) -> &'static str {
        match self {
            Operator::Not => "NOT",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Xor => "XOR",
            Operator::Imply => "IMPLY",
        }
    }

    /// The operator after this one in cycling order that has the given arity.
    pub fn next_with_arity(self, arity: Arity) -> Operator {
        let start = Self::ALL.iter().position(|op| *op == self).unwrap_or(0);
        (1..=Self::ALL.len())
            .map(|step| Self::ALL[(start + step) % Self::ALL.len()])
            .find(|op| op.arity() == arity)
            .unwrap_or(self)
    }

    /// The first operator in cycling order that has the given arity.
    pub fn first_with_arity(arity: Arity) -> Operator {
        match arity {
            Arity::Unary => Operator::Not,
            Arity::Binary => Operator::And,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Operator {
    type Err = TritError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.keyword().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TritError::UnknownOperator(trimmed.to_string()))
    }
}
