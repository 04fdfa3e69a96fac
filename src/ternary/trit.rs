//! Single three-valued truth value (trit).
//!
//! A trit holds one of three values, encoded as unsigned digits:
//! - `0` = False
//! - `1` = Neutral
//! - `2` = True
//!
//! The encoding is also the total order: False < Neutral < True. AND and OR
//! are min and max over that order, NOT mirrors around Neutral, and XOR and
//! IMPLY are derived from those three (strong Kleene logic).

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// A single ternary truth value.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Trit {
    /// False (0)
    False = 0,
    /// Neutral (1)
    Neutral = 1,
    /// True (2)
    True = 2,
}

impl Trit {
    /// All possible trit values in order: False, Neutral, True
    pub const ALL: [Trit; 3] = [Trit::False, Trit::Neutral, Trit::True];

    /// Create a trit from its digit encoding.
    #[inline]
    pub fn from_u8(value: u8) -> Result<Self, TritError> {
        match value {
            0 => Ok(Trit::False),
            1 => Ok(Trit::Neutral),
            2 => Ok(Trit::True),
            _ => Err(TritError::OutOfRange(value)),
        }
    }

    /// Convert to the digit encoding.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Negation: 2 - v (False ↔ True, Neutral stays Neutral).
    #[inline]
    pub const fn not(self) -> Self {
        match self {
            Trit::False => Trit::True,
            Trit::Neutral => Trit::Neutral,
            Trit::True => Trit::False,
        }
    }

    /// Conjunction - returns the lesser value.
    #[inline]
    pub const fn and(self, other: Self) -> Self {
        if self.to_u8() <= other.to_u8() { self } else { other }
    }

    /// Disjunction - returns the greater value.
    #[inline]
    pub const fn or(self, other: Self) -> Self {
        if self.to_u8() >= other.to_u8() { self } else { other }
    }

    /// Exclusive or: (a AND NOT b) OR (NOT a AND b).
    ///
    /// Neutral on either side always yields Neutral.
    #[inline]
    pub const fn xor(self, other: Self) -> Self {
        self.and(other.not()).or(self.not().and(other))
    }

    /// Material implication: NOT a OR b.
    #[inline]
    pub const fn imply(self, other: Self) -> Self {
        self.not().or(other)
    }

    /// Cyclic successor: False → Neutral → True → False.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Trit::False => Trit::Neutral,
            Trit::Neutral => Trit::True,
            Trit::True => Trit::False,
        }
    }
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::False => write!(f, "False"),
            Trit::Neutral => write!(f, "Neutral"),
            Trit::True => write!(f, "True"),
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_u8())
    }
}

impl FromStr for Trit {
    type Err = TritError;

    /// Accepts the digits `0`/`1`/`2` or the initials `F`/`N`/`T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" | "F" | "f" => Ok(Trit::False),
            "1" | "N" | "n" => Ok(Trit::Neutral),
            "2" | "T" | "t" => Ok(Trit::True),
            other => Err(TritError::Parse(other.to_string())),
        }
    }
}

impl std::ops::Not for Trit {
    type Output = Self;

    fn not(self) -> Self::Output {
        Trit::not(self)
    }
}

impl std::ops::BitAnd for Trit {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl std::ops::BitOr for Trit {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl std::ops::BitXor for Trit {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(rhs)
    }
}

impl TryFrom<u8> for Trit {
    type Error = TritError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Trit::from_u8(value)
    }
}

impl From<Trit> for u8 {
    fn from(trit: Trit) -> Self {
        trit.to_u8()
    }
}

/// Errors that can occur when reading trits or operators from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TritError {
    #[error("trit value out of range: {0} (must be 0, 1 or 2)")]
    OutOfRange(u8),

    #[error("cannot parse trit from {0:?}")]
    Parse(String),

    #[error("unknown operator {0:?}")]
    UnknownOperator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negation_involution() {
        for t in Trit::ALL {
            assert_eq!(t.not().not(), t, "not(not({:?})) should equal {:?}", t, t);
        }
    }

    #[test]
    fn test_negation_is_two_minus_v() {
        for t in Trit::ALL {
            assert_eq!(t.not().to_u8(), 2 - t.to_u8());
        }
    }

    #[test]
    fn test_and_or_are_min_max() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                assert_eq!(a.and(b).to_u8(), a.to_u8().min(b.to_u8()));
                assert_eq!(a.or(b).to_u8(), a.to_u8().max(b.to_u8()));
            }
        }
    }

    #[test]
    fn test_xor_commutativity() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                assert_eq!(a.xor(b), b.xor(a), "xor({:?}, {:?}) should be commutative", a, b);
            }
        }
    }

    #[test]
    fn test_xor_table() {
        use Trit::*;
        assert_eq!(False.xor(False), False);
        assert_eq!(False.xor(True), True);
        assert_eq!(True.xor(False), True);
        assert_eq!(True.xor(True), False);

        // Neutral absorbs
        for t in Trit::ALL {
            assert_eq!(Neutral.xor(t), Neutral);
        }
    }

    #[test]
    fn test_imply_table() {
        use Trit::*;
        assert_eq!(False.imply(False), True);
        assert_eq!(False.imply(Neutral), True);
        assert_eq!(False.imply(True), True);

        assert_eq!(Neutral.imply(False), Neutral);
        assert_eq!(Neutral.imply(Neutral), Neutral);
        assert_eq!(Neutral.imply(True), True);

        assert_eq!(True.imply(False), False);
        assert_eq!(True.imply(Neutral), Neutral);
        assert_eq!(True.imply(True), True);
    }

    #[test]
    fn test_operator_overloads() {
        assert_eq!(!Trit::False, Trit::True);
        assert_eq!(Trit::True & Trit::Neutral, Trit::Neutral);
        assert_eq!(Trit::False | Trit::Neutral, Trit::Neutral);
        assert_eq!(Trit::True ^ Trit::False, Trit::True);
    }

    #[test]
    fn test_next_cycles_through_all() {
        assert_eq!(Trit::False.next(), Trit::Neutral);
        assert_eq!(Trit::Neutral.next(), Trit::True);
        assert_eq!(Trit::True.next(), Trit::False);
    }

    #[test]
    fn test_u8_roundtrip() {
        for t in Trit::ALL {
            assert_eq!(Trit::from_u8(t.to_u8()), Ok(t));
        }
        assert_eq!(Trit::from_u8(3), Err(TritError::OutOfRange(3)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("2".parse::<Trit>(), Ok(Trit::True));
        assert_eq!(" n ".parse::<Trit>(), Ok(Trit::Neutral));
        assert_eq!("F".parse::<Trit>(), Ok(Trit::False));
        assert!("maybe".parse::<Trit>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Trit::False < Trit::Neutral);
        assert!(Trit::Neutral < Trit::True);
    }
}
