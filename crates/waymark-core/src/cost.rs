//! Traversal costs with an explicit "unreachable" tag.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A traversal cost: either a finite amount or unreachable.
///
/// Every finite cost orders below [`Cost::Unreachable`], and any sum that
/// involves an unreachable operand is unreachable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cost {
    Finite(u64),
    Unreachable,
}

impl Cost {
    pub const ZERO: Self = Cost::Finite(0);

    /// Whether the cost is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// The finite amount, if any.
    #[inline]
    pub fn finite(self) -> Option<u64> {
        match self {
            Cost::Finite(c) => Some(c),
            Cost::Unreachable => None,
        }
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Cost {
    fn from(c: u64) -> Self {
        Cost::Finite(c)
    }
}

impl From<Option<u64>> for Cost {
    fn from(c: Option<u64>) -> Self {
        c.map_or(Cost::Unreachable, Cost::Finite)
    }
}

impl Add for Cost {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Cost::Finite(a), Cost::Finite(b)) => a.checked_add(b).into(),
            _ => Cost::Unreachable,
        }
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(c) => write!(f, "{c}"),
            Cost::Unreachable => f.write_str("unreachable"),
        }
    }
}
