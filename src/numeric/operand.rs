// ============================================================================
// Operand
// Closed set of right-hand operands accepted by fraction arithmetic
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fraction::{fault, Fraction};
use std::fmt;

/// Right-hand side of a fraction operation: a plain integer or another fraction.
///
/// Arithmetic methods take `impl Into<Operand>`, so both `a.checked_add(2)` and
/// `a.checked_add(b)` work without runtime type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Integer(i64),
    Fraction(Fraction),
}

impl Operand {
    /// Arithmetic negation of the operand.
    pub fn checked_neg(self) -> NumericResult<Self> {
        match self {
            Operand::Integer(b) => b
                .checked_neg()
                .map(Operand::Integer)
                .ok_or_else(|| fault("neg", NumericError::Overflow)),
            Operand::Fraction(f) => f.checked_neg().map(Operand::Fraction),
        }
    }

    /// Whether the operand equals zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Operand::Integer(b) => *b == 0,
            Operand::Fraction(f) => f.is_zero(),
        }
    }

    /// View the operand as a fraction (`b` becomes `b/1`).
    ///
    /// Used for integer-on-the-left division.
    #[inline]
    pub fn to_fraction(self) -> Fraction {
        match self {
            Operand::Integer(b) => Fraction::from(b),
            Operand::Fraction(f) => f,
        }
    }
}

impl From<i64> for Operand {
    #[inline]
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<i32> for Operand {
    #[inline]
    fn from(value: i32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<Fraction> for Operand {
    #[inline]
    fn from(value: Fraction) -> Self {
        Operand::Fraction(value)
    }
}

impl From<&Fraction> for Operand {
    #[inline]
    fn from(value: &Fraction) -> Self {
        Operand::Fraction(*value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Integer(b) => write!(f, "{}", b),
            Operand::Fraction(frac) => write!(f, "{}", frac),
        }
    }
}
