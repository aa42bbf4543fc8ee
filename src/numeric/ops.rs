// ============================================================================
// Fraction Trait Implementations
// Conversions, formatting, parsing and operator overloads
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fraction::Fraction;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

// ============================================================================
// Conversions
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Fraction {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_parts(value, 1)
    }
}

impl From<i32> for Fraction {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_parts(i64::from(value), 1)
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = NumericError;

    #[inline]
    fn try_from((numerator, denominator): (i64, i64)) -> NumericResult<Self> {
        Self::new(numerator, denominator)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator(), self.denominator())
    }
}

impl fmt::Display for Fraction {
    /// Renders `n/d` with a non-negative denominator, without reducing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, d) = (self.numerator(), self.denominator());
        if d < 0 {
            // widened so that i64::MIN flips cleanly
            write!(f, "{}/{}", -(n as i128), -(d as i128))
        } else {
            write!(f, "{}/{}", n, d)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Fraction {
    type Err = NumericError;

    /// Parse `"n/d"` or a bare integer `"n"`.
    ///
    /// # Examples
    /// - "3/4" -> 3/4
    /// - " -6 / 8 " -> -6/8
    /// - "3/-4" -> -3/4
    /// - "5" -> 5/1
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let parse = |part: &str| -> NumericResult<i64> {
            part.trim().parse().map_err(|_| NumericError::InvalidInput)
        };

        match s.split_once('/') {
            Some((numerator, denominator)) => Self::new(parse(numerator)?, parse(denominator)?),
            None => Ok(Self::from(parse(s)?)),
        }
    }
}

// ============================================================================
// Operators
// ============================================================================
//
// Infallible operators for ergonomics: they panic on overflow or division by
// zero, like the integer operators do. Use the checked_* methods in
// production paths.

impl Neg for Fraction {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg()
            .unwrap_or_else(|err| panic!("fraction negation failed: {}", err))
    }
}

macro_rules! forward_binop {
    ($rhs:ty, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident, $what:literal) => {
        impl $trait<$rhs> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, rhs: $rhs) -> Fraction {
                self.$checked(rhs)
                    .unwrap_or_else(|err| panic!(concat!("fraction ", $what, " failed: {}"), err))
            }
        }

        impl $assign_trait<$rhs> for Fraction {
            #[inline]
            fn $assign_method(&mut self, rhs: $rhs) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

macro_rules! forward_int_lhs_binop {
    ($lhs:ty, $trait:ident, $method:ident, $checked:ident, $what:literal) => {
        impl $trait<Fraction> for $lhs {
            type Output = Fraction;

            #[inline]
            fn $method(self, rhs: Fraction) -> Fraction {
                rhs.$checked(i64::from(self))
                    .unwrap_or_else(|err| panic!(concat!("fraction ", $what, " failed: {}"), err))
            }
        }
    };
}

macro_rules! forward_all_binops {
    ($($rhs:ty),*) => {
        $(
            forward_binop!($rhs, Add, add, AddAssign, add_assign, checked_add, "addition");
            forward_binop!($rhs, Sub, sub, SubAssign, sub_assign, checked_sub, "subtraction");
            forward_binop!($rhs, Mul, mul, MulAssign, mul_assign, checked_mul, "multiplication");
            forward_binop!($rhs, Div, div, DivAssign, div_assign, checked_div, "division");
        )*
    };
}

macro_rules! forward_all_int_lhs_binops {
    ($($lhs:ty),*) => {
        $(
            forward_int_lhs_binop!($lhs, Add, add, checked_radd, "addition");
            forward_int_lhs_binop!($lhs, Sub, sub, checked_rsub, "subtraction");
            forward_int_lhs_binop!($lhs, Mul, mul, checked_rmul, "multiplication");
            forward_int_lhs_binop!($lhs, Div, div, checked_rdiv, "division");
        )*
    };
}

forward_all_binops!(Fraction, i64, i32);
forward_all_int_lhs_binops!(i64, i32);
