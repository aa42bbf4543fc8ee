// ============================================================================
// Fraction
// Exact ratio of two i64 integers with explicit normalization and reduction
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::integer::gcd;
use super::operand::Operand;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact fraction `numerator / denominator`.
///
/// The denominator is never zero. Construction moves a negative sign from the
/// denominator onto the numerator, but arithmetic results are built directly
/// from the formulas below and may carry a negative denominator until
/// [`fix_negative`](Self::fix_negative) or [`simplify`](Self::simplify) runs.
/// Rendering always shows the normalized sign.
///
/// Results are **never reduced automatically**: `1/4 + 1/6` is `10/24`, not `5/12`.
/// Reduction is opt-in through [`simplify`](Self::simplify) and
/// [`reduce_by`](Self::reduce_by).
///
/// `==` is structural (`1/2 != 2/4`); use [`value_eq`](Self::value_eq) or
/// [`cmp_value`](Self::cmp_value) to compare mathematical values.
///
/// # Example
/// ```
/// use exact_fraction::numeric::Fraction;
///
/// let a = Fraction::new(1, 2)?;
/// let b = Fraction::new(1, 3)?;
/// let sum = a.checked_add(b)?;             // 5/6
/// let doubled = sum.checked_mul(2)?;       // 10/6
/// assert_eq!(doubled.to_string(), "10/6");
/// assert_eq!(doubled.simplified()?.to_string(), "5/3");
/// # Ok::<(), exact_fraction::numeric::NumericError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FractionParts"))]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

#[inline]
fn mul(a: i64, b: i64) -> NumericResult<i64> {
    a.checked_mul(b).ok_or_else(|| fault("mul", NumericError::Overflow))
}

#[inline]
fn add(a: i64, b: i64) -> NumericResult<i64> {
    a.checked_add(b).ok_or_else(|| fault("add", NumericError::Overflow))
}

#[inline]
fn neg(a: i64) -> NumericResult<i64> {
    a.checked_neg().ok_or_else(|| fault("neg", NumericError::Overflow))
}

#[cold]
pub(super) fn fault(op: &'static str, err: NumericError) -> NumericError {
    tracing::debug!(op, %err, "fraction arithmetic fault");
    err
}

impl Fraction {
    /// Zero (`0/1`)
    pub const ZERO: Self = Self::from_parts(0, 1);

    /// One (`1/1`)
    pub const ONE: Self = Self::from_parts(1, 1);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction from a numerator and a denominator.
    ///
    /// A negative denominator is normalized away by negating both parts.
    ///
    /// # Errors
    /// - `ZeroDenominator` if `denominator == 0`
    /// - `Overflow` if negating `i64::MIN` is required
    pub fn new(numerator: i64, denominator: i64) -> NumericResult<Self> {
        if denominator == 0 {
            return Err(NumericError::ZeroDenominator);
        }

        if denominator < 0 {
            Ok(Self::from_parts(neg(numerator)?, neg(denominator)?))
        } else {
            Ok(Self::from_parts(numerator, denominator))
        }
    }

    /// Build from parts without normalizing the sign.
    ///
    /// Callers guarantee `denominator != 0`.
    #[inline]
    pub(crate) const fn from_parts(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Stored numerator.
    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Stored denominator. Negative only for unnormalized arithmetic results.
    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// True when the numerator is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// True when the value is below zero, whichever part carries the sign.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.numerator != 0 && (self.numerator < 0) != (self.denominator < 0)
    }

    /// True when the value is above zero, whichever part carries the sign.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.numerator != 0 && (self.numerator < 0) == (self.denominator < 0)
    }

    /// True when the value is a whole number (`6/3`, `0/5`).
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.numerator.wrapping_rem(self.denominator) == 0
    }

    /// Floating-point approximation, for display and interop only.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    // ========================================================================
    // Core Arithmetic
    // ========================================================================

    /// Checked negation: `(-n)/d`.
    ///
    /// # Errors
    /// Returns `Overflow` if the numerator is `i64::MIN`.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        Ok(Self::from_parts(neg(self.numerator)?, self.denominator))
    }

    /// Checked addition with an integer or a fraction.
    ///
    /// - `a/x + b = (a + b·x)/x`
    /// - `a/x + b/x = (a + b)/x`
    /// - `a/x + b/y = (a·y + x·b)/(x·y)`
    ///
    /// # Errors
    /// Returns `Overflow` if an intermediate value is out of range.
    pub fn checked_add(self, rhs: impl Into<Operand>) -> NumericResult<Self> {
        let (n, d) = (self.numerator, self.denominator);
        match rhs.into() {
            Operand::Integer(b) => Ok(Self::from_parts(add(n, mul(b, d)?)?, d)),
            Operand::Fraction(other) if other.denominator == d => {
                Ok(Self::from_parts(add(n, other.numerator)?, d))
            },
            Operand::Fraction(other) => {
                let numerator = add(mul(n, other.denominator)?, mul(d, other.numerator)?)?;
                Ok(Self::from_parts(numerator, mul(d, other.denominator)?))
            },
        }
    }

    /// Checked subtraction: addition of the negated operand.
    ///
    /// # Errors
    /// Returns `Overflow` if an intermediate value is out of range.
    pub fn checked_sub(self, rhs: impl Into<Operand>) -> NumericResult<Self> {
        let rhs: Operand = rhs.into();
        self.checked_add(rhs.checked_neg()?)
    }

    /// Checked multiplication.
    ///
    /// - `a/x · b/y = (a·b)/(x·y)`
    /// - `a/x · b = (a·b)/x`
    ///
    /// # Errors
    /// Returns `Overflow` if an intermediate value is out of range.
    pub fn checked_mul(self, rhs: impl Into<Operand>) -> NumericResult<Self> {
        let (n, d) = (self.numerator, self.denominator);
        match rhs.into() {
            Operand::Fraction(other) => Ok(Self::from_parts(
                mul(n, other.numerator)?,
                mul(d, other.denominator)?,
            )),
            Operand::Integer(b) => Ok(Self::from_parts(mul(n, b)?, d)),
        }
    }

    /// Checked division.
    ///
    /// - `(a/x) / (b/y) = (a·y)/(x·b)`
    /// - `(a/x) / b = a/(x·b)`
    ///
    /// # Errors
    /// - `DivisionByZero` if the divisor is zero
    /// - `Overflow` if an intermediate value is out of range
    pub fn checked_div(self, rhs: impl Into<Operand>) -> NumericResult<Self> {
        let rhs: Operand = rhs.into();
        if rhs.is_zero() {
            return Err(fault("div", NumericError::DivisionByZero));
        }

        let (n, d) = (self.numerator, self.denominator);
        match rhs {
            Operand::Fraction(other) => Ok(Self::from_parts(
                mul(n, other.denominator)?,
                mul(d, other.numerator)?,
            )),
            Operand::Integer(b) => Ok(Self::from_parts(n, mul(d, b)?)),
        }
    }

    // ========================================================================
    // Right-Hand Arithmetic (integer on the left)
    // ========================================================================

    /// `lhs + self`
    #[inline]
    pub fn checked_radd(self, lhs: i64) -> NumericResult<Self> {
        self.checked_add(lhs)
    }

    /// `lhs - self`, computed as `(-self) + lhs`.
    #[inline]
    pub fn checked_rsub(self, lhs: i64) -> NumericResult<Self> {
        self.checked_neg()?.checked_add(lhs)
    }

    /// `lhs · self`
    #[inline]
    pub fn checked_rmul(self, lhs: i64) -> NumericResult<Self> {
        self.checked_mul(lhs)
    }

    /// `lhs / self`
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `self` is zero.
    #[inline]
    pub fn checked_rdiv(self, lhs: i64) -> NumericResult<Self> {
        Operand::from(lhs).to_fraction().checked_div(self)
    }

    // ========================================================================
    // Normalization & Reduction
    // ========================================================================

    /// Negate both parts in place if the denominator is negative.
    ///
    /// # Errors
    /// Returns `Overflow` if either part is `i64::MIN`; `self` is unchanged.
    pub fn fix_negative(&mut self) -> NumericResult<&mut Self> {
        if self.denominator < 0 {
            let numerator = neg(self.numerator)?;
            let denominator = neg(self.denominator)?;
            self.numerator = numerator;
            self.denominator = denominator;
        }
        Ok(self)
    }

    /// Copy of `self` with a non-negative denominator.
    pub fn normalized(mut self) -> NumericResult<Self> {
        self.fix_negative()?;
        Ok(self)
    }

    /// `d/n` as a new, sign-normalized fraction.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the numerator is zero.
    pub fn reciprocal(self) -> NumericResult<Self> {
        if self.numerator == 0 {
            return Err(fault("reciprocal", NumericError::DivisionByZero));
        }
        Self::new(self.denominator, self.numerator)
    }

    /// True iff `gcd(n, d) == 1`.
    #[inline]
    pub fn is_in_lowest_terms(&self) -> bool {
        gcd(self.numerator, self.denominator) == 1
    }

    /// True iff both parts are divisible by `factor`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `factor == 0`.
    pub fn is_reducible_by(&self, factor: i64) -> NumericResult<bool> {
        if factor == 0 {
            return Err(fault("reduce", NumericError::DivisionByZero));
        }
        Ok(self.numerator.wrapping_rem(factor) == 0
            && self.denominator.wrapping_rem(factor) == 0)
    }

    /// Divide both parts by `factor` in place when they are both divisible by
    /// it; otherwise leave the fraction as is.
    ///
    /// # Errors
    /// - `DivisionByZero` if `factor == 0`
    /// - `Overflow` for `i64::MIN / -1`
    pub fn reduce_by(&mut self, factor: i64) -> NumericResult<&mut Self> {
        if self.is_reducible_by(factor)? {
            let numerator = self.numerator.checked_div(factor);
            let denominator = self.denominator.checked_div(factor);
            match (numerator, denominator) {
                (Some(numerator), Some(denominator)) => {
                    self.numerator = numerator;
                    self.denominator = denominator;
                },
                _ => return Err(fault("reduce", NumericError::Overflow)),
            }
        }
        Ok(self)
    }

    /// Copy of `self` reduced by `factor`. See [`reduce_by`](Self::reduce_by).
    pub fn reduced_by(mut self, factor: i64) -> NumericResult<Self> {
        self.reduce_by(factor)?;
        Ok(self)
    }

    /// Multiply both parts by `factor` in place.
    ///
    /// # Errors
    /// - `DivisionByZero` if `factor == 0` (the denominator would become zero)
    /// - `Overflow` if either product is out of range
    pub fn expand(&mut self, factor: i64) -> NumericResult<&mut Self> {
        if factor == 0 {
            return Err(fault("expand", NumericError::DivisionByZero));
        }
        let numerator = mul(self.numerator, factor)?;
        let denominator = mul(self.denominator, factor)?;
        self.numerator = numerator;
        self.denominator = denominator;
        Ok(self)
    }

    /// Copy of `self` expanded by `factor`. See [`expand`](Self::expand).
    pub fn expanded(mut self, factor: i64) -> NumericResult<Self> {
        self.expand(factor)?;
        Ok(self)
    }

    /// Reduce in place to lowest terms with a positive denominator.
    ///
    /// # Errors
    /// Returns `Overflow` if the denominator is `i64::MIN`; `self` is unchanged.
    pub fn simplify(&mut self) -> NumericResult<&mut Self> {
        let mut work = *self;
        work.fix_negative()?;

        // denominator is non-zero, so the divisor is at least 1
        let divisor = i64::try_from(gcd(work.numerator, work.denominator))
            .map_err(|_| fault("simplify", NumericError::Overflow))?;
        work.reduce_by(divisor)?;

        tracing::trace!(from = ?self, to = ?work, "simplified fraction");
        *self = work;
        Ok(self)
    }

    /// Copy of `self` in lowest terms. See [`simplify`](Self::simplify).
    pub fn simplified(mut self) -> NumericResult<Self> {
        self.simplify()?;
        Ok(self)
    }

    /// Normalize in place, then render as `"n/d"`.
    ///
    /// Unlike `to_string`, this leaves the receiver itself normalized.
    pub fn to_normalized_string(&mut self) -> NumericResult<String> {
        self.fix_negative()?;
        Ok(self.to_string())
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// True when both fractions denote the same rational number.
    #[inline]
    pub fn value_eq(&self, other: &Self) -> bool {
        (self.numerator as i128) * (other.denominator as i128)
            == (other.numerator as i128) * (self.denominator as i128)
    }

    /// Order by rational value, regardless of stored signs or reduction.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let lhs = (self.numerator as i128) * (other.denominator as i128);
        let rhs = (other.numerator as i128) * (self.denominator as i128);

        // a/b < c/d  <=>  a·d < c·b  when b·d > 0, reversed otherwise
        if (self.denominator < 0) == (other.denominator < 0) {
            lhs.cmp(&rhs)
        } else {
            rhs.cmp(&lhs)
        }
    }
}

// ============================================================================
// Serde Support
// ============================================================================

/// Unvalidated wire shape; deserialization goes through [`Fraction::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct FractionParts {
    numerator: i64,
    denominator: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<FractionParts> for Fraction {
    type Error = NumericError;

    fn try_from(parts: FractionParts) -> Result<Self, Self::Error> {
        Fraction::new(parts.numerator, parts.denominator)
    }
}

// ============================================================================
// Tests
// ============================================================================
