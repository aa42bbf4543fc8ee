// ============================================================================
// Numeric Errors
// Error types for exact fraction arithmetic
// ============================================================================

use std::fmt;

/// Broad classification of a [`NumericError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input could not be read as an integer operand
    Type,
    /// A value violated a construction rule (zero denominator)
    Value,
    /// Integer-level fault: division by zero or overflow
    Arithmetic,
}

/// Errors that can occur while building or combining fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not an integer or an `n/d` pair
    InvalidInput,
    /// Fraction constructed with a zero denominator
    ZeroDenominator,
    /// Attempted division by zero
    DivisionByZero,
    /// Result does not fit in an i64
    Overflow,
}

impl NumericError {
    /// Kind of failure this error represents.
    pub const fn kind(self) -> ErrorKind {
        match self {
            NumericError::InvalidInput => ErrorKind::Type,
            NumericError::ZeroDenominator => ErrorKind::Value,
            NumericError::DivisionByZero | NumericError::Overflow => ErrorKind::Arithmetic,
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => {
                write!(f, "invalid input: expected an integer or a fraction")
            },
            NumericError::ZeroDenominator => {
                write!(f, "denominators are not allowed to be zero")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result does not fit in i64")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
