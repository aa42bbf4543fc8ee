// ============================================================================
// Exact Fraction Library
// Rational arithmetic on i64 fractions without floating-point rounding
// ============================================================================

//! # Exact Fraction
//!
//! Exact fractions of two `i64` integers with checked arithmetic.
//!
//! ## Features
//!
//! - **Checked arithmetic** with integers and fractions (`checked_add`, `checked_div`, ...)
//! - **Operator overloads** for `Fraction ∘ Fraction`, `Fraction ∘ i64` and `i64 ∘ Fraction`
//! - **Explicit reduction**: results stay unreduced until `simplify` or `reduce_by`
//! - **In-place and by-value utilities** (`simplify` / `simplified`, `expand` / `expanded`)
//! - **Optional serde support** behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use exact_fraction::prelude::*;
//!
//! let a = Fraction::new(1, 4)?;
//! let b = Fraction::new(1, 6)?;
//!
//! // Cross-multiplied, not reduced
//! let mut sum = a.checked_add(b)?;
//! assert_eq!(sum.to_string(), "10/24");
//!
//! // Reduce in place
//! sum.simplify()?;
//! assert_eq!(sum.to_string(), "5/12");
//!
//! // Division by a zero fraction is an error, not a panic
//! let zero = Fraction::new(0, 5)?;
//! assert_eq!(a.checked_div(zero), Err(NumericError::DivisionByZero));
//! # Ok::<(), NumericError>(())
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{gcd, ErrorKind, Fraction, NumericError, NumericResult, Operand};
}
