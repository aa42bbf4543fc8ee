// ============================================================================
// Numeric Module
// Exact rational arithmetic on i64 fractions
// ============================================================================
//
// This module provides:
// - Fraction: numerator/denominator value type
// - Operand: integer-or-fraction right-hand side for arithmetic
// - NumericError: Error types for construction and arithmetic
// - gcd: greatest common divisor helper
//
// Design principles:
// - No floating-point operations
// - All checked arithmetic returns Result (no panics)
// - Results are left unreduced until simplify/reduce_by is called
// - Mutating utilities have value-returning twins

mod errors;
mod fraction;
mod integer;
mod operand;
mod ops;

#[cfg(test)]
mod properties;

pub use errors::{ErrorKind, NumericError, NumericResult};
pub use fraction::Fraction;
pub use integer::gcd;
pub use operand::Operand;
