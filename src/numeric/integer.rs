// ============================================================================
// Integer Helpers
// ============================================================================

/// Greatest common divisor of two signed integers.
///
/// Always non-negative; `gcd(0, 0) == 0`. Returned as `u64` because
/// `gcd(i64::MIN, 0)` is `2^63`, which does not fit in an `i64`.
#[inline]
pub const fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
