//! Scalar arithmetic in `Z_q` for q = 3329.
//!
//! Every function returns the canonical representative in `[0, q)`. Inputs
//! are widened before the integer operation, so non-canonical `i16`
//! arguments are handled as well.

use crate::Q;

/// Canonical representative of `a` modulo q, for any `a`.
#[inline]
#[must_use]
pub const fn reduce(a: i64) -> i16 {
    a.rem_euclid(Q as i64) as i16
}

/// `(a + b) mod q`.
#[inline]
#[must_use]
pub const fn add(a: i16, b: i16) -> i16 {
    reduce(a as i64 + b as i64)
}

/// `(a - b) mod q`.
#[inline]
#[must_use]
pub const fn sub(a: i16, b: i16) -> i16 {
    reduce(a as i64 - b as i64)
}

/// `(a * b) mod q`.
#[inline]
#[must_use]
pub const fn mul(a: i16, b: i16) -> i16 {
    reduce(a as i64 * b as i64)
}

/// `-a mod q`.
#[inline]
#[must_use]
pub const fn neg(a: i16) -> i16 {
    reduce(-(a as i64))
}

/// Element-wise `a[i] + b[i] mod q`.
#[must_use]
pub fn vector_add<const L: usize>(a: &[i16; L], b: &[i16; L]) -> [i16; L] {
    core::array::from_fn(|i| add(a[i], b[i]))
}

/// Element-wise `a[i] - b[i] mod q`.
#[must_use]
pub fn vector_sub<const L: usize>(a: &[i16; L], b: &[i16; L]) -> [i16; L] {
    core::array::from_fn(|i| sub(a[i], b[i]))
}

/// Broadcast `c * a[i] mod q`. `c` may be any integer.
#[must_use]
pub fn scalar_mul<const L: usize>(c: i64, a: &[i16; L]) -> [i16; L] {
    let c = reduce(c);
    core::array::from_fn(|i| mul(c, a[i]))
}
