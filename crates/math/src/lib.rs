//! `kyber-math` — Ring arithmetic for ML-KEM.
//!
//! `no_std`, zero-allocation arithmetic over `R_q = Z_q[X]/(X^{256}+1)`.
//! [`field`] holds the scalar operations modulo q; [`poly`] builds the ring
//! element, its multiplication backends and fixed-length polynomial vectors
//! on top of them.

#![no_std]
#![deny(unsafe_code)]
#![allow(clippy::cast_lossless, clippy::cast_possible_truncation)]

pub mod field;
pub mod poly;

pub use poly::{Multiplier, Polynomial, Schoolbook, Vector};

/// Polynomial ring degree.
pub const N: usize = 256;

/// Field modulus.
pub const Q: i16 = 3329;

/// Errors raised when building ring elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Coefficient sequence does not hold exactly [`N`] elements.
    #[error("length mismatch: expected {expected} coefficients, got {actual}")]
    LengthMismatch {
        /// Expected coefficient count.
        expected: usize,
        /// Actual coefficient count received.
        actual: usize,
    },
}
