//! `kyber-arith` -- Arithmetic substrate for ML-KEM.
//!
//! Re-exports the ring arithmetic of [`kyber_math`] and adds what higher
//! ML-KEM layers consume next to it: the three FIPS 203 parameter sets,
//! SHA-3 hash/XOF adapters, and an injectable randomness source.

#![deny(unsafe_code)]

pub mod hash;
pub mod params;
pub mod rng;

pub use kyber_math as math;
pub use kyber_math::{N, Polynomial, Q, Vector};
pub use params::{
    ML_KEM_512, ML_KEM_768, ML_KEM_1024, MlKem512, MlKem768, MlKem1024, MlKemParams, ParameterSet,
};
pub use rng::RandomSource;

/// Errors returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Building a ring element failed.
    #[error(transparent)]
    Ring(#[from] kyber_math::Error),
    /// An argument was outside its domain (negative length, unknown
    /// parameter-set name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The randomness source could not produce bytes.
    #[error("randomness source failed: {0}")]
    Rng(#[from] rand_core::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Converts a caller-supplied byte count, rejecting negative or oversized values.
pub(crate) fn byte_count<L: TryInto<usize>>(len: L, what: &str) -> Result<usize> {
    len.try_into().map_err(|_| {
        Error::InvalidArgument(format!(
            "{what} must be a non-negative byte count representable as usize"
        ))
    })
}
