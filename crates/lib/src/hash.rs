//! Hash and extendable-output function (XOF) adapters.
//!
//! Wraps the SHA-3 family as used by ML-KEM (FIPS 203):
//!
//! | ML-KEM name | Primitive   | Function |
//! |-------------|-------------|----------|
//! | **H**       | SHA3-256    | [`hash256`] |
//! | **G**       | SHA3-512    | [`hash512`] |
//! | **PRF**     | SHAKE-256   | [`prf`] |
//! | **XOF**     | SHAKE-128   | [`xof`], [`xof_reader`] |

pub use sha3::digest::XofReader;
use sha3::{
    Digest, Sha3_256, Sha3_512, Shake128, Shake256,
    digest::{ExtendableOutput, Update},
};
use tracing::trace;

use crate::Result;

/// Seed length consumed by [`prf`].
pub const SEED_BYTES: usize = 32;

/// `SHAKE-128(input)` squeezed to exactly `output_length` bytes.
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
/// `output_length` is negative.
pub fn xof<L: TryInto<usize>>(input: impl AsRef<[u8]>, output_length: L) -> Result<Vec<u8>> {
    let len = crate::byte_count(output_length, "output_length")?;
    let input = input.as_ref();
    trace!(input_len = input.len(), output_len = len, "SHAKE-128 squeeze");
    let mut out = vec![0u8; len];
    xof_reader(input).read(&mut out);
    Ok(out)
}

/// SHAKE-128 absorbing `input`; the reader can be squeezed repeatedly.
#[must_use]
pub fn xof_reader(input: impl AsRef<[u8]>) -> impl XofReader {
    Shake128::default().chain(input).finalize_xof()
}

/// H(input) = SHA3-256(input) -> 32 bytes.
#[inline]
pub fn hash256(input: impl AsRef<[u8]>) -> [u8; 32] {
    Sha3_256::digest(input).into()
}

/// G(input) = SHA3-512(input) -> 64 bytes.
#[inline]
pub fn hash512(input: impl AsRef<[u8]>) -> [u8; 64] {
    Sha3_512::digest(input).into()
}

/// `PRF(seed, nonce) = SHAKE-256(seed || nonce)`, squeezed into `output`.
pub fn prf(seed: &[u8; SEED_BYTES], nonce: u8, output: &mut [u8]) {
    trace!(nonce, output_len = output.len(), "SHAKE-256 PRF");
    let mut buf = [0; SEED_BYTES + 1];
    buf[..SEED_BYTES].copy_from_slice(seed);
    buf[SEED_BYTES] = nonce;
    Shake256::default().chain(buf).finalize_xof().read(output);
}
