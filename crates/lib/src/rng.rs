//! Injectable randomness.
//!
//! There is no process-wide generator: whoever needs random bytes owns a
//! [`RandomSource`] and passes it down. Production code wraps the operating
//! system generator ([`RandomSource::os`]); tests wrap a seeded generator
//! such as `rand_chacha::ChaCha20Rng` to get reproducible output.

use rand_core::{CryptoRng, OsRng, RngCore};
use tracing::trace;
use zeroize::Zeroizing;

use crate::Result;

/// Cryptographically secure byte source backed by `R`.
pub struct RandomSource<R> {
    rng: R,
}

impl RandomSource<OsRng> {
    /// Source drawing from the operating system.
    #[must_use]
    pub const fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> RandomSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Exactly `n` random bytes, wiped from memory when dropped.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `n` is
    /// negative, [`Error::Rng`](crate::Error::Rng) if the generator fails.
    pub fn random_bytes<L: TryInto<usize>>(&mut self, n: L) -> Result<Zeroizing<Vec<u8>>> {
        let n = crate::byte_count(n, "n")?;
        let mut out = Zeroizing::new(vec![0u8; n]);
        self.fill(&mut out)?;
        Ok(out)
    }

    /// Fixed-size seed, e.g. the 32-byte `d` and `z` of ML-KEM key generation.
    ///
    /// # Errors
    ///
    /// [`Error::Rng`](crate::Error::Rng) if the generator fails.
    pub fn seed<const LEN: usize>(&mut self) -> Result<Zeroizing<[u8; LEN]>> {
        let mut out = Zeroizing::new([0u8; LEN]);
        self.fill(out.as_mut_slice())?;
        Ok(out)
    }

    /// Fill `dest` completely.
    ///
    /// # Errors
    ///
    /// [`Error::Rng`](crate::Error::Rng) if the generator fails.
    pub fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        trace!(len = dest.len(), "drawing random bytes");
        self.rng.try_fill_bytes(dest)?;
        Ok(())
    }
}

impl<R: RngCore + CryptoRng> RngCore for RandomSource<R> {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl<R: RngCore + CryptoRng> CryptoRng for RandomSource<R> {}

impl<R> core::fmt::Debug for RandomSource<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RandomSource").finish_non_exhaustive()
    }
}
