//! ML-KEM parameter definitions.
//!
//! Each security level exists twice: as a [`ParameterSet`] value that can be
//! chosen at run time (parsed from configuration, serialised by name), and as
//! a marker type implementing [`MlKemParams`] for code that fixes the level
//! at compile time.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

use crate::Error;
pub use kyber_math::{N, Q};

/// Named bundle of scheme constants selecting a security level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterSet {
    name: &'static str,
    k: usize,
    eta1: usize,
    eta2: usize,
    du: u32,
    dv: u32,
}

/// ML-KEM-512 (k = 2, NIST security level 1).
pub const ML_KEM_512: ParameterSet = ParameterSet {
    name: "ML-KEM-512",
    k: 2,
    eta1: 3,
    eta2: 2,
    du: 10,
    dv: 4,
};

/// ML-KEM-768 (k = 3, NIST security level 3).
pub const ML_KEM_768: ParameterSet = ParameterSet {
    name: "ML-KEM-768",
    k: 3,
    eta1: 2,
    eta2: 2,
    du: 10,
    dv: 4,
};

/// ML-KEM-1024 (k = 4, NIST security level 5).
pub const ML_KEM_1024: ParameterSet = ParameterSet {
    name: "ML-KEM-1024",
    k: 4,
    eta1: 2,
    eta2: 2,
    du: 11,
    dv: 5,
};

impl ParameterSet {
    /// Every standard parameter set, weakest first.
    pub const ALL: [Self; 3] = [ML_KEM_512, ML_KEM_768, ML_KEM_1024];

    /// Look up a parameter set by full name (`"ML-KEM-768"`, any case) or by
    /// security level alone (`"768"`).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for any other string.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        let wanted = name.trim();
        let found = Self::ALL.into_iter().find(|p| {
            p.name.eq_ignore_ascii_case(wanted) || p.name.strip_prefix("ML-KEM-") == Some(wanted)
        });
        match found {
            Some(params) => {
                debug!(params = params.name, "selected parameter set");
                Ok(params)
            }
            None => {
                warn!(requested = wanted, "unknown parameter set");
                Err(Error::InvalidArgument(format!(
                    "unknown parameter set `{wanted}`"
                )))
            }
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Module rank: number of polynomials in a vector.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// CBD width for key-generation secrets.
    #[must_use]
    pub const fn eta1(&self) -> usize {
        self.eta1
    }

    /// CBD width for encryption noise.
    #[must_use]
    pub const fn eta2(&self) -> usize {
        self.eta2
    }

    /// Compression bits for the polynomial-vector ciphertext component.
    #[must_use]
    pub const fn du(&self) -> u32 {
        self.du
    }

    /// Compression bits for the scalar-polynomial ciphertext component.
    #[must_use]
    pub const fn dv(&self) -> u32 {
        self.dv
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        ML_KEM_512
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for ParameterSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_name(s)
    }
}

impl Serialize for ParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for ParameterSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(serde::de::Error::custom)
    }
}

/// ML-KEM parameter set fixed at compile time. Implemented by [`MlKem512`],
/// [`MlKem768`], [`MlKem1024`].
pub trait MlKemParams: 'static {
    /// Module rank (k = 2, 3, or 4).
    const K: usize;
    /// CBD noise parameter for keygen secret polynomials.
    const ETA1: usize;
    /// CBD noise parameter for encryption noise polynomials.
    const ETA2: usize;
    /// Compression bits for polynomial-vector ciphertext component.
    const D_U: u32;
    /// Compression bits for scalar polynomial ciphertext component.
    const D_V: u32;
    /// The matching run-time value.
    const PARAMS: ParameterSet;
}

/// ML-KEM-512 parameter set (k = 2, NIST security level 1).
#[derive(Debug, Clone, Copy)]
pub struct MlKem512;

impl MlKemParams for MlKem512 {
    const K: usize = 2;
    const ETA1: usize = 3;
    const ETA2: usize = 2;
    const D_U: u32 = 10;
    const D_V: u32 = 4;
    const PARAMS: ParameterSet = ML_KEM_512;
}

/// ML-KEM-768 parameter set (k = 3, NIST security level 3).
#[derive(Debug, Clone, Copy)]
pub struct MlKem768;

impl MlKemParams for MlKem768 {
    const K: usize = 3;
    const ETA1: usize = 2;
    const ETA2: usize = 2;
    const D_U: u32 = 10;
    const D_V: u32 = 4;
    const PARAMS: ParameterSet = ML_KEM_768;
}

/// ML-KEM-1024 parameter set (k = 4, NIST security level 5).
#[derive(Debug, Clone, Copy)]
pub struct MlKem1024;

impl MlKemParams for MlKem1024 {
    const K: usize = 4;
    const ETA1: usize = 2;
    const ETA2: usize = 2;
    const D_U: u32 = 11;
    const D_V: u32 = 5;
    const PARAMS: ParameterSet = ML_KEM_1024;
}

const _: () = {
    macro_rules! check_params {
        ($t:ty) => {
            assert!(<$t>::PARAMS.k == <$t>::K);
            assert!(<$t>::PARAMS.eta1 == <$t>::ETA1);
            assert!(<$t>::PARAMS.eta2 == <$t>::ETA2);
            assert!(<$t>::PARAMS.du == <$t>::D_U);
            assert!(<$t>::PARAMS.dv == <$t>::D_V);
        };
    }
    check_params!(MlKem512);
    check_params!(MlKem768);
    check_params!(MlKem1024);

    // ring constants are shared by every level
    assert!(N == 256);
    assert!(Q == 3329);
};
