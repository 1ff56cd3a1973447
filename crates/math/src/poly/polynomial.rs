use core::ops;

use zeroize::Zeroize;

use super::{Multiplier, Schoolbook};
use crate::{Error, N, field};

/// Element of `R_q = Z_q[X]/(X^{256}+1)`; index `i` is the coefficient of
/// `X^i`.
///
/// Coefficients are always canonical (`0 <= c < q`). Every way of building
/// a value, arithmetic results included, goes through a reducing
/// constructor, so the invariant holds at the type level.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Polynomial(pub(crate) [i16; N]);

impl Polynomial {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0i16; N])
    }

    /// Multiplicative identity `1`.
    #[inline]
    #[must_use]
    pub const fn one() -> Self {
        let mut coeffs = [0i16; N];
        coeffs[0] = 1;
        Self(coeffs)
    }

    /// Build from exactly [`N`] integer coefficients, reducing each mod q.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if `coeffs.len() != N`.
    pub fn from_sequence<T: Copy + Into<i64>>(coeffs: &[T]) -> Result<Self, Error> {
        if coeffs.len() != N {
            return Err(Error::LengthMismatch {
                expected: N,
                actual: coeffs.len(),
            });
        }
        Ok(Self(core::array::from_fn(|i| field::reduce(coeffs[i].into()))))
    }

    #[must_use]
    pub const fn coeffs(&self) -> &[i16; N] {
        &self.0
    }

    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from(self.0.map(field::neg))
    }

    /// Multiply every coefficient by `c` mod q.
    #[must_use]
    pub fn scale(&self, c: i64) -> Self {
        Self::from(field::scalar_mul(c, &self.0))
    }

    /// Ring product using the reference [`Schoolbook`] algorithm.
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        self.mul_with::<Schoolbook>(rhs)
    }

    /// Ring product using the multiplication backend `M`.
    #[inline]
    #[must_use]
    pub fn mul_with<M: Multiplier>(&self, rhs: &Self) -> Self {
        M::multiply(self, rhs)
    }
}

impl From<[i16; N]> for Polynomial {
    #[inline]
    fn from(coeffs: [i16; N]) -> Self {
        Self(coeffs.map(|c| field::reduce(c as i64)))
    }
}

impl TryFrom<&[i16]> for Polynomial {
    type Error = Error;

    fn try_from(coeffs: &[i16]) -> Result<Self, Error> {
        Self::from_sequence(coeffs)
    }
}

impl TryFrom<&[i32]> for Polynomial {
    type Error = Error;

    fn try_from(coeffs: &[i32]) -> Result<Self, Error> {
        Self::from_sequence(coeffs)
    }
}

impl Default for Polynomial {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl Zeroize for Polynomial {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl core::fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Polynomial")
            .field("coeffs[..4]", &&self.0[..4])
            .finish_non_exhaustive()
    }
}

impl<'b> ops::Add<&'b Polynomial> for &Polynomial {
    type Output = Polynomial;
    #[inline]
    fn add(self, rhs: &'b Polynomial) -> Polynomial {
        Polynomial::from(field::vector_add(&self.0, &rhs.0))
    }
}

impl<'b> ops::Sub<&'b Polynomial> for &Polynomial {
    type Output = Polynomial;
    #[inline]
    fn sub(self, rhs: &'b Polynomial) -> Polynomial {
        Polynomial::from(field::vector_sub(&self.0, &rhs.0))
    }
}

impl<'b> ops::Mul<&'b Polynomial> for &Polynomial {
    type Output = Polynomial;
    #[inline]
    fn mul(self, rhs: &'b Polynomial) -> Polynomial {
        self.multiply(rhs)
    }
}

impl ops::Neg for &Polynomial {
    type Output = Polynomial;
    #[inline]
    fn neg(self) -> Polynomial {
        self.negate()
    }
}

impl ops::AddAssign<&Self> for Polynomial {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        *self = &*self + rhs;
    }
}

impl ops::SubAssign<&Self> for Polynomial {
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        *self = &*self - rhs;
    }
}
