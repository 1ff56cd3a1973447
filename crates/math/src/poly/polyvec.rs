use core::ops;

use zeroize::Zeroize;

use super::{Multiplier, Polynomial, Schoolbook};

/// A vector of `K` ring elements (`K` is the module rank of the parameter
/// set).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vector<const K: usize> {
    pub(crate) polys: [Polynomial; K],
}

impl<const K: usize> Vector<K> {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            polys: [Polynomial::zero(); K],
        }
    }

    #[must_use]
    pub const fn polys(&self) -> &[Polynomial; K] {
        &self.polys
    }

    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            polys: self.polys.map(|p| p.negate()),
        }
    }

    /// Multiply every coefficient of every polynomial by `c` mod q.
    #[must_use]
    pub fn scale(&self, c: i64) -> Self {
        Self {
            polys: self.polys.map(|p| p.scale(c)),
        }
    }

    /// `sum_i(self[i] * other[i])` with the [`Schoolbook`] product.
    #[must_use]
    pub fn inner_product(&self, other: &Self) -> Polynomial {
        self.inner_product_with::<Schoolbook>(other)
    }

    /// `sum_i(self[i] * other[i])` with the multiplication backend `M`.
    #[must_use]
    pub fn inner_product_with<M: Multiplier>(&self, other: &Self) -> Polynomial {
        let mut acc = Polynomial::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            acc += &a.mul_with::<M>(b);
        }
        acc
    }
}

impl<const K: usize> From<[Polynomial; K]> for Vector<K> {
    #[inline]
    fn from(polys: [Polynomial; K]) -> Self {
        Self { polys }
    }
}

impl<const K: usize> Default for Vector<K> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const K: usize> Zeroize for Vector<K> {
    fn zeroize(&mut self) {
        for p in &mut self.polys {
            p.zeroize();
        }
    }
}

impl<const K: usize> core::fmt::Debug for Vector<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Vector")
            .field("k", &K)
            .finish_non_exhaustive()
    }
}

impl<'b, const K: usize> ops::Add<&'b Vector<K>> for &Vector<K> {
    type Output = Vector<K>;
    fn add(self, rhs: &'b Vector<K>) -> Vector<K> {
        let mut r = Vector::zero();
        for i in 0..K {
            r.polys[i] = &self.polys[i] + &rhs.polys[i];
        }
        r
    }
}

impl<'b, const K: usize> ops::Sub<&'b Vector<K>> for &Vector<K> {
    type Output = Vector<K>;
    fn sub(self, rhs: &'b Vector<K>) -> Vector<K> {
        let mut r = Vector::zero();
        for i in 0..K {
            r.polys[i] = &self.polys[i] - &rhs.polys[i];
        }
        r
    }
}

impl<const K: usize> ops::AddAssign<&Self> for Vector<K> {
    fn add_assign(&mut self, rhs: &Self) {
        for i in 0..K {
            self.polys[i] += &rhs.polys[i];
        }
    }
}
