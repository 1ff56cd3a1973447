//! Ring multiplication backends.
//!
//! [`Multiplier`] is the seam a transform-domain implementation plugs into;
//! [`Schoolbook`] is the reference every backend must agree with.

use super::Polynomial;
use crate::{N, field};

/// Product in `Z_q[X]/(X^{256}+1)`.
pub trait Multiplier {
    fn multiply(a: &Polynomial, b: &Polynomial) -> Polynomial;
}

/// O(N^2) negacyclic convolution.
///
/// `X^N = -1`, so a term landing on `i + j >= N` wraps to `i + j - N` with
/// its sign flipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Schoolbook;

impl Multiplier for Schoolbook {
    fn multiply(a: &Polynomial, b: &Polynomial) -> Polynomial {
        let mut r = [0i16; N];
        for (i, &ai) in a.0.iter().enumerate() {
            for (j, &bj) in b.0.iter().enumerate() {
                let term = field::mul(ai, bj);
                let k = i + j;
                if k < N {
                    r[k] = field::add(r[k], term);
                } else {
                    r[k - N] = field::sub(r[k - N], term);
                }
            }
        }
        Polynomial::from(r)
    }
}
