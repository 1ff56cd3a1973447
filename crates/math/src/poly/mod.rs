mod multiply;
mod polynomial;
mod polyvec;

pub use multiply::{Multiplier, Schoolbook};
pub use polynomial::Polynomial;
pub use polyvec::Vector;
