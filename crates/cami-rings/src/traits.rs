//! Algebraic structure traits.
//!
//! The numeric routines are written once against these traits and then
//! evaluated over whichever scalar the caller holds: exact rationals for
//! closed-form coefficients, floats for tabulated data.

use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Machine-word implementations (`i64`) follow the std overflow semantics;
/// the overflow-protected entry points never hand them values that could
/// overflow.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Embeds an integer.
    fn from_i64(n: i64) -> Self;

    /// Embeds a count.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds `i64::MAX`.
    fn from_usize(n: usize) -> Self {
        Self::from_i64(i64::try_from(n).expect("count exceeds i64::MAX"))
    }

    /// Computes self^n by binary exponentiation.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

/// A ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring + Div<Output = Self> {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self::one() / self.clone())
        }
    }

    /// Embeds the quotient `num/den`.
    fn from_ratio(num: i64, den: i64) -> Self {
        Self::from_i64(num) / Self::from_i64(den)
    }
}
