//! Arbitrary precision integers.
//!
//! This module wraps `dashu::IBig` with the handful of operations the
//! number-theoretic routines need: exact products, gcd/lcm, narrowing to
//! machine integers and an approximate `f64` view.

use dashu::base::{Abs, BitTest, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;

/// Number of significant bits kept when converting to `f64`.
const F64_WINDOW: usize = 62;

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Embeds a machine integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// The magnitude `|self|`.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns true below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Greatest common divisor, non-negative.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Least common multiple, non-negative; zero if either side is zero.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        Self(&self.0 / &g.0 * &other.0).abs()
    }

    /// Unwraps the `dashu` value.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Raises to a machine-word power.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Splits the magnitude into a leading `f64` and a binary exponent,
    /// so that `|self| ≈ mantissa * 2^exponent`.
    pub(crate) fn f64_parts(&self) -> (f64, i32) {
        let magnitude = self.0.clone().abs();
        let bits = magnitude.bit_len();
        if bits <= F64_WINDOW {
            let small: i64 = magnitude.try_into().unwrap_or(i64::MAX);
            return (small as f64, 0);
        }
        let shift = bits - F64_WINDOW;
        let top: i64 = (magnitude >> shift).try_into().unwrap_or(i64::MAX);
        (top as f64, i32::try_from(shift).unwrap_or(i32::MAX))
    }

    /// Returns the nearest `f64` (infinite when out of range).
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let (mantissa, exponent) = self.f64_parts();
        let value = mantissa * 2f64.powi(exponent);
        if self.is_negative() {
            -value
        } else {
            value
        }
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

forward_binop!(Integer: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
forward_neg!(Integer);
fold_iter!(Integer);

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<u32> for Integer {
    fn from(value: u32) -> Self {
        Self(IBig::from(value))
    }
}

impl From<usize> for Integer {
    fn from(value: usize) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
