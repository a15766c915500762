//! Integers and half-integers.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use cami_integers::{Integer, Rational};

use crate::error::CouplingError;

/// A multiple of 1/2, stored as twice its value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfInt {
    twice: i64,
}

impl HalfInt {
    /// Zero.
    pub const ZERO: Self = Self { twice: 0 };

    /// One half.
    pub const HALF: Self = Self { twice: 1 };

    /// Embeds an integer.
    ///
    /// # Panics
    ///
    /// Panics unless `-2^62 <= n < 2^62`; see [`HalfInt::try_new`].
    #[must_use]
    pub const fn new(n: i64) -> Self {
        match n.checked_mul(2) {
            Some(twice) => Self { twice },
            None => panic!("half-integer out of range"),
        }
    }

    /// Embeds an integer, failing when twice its value leaves the i64 range.
    ///
    /// # Errors
    ///
    /// Returns [`CouplingError::OutOfRange`] outside `-2^62 <= n < 2^62`.
    pub fn try_new(n: i64) -> Result<Self, CouplingError> {
        n.checked_mul(2)
            .map(Self::from_twice)
            .ok_or_else(|| CouplingError::OutOfRange(n.to_string()))
    }

    /// The value `twice / 2`.
    #[must_use]
    pub const fn from_twice(twice: i64) -> Self {
        Self { twice }
    }

    /// Twice the value.
    #[must_use]
    pub const fn twice(self) -> i64 {
        self.twice
    }

    /// Returns true if the value is an integer.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.twice % 2 == 0
    }

    /// Converts an exact rational.
    ///
    /// # Errors
    ///
    /// Fails unless `2q` is an integer in the i64 range.
    pub fn from_rational(q: &Rational) -> Result<Self, CouplingError> {
        let doubled = q.clone() * Rational::from(2i64);
        let twice = doubled
            .to_integer()
            .ok_or_else(|| CouplingError::NotHalfInteger(q.to_string()))?;
        twice
            .to_i64()
            .map(Self::from_twice)
            .ok_or_else(|| CouplingError::OutOfRange(q.to_string()))
    }

    /// The value as an exact rational.
    #[must_use]
    pub fn to_rational(self) -> Rational {
        Rational::new(Integer::new(self.twice), Integer::new(2))
    }

    /// The value as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.twice as f64 / 2.0
    }
}

impl From<i64> for HalfInt {
    fn from(n: i64) -> Self {
        Self::new(n)
    }
}

impl TryFrom<f64> for HalfInt {
    type Error = CouplingError;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(x: f64) -> Result<Self, Self::Error> {
        let doubled = 2.0 * x;
        if !doubled.is_finite() || doubled.fract() != 0.0 {
            return Err(CouplingError::NotHalfInteger(x.to_string()));
        }
        if doubled.abs() >= 9.0e18 {
            return Err(CouplingError::OutOfRange(x.to_string()));
        }
        Ok(Self::from_twice(doubled as i64))
    }
}

impl Add for HalfInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_twice(self.twice + rhs.twice)
    }
}

impl Sub for HalfInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_twice(self.twice - rhs.twice)
    }
}

impl Neg for HalfInt {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_twice(-self.twice)
    }
}

impl fmt::Display for HalfInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.twice / 2)
        } else {
            write!(f, "{}/2", self.twice)
        }
    }
}
