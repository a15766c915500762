//! Fixed-width rationals with checked arithmetic.
//!
//! `Frac64` is the machine-word counterpart of [`Rational`](crate::Rational):
//! an `i64` numerator over a positive `i64` denominator, always reduced.
//! Every operation is checked and returns `None` when the reduced result no
//! longer fits, which is the signal for overflow protection to switch to the
//! arbitrary precision representation.

use std::cmp::Ordering;
use std::fmt;

/// A reduced rational with `i64` parts.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frac64 {
    num: i64,
    den: i64,
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Frac64 {
    /// Zero.
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// One.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Creates `num/den` in lowest terms.
    ///
    /// Returns `None` for a zero denominator or when normalizing the sign
    /// overflows (`i64::MIN` parts).
    #[must_use]
    pub fn new(num: i64, den: i64) -> Option<Self> {
        Self::from_wide(i128::from(num), i128::from(den))
    }

    /// Creates the integer `n/1`.
    #[must_use]
    pub const fn from_int(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Reduces a wide quotient and narrows it back to `i64` parts.
    fn from_wide(num: i128, den: i128) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let g = gcd_u128(num.unsigned_abs(), den.unsigned_abs());
        let g = i128::try_from(g).ok()?;
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = num.checked_neg()?;
            den = den.checked_neg()?;
        }
        Some(Self {
            num: i64::try_from(num).ok()?,
            den: i64::try_from(den).ok()?,
        })
    }

    /// Numerator.
    #[must_use]
    pub const fn numer(self) -> i64 {
        self.num
    }

    /// Denominator (always positive).
    #[must_use]
    pub const fn denom(self) -> i64 {
        self.den
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Returns true if this is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Checked addition.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let (a, b) = (i128::from(self.num), i128::from(self.den));
        let (c, d) = (i128::from(rhs.num), i128::from(rhs.den));
        Self::from_wide(a * d + c * b, b * d)
    }

    /// Checked subtraction.
    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs.checked_neg()?)
    }

    /// Checked multiplication.
    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        Self::from_wide(
            i128::from(self.num) * i128::from(rhs.num),
            i128::from(self.den) * i128::from(rhs.den),
        )
    }

    /// Checked division; `None` on division by zero.
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        Self::from_wide(
            i128::from(self.num) * i128::from(rhs.den),
            i128::from(self.den) * i128::from(rhs.num),
        )
    }

    /// Checked negation.
    #[must_use]
    pub fn checked_neg(self) -> Option<Self> {
        Some(Self {
            num: self.num.checked_neg()?,
            den: self.den,
        })
    }

    /// Checked power.
    #[must_use]
    pub fn checked_pow(self, exp: u32) -> Option<Self> {
        Some(Self {
            num: self.num.checked_pow(exp)?,
            den: self.den.checked_pow(exp)?,
        })
    }

    /// Returns the nearest `f64`.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Default for Frac64 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Frac64 {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl PartialOrd for Frac64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frac64 {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.num) * i128::from(other.den);
        let rhs = i128::from(other.num) * i128::from(self.den);
        lhs.cmp(&rhs)
    }
}

impl fmt::Debug for Frac64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frac64({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Frac64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
