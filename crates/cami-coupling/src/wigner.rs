//! Wigner 3j symbols and Clebsch-Gordan coefficients.

use std::fmt;

use cami_integers::{Integer, Rational};
use num_traits::{One, Zero};

use crate::halfint::HalfInt;
use crate::triangle::{factorial, istriangle, triangle_coefficient};

/// An exact value `±√r` with rational `r >= 0`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SignedSqrt {
    negative: bool,
    radicand: Rational,
}

impl SignedSqrt {
    /// Creates `-√r` if `negative`, else `√r`.
    ///
    /// # Panics
    ///
    /// Panics if `radicand` is negative.
    #[must_use]
    pub fn new(negative: bool, radicand: Rational) -> Self {
        assert!(!radicand.is_negative(), "radicand must be non-negative");
        let negative = negative && !radicand.is_zero();
        Self { negative, radicand }
    }

    /// Zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns true if the sign is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true for zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.radicand.is_zero()
    }

    /// The radicand `r`.
    #[must_use]
    pub fn radicand(&self) -> &Rational {
        &self.radicand
    }

    /// The square carrying the sign, `±r`.
    #[must_use]
    pub fn signed_square(&self) -> Rational {
        if self.negative {
            -self.radicand.clone()
        } else {
            self.radicand.clone()
        }
    }

    /// The value as a float.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let root = self.radicand.to_f64().sqrt();
        if self.negative {
            -root
        } else {
            root
        }
    }
}

impl fmt::Display for SignedSqrt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{sign}√({})", self.radicand)
    }
}

fn is_projection(j: HalfInt, m: HalfInt) -> bool {
    (j - m).is_integer() && m.twice().abs() <= j.twice()
}

/// `(-1)^x` for integral `x`.
fn parity_is_odd(x: HalfInt) -> bool {
    (x.twice() / 2) % 2 != 0
}

/// The Wigner 3j symbol
/// ```text
/// ⎛ j1 j2 j3 ⎞
/// ⎝ m1 m2 m3 ⎠
/// ```
/// by the Racah formula.
///
/// Zero unless the triangle condition holds, `m1 + m2 + m3 = 0` and every
/// `m` is a projection of its `j`.
///
/// ```
/// use cami_coupling::{three_j_symbol, HalfInt};
///
/// let h = HalfInt::new;
/// let w = three_j_symbol(h(3), h(0), h(4), h(-1), h(5), h(1));
/// assert_eq!(w.to_string(), "-√(361/30030)");
/// assert!((w.to_f64() + 0.109_641_743_972_412_36).abs() < 1e-15);
/// ```
#[must_use]
pub fn three_j_symbol(
    j1: HalfInt,
    m1: HalfInt,
    j2: HalfInt,
    m2: HalfInt,
    j3: HalfInt,
    m3: HalfInt,
) -> SignedSqrt {
    if (m1 + m2 + m3) != HalfInt::ZERO
        || !istriangle(j1, j2, j3)
        || !is_projection(j1, m1)
        || !is_projection(j2, m2)
        || !is_projection(j3, m3)
    {
        return SignedSqrt::zero();
    }

    let prefactor = triangle_coefficient(j1, j2, j3)
        * Rational::from(
            factorial(j1 + m1)
                * factorial(j1 - m1)
                * factorial(j2 + m2)
                * factorial(j2 - m2)
                * factorial(j3 + m3)
                * factorial(j3 - m3),
        );

    // Summation bounds keep every factorial argument non-negative.
    let zero = HalfInt::ZERO;
    let t_min = zero.max(j2 - j3 - m1).max(j1 - j3 + m2);
    let t_max = (j1 + j2 - j3).min(j1 - m1).min(j2 + m2);

    let mut sum = Rational::zero();
    let mut t = t_min;
    while t <= t_max {
        let den = factorial(t)
            * factorial(j3 - j2 + t + m1)
            * factorial(j3 - j1 + t - m2)
            * factorial(j1 + j2 - j3 - t)
            * factorial(j1 - t - m1)
            * factorial(j2 - t + m2);
        let term = Rational::new(Integer::one(), den);
        sum = if parity_is_odd(t) { sum - term } else { sum + term };
        t = t + HalfInt::new(1);
    }

    let negative = parity_is_odd(j1 - j2 - m3) != sum.is_negative();
    let radicand = prefactor * sum.clone() * sum;
    SignedSqrt::new(negative, radicand)
}

/// The Clebsch-Gordan coefficient `⟨j1 m1; j2 m2 | J M⟩`,
/// `(-1)^(j1-j2+M) √(2J+1) (j1 m1 j2 m2 J -M)`.
///
/// Zero unless the triangle condition holds and `M = m1 + m2`.
#[must_use]
pub fn cgc(j1: HalfInt, m1: HalfInt, j2: HalfInt, m2: HalfInt, j: HalfInt, m: HalfInt) -> SignedSqrt {
    let w = three_j_symbol(j1, m1, j2, m2, j, -m);
    if w.is_zero() {
        return w;
    }
    let multiplicity = Rational::from(Integer::new(j.twice() + 1));
    let negative = parity_is_odd(j1 - j2 + m) != w.is_negative();
    SignedSqrt::new(negative, w.radicand * multiplicity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(n: i64) -> HalfInt {
        HalfInt::new(n)
    }

    fn q(num: i64, den: i64) -> Rational {
        Rational::from_i64(num, den)
    }

    #[test]
    fn test_three_j_values() {
        let w = three_j_symbol(h(3), h(0), h(4), h(-1), h(5), h(1));
        assert_eq!(w, SignedSqrt::new(true, q(361, 30030)));

        assert_eq!(three_j_symbol(h(1), h(1), h(1), h(-1), h(0), h(0)), SignedSqrt::new(false, q(1, 3)));
        assert_eq!(three_j_symbol(h(0), h(0), h(0), h(0), h(0), h(0)).to_f64(), 1.0);
        assert_eq!(three_j_symbol(h(2), h(0), h(2), h(0), h(2), h(0)), SignedSqrt::new(true, q(2, 35)));
    }

    #[test]
    fn test_half_integral_momenta() {
        let half = HalfInt::HALF;
        let w = three_j_symbol(half, half, half, -half, h(1), h(0));
        assert_eq!(w.signed_square(), q(1, 6));
    }

    #[test]
    fn test_selection_rules() {
        // projections do not add up to zero
        assert!(three_j_symbol(h(1), h(1), h(1), h(0), h(1), h(0)).is_zero());
        // triangle violated
        assert!(three_j_symbol(h(1), h(0), h(1), h(0), h(3), h(0)).is_zero());
        // |m| > j
        assert!(three_j_symbol(h(1), h(2), h(2), h(-2), h(2), h(0)).is_zero());
        assert_eq!(SignedSqrt::zero().to_string(), "0");
    }

    #[test]
    fn test_clebsch_gordan() {
        let c = cgc(h(3), h(0), h(4), h(-1), h(5), h(-1));
        assert_eq!(c, SignedSqrt::new(true, q(361, 2730)));
        assert_eq!(c.to_string(), "-√(361/2730)");

        // ⟨1/2 1/2; 1/2 -1/2 | 1 0⟩ = √(1/2)
        let half = HalfInt::HALF;
        assert_eq!(cgc(half, half, half, -half, h(1), h(0)), SignedSqrt::new(false, q(1, 2)));
        // ⟨1/2 1/2; 1/2 -1/2 | 0 0⟩ = √(1/2)
        assert_eq!(cgc(half, half, half, -half, h(0), h(0)), SignedSqrt::new(false, q(1, 2)));
        // ⟨1/2 -1/2; 1/2 1/2 | 0 0⟩ = -√(1/2)
        assert_eq!(cgc(half, -half, half, half, h(0), h(0)), SignedSqrt::new(true, q(1, 2)));
    }
}
