//! Triangle relations between three angular momenta.

use cami_integers::{Integer, Rational};
use cami_numbers::factorial_big;
use num_traits::Zero;

use crate::halfint::HalfInt;

/// `x!` for a non-negative integral `x`.
pub(crate) fn factorial(x: HalfInt) -> Integer {
    debug_assert!(x.is_integer() && x.twice() >= 0);
    factorial_big((x.twice() / 2).unsigned_abs())
}

/// Triangle condition for sides `a`, `b`, `c`: every side is non-negative,
/// no side exceeds the sum of the others, and `a + b + c` is an integer.
///
/// ```
/// use cami_coupling::{istriangle, HalfInt};
///
/// assert!(istriangle(HalfInt::new(3), HalfInt::new(4), HalfInt::new(5)));
/// assert!(istriangle(HalfInt::HALF, HalfInt::new(1), HalfInt::from_twice(3)));
/// assert!(!istriangle(HalfInt::new(1), HalfInt::new(1), HalfInt::new(3)));
/// ```
#[must_use]
pub fn istriangle(a: HalfInt, b: HalfInt, c: HalfInt) -> bool {
    let sides = [a, b, c];
    sides.iter().all(|s| s.twice() >= 0)
        && (a + b + c).is_integer()
        && (a + b - c).twice() >= 0
        && (b + c - a).twice() >= 0
        && (c + a - b).twice() >= 0
}

/// The triangle coefficient
/// `Δ(abc) = (a+b-c)! (b+c-a)! (c+a-b)! / (a+b+c+1)!`.
///
/// Zero when the triangle condition fails.
#[must_use]
pub fn triangle_coefficient(a: HalfInt, b: HalfInt, c: HalfInt) -> Rational {
    if !istriangle(a, b, c) {
        return Rational::zero();
    }
    let num = factorial(a + b - c) * factorial(b + c - a) * factorial(c + a - b);
    let den = factorial(a + b + c + HalfInt::new(1));
    Rational::new(num, den)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_sides() {
        assert_eq!(
            triangle_coefficient(HalfInt::new(3), HalfInt::new(4), HalfInt::new(5)),
            Rational::from_i64(1, 180_180)
        );
    }

    #[test]
    fn test_half_integral_sides() {
        assert_eq!(
            triangle_coefficient(HalfInt::HALF, HalfInt::new(1), HalfInt::from_twice(3)),
            Rational::from_i64(1, 12)
        );
    }

    #[test]
    fn test_violations() {
        // 1/2 + 1/2 + 1/2 is not integral
        assert!(!istriangle(HalfInt::HALF, HalfInt::HALF, HalfInt::HALF));
        assert!(!istriangle(HalfInt::new(-1), HalfInt::new(1), HalfInt::new(0)));
        assert!(triangle_coefficient(HalfInt::new(1), HalfInt::new(2), HalfInt::new(4)).is_zero());
    }
}
