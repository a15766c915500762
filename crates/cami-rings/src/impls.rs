//! Ring and field instances for the scalar types.

use cami_integers::{Integer, Rational};

use crate::traits::{Field, Ring};

impl Ring for i64 {
    fn from_i64(n: i64) -> Self {
        n
    }
}

impl Ring for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_i64(n: i64) -> Self {
        n as f64
    }
}

impl Field for f64 {}

impl Ring for Integer {
    fn from_i64(n: i64) -> Self {
        Integer::new(n)
    }
}

impl Ring for Rational {
    fn from_i64(n: i64) -> Self {
        Rational::from(n)
    }
}

impl Field for Rational {
    fn from_ratio(num: i64, den: i64) -> Self {
        Rational::from_i64(num, den)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_over_each_ring() {
        assert_eq!(Ring::pow(&3i64, 4), 81);
        assert_eq!(Ring::pow(&2.0f64, 10), 1024.0);
        assert_eq!(Ring::pow(&Integer::new(2), 70).to_string(), "1180591620717411303424");
        assert_eq!(Ring::pow(&Rational::from_i64(-1, 2), 3), Rational::from_i64(-1, 8));
        assert_eq!(Ring::pow(&Integer::new(5), 0), Integer::new(1));
    }

    #[test]
    fn test_field_inverse() {
        assert_eq!(Rational::from_i64(3, 7).inv(), Some(Rational::from_i64(7, 3)));
        assert_eq!(Field::inv(&0.0f64), None);
        assert_eq!(Field::inv(&4.0f64), Some(0.25));
    }

    #[test]
    fn test_from_ratio_is_exact_for_rationals() {
        assert_eq!(<Rational as Field>::from_ratio(1, 3).to_string(), "1/3");
        assert!((<f64 as Field>::from_ratio(1, 4) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(<Integer as Ring>::from_usize(12), Integer::new(12));
    }
}
