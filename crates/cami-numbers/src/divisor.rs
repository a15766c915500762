//! Common denominators of rational vectors.

use cami_integers::{Integer, Rational};
use num_traits::One;

/// The least common multiple of the denominators; 1 for an empty slice.
#[must_use]
pub fn divisor(v: &[Rational]) -> Integer {
    v.iter().fold(Integer::one(), |acc, q| acc.lcm(&q.denominator()))
}

/// The numerators of `v` over the common [`divisor`].
#[must_use]
pub fn numerators(v: &[Rational]) -> Vec<Integer> {
    normalize_rationals(v).0
}

/// Splits `v` into integer numerators and their common divisor, so that
/// `v[i] = numerators[i] / divisor`.
#[must_use]
pub fn normalize_rationals(v: &[Rational]) -> (Vec<Integer>, Integer) {
    let d = divisor(v);
    let nums = v
        .iter()
        .map(|q| q.numerator() * (d.clone() / q.denominator()))
        .collect();
    (nums, d)
}
