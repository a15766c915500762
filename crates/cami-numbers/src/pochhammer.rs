//! Rising factorials.

use cami_rings::Ring;

/// The Pochhammer symbol (rising factorial)
/// `(x)_p = x (x + 1) ⋯ (x + p - 1)`.
///
/// `(x)_0 = 1`, and the product vanishes for `x ∈ {0, -1, …, -(p-1)}`.
///
/// ```
/// use cami_integers::Rational;
/// use cami_numbers::pochhammer;
///
/// assert_eq!(pochhammer(&4i64, 3), 120);
/// assert_eq!(pochhammer(&Rational::from_i64(1, 2), 2), Rational::from_i64(3, 4));
/// ```
#[must_use]
pub fn pochhammer<R: Ring>(x: &R, p: u32) -> R {
    (0..p).fold(R::one(), |acc, k| acc * (x.clone() + R::from_i64(i64::from(k))))
}
