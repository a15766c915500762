//! Small numeric helpers.

use cami_rings::Field;

/// The characteristic of the decimal logarithm, `⌊log10 x⌋`.
///
/// Zero maps to `i32::MIN`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn log10_characteristic(x: f64) -> i32 {
    x.abs().log10().floor() as i32
}

/// The mantissa of the decimal logarithm, `log10 x - ⌊log10 x⌋`, in `[0, 1)`.
///
/// Zero, infinities and NaN have no mantissa and give NaN.
#[must_use]
pub fn log10_mantissa(x: f64) -> f64 {
    let log = x.abs().log10();
    log - log.floor()
}

/// The exponential of `x` about `a`, truncated after order `p`:
/// `Σ_{k=0}^{p} (x - a)^k / k!`.
///
/// ```
/// use cami_integers::Rational;
/// use cami_numbers::texp;
///
/// let one = Rational::from(1i64);
/// let zero = Rational::from(0i64);
/// assert_eq!(texp(&one, &zero, 5), Rational::from_i64(163, 60));
/// ```
#[must_use]
pub fn texp<F: Field>(x: &F, a: &F, p: u32) -> F {
    let h = x.clone() - a.clone();
    let mut term = F::one();
    let mut sum = F::one();
    for k in 1..=p {
        term = term * h.clone() / F::from_i64(i64::from(k));
        sum = sum + term.clone();
    }
    sum
}
