//! Factorials.

use cami_core::{type_iop, Iop, IopConfig, Width};
use cami_integers::Integer;

/// Largest n whose factorial fits in an i64.
pub const FACTORIAL_MAX: i64 = 20;

/// Computes n! exactly.
#[must_use]
pub fn factorial_big(n: u64) -> Integer {
    (1..=n).map(Integer::from).product()
}

/// The product of all positive integers up to `n`.
///
/// `0! = 1` by definition and the factorial of a negative integer is zero.
/// Results for `n > 20` are promoted to [`Integer`].
///
/// ```
/// use cami_core::IopConfig;
/// use cami_numbers::bigfactorial;
///
/// assert_eq!(bigfactorial(20, IopConfig::default()).fixed(), Some(2_432_902_008_176_640_000));
/// assert_eq!(bigfactorial(21, IopConfig::SILENT).to_string(), "51090942171709440000");
/// ```
#[must_use]
pub fn bigfactorial(n: i64, cfg: IopConfig) -> Iop<i64, Integer> {
    if n < 0 {
        return Iop::Fixed(0);
    }
    match type_iop(n, FACTORIAL_MAX, Some(&format_args!("bigfactorial({n})")), cfg) {
        Width::Fixed => Iop::Fixed((1..=n).product()),
        Width::Big => Iop::Big(factorial_big(n.unsigned_abs())),
    }
}
