//! Bernoulli numbers.

use cami_core::{narrow, Iop, IopConfig};
use cami_integers::{Frac64, Integer, Rational};
use num_traits::Zero;

use crate::pascal::pascal_next;

/// The Bernoulli numbers `[B_0, …, B_n]` in exact arithmetic.
///
/// Uses the convention `B_1 = -1/2`, from the recurrence
/// `Σ_{k=0}^{m} C(m+1, k) B_k = 0`. Odd indices from 3 on vanish and are not
/// computed.
#[must_use]
pub fn bernoulli_table(n: usize) -> Vec<Rational> {
    let mut table = Vec::with_capacity(n + 1);
    table.push(Rational::from(1i64));

    // Row m+1 of the Pascal triangle, advanced once per index.
    let mut row: Vec<Integer> = vec![Integer::new(1), Integer::new(1)];
    for m in 1..=n {
        row = pascal_next(&row);
        if m > 1 && m % 2 == 1 {
            table.push(Rational::zero());
            continue;
        }
        let sum: Rational = table
            .iter()
            .zip(&row)
            .filter(|(b, _)| !b.is_zero())
            .map(|(b, c)| b.clone() * Rational::from(c.clone()))
            .sum();
        table.push(-sum / Rational::from(row[m].clone()));
    }
    table
}

/// The Bernoulli number `B_n` (with `B_1 = -1/2`).
///
/// Promoted to [`Rational`] when numerator or denominator leaves the i64
/// range, which first happens at `B_36`.
///
/// ```
/// use cami_core::IopConfig;
/// use cami_integers::Frac64;
/// use cami_numbers::bernoulli_b;
///
/// assert_eq!(bernoulli_b(4, IopConfig::default()).fixed(), Frac64::new(-1, 30));
/// ```
#[must_use]
pub fn bernoulli_b(n: usize, cfg: IopConfig) -> Iop<Frac64, Rational> {
    let value = bernoulli_table(n).pop().unwrap_or_default();
    narrow(cfg, format_args!("bernoulli_b({n})"), value)
}

/// The Bernoulli numbers `[B_0, …, B_n]`.
#[must_use]
pub fn bernoulli_b_array(n: usize, cfg: IopConfig) -> Iop<Vec<Frac64>, Vec<Rational>> {
    narrow(cfg, format_args!("bernoulli_b_array({n})"), bernoulli_table(n))
}
