//! Faulhaber polynomials for sums of powers.

use cami_core::{narrow, Iop, IopConfig};
use cami_integers::{Frac64, Integer, Rational};
use cami_poly::polynomial;
use num_traits::Zero;

use crate::bernoulli::bernoulli_table;
use crate::pascal::pascal_row;

/// Coefficients `[c_0, …, c_p]` of the Faulhaber polynomial
/// `F(n, p) = Σ_{k=1}^{n} k^{p-1}`.
///
/// `c_0 = 0` and `c_j = C(p, p-j) B_{p-j} / p`, with the convention
/// `B_1 = +1/2`. For `p = 0` the result is `[0]`.
#[must_use]
pub fn faulhaber_coefficients(p: usize) -> Vec<Rational> {
    if p == 0 {
        return vec![Rational::zero()];
    }
    let mut bernoulli = bernoulli_table(p);
    bernoulli[1] = -bernoulli[1].clone();
    let binomials: Vec<Integer> = pascal_row(p);
    let p_q = Rational::from(Integer::from(p));

    let mut coeffs = Vec::with_capacity(p + 1);
    coeffs.push(Rational::zero());
    coeffs.extend((1..=p).map(|j| {
        let k = p - j;
        bernoulli[k].clone() * Rational::from(binomials[k].clone()) / p_q.clone()
    }));
    coeffs
}

/// The Faulhaber polynomial `F(n, p)` as coefficient vector.
#[must_use]
pub fn faulhaber_polynom(p: usize, cfg: IopConfig) -> Iop<Vec<Frac64>, Vec<Rational>> {
    narrow(cfg, format_args!("faulhaber_polynom({p})"), faulhaber_coefficients(p))
}

fn power_sum(n: u64, p: usize) -> Integer {
    let x = Rational::from(Integer::from(n));
    // The polynomial is integer valued at integer arguments.
    polynomial(&faulhaber_coefficients(p), &x).numerator()
}

/// Evaluates `F(n, p) = Σ_{k=1}^{n} k^{p-1}`.
///
/// Promoted to [`Integer`] when the sum leaves the i64 range.
///
/// ```
/// use cami_core::IopConfig;
/// use cami_numbers::faulhaber_polynomial;
///
/// assert_eq!(faulhaber_polynomial(3, 6, IopConfig::default()).fixed(), Some(276));
/// ```
#[must_use]
pub fn faulhaber_polynomial(n: u64, p: usize, cfg: IopConfig) -> Iop<i64, Integer> {
    narrow(cfg, format_args!("faulhaber_polynomial({n}, {p})"), power_sum(n, p))
}

/// The power sum `Σ_{k=1}^{n} k^p`, that is `F(n, p + 1)`.
#[must_use]
pub fn faulhaber_summation(n: u64, p: usize, cfg: IopConfig) -> Iop<i64, Integer> {
    narrow(cfg, format_args!("faulhaber_summation({n}, {p})"), power_sum(n, p + 1))
}
