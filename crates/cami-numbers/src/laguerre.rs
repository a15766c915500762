//! Laguerre and generalized Laguerre polynomials.
//!
//! `L_n^α(x) = Σ_{k=0}^{n} (-1)^k C(n+α, n-k) x^k / k!`, with the ordinary
//! Laguerre polynomials at `α = 0`.

use cami_core::{narrow, Iop, IopConfig};
use cami_integers::{Frac64, Rational};
use cami_poly::polynomial_derivative;
use cami_rings::Field;
use num_traits::Zero;

/// Coefficients `[c_0, …, c_n]` of `L_n^α` over any field.
///
/// The generalized binomial is expanded as
/// `C(n+α, n-k) = Π_{i=1}^{n-k} (α + k + i) / i`, which is valid for
/// non-integer `α`.
#[must_use]
pub fn generalized_laguerre_coefficients<F: Field>(n: usize, alpha: &F) -> Vec<F> {
    let mut coeffs = Vec::with_capacity(n + 1);
    let mut k_factorial = F::one();
    for k in 0..=n {
        if k > 0 {
            k_factorial = k_factorial * F::from_usize(k);
        }
        let binomial = (1..=n - k).fold(F::one(), |acc, i| {
            acc * (alpha.clone() + F::from_usize(k + i)) / F::from_usize(i)
        });
        let c = binomial / k_factorial.clone();
        coeffs.push(if k % 2 == 0 { c } else { -c });
    }
    coeffs
}

/// Coefficients of the Laguerre polynomial `L_n`.
///
/// ```
/// use cami_core::IopConfig;
/// use cami_integers::Frac64;
/// use cami_numbers::laguerre_polynom;
///
/// let l2: Vec<Frac64> = [(1, 1), (-2, 1), (1, 2)]
///     .into_iter()
///     .filter_map(|(n, d)| Frac64::new(n, d))
///     .collect();
/// assert_eq!(laguerre_polynom(2, IopConfig::default()).fixed(), Some(l2));
/// ```
#[must_use]
pub fn laguerre_polynom(n: usize, cfg: IopConfig) -> Iop<Vec<Frac64>, Vec<Rational>> {
    let coeffs = generalized_laguerre_coefficients(n, &Rational::zero());
    narrow(cfg, format_args!("laguerre_polynom({n})"), coeffs)
}

/// Coefficients of the generalized Laguerre polynomial `L_n^α` for
/// rational `α`.
///
/// Use [`generalized_laguerre_coefficients`] for floating point `α`.
#[must_use]
pub fn generalized_laguerre_polynom(
    n: usize,
    alpha: &Rational,
    cfg: IopConfig,
) -> Iop<Vec<Frac64>, Vec<Rational>> {
    let coeffs = generalized_laguerre_coefficients(n, alpha);
    narrow(cfg, format_args!("generalized_laguerre_polynom({n}, {alpha})"), coeffs)
}

/// Evaluates the `deriv`-th derivative of `L_n` at `x`.
#[must_use]
pub fn laguerre_l<F: Field>(n: usize, x: &F, deriv: usize) -> F {
    generalized_laguerre_l(n, &F::zero(), x, deriv)
}

/// Evaluates the `deriv`-th derivative of `L_n^α` at `x`.
#[must_use]
pub fn generalized_laguerre_l<F: Field>(n: usize, alpha: &F, x: &F, deriv: usize) -> F {
    let coeffs = generalized_laguerre_coefficients(n, alpha);
    polynomial_derivative(&coeffs, x, deriv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(num: i64, den: i64) -> Rational {
        Rational::from_i64(num, den)
    }

    #[test]
    fn test_low_orders() {
        assert_eq!(laguerre_polynom(0, IopConfig::SILENT).into_big(), vec![q(1, 1)]);
        assert_eq!(
            laguerre_polynom(3, IopConfig::SILENT).into_big(),
            vec![q(1, 1), q(-3, 1), q(3, 2), q(-1, 6)]
        );
        // L_1^α(x) = 1 + α - x
        assert_eq!(
            generalized_laguerre_polynom(1, &q(1, 2), IopConfig::SILENT).into_big(),
            vec![q(3, 2), q(-1, 1)]
        );
    }

    #[test]
    fn test_evaluation() {
        assert_eq!(laguerre_l(8, &q(5, 1), 0), q(18029, 8064));
        assert_eq!(laguerre_l(3, &q(2, 1), 0), q(-1, 3));
        assert_eq!(generalized_laguerre_l(2, &q(1, 1), &q(3, 1), 0), q(-3, 2));

        let y = generalized_laguerre_l(5, &3.0f64, &10.0, 0);
        assert!((y + 32.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_derivative_lowers_order() {
        // d/dx L_n^α = -L_{n-1}^{α+1}
        let alpha = q(1, 3);
        let x = q(7, 2);
        for n in 1..8 {
            let lhs = generalized_laguerre_l(n, &alpha, &x, 1);
            let rhs = -generalized_laguerre_l(n - 1, &(alpha.clone() + q(1, 1)), &x, 0);
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn test_large_order_is_promoted() {
        assert!(laguerre_polynom(10, IopConfig::SILENT).is_fixed());
        // 21! no longer fits in a machine word
        assert!(laguerre_polynom(21, IopConfig::SILENT).is_big());
    }
}
