//! Harmonic numbers.

use cami_core::{narrow, protect, Iop, IopConfig};
use cami_integers::{Frac64, Integer, Rational};
use num_traits::Zero;

fn term(k: u64, p: i32) -> Rational {
    let power = Integer::from(k).pow(p.unsigned_abs());
    if p >= 0 {
        Rational::new(Integer::new(1), power)
    } else {
        Rational::from(power)
    }
}

fn partial_sums(n: u64, p: i32) -> impl Iterator<Item = Rational> {
    (1..=n).scan(Rational::zero(), move |acc, k| {
        *acc = acc.clone() + term(k, p);
        Some(acc.clone())
    })
}

fn fixed_term(k: u64, p: i32) -> Option<Frac64> {
    let k = i64::try_from(k).ok()?;
    let base = if p >= 0 { Frac64::new(1, k)? } else { Frac64::from(k) };
    base.checked_pow(p.unsigned_abs())
}

/// Partial sums in `Frac64`, or `None` once a term or a sum leaves i64.
fn fixed_partial_sums(n: u64, p: i32) -> Option<Vec<Frac64>> {
    let mut acc = Frac64::ZERO;
    (1..=n)
        .map(|k| {
            acc = acc.checked_add(fixed_term(k, p)?)?;
            Some(acc)
        })
        .collect()
}

/// The harmonic number of order `p`, `H(n, p) = Σ_{k=1}^{n} 1/k^p`.
///
/// Negative orders give power sums, `H(n, -p) = Σ k^p`. `H(0, p) = 0`.
/// The result is promoted to [`Rational`] once numerator or denominator
/// leaves the i64 range (for `p = 1` from `n = 47` on).
///
/// ```
/// use cami_core::IopConfig;
/// use cami_integers::Frac64;
/// use cami_numbers::harmonic_number;
///
/// assert_eq!(harmonic_number(4, 5, IopConfig::default()).fixed(), Frac64::new(257_875, 248_832));
/// ```
#[must_use]
pub fn harmonic_number(n: u64, p: i32, cfg: IopConfig) -> Iop<Frac64, Rational> {
    let value = partial_sums(n, p).last().unwrap_or_default();
    narrow(cfg, format_args!("harmonic_number({n}, {p})"), value)
}

/// The harmonic numbers `[H(1, p), …, H(n, p)]`.
///
/// Summed in `Frac64` first; the whole array is recomputed exactly when any
/// term or partial sum overflows.
#[must_use]
pub fn harmonic_number_array(n: u64, p: i32, cfg: IopConfig) -> Iop<Vec<Frac64>, Vec<Rational>> {
    protect(
        cfg,
        format_args!("harmonic_number_array({n}, {p})"),
        || fixed_partial_sums(n, p),
        || partial_sums(n, p).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_numbers() {
        let expected: Vec<Frac64> = [(1, 1), (3, 2), (11, 6), (25, 12), (137, 60)]
            .into_iter()
            .filter_map(|(n, d)| Frac64::new(n, d))
            .collect();
        assert_eq!(harmonic_number_array(5, 1, IopConfig::SILENT), Iop::Fixed(expected));
        assert_eq!(harmonic_number(0, 1, IopConfig::SILENT), Iop::Fixed(Frac64::ZERO));
    }

    #[test]
    fn test_higher_order() {
        assert_eq!(
            harmonic_number(4, 5, IopConfig::SILENT),
            Iop::Fixed(Frac64::new(257_875, 248_832).unwrap())
        );
    }

    #[test]
    fn test_negative_order_is_power_sum() {
        assert_eq!(harmonic_number(12, -3, IopConfig::SILENT), Iop::Fixed(Frac64::from(6084)));
    }

    #[test]
    fn test_promotion_boundary() {
        assert_eq!(
            harmonic_number(42, 1, IopConfig::SILENT),
            Iop::Fixed(Frac64::new(12_309_312_989_335_019, 2_844_937_529_085_600).unwrap())
        );
        assert!(harmonic_number(46, 1, IopConfig::SILENT).is_fixed());

        let h47 = harmonic_number(47, 1, IopConfig::SILENT);
        assert!(h47.is_big());
        assert_eq!(h47.into_big(), partial_sums(47, 1).last().unwrap());
    }

    #[test]
    fn test_array_matches_exact_sums() {
        for p in [-4, 0, 1, 2] {
            let Iop::Fixed(fixed) = harmonic_number_array(20, p, IopConfig::SILENT) else {
                panic!("H(20, {p}) fits in i64");
            };
            let exact: Vec<Rational> = partial_sums(20, p).collect();
            let widened: Vec<Rational> = fixed
                .iter()
                .map(|f| Rational::new(Integer::new(f.numer()), Integer::new(f.denom())))
                .collect();
            assert_eq!(widened, exact, "p = {p}");
        }
    }

    #[test]
    fn test_array_promotion_boundary() {
        let fits = harmonic_number_array(46, 1, IopConfig::SILENT);
        assert!(fits.is_fixed());

        let wide = harmonic_number_array(47, 1, IopConfig::SILENT);
        assert!(wide.is_big());
        assert_eq!(wide.into_big(), partial_sums(47, 1).collect::<Vec<_>>());
    }
}
