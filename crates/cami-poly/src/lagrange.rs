//! Lagrange interpolation on a uniform grid.

use std::ops::RangeInclusive;

use cami_core::Sense;
use cami_rings::Field;

use crate::error::PolyError;
use crate::polynom::polynom_product;

/// Coefficients of the interpolating polynomial of degree `d = stop - start`
/// through `d + 1` subsequent points of the tabulated function `f`.
///
/// The grid is unit-spaced and anchored at `x = 0`:
///
/// - [`Sense::Forward`]: `P(k) = f[start + k]` for `k = 0..=d`
/// - [`Sense::Backward`]: `P(-k) = f[stop - k]` for `k = 0..=d`
///
/// The polynomial is most accurate near its anchor point.
///
/// # Errors
///
/// Returns [`PolyError`] if the window is empty or extends past `f`.
pub fn lagrange_polynom<F: Field>(
    f: &[F],
    window: RangeInclusive<usize>,
    sense: Sense,
) -> Result<Vec<F>, PolyError> {
    let (start, stop) = (*window.start(), *window.end());
    if start > stop {
        return Err(PolyError::EmptyWindow { start, stop });
    }
    if stop >= f.len() {
        return Err(PolyError::OutOfBounds { stop, len: f.len() });
    }

    let d = stop - start;
    let node = |k: usize| -> F {
        let x = F::from_usize(k);
        if sense.is_forward() {
            x
        } else {
            -x
        }
    };
    let value = |k: usize| -> F {
        if sense.is_forward() {
            f[start + k].clone()
        } else {
            f[stop - k].clone()
        }
    };

    let mut coeffs = vec![F::zero(); d + 1];
    for k in 0..=d {
        let xk = node(k);
        let mut basis = vec![F::one()];
        let mut denom = F::one();
        for j in (0..=d).filter(|&j| j != k) {
            let xj = node(j);
            basis = polynom_product(&basis, &[-xj.clone(), F::one()]);
            denom = denom * (xk.clone() - xj);
        }
        let weight = value(k) / denom;
        for (c, b) in coeffs.iter_mut().zip(basis) {
            *c = c.clone() + weight.clone() * b;
        }
    }

    Ok(coeffs)
}
