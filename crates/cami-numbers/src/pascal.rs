//! Pascal's triangle.

use cami_core::{protect, Iop, IopConfig};
use cami_integers::Integer;
use cami_rings::Ring;

/// The next row of the Pascal triangle.
///
/// The row is multiplied by `(1 + x)`: entry `i` of the result is
/// `row[i-1] + row[i]`, so binomial rows map onto binomial rows. The row
/// after the empty row is `[1]`.
#[must_use]
pub fn pascal_next<R: Ring>(row: &[R]) -> Vec<R> {
    if row.is_empty() {
        return vec![R::one()];
    }
    let mut next = Vec::with_capacity(row.len() + 1);
    next.push(row[0].clone());
    next.extend(row.windows(2).map(|w| w[0].clone() + w[1].clone()));
    next.push(row[row.len() - 1].clone());
    next
}

fn checked_next(row: &[i64]) -> Option<Vec<i64>> {
    let mut next = Vec::with_capacity(row.len() + 1);
    next.push(1);
    for w in row.windows(2) {
        next.push(w[0].checked_add(w[1])?);
    }
    next.push(1);
    Some(next)
}

/// Row `n` of the Pascal triangle, `[C(n,0), …, C(n,n)]`, over any ring.
#[must_use]
pub fn pascal_row<R: Ring>(n: usize) -> Vec<R> {
    (0..n).fold(vec![R::one()], |row, _| pascal_next(&row))
}

fn rows_fixed(n: usize) -> Option<Vec<Vec<i64>>> {
    let mut rows = Vec::with_capacity(n);
    let mut row = vec![1i64];
    for _ in 0..n {
        row = checked_next(&row)?;
        rows.push(row.clone());
    }
    Some(rows)
}

fn rows_big(n: usize) -> Vec<Vec<Integer>> {
    let mut rows = Vec::with_capacity(n);
    let mut row = vec![Integer::new(1)];
    for _ in 0..n {
        row = pascal_next(&row);
        rows.push(row.clone());
    }
    rows
}

/// Row `n` of the Pascal triangle.
///
/// Promoted to [`Integer`] as soon as a binomial coefficient no longer fits
/// in an i64 (from `n = 67` on).
#[must_use]
pub fn pascal_triangle(n: usize, cfg: IopConfig) -> Iop<Vec<i64>, Vec<Integer>> {
    protect(
        cfg,
        format_args!("pascal_triangle({n})"),
        || {
            let mut row = vec![1i64];
            for _ in 0..n {
                row = checked_next(&row)?;
            }
            Some(row)
        },
        || pascal_row(n),
    )
}

/// Rows `1..=n` of the Pascal triangle.
#[must_use]
pub fn pascal_triangle_array(n: usize, cfg: IopConfig) -> Iop<Vec<Vec<i64>>, Vec<Vec<Integer>>> {
    protect(
        cfg,
        format_args!("pascal_triangle_array({n})"),
        || rows_fixed(n),
        || rows_big(n),
    )
}
