//! Fibonacci numbers.

use cami_core::{type_iop, Iop, IopConfig, Width};
use cami_integers::Integer;
use cami_rings::Ring;

/// Largest n whose Fibonacci number fits in an i64.
pub const FIBONACCI_MAX: i64 = 92;

/// `[F_1, …, F_n]`.
fn sequence<R: Ring>(n: usize) -> Vec<R> {
    let mut seq = Vec::with_capacity(n);
    let (mut prev, mut cur) = (R::zero(), R::one());
    for k in 0..n {
        seq.push(cur.clone());
        if k + 1 < n {
            let next = prev + cur.clone();
            prev = cur;
            cur = next;
        }
    }
    seq
}

fn width(n: u32, call: &dyn std::fmt::Display, cfg: IopConfig) -> Width {
    type_iop(i64::from(n), FIBONACCI_MAX, Some(call), cfg)
}

/// The Fibonacci number `F_n`, with `F_0 = 0`, `F_1 = 1` and
/// `F_n = F_{n-1} + F_{n-2}`.
///
/// Results for `n > 92` are promoted to [`Integer`].
#[must_use]
pub fn fibonacci(n: u32, cfg: IopConfig) -> Iop<i64, Integer> {
    let len = n as usize;
    match width(n, &format_args!("fibonacci({n})"), cfg) {
        Width::Fixed => Iop::Fixed(sequence::<i64>(len).pop().unwrap_or(0)),
        Width::Big => Iop::Big(sequence::<Integer>(len).pop().unwrap_or_default()),
    }
}

/// The sequence `[F_1, …, F_n]`.
#[must_use]
pub fn fibonacci_array(n: u32, cfg: IopConfig) -> Iop<Vec<i64>, Vec<Integer>> {
    let len = n as usize;
    match width(n, &format_args!("fibonacci_array({n})"), cfg) {
        Width::Fixed => Iop::Fixed(sequence(len)),
        Width::Big => Iop::Big(sequence(len)),
    }
}
