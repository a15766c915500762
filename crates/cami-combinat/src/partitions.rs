//! Integer partitions.
//!
//! A partition of `n` is a non-increasing sequence of positive parts summing
//! to `n`. Enumerations are grouped by ascending largest part and ordered
//! reverse-lexicographically within a group, so partitions of 4 come out as
//! `[1,1,1,1] [2,2] [2,1,1] [3,1] [4]`.

use cami_core::Order;
use cami_integers::Integer;
use num_traits::Zero;
use rayon::prelude::*;
use tracing::debug;

use crate::error::PartitionError;

/// Parts of a partition, largest first.
pub type Partition = Vec<usize>;

fn canonical(n: usize, m: usize) -> Partition {
    let mut parts = vec![m; n / m];
    if n % m != 0 {
        parts.push(n % m);
    }
    parts
}

/// The canonical partition of `n` into parts of size `m`:
/// `[m, …, m, n mod m]`.
///
/// # Errors
///
/// Returns [`PartitionError::InvalidPart`] unless `1 <= m <= n`.
///
/// ```
/// use cami_combinat::canonical_partition;
///
/// assert_eq!(canonical_partition(9, 2).unwrap(), vec![2, 2, 2, 2, 1]);
/// assert_eq!(canonical_partition(9, 3).unwrap(), vec![3, 3, 3]);
/// ```
pub fn canonical_partition(n: usize, m: usize) -> Result<Partition, PartitionError> {
    if m == 0 || m > n {
        return Err(PartitionError::InvalidPart { n, m });
    }
    Ok(canonical(n, m))
}

/// The canonical partitions of `n` for part sizes `m = n, n-1, …, 1`
/// ([`Order::Regular`]) or `1, …, n` ([`Order::Reversed`]).
///
/// Without `header` the single-part partition `[n]` is left out.
#[must_use]
pub fn canonical_partitions(n: usize, order: Order, header: bool) -> Vec<Partition> {
    let skip = usize::from(!header);
    let regular = (1..=n).rev().skip(skip).map(|m| canonical(n, m)).collect();
    order.apply(regular)
}

/// Appends all partitions of `rem` with parts at most `max` to `prefix`,
/// reverse-lexicographically.
fn descend(rem: usize, max: usize, prefix: &mut Partition, out: &mut Vec<Partition>) {
    if rem == 0 {
        out.push(prefix.clone());
        return;
    }
    for part in (1..=rem.min(max)).rev() {
        prefix.push(part);
        descend(rem - part, part, prefix, out);
        prefix.pop();
    }
}

fn with_largest_part(n: usize, k: usize) -> Vec<Partition> {
    let mut out = Vec::new();
    let mut prefix = vec![k];
    descend(n - k, k, &mut prefix, &mut out);
    out
}

fn conjugate(p: &[usize]) -> Partition {
    let largest = p.first().copied().unwrap_or(0);
    (1..=largest)
        .map(|j| p.iter().take_while(|&&part| part >= j).count())
        .collect()
}

/// The integer partitions of `n`.
///
/// - `m = 0`: all partitions
/// - `m > 0`: the partitions with largest part `m`
///
/// With `transpose` every partition is replaced by its conjugate, which
/// turns "largest part `m`" into "exactly `m` parts"; the order is kept.
/// `n = 0` and `m > n` give no partitions.
///
/// ```
/// use cami_combinat::integer_partitions;
///
/// assert_eq!(integer_partitions(7, 4, false), vec![vec![4, 3], vec![4, 2, 1], vec![4, 1, 1, 1]]);
/// assert_eq!(integer_partitions(7, 4, true), vec![vec![2, 2, 2, 1], vec![3, 2, 1, 1], vec![4, 1, 1, 1]]);
/// ```
#[must_use]
pub fn integer_partitions(n: usize, m: usize, transpose: bool) -> Vec<Partition> {
    if n == 0 || m > n {
        return Vec::new();
    }
    let mut partitions: Vec<Partition> = if m == 0 {
        (1..=n)
            .into_par_iter()
            .flat_map_iter(|k| with_largest_part(n, k))
            .collect()
    } else {
        with_largest_part(n, m)
    };
    if transpose {
        partitions = partitions.iter().map(|p| conjugate(p)).collect();
    }
    debug!(n, m, transpose, count = partitions.len(), "enumerated integer partitions");
    partitions
}

/// Number of partitions of `total` with parts at most `max`.
fn bounded_count(total: usize, max: usize) -> Integer {
    let mut ways = vec![Integer::zero(); total + 1];
    ways[0] = Integer::new(1);
    for part in 1..=max.min(total) {
        for j in part..=total {
            let add = ways[j - part].clone();
            ways[j] = ways[j].clone() + add;
        }
    }
    ways[total].clone()
}

/// The length of [`integer_partitions`]`(n, m, _)` without enumerating.
///
/// Conjugation is a bijection, so the count does not depend on `transpose`.
///
/// ```
/// use cami_combinat::integer_partitions_count;
/// use cami_integers::Integer;
///
/// assert_eq!(integer_partitions_count(7, 0), Integer::new(15));
/// assert_eq!(integer_partitions_count(7, 4), Integer::new(3));
/// ```
#[must_use]
pub fn integer_partitions_count(n: usize, m: usize) -> Integer {
    if n == 0 || m > n {
        return Integer::zero();
    }
    if m == 0 {
        bounded_count(n, n)
    } else {
        bounded_count(n - m, m)
    }
}
