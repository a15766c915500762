//! Permutations of multisets.

use std::hash::Hash;

use cami_integers::Integer;
use cami_numbers::factorial_big;
use rustc_hash::FxHashMap;

use crate::error::PartitionError;

/// Number of distinct permutations of the multiset `p[i]`,
/// `n! / (m_1! m_2! ⋯)` where the `m_k` are the element multiplicities.
///
/// # Errors
///
/// Returns [`PartitionError::IndexOutOfRange`] if `i >= p.len()`.
///
/// ```
/// use cami_combinat::permutations_unique_count;
/// use cami_integers::Integer;
///
/// let p = vec![vec![1, 2, 3], vec![2, 3, 1, 4, 3]];
/// assert_eq!(permutations_unique_count(&p, 1).unwrap(), Integer::new(60));
/// ```
pub fn permutations_unique_count<T: Eq + Hash>(p: &[Vec<T>], i: usize) -> Result<Integer, PartitionError> {
    let multiset = p.get(i).ok_or(PartitionError::IndexOutOfRange { index: i, len: p.len() })?;

    let mut multiplicities: FxHashMap<&T, u64> = FxHashMap::default();
    for item in multiset {
        *multiplicities.entry(item).or_insert(0) += 1;
    }

    let total = factorial_big(multiset.len() as u64);
    let repeats: Integer = multiplicities.values().map(|&m| factorial_big(m)).product();
    Ok(total / repeats)
}
