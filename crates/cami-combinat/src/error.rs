//! Errors for combinatorial enumeration.

use thiserror::Error;

/// Errors raised by partition and permutation routines.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// The part size is not in `1..=n`.
    #[error("part size {m} is not in 1..={n}")]
    InvalidPart {
        /// Integer being partitioned.
        n: usize,
        /// Requested part size.
        m: usize,
    },

    /// The selected multiset does not exist.
    #[error("index {index} out of range for {len} multisets")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of multisets.
        len: usize,
    },
}
