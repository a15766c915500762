//! # cami-combinat
//!
//! Enumerative combinatorics.
//!
//! - Integer partitions: canonical partitions, full enumeration restricted
//!   by largest part or by number of parts, and their counts
//! - Distinct permutations of a multiset

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod partitions;
pub mod permutations;

#[cfg(test)]
mod proptests;

pub use error::PartitionError;
pub use partitions::{
    canonical_partition, canonical_partitions, integer_partitions, integer_partitions_count,
    Partition,
};
pub use permutations::permutations_unique_count;
