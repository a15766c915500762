//! Errors for angular momentum arguments.

use thiserror::Error;

/// Errors raised when converting angular momentum arguments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CouplingError {
    /// The value is not an integer or half-integer.
    #[error("{0} is not a multiple of 1/2")]
    NotHalfInteger(String),

    /// The value does not fit the machine representation.
    #[error("{0} is out of range")]
    OutOfRange(String),
}
