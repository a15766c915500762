//! Errors for polynomial construction.

use thiserror::Error;

/// Errors raised by interpolation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The window `start..=stop` is empty.
    #[error("empty interpolation window {start}..={stop}")]
    EmptyWindow {
        /// First index.
        start: usize,
        /// Last index.
        stop: usize,
    },

    /// The window reaches past the tabulated data.
    #[error("interpolation window ends at {stop} but only {len} points are tabulated")]
    OutOfBounds {
        /// Last index.
        stop: usize,
        /// Number of tabulated points.
        len: usize,
    },
}
