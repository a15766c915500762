//! # cami-core
//!
//! Cross-cutting pieces shared by every camimath crate:
//!
//! - **Integer-overflow protection (IOP)**: the [`Iop`] value type, the
//!   [`IopConfig`] notification switch and the helpers that decide between
//!   the fixed-width and the arbitrary precision representation
//! - **Sense and ordering** selectors used by interpolation and partition
//!   routines

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod iop;
pub mod sense;

pub use iop::{narrow, protect, type_iop, Iop, IopConfig, Narrow, Widen, Width};
pub use sense::{Order, Sense};
