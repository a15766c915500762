//! # cami-coupling
//!
//! Vector coupling of angular momenta in exact arithmetic.
//!
//! Angular momenta and their projections are [`HalfInt`]s. Triangle
//! coefficients are rationals; Wigner 3j symbols and Clebsch-Gordan
//! coefficients are signed square roots of rationals, returned as
//! [`SignedSqrt`] so no precision is lost.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod halfint;
pub mod triangle;
pub mod wigner;

pub use error::CouplingError;
pub use halfint::HalfInt;
pub use triangle::{istriangle, triangle_coefficient};
pub use wigner::{cgc, three_j_symbol, SignedSqrt};
