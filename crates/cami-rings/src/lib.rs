//! # cami-rings
//!
//! Algebraic traits that let the polynomial and special-function routines
//! run unchanged over machine integers, floats and exact numbers.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring      i64, f64, Integer, Rational
//!  └── Field     f64, Rational
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod impls;
pub mod traits;

pub use traits::{Field, Ring};
