//! # cami-integers
//!
//! Integer and rational arithmetic for camimath.
//!
//! This crate provides both representations an overflow-protected routine
//! can return:
//! - Arbitrary precision integers (`Integer`) and rationals (`Rational`),
//!   wrapping `dashu`
//! - Checked fixed-width rationals (`Frac64`) whose operations report
//!   overflow instead of wrapping
//!
//! Machine integers (`i64`) play the role of the fixed-width integer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[macro_use]
mod ops;

pub mod fixed;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use fixed::Frac64;
pub use integer::Integer;
pub use rational::Rational;
