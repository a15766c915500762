//! # cami-numbers
//!
//! Special numbers and special polynomials with integer-overflow
//! protection.
//!
//! - **Integer sequences**: factorials, Fibonacci numbers, Pascal's triangle
//! - **Rational sequences**: Bernoulli numbers, harmonic numbers
//! - **Polynomials**: Faulhaber, Laguerre and generalized Laguerre
//! - **Products**: Pochhammer symbols, truncated exponentials
//!
//! Routines that can outgrow a machine word take an
//! [`IopConfig`](cami_core::IopConfig) and return an
//! [`Iop`](cami_core::Iop): `i64`/`Frac64` while the exact result fits,
//! `Integer`/`Rational` beyond that. Generic routines run over any
//! [`Ring`](cami_rings::Ring) or [`Field`](cami_rings::Field) instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bernoulli;
pub mod divisor;
pub mod factorial;
pub mod faulhaber;
pub mod fibonacci;
pub mod harmonic;
pub mod laguerre;
pub mod pascal;
pub mod pochhammer;
pub mod toolbox;

#[cfg(test)]
mod proptests;

pub use bernoulli::{bernoulli_b, bernoulli_b_array, bernoulli_table};
pub use divisor::{divisor, normalize_rationals, numerators};
pub use factorial::{bigfactorial, factorial_big, FACTORIAL_MAX};
pub use faulhaber::{faulhaber_coefficients, faulhaber_polynom, faulhaber_polynomial, faulhaber_summation};
pub use fibonacci::{fibonacci, fibonacci_array, FIBONACCI_MAX};
pub use harmonic::{harmonic_number, harmonic_number_array};
pub use laguerre::{
    generalized_laguerre_coefficients, generalized_laguerre_l, generalized_laguerre_polynom,
    laguerre_l, laguerre_polynom,
};
pub use pascal::{pascal_next, pascal_row, pascal_triangle, pascal_triangle_array};
pub use pochhammer::pochhammer;
pub use toolbox::{log10_characteristic, log10_mantissa, texp};
