//! # camimath
//!
//! Elementary number theory and special functions with integer-overflow
//! protection (IOP).
//!
//! Functions that can outgrow a machine word compute in `i64` (or the
//! fixed-width rational [`Frac64`](cami_integers::Frac64)) and promote their
//! result to arbitrary precision the moment it no longer fits. The returned
//! [`Iop`](cami_core::Iop) says which representation was used; a promotion
//! is reported through `tracing` unless the
//! [`IopConfig`](cami_core::IopConfig) silences it.
//!
//! ## Features
//!
//! - **Special numbers**: factorials, Fibonacci, Bernoulli, harmonic numbers
//! - **Polynomials**: coordinate-vector algebra, Faulhaber, Laguerre, Lagrange
//! - **Combinatorics**: integer partitions, multiset permutations
//! - **Angular momentum**: triangle coefficients, 3j symbols, Clebsch-Gordan
//!
//! ## Quick Start
//!
//! ```rust
//! use camimath::prelude::*;
//!
//! let cfg = IopConfig::SILENT;
//! assert_eq!(bigfactorial(20, cfg), Iop::Fixed(2_432_902_008_176_640_000));
//! assert!(bigfactorial(21, cfg).is_big());
//! assert_eq!(bernoulli_b(60, cfg).to_string(), "-1215233140483755572040304994079820246041491/56786730");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use cami_combinat as combinat;
pub use cami_core as core;
pub use cami_coupling as coupling;
pub use cami_integers as integers;
pub use cami_numbers as numbers;
pub use cami_poly as poly;
pub use cami_rings as rings;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use cami_combinat::{
        canonical_partition, canonical_partitions, integer_partitions, integer_partitions_count,
        permutations_unique_count, PartitionError,
    };
    pub use cami_core::{Iop, IopConfig, Order, Sense};
    pub use cami_coupling::{cgc, istriangle, three_j_symbol, triangle_coefficient, HalfInt, SignedSqrt};
    pub use cami_integers::{Frac64, Integer, Rational};
    pub use cami_numbers::{
        bernoulli_b, bernoulli_b_array, bigfactorial, divisor, faulhaber_polynom, faulhaber_polynomial,
        faulhaber_summation, fibonacci, fibonacci_array, generalized_laguerre_l,
        generalized_laguerre_polynom, harmonic_number, harmonic_number_array, laguerre_l,
        laguerre_polynom, log10_characteristic, log10_mantissa, normalize_rationals, numerators,
        pascal_next, pascal_triangle, pascal_triangle_array, pochhammer, texp,
    };
    pub use cami_poly::{
        lagrange_polynom, polynom_derivative, polynom_power, polynom_primitive, polynom_product,
        polynom_product_expansion, polynomial, polynomial_derivative, polynomial_primitive,
        PolyError,
    };
    pub use cami_rings::{Field, Ring};
}
