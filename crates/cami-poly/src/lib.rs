//! # cami-poly
//!
//! Polynomials as coordinate vectors.
//!
//! A polynomial of degree d is the vector `[c_0, c_1, …, c_d]` of its
//! coefficients in ascending order, i.e. its coordinates with respect to the
//! basis `1, x, …, x^d` of the vector space of polynomials of degree ≤ d.
//! Every routine here works over any [`Ring`](cami_rings::Ring) (or
//! [`Field`](cami_rings::Field) where division is needed).
//!
//! Coordinate vectors are never trimmed: trailing zeros are significant
//! because they fix the dimension of the space.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod lagrange;
pub mod polynom;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use lagrange::lagrange_polynom;
pub use polynom::{
    polynom_derivative, polynom_power, polynom_primitive, polynom_product,
    polynom_product_expansion, polynomial, polynomial_derivative, polynomial_primitive,
};
