//! Arithmetic on coefficient vectors.

use cami_rings::{Field, Ring};

/// Evaluates `c_0 + c_1 x + … + c_d x^d` using Horner's method.
///
/// The empty vector is the zero polynomial.
#[must_use]
pub fn polynomial<R: Ring>(polynom: &[R], x: &R) -> R {
    polynom
        .iter()
        .rev()
        .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
}

/// Coefficients of the first derivative.
///
/// The derivative of a constant is `[0]`.
#[must_use]
pub fn polynom_derivative<R: Ring>(polynom: &[R]) -> Vec<R> {
    if polynom.len() <= 1 {
        return vec![R::zero()];
    }
    polynom
        .iter()
        .enumerate()
        .skip(1)
        .map(|(k, c)| c.clone() * R::from_usize(k))
        .collect()
}

/// Coefficients of the primitive with zero integration constant.
#[must_use]
pub fn polynom_primitive<F: Field>(polynom: &[F]) -> Vec<F> {
    let mut primitive = Vec::with_capacity(polynom.len() + 1);
    primitive.push(F::zero());
    primitive.extend(
        polynom
            .iter()
            .enumerate()
            .map(|(k, c)| c.clone() / F::from_usize(k + 1)),
    );
    primitive
}

/// Evaluates the `order`-th derivative at `x`.
#[must_use]
pub fn polynomial_derivative<R: Ring>(polynom: &[R], x: &R, order: usize) -> R {
    let mut p = polynom.to_vec();
    for _ in 0..order {
        p = polynom_derivative(&p);
    }
    polynomial(&p, x)
}

/// Evaluates the `order`-fold primitive (all integration constants zero)
/// at `x`.
#[must_use]
pub fn polynomial_primitive<F: Field>(polynom: &[F], x: &F, order: usize) -> F {
    let mut p = polynom.to_vec();
    for _ in 0..order {
        p = polynom_primitive(&p);
    }
    polynomial(&p, x)
}

/// Coefficients of the product `a(x) b(x)`, of length `len(a) + len(b) - 1`.
///
/// The product with an empty vector is empty.
#[must_use]
pub fn polynom_product<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let max_order = a.len() + b.len() - 2;
    polynom_product_expansion(a, b, max_order)
}

/// Coefficients of `a(x) b(x)` truncated after order `p`.
///
/// The result has `p + 1` entries unless the full product is shorter.
#[must_use]
pub fn polynom_product_expansion<R: Ring>(a: &[R], b: &[R], p: usize) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let len = (a.len() + b.len() - 1).min(p + 1);
    let mut result = vec![R::zero(); len];

    for (i, ai) in a.iter().enumerate().take(len) {
        for (j, bj) in b.iter().enumerate().take(len - i) {
            result[i + j] = result[i + j].clone() + ai.clone() * bj.clone();
        }
    }

    result
}

/// Coefficients of `polynom(x)^power`, of length `power * d + 1`.
#[must_use]
pub fn polynom_power<R: Ring>(polynom: &[R], power: u32) -> Vec<R> {
    let mut result = vec![R::one()];
    let mut base = polynom.to_vec();
    let mut exp = power;

    while exp > 0 {
        if exp & 1 == 1 {
            result = polynom_product(&result, &base);
        }
        exp >>= 1;
        if exp > 0 {
            base = polynom_product(&base, &base);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use cami_integers::Rational;

    #[test]
    fn test_evaluation_and_derivatives() {
        let p = [1i64, 1, 1, 1, 1];
        assert_eq!(polynomial(&p, &1), 5);
        assert_eq!(polynomial_derivative(&p, &1, 1), 10);
        assert_eq!(polynomial_derivative(&p, &1, 2), 20);
        assert_eq!(polynomial_derivative(&p, &2, 2), 62);
        assert_eq!(polynomial_derivative(&p, &3, 5), 0);
    }

    #[test]
    fn test_primitive() {
        let p: Vec<Rational> = (0..5).map(|_| Rational::from(1i64)).collect();
        assert_eq!(
            polynomial_primitive(&p, &Rational::from(1i64), 1),
            Rational::from_i64(137, 60)
        );
        assert_eq!(polynom_primitive(&[6.0, 6.0]), vec![0.0, 6.0, 3.0]);
    }

    #[test]
    fn test_derivative_of_constant() {
        assert_eq!(polynom_derivative(&[7i64]), vec![0]);
        assert_eq!(polynom_derivative::<i64>(&[]), vec![0]);
    }

    #[test]
    fn test_product() {
        assert_eq!(polynom_product(&[1i64, 1], &[1, -1, 2]), vec![1, 0, 1, 2]);
        assert_eq!(polynom_product(&[1.0, 1.0], &[1.0, -1.0, 2.0]), vec![1.0, 0.0, 1.0, 2.0]);
        assert!(polynom_product::<i64>(&[], &[1, 2]).is_empty());
    }

    #[test]
    fn test_product_expansion() {
        let a = [1i64, -1, 1];
        let b = [1i64, 1, -1, 1, 1, 1];
        assert_eq!(polynom_product(&a, &b), vec![1, 0, -1, 3, -1, 1, 0, 1]);
        assert_eq!(polynom_product_expansion(&a, &b, 4), vec![1, 0, -1, 3, -1]);
        assert_eq!(polynom_product_expansion(&a, &b, 20).len(), 8);
    }

    #[test]
    fn test_power() {
        assert_eq!(polynom_power(&[1i64, 1, 1], 3), vec![1, 3, 6, 7, 6, 3, 1]);
        assert_eq!(polynom_power(&[1i64, 1], 0), vec![1]);
        assert_eq!(polynom_power(&[1i64, 1], 5), vec![1, 5, 10, 10, 5, 1]);
    }
}
