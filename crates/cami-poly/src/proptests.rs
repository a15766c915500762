//! Property-based tests for coefficient-vector arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use cami_core::Sense;
    use cami_integers::Rational;

    use crate::lagrange::lagrange_polynom;
    use crate::polynom::{
        polynom_derivative, polynom_power, polynom_primitive, polynom_product,
        polynom_product_expansion, polynomial,
    };

    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-50i64..50i64).prop_map(Rational::from)
    }

    // Polynomials of degree 0-4
    fn small_poly() -> impl Strategy<Value = Vec<Rational>> {
        proptest::collection::vec(small_coeff(), 1..=5)
    }

    proptest! {
        #[test]
        fn product_evaluates_to_product_of_values(a in small_poly(), b in small_poly(), x in -5i64..5i64) {
            let x = Rational::from(x);
            let lhs = polynomial(&polynom_product(&a, &b), &x);
            let rhs = polynomial(&a, &x) * polynomial(&b, &x);
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn product_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(polynom_product(&a, &b), polynom_product(&b, &a));
        }

        #[test]
        fn expansion_is_prefix_of_product(a in small_poly(), b in small_poly(), p in 0usize..10) {
            let full = polynom_product(&a, &b);
            let truncated = polynom_product_expansion(&a, &b, p);
            prop_assert_eq!(&full[..truncated.len()], &truncated[..]);
        }

        #[test]
        fn power_matches_repeated_product(a in small_poly(), n in 0u32..4) {
            let mut expected = vec![Rational::from(1i64)];
            for _ in 0..n {
                expected = polynom_product(&expected, &a);
            }
            prop_assert_eq!(polynom_power(&a, n), expected);
        }

        #[test]
        fn derivative_undoes_primitive(a in small_poly()) {
            prop_assert_eq!(polynom_derivative(&polynom_primitive(&a)), a);
        }

        #[test]
        fn interpolation_reproduces_polynomials(a in small_poly()) {
            // Sample a at 0..=8 and interpolate the same degree back.
            let samples: Vec<Rational> = (0..=8i64).map(|k| polynomial(&a, &Rational::from(k))).collect();
            let degree = a.len() - 1;
            let forward = lagrange_polynom(&samples, 0..=degree, Sense::Forward).unwrap();
            prop_assert_eq!(&forward, &a);

            // Backward from index `degree` walks the same nodes mirrored.
            let backward = lagrange_polynom(&samples, 0..=degree, Sense::Backward).unwrap();
            for k in 0..=degree {
                let at = Rational::from(-(k as i64));
                prop_assert_eq!(polynomial(&backward, &at), samples[degree - k].clone());
            }
        }
    }
}
