//! Property-based tests for the two numeric representations.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Frac64, Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn any_frac() -> impl Strategy<Value = Frac64> {
        (any::<i64>(), any::<i64>()).prop_filter_map("representable", |(n, d)| Frac64::new(n, d))
    }

    proptest! {
        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!((a.clone() % g.clone()).is_zero());
            prop_assert!((b.clone() % g.clone()).is_zero());
        }

        #[test]
        fn lcm_times_gcd_is_product(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b) * a.lcm(&b), (a * b).abs());
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!((a.clone() * a.recip()).is_one());
        }

        #[test]
        fn rational_f64_matches_quotient(num in small_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let expected = num as f64 / den as f64;
            prop_assert!((a.to_f64() - expected).abs() <= 1e-12 * expected.abs().max(1.0));
        }

        // Checked fixed-width arithmetic agrees with the exact result
        // whenever it succeeds, and fails only when the exact result does
        // not fit.

        #[test]
        fn frac_add_agrees_with_rational(a in any_frac(), b in any_frac()) {
            let exact = Rational::from(a) + Rational::from(b);
            match a.checked_add(b) {
                Some(sum) => prop_assert_eq!(Rational::from(sum), exact),
                None => prop_assert!(exact.to_frac64().is_none()),
            }
        }

        #[test]
        fn frac_mul_agrees_with_rational(a in any_frac(), b in any_frac()) {
            let exact = Rational::from(a) * Rational::from(b);
            match a.checked_mul(b) {
                Some(product) => prop_assert_eq!(Rational::from(product), exact),
                None => prop_assert!(exact.to_frac64().is_none()),
            }
        }

        #[test]
        fn frac_small_ops_never_overflow(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Frac64::new(num_a, den_a).unwrap();
            let b = Frac64::new(num_b, den_b).unwrap();
            prop_assert!(a.checked_add(b).is_some());
            prop_assert!(a.checked_sub(b).is_some());
            prop_assert!(a.checked_mul(b).is_some());
        }

        #[test]
        fn frac_round_trips_through_rational(a in any_frac()) {
            prop_assert_eq!(Rational::from(a).to_frac64(), Some(a));
        }
    }
}
