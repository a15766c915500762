//! Property-based tests for the special numbers.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use cami_core::IopConfig;
    use cami_integers::{Integer, Rational};

    use crate::bernoulli::bernoulli_table;
    use crate::factorial::factorial_big;
    use crate::faulhaber::faulhaber_summation;
    use crate::fibonacci::fibonacci;
    use crate::harmonic::harmonic_number;
    use crate::pascal::pascal_row;
    use crate::pochhammer::pochhammer;

    const QUIET: IopConfig = IopConfig::SILENT;

    proptest! {
        #[test]
        fn pascal_row_sums_to_power_of_two(n in 0usize..120) {
            let sum: Integer = pascal_row::<Integer>(n).into_iter().sum();
            prop_assert_eq!(sum, Integer::new(2).pow(u32::try_from(n).unwrap()));
        }

        #[test]
        fn odd_bernoulli_numbers_vanish(n in 3usize..60) {
            let table = bernoulli_table(n);
            for (k, b) in table.iter().enumerate().skip(3).step_by(2) {
                prop_assert!(b.is_zero(), "B_{} = {}", k, b);
            }
        }

        #[test]
        fn cassini_identity(n in 1u32..200) {
            // F_{n-1} F_{n+1} - F_n^2 = (-1)^n
            let f = |k: u32| fibonacci(k, QUIET).into_big();
            let lhs = f(n - 1) * f(n + 1) - f(n).pow(2);
            let expected = if n % 2 == 0 { Integer::new(1) } else { Integer::new(-1) };
            prop_assert_eq!(lhs, expected);
        }

        #[test]
        fn negative_order_harmonic_is_power_sum(n in 0u64..80, p in 0usize..12) {
            let h = harmonic_number(n, -i32::try_from(p).unwrap(), QUIET).into_big();
            let s = faulhaber_summation(n, p, QUIET).into_big();
            prop_assert_eq!(h, Rational::from(s));
        }

        #[test]
        fn pochhammer_of_one_is_factorial(p in 0u32..60) {
            prop_assert_eq!(pochhammer(&Integer::new(1), p), factorial_big(u64::from(p)));
        }
    }
}
