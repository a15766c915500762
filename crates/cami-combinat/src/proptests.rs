//! Property-based tests for partition enumeration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use cami_integers::Integer;

    use crate::partitions::{integer_partitions, integer_partitions_count};
    use crate::permutations::permutations_unique_count;

    proptest! {
        #[test]
        fn partitions_are_valid_and_distinct(n in 1usize..18) {
            let all = integer_partitions(n, 0, false);
            for p in &all {
                prop_assert_eq!(p.iter().sum::<usize>(), n);
                prop_assert!(p.windows(2).all(|w| w[0] >= w[1]));
            }
            let mut sorted = all.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), all.len());
            prop_assert_eq!(Integer::from(all.len()), integer_partitions_count(n, 0));
        }

        #[test]
        fn transpose_has_exactly_m_parts(n in 1usize..16, m in 1usize..16) {
            let m = m.min(n);
            let conjugates = integer_partitions(n, m, true);
            prop_assert!(conjugates.iter().all(|p| p.len() == m));
            prop_assert_eq!(Integer::from(conjugates.len()), integer_partitions_count(n, m));
        }

        #[test]
        fn distinct_elements_give_factorial(len in 0usize..12) {
            let items: Vec<usize> = (0..len).collect();
            let expected: Integer = (1..=len).map(Integer::from).product();
            prop_assert_eq!(permutations_unique_count(&[items], 0).unwrap(), expected);
        }
    }
}
