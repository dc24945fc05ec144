// tests/combinatorics_tests.rs
//
// Counting identities for permutations and combinations, checked against the
// factorials and against the enumerated combinations themselves.

use num::BigUint;
use proptest::prelude::*;
use sundries::integer_math::combinatorics::Combinatorics;
use sundries::integer_math::maths::factorial;

#[cfg(test)]
mod combinatorics_tests {
    use super::*;

    #[test]
    fn test_all_combinations_of_three() {
        let combinations = Combinatorics::get_combinations(&[1, 2, 3], 0).unwrap();
        assert_eq!(
            combinations,
            vec![vec![1], vec![2], vec![3], vec![1, 2], vec![1, 3], vec![2, 3], vec![1, 2, 3]]
        );
    }

    #[test]
    fn test_enumeration_matches_comb() {
        let letters: Vec<char> = "abcdefg".chars().collect();
        for k in 1..=letters.len() {
            let enumerated = Combinatorics::get_combinations(&letters, k).unwrap();
            assert_eq!(BigUint::from(enumerated.len()), Combinatorics::comb(letters.len(), k).unwrap());
        }
        let everything = Combinatorics::get_combinations(&letters, 0).unwrap();
        assert_eq!(everything.len(), (1 << letters.len()) - 1);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(Combinatorics::perm(3, 4).unwrap_err().is_range_violation());
        assert_eq!(Combinatorics::comb(3, 4).unwrap(), BigUint::from(0u32));
        assert!(Combinatorics::perm(-1, 0).unwrap_err().is_type_violation());
        assert!(Combinatorics::comb(5, 1.5).unwrap_err().is_type_violation());
        assert!(Combinatorics::get_combinations(&[1, 2], -1).is_err());
    }

    proptest! {
        #[test]
        fn perm_is_factorial_quotient(n in 0u64..40, k in 0u64..40) {
            prop_assume!(k <= n);
            let expected = factorial(n) / factorial(n - k);
            prop_assert_eq!(Combinatorics::perm(n, k).unwrap(), expected);
        }

        #[test]
        fn comb_is_symmetric(n in 0u64..80, k in 0u64..80) {
            prop_assume!(k <= n);
            prop_assert_eq!(Combinatorics::comb(n, k).unwrap(), Combinatorics::comb(n, n - k).unwrap());
        }

        #[test]
        fn comb_beyond_n_is_zero(n in 0u64..50, extra in 1u64..50) {
            prop_assert_eq!(Combinatorics::comb(n, n + extra).unwrap(), BigUint::from(0u32));
            prop_assert!(Combinatorics::perm(n, n + extra).unwrap_err().is_range_violation());
        }

        #[test]
        fn comb_edges_are_one(n in 0u64..200) {
            prop_assert_eq!(Combinatorics::comb(n, 0).unwrap(), BigUint::from(1u32));
            prop_assert_eq!(Combinatorics::comb(n, n).unwrap(), BigUint::from(1u32));
        }
    }
}
