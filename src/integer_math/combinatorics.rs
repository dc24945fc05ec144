// src/integer_math/combinatorics.rs

use log::debug;
use num::{BigUint, One, Zero};

use crate::core::checkers::{check_less_than, check_positive_integer, Numeric};
use crate::core::errors::{Result, SundriesError};

/// Longest input `get_combinations` will enumerate every subset of (2^30 - 1 subsets).
pub const MAX_ALL_COMBINATIONS_LEN: usize = 30;

pub struct Combinatorics;

impl Combinatorics {
    /// Number of k-permutations of n: n! / (n - k)!
    ///
    /// Fails with a type violation when `n` or `k` is not a non-negative integer,
    /// and with a range violation when `k > n`.
    pub fn perm<N: Numeric, K: Numeric>(n: N, k: K) -> Result<BigUint> {
        let n = check_positive_integer(n, "n", false)?;
        let k = check_positive_integer(k, "k", false)?;
        check_less_than(k, n, "k", false)?;

        Ok(((n - k + 1)..=n).fold(BigUint::one(), |acc, factor| acc * factor))
    }

    /// Binomial coefficient "n choose k"; zero when `k > n`.
    ///
    /// Fails with a type violation when `n` or `k` is not a non-negative integer.
    pub fn comb<N: Numeric, K: Numeric>(n: N, k: K) -> Result<BigUint> {
        let n = check_positive_integer(n, "n", false)?;
        let k = check_positive_integer(k, "k", false)?;

        if k > n {
            return Ok(BigUint::zero());
        }
        if k == 0 || k == n {
            return Ok(BigUint::one());
        }

        // C(n, k) == C(n, n - k); walk the shorter side. Every partial product is itself
        // a binomial coefficient, so the division is exact.
        let k = k.min(n - k);
        let mut result = BigUint::one();
        for i in 1..=k {
            result = result * (n - k + i) / i;
        }
        Ok(result)
    }

    /// All `n`-element combinations of `sequence`, in input order.
    ///
    /// With `n == 0` every non-empty combination is produced, shortest first; that mode
    /// walks a bitmask over the indices and refuses inputs longer than
    /// `MAX_ALL_COMBINATIONS_LEN`. With `n > sequence.len()` the result is empty.
    pub fn get_combinations<T: Clone, N: Numeric>(sequence: &[T], n: N) -> Result<Vec<Vec<T>>> {
        let n = check_positive_integer(n, "n", false)? as usize;

        if n == 0 {
            return Self::all_combinations(sequence);
        }

        let combinations = Self::combinations_of(sequence, n);
        debug!("{} combinations of {} out of {} items", combinations.len(), n, sequence.len());
        Ok(combinations)
    }

    fn all_combinations<T: Clone>(sequence: &[T]) -> Result<Vec<Vec<T>>> {
        let length = sequence.len();
        if length > MAX_ALL_COMBINATIONS_LEN {
            return Err(SundriesError::range_violation(format!(
                "Cannot enumerate every combination of {} items; at most {} are supported.",
                length, MAX_ALL_COMBINATIONS_LEN
            )));
        }

        let total: u64 = 1 << length;
        debug!("Enumerating {} subsets of {} items", total - 1, length);

        let mut combinations: Vec<Vec<T>> = (1..total)
            .map(|mask| {
                sequence
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| mask & (1 << j) != 0)
                    .map(|(_, item)| item.clone())
                    .collect()
            })
            .collect();

        // stable: within one size, mask order is kept
        combinations.sort_by_key(|combination| combination.len());
        Ok(combinations)
    }

    fn combinations_of<T: Clone>(sequence: &[T], n: usize) -> Vec<Vec<T>> {
        let mut combinations = Vec::new();
        for (i, head) in sequence.iter().enumerate() {
            if n == 1 {
                combinations.push(vec![head.clone()]);
                continue;
            }
            for tail in Self::combinations_of(&sequence[i + 1..], n - 1) {
                let mut combination = Vec::with_capacity(n);
                combination.push(head.clone());
                combination.extend(tail);
                combinations.push(combination);
            }
        }
        combinations
    }
}
