// src/random/sampling.rs

use log::trace;

use crate::core::checkers::{check_positive_integer, Numeric};
use crate::core::errors::{Result, SundriesError};
use crate::core::static_random::Randomizer;
use crate::integer_math::maths::clamp;

impl Randomizer {
    /// Random integer from the lower of `a`/`b` (included) to the higher (excluded), on a grid of `step`.
    ///
    /// `distribution` is the number of uniform draws averaged together: 1 is uniform, 2 triangular,
    /// and higher values approach a bell curve centred on the midpoint.
    pub fn random_int<D: Numeric>(&mut self, a: i64, b: i64, step: i64, distribution: D) -> Result<i64> {
        if step <= 0 {
            return Err(SundriesError::range_violation(format!(
                "The step argument must be strictly positive, but it was {}.",
                step
            )));
        }
        let distribution = check_positive_integer(distribution, "distribution", true)?;
        let (low, high) = if a > b { (b, a) } else { (a, b) };

        // i128 holds the span of any two i64 bounds
        let (low, span, step) = (i128::from(low), i128::from(high) - i128::from(low), i128::from(step));
        let random = (0..distribution).map(|_| self.next_double()).sum::<f64>() / distribution as f64;
        let last_step = if span > 0 { (span - 1) / step } else { 0 };
        let steps = ((random * span as f64 / step as f64).floor() as i128).min(last_step);
        Ok((low + steps * step) as i64)
    }

    /// `random_int` with the distribution this randomizer was configured with.
    pub fn random_int_default(&mut self, a: i64, b: i64, step: i64) -> Result<i64> {
        let distribution = self.distribution();
        self.random_int(a, b, step, distribution)
    }

    /// True with `probability` percent (clamped to 0..=100).
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_double() < clamp(probability, 0.0, 100.0) / 100.0
    }

    pub fn choice<'a, T>(&mut self, sequence: &'a [T]) -> Option<&'a T> {
        if sequence.is_empty() {
            return None;
        }
        let position = self.next_index(sequence.len());
        sequence.get(position)
    }

    /// Removes and returns a random element, keeping the order of the rest.
    pub fn choice_remove<T>(&mut self, sequence: &mut Vec<T>) -> Option<T> {
        if sequence.is_empty() {
            return None;
        }
        let position = self.next_index(sequence.len());
        Some(sequence.remove(position))
    }

    /// Picks `n` elements. Without replacement no index is used twice and the sample
    /// stops short when the input runs out; with replacement repeats are allowed.
    pub fn sample<T: Clone, N: Numeric>(&mut self, sequence: &[T], n: N, replacement: bool) -> Result<Vec<T>> {
        let n = check_positive_integer(n, "n", true)? as usize;

        if replacement {
            return Ok((0..n).filter_map(|_| self.choice(sequence).cloned()).collect());
        }

        let mut pool = sequence.to_vec();
        let mut picks = Vec::with_capacity(n.min(pool.len()));
        while picks.len() < n {
            match self.choice_remove(&mut pool) {
                Some(picked) => picks.push(picked),
                None => break,
            }
        }
        trace!("sampled {} of {} requested without replacement", picks.len(), n);
        Ok(picks)
    }

    /// Fisher–Yates shuffle in place; returns the same slice.
    pub fn shuffle<'a, T>(&mut self, sequence: &'a mut [T]) -> &'a mut [T] {
        for i in (1..sequence.len()).rev() {
            let j = self.next_index(i + 1);
            sequence.swap(i, j);
        }
        sequence
    }

    /// Shuffled copy; the input is left untouched.
    pub fn shuffled<T: Clone>(&mut self, sequence: &[T]) -> Vec<T> {
        let mut copy = sequence.to_vec();
        self.shuffle(&mut copy);
        copy
    }

    pub fn shuffled_str(&mut self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        self.shuffled(&chars).into_iter().collect()
    }
}
