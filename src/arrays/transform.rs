// src/arrays/transform.rs
//
// Non-destructive reshaping of sequences. Every function here leaves its input
// untouched; the `_str` forms work on characters and return owned strings.

use log::trace;

use crate::core::checkers::{check_positive_integer, Numeric};
use crate::core::errors::Result;

/// Splits `sequence` into groups of `n`; the last group may be shorter.
pub fn chunk<T: Clone, N: Numeric>(sequence: &[T], n: N) -> Result<Vec<Vec<T>>> {
    let n = check_positive_integer(n, "n", true)? as usize;
    Ok(sequence.chunks(n).map(|group| group.to_vec()).collect())
}

pub fn chunk_str<N: Numeric>(text: &str, n: N) -> Result<Vec<String>> {
    let chars: Vec<char> = text.chars().collect();
    Ok(chunk(&chars, n)?.into_iter().map(String::from_iter).collect())
}

/// Sizes of the `min(n, length)` groups `divide` produces. The sizes differ by at most one;
/// the larger groups come first when `bigger_on_start` is set, last otherwise.
fn group_sizes(length: usize, n: usize, bigger_on_start: bool) -> Vec<usize> {
    let groups = n.min(length);
    if groups == 0 {
        return Vec::new();
    }
    let base = length / groups;
    let remainder = length % groups;

    (0..groups)
        .map(|i| {
            let is_bigger = if bigger_on_start { i < remainder } else { i >= groups - remainder };
            base + usize::from(is_bigger)
        })
        .collect()
}

/// Splits `sequence` into `n` groups of near-equal size (fewer when the sequence is shorter than `n`).
pub fn divide<T: Clone, N: Numeric>(sequence: &[T], n: N, bigger_on_start: bool) -> Result<Vec<Vec<T>>> {
    let n = check_positive_integer(n, "n", true)? as usize;
    let sizes = group_sizes(sequence.len(), n, bigger_on_start);
    trace!("divide {} items into groups of {:?}", sequence.len(), sizes);

    let mut rest = sequence;
    let mut groups = Vec::with_capacity(sizes.len());
    for size in sizes {
        let (group, tail) = rest.split_at(size);
        groups.push(group.to_vec());
        rest = tail;
    }
    Ok(groups)
}

pub fn divide_str<N: Numeric>(text: &str, n: N, bigger_on_start: bool) -> Result<Vec<String>> {
    let chars: Vec<char> = text.chars().collect();
    Ok(divide(&chars, n, bigger_on_start)?.into_iter().map(String::from_iter).collect())
}

/// Splits into (matching, non-matching), keeping relative order in both.
///
/// The predicate receives the value, its index and the whole sequence.
pub fn partition<T, F>(sequence: &[T], mut predicate: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for (i, value) in sequence.iter().enumerate() {
        if predicate(value, i, sequence) {
            matching.push(value.clone());
        } else {
            rest.push(value.clone());
        }
    }
    (matching, rest)
}

/// Rotates right for positive `n`, left for negative `n`, wrapping around the length.
pub fn rotate<T: Clone>(sequence: &[T], n: i64) -> Vec<T> {
    if sequence.is_empty() {
        return Vec::new();
    }
    let length = sequence.len();
    let shift = n.rem_euclid(length as i64) as usize;
    let split = length - shift;

    let mut rotated = Vec::with_capacity(length);
    rotated.extend_from_slice(&sequence[split..]);
    rotated.extend_from_slice(&sequence[..split]);
    rotated
}

pub fn rotate_str(text: &str, n: i64) -> String {
    let chars: Vec<char> = text.chars().collect();
    rotate(&chars, n).into_iter().collect()
}

/// Collapses runs of consecutive equal values into groups.
pub fn group_by<T: Clone + PartialEq>(sequence: &[T]) -> Vec<Vec<T>> {
    let mut groups: Vec<Vec<T>> = Vec::new();
    for value in sequence {
        match groups.last_mut() {
            Some(group) if group[0] == *value => group.push(value.clone()),
            _ => groups.push(vec![value.clone()]),
        }
    }
    groups
}

pub fn group_by_str(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    group_by(&chars).into_iter().map(String::from_iter).collect()
}

/// Zips sequences together up to the longest one; missing slots are `None`.
pub fn zip<T: Clone>(sequences: &[Vec<T>]) -> Vec<Vec<Option<T>>> {
    let longest = sequences.iter().map(Vec::len).max().unwrap_or(0);
    (0..longest)
        .map(|i| sequences.iter().map(|sequence| sequence.get(i).cloned()).collect())
        .collect()
}
