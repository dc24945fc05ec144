// src/arrays/search.rs

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

/// A sortable value: numbers order before text.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Case-insensitive comparison; on a tie lowercase comes first.
fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

fn compare_scalars(a: &Scalar, b: &Scalar) -> Ordering {
    match (a, b) {
        (Scalar::Number(x), Scalar::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Scalar::Text(x), Scalar::Text(y)) => compare_text(x, y),
        (Scalar::Number(_), Scalar::Text(_)) => Ordering::Less,
        (Scalar::Text(_), Scalar::Number(_)) => Ordering::Greater,
    }
}

/// Sorts in place (numbers ascending, then text) and hands the same vector back.
pub fn sort(values: &mut Vec<Scalar>, reverse: bool) -> &mut Vec<Scalar> {
    if reverse {
        values.sort_by(|a, b| compare_scalars(b, a));
    } else {
        values.sort_by(compare_scalars);
    }
    values
}

/// A value inside an arbitrarily nested list.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

/// Whether `value` appears anywhere in `nested`, at any depth.
pub fn in_array<T: PartialEq>(value: &Nested<T>, nested: &[Nested<T>]) -> bool {
    nested.iter().any(|element| {
        element == value
            || match element {
                Nested::List(inner) => in_array(value, inner),
                Nested::Item(_) => false,
            }
    })
}

/// Drops duplicates, keeping the first occurrence of each value.
pub fn unique<T: Clone + Eq + Hash>(sequence: &[T]) -> Vec<T> {
    sequence.iter().cloned().collect::<IndexSet<T>>().into_iter().collect()
}

pub fn count<T: PartialEq>(value: &T, sequence: &[T]) -> usize {
    sequence.iter().filter(|element| *element == value).count()
}

pub fn count_chars(value: char, text: &str) -> usize {
    text.chars().filter(|&c| c == value).count()
}

/// Occurrences of every value, keyed in first-seen order.
pub fn count_items<T: Clone + Eq + Hash>(sequence: &[T]) -> IndexMap<T, usize> {
    let mut counts = IndexMap::new();
    for value in sequence {
        *counts.entry(value.clone()).or_insert(0) += 1;
    }
    counts
}

pub fn count_char_items(text: &str) -> IndexMap<char, usize> {
    let chars: Vec<char> = text.chars().collect();
    count_items(&chars)
}
