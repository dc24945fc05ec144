// src/sets/set_algebra.rs
//
// A ∪ B, A ∩ B, A \ values and A △ B over sequences, sets and strings.
// Two sequences give a sequence (first-seen order); a set on either side gives a set;
// the `_str` forms treat strings as sequences of characters and give strings back.
// Union, intersection and symmetric difference never repeat an element; `without`
// keeps the duplicates and order of what survives.

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::core::collection::Collection;

fn lookup<T: Eq + Hash>(collection: &Collection<T>) -> HashSet<&T> {
    collection.iter().collect()
}

pub fn union<T: Clone + Eq + Hash>(a: &Collection<T>, b: &Collection<T>) -> Collection<T> {
    let items: IndexSet<T> = a.iter().chain(b.iter()).cloned().collect();
    Collection::rebuild(a.combined_kind(b), items)
}

pub fn intersection<T: Clone + Eq + Hash>(a: &Collection<T>, b: &Collection<T>) -> Collection<T> {
    let in_b = lookup(b);
    let items: IndexSet<T> = a.iter().filter(|item| in_b.contains(item)).cloned().collect();
    Collection::rebuild(a.combined_kind(b), items)
}

/// `collection` minus every element equal to one of `values`, same kind as the input.
pub fn without<T: Clone + Eq + Hash>(collection: &Collection<T>, values: &[T]) -> Collection<T> {
    let excluded: HashSet<&T> = values.iter().collect();
    Collection::rebuild(
        collection.kind(),
        collection.iter().filter(|item| !excluded.contains(item)).cloned(),
    )
}

pub fn sym_diff<T: Clone + Eq + Hash>(a: &Collection<T>, b: &Collection<T>) -> Collection<T> {
    let (in_a, in_b) = (lookup(a), lookup(b));
    let items: IndexSet<T> = a
        .iter()
        .filter(|item| !in_b.contains(item))
        .chain(b.iter().filter(|item| !in_a.contains(item)))
        .cloned()
        .collect();
    Collection::rebuild(a.combined_kind(b), items)
}

fn chars_of(text: &str) -> Collection<char> {
    Collection::Sequence(text.chars().collect())
}

fn into_text(collection: Collection<char>) -> String {
    collection.into_vec().into_iter().collect()
}

pub fn union_str(a: &str, b: &str) -> String {
    into_text(union(&chars_of(a), &chars_of(b)))
}

pub fn intersection_str(a: &str, b: &str) -> String {
    into_text(intersection(&chars_of(a), &chars_of(b)))
}

pub fn without_str(text: &str, values: &[char]) -> String {
    into_text(without(&chars_of(text), values))
}

pub fn sym_diff_str(a: &str, b: &str) -> String {
    into_text(sym_diff(&chars_of(a), &chars_of(b)))
}
