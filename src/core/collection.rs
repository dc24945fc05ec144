// src/core/collection.rs

use std::hash::Hash;

use indexmap::IndexSet;

/// A collection operand for the set algebra helpers: either an ordered sequence
/// (duplicates allowed) or a set (unique elements, insertion order kept for display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection<T: Eq + Hash> {
    Sequence(Vec<T>),
    Set(IndexSet<T>),
}

/// Which variant a result is rebuilt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Sequence,
    Set,
}

impl<T: Eq + Hash> Collection<T> {
    pub fn kind(&self) -> CollectionKind {
        match self {
            Collection::Sequence(_) => CollectionKind::Sequence,
            Collection::Set(_) => CollectionKind::Set,
        }
    }

    /// The kind produced by combining two operands: a sequence only when both are sequences.
    pub fn combined_kind(&self, other: &Collection<T>) -> CollectionKind {
        match (self.kind(), other.kind()) {
            (CollectionKind::Sequence, CollectionKind::Sequence) => CollectionKind::Sequence,
            _ => CollectionKind::Set,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(items) => items.len(),
            Collection::Set(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, value: &T) -> bool {
        match self {
            Collection::Sequence(items) => items.contains(value),
            Collection::Set(items) => items.contains(value),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            Collection::Sequence(items) => Box::new(items.iter()),
            Collection::Set(items) => Box::new(items.iter()),
        }
    }

    /// Rebuilds a collection of the requested kind from elements in iteration order.
    pub fn rebuild<I: IntoIterator<Item = T>>(kind: CollectionKind, items: I) -> Self {
        match kind {
            CollectionKind::Sequence => Collection::Sequence(items.into_iter().collect()),
            CollectionKind::Set => Collection::Set(items.into_iter().collect()),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Collection::Sequence(items) => items,
            Collection::Set(items) => items.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Collection::Sequence(items)
    }
}

impl<T: Eq + Hash> From<IndexSet<T>> for Collection<T> {
    fn from(items: IndexSet<T>) -> Self {
        Collection::Set(items)
    }
}
