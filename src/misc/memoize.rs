// src/misc/memoize.rs

use std::collections::HashMap;
use std::hash::Hash;

/// Wraps a function so that each distinct argument is computed once.
/// Functions of several arguments take them as a tuple.
pub struct Memoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(&A) -> R,
{
    callback: F,
    cache: HashMap<A, R>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(&A) -> R,
{
    pub fn new(callback: F) -> Self {
        Memoized { callback, cache: HashMap::new() }
    }

    pub fn call(&mut self, argument: A) -> R {
        if let Some(result) = self.cache.get(&argument) {
            return result.clone();
        }
        let result = (self.callback)(&argument);
        self.cache.insert(argument, result.clone());
        result
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
