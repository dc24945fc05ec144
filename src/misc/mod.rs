// src/misc/mod.rs

pub mod benchmark;
pub mod memoize;

pub use benchmark::benchmark;
pub use memoize::Memoized;
