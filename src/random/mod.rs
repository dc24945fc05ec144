// src/random/mod.rs

pub mod sampling;

pub use crate::core::static_random::Randomizer;
