// src/core/mod.rs

pub mod errors;
pub mod checkers;
pub mod collection;
pub mod static_random;

pub use errors::{Result, SundriesError};
