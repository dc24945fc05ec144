// src/arrays/mod.rs

pub mod clone;
pub mod matrix;
pub mod search;
pub mod transform;
