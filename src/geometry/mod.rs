// src/geometry/mod.rs

pub mod lines;
