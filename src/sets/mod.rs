// src/sets/mod.rs

pub mod set_algebra;

pub use crate::core::collection::{Collection, CollectionKind};
