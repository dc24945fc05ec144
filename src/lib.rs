// src/lib.rs

pub mod arrays;
pub mod color;
pub mod config;
pub mod core;
pub mod crypto;
pub mod geometry;
pub mod html;
pub mod integer_math;
pub mod misc;
pub mod random;
pub mod sets;
pub mod strings;

pub use crate::config::SundriesConfig;
pub use crate::core::{Result, SundriesError};
pub use crate::random::Randomizer;
