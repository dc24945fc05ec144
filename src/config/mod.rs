// src/config/mod.rs

pub mod sundries_config;

// Re-export main types for convenience
pub use sundries_config::{SundriesConfig, RandomConfig, PagingConfig, CipherConfig};
