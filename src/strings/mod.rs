// src/strings/mod.rs

pub mod patterns;
pub mod string_utils;
