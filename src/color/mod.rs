// src/color/mod.rs

pub mod hex_color;
