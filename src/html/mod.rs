// src/html/mod.rs

pub mod paging;
