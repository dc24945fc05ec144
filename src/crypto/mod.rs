// src/crypto/mod.rs

pub mod cipher;
