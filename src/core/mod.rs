// src/core/mod.rs

pub mod text;
