// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod kb;
pub mod query;

pub mod gui;

pub use query::{search, search_input, QueryEngine, QueryError};
