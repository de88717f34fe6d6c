// src/query/error.rs
use std::fmt;

/// Boundary rejection for `search_input`. The engine itself never fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// No query was supplied at all (distinct from an empty query).
    MissingQuery,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::MissingQuery => write!(f, "invalid argument: query is missing"),
        }
    }
}

impl std::error::Error for QueryError {}
