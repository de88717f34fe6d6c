// src/gui/table_model.rs
//! TableData: filtered view of the terminology list for GUI display.
//!
//! - Wraps the static term list as owned (Term, Definition) rows.
//! - Applies the Terminology tab's filter text with the same row predicate
//!   the search engine uses (`kb::term_matches`), so the table and `search`
//!   never disagree about what "contains" means.
//! - `data_table.rs` only consumes `TableData` and renders it.

use crate::kb::{self, Term};

pub const TERM_HEADERS: [&str; 2] = ["Term", "Definition"];

/// The table model used by the GUI
#[derive(Clone, Debug, Default)]
pub struct TableData {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn with(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }
}

impl TableData {
    fn term_headers() -> Option<Vec<String>> {
        Some(TERM_HEADERS.iter().map(|h| s!(*h)).collect())
    }

    fn term_row(t: &Term) -> Vec<String> {
        vec![s!(t.term), s!(t.definition)]
    }

    /// Construct a model with no filtering.
    pub fn from_terms(terms: &[Term]) -> Self {
        Self::with(Self::term_headers(), terms.iter().map(Self::term_row).collect())
    }

    /// Construct a model with a row predicate filter.
    /// The predicate receives each term and should return `true`
    /// if the row must be kept for display.
    pub fn from_terms_where<F>(terms: &[Term], keep: F) -> Self
    where
        F: Fn(&Term) -> bool,
    {
        let rows = terms.iter().filter(|t| keep(t)).map(Self::term_row).collect();
        Self::with(Self::term_headers(), rows)
    }

    /// Construct a model filtered by the Terminology tab's filter text.
    ///
    /// A row is kept when either column contains `filter`, ignoring case.
    /// An empty filter keeps everything.
    pub fn from_terms_filtered(terms: &[Term], filter: &str) -> Self {
        let needle = filter.to_lowercase();
        Self::from_terms_where(terms, |t| kb::term_matches(t, &needle))
    }
}
