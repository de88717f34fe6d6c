// src/kb/mod.rs
//! # Knowledge base
//!
//! The compiled-in FPL rules tree, terminology list, and the keyword table
//! that maps broad query words onto whole rule sections.
//!
//! Everything here is `static` and read-only for the life of the process.
//! Callers borrow; nothing hands out owned copies that could drift.
//!
//! ## Shape
//! ```text
//! rules ─┬─ scoring ─┬─ playing            (leaf)
//!        │           ├─ goals ─┬─ forward  (leaf, third level)
//!        │           │         └─ …
//!        │           └─ …
//!        ├─ team_rules ─ … ─ chips ─ …
//!        └─ deadlines, price_changes, …    (top-level leaves)
//! ```
//! Nesting never goes deeper than category / subcategory / sub-subcategory.

pub mod data;
pub mod types;

pub use types::{Entry, KeywordRule, RuleNode, Section, Term};

use crate::core::text::{contains_ci, lower};

/// Deepest key path the rules tree may carry.
pub const MAX_DEPTH: usize = 3;

#[inline]
pub fn rules() -> &'static RuleNode { &data::RULES }

#[inline]
pub fn terms() -> &'static [Term] { data::TERMS }

#[inline]
pub fn keywords() -> &'static [KeywordRule] { data::KEYWORDS }

/// Top-level rule entry by key (e.g. "scoring", "deadlines").
pub fn section(key: &str) -> Option<&'static RuleNode> {
    rules().get(key)
}

/// Top-level entries that are plain facts rather than groups.
pub fn loose_rules() -> impl Iterator<Item = (&'static str, &'static str)> {
    rules()
        .entries()
        .iter()
        .filter_map(|(k, node)| node.as_leaf().map(|text| (*k, text)))
}

/// Terms whose name or definition contains `needle` (case-insensitive).
/// An empty needle keeps everything.
pub fn filter_terms(needle: &str) -> Vec<&'static Term> {
    let needle = lower(needle);
    terms()
        .iter()
        .filter(|t| term_matches(t, &needle))
        .collect()
}

/// Shared row predicate for the terminology scan and the display filter.
/// `needle_lower` must already be lower-cased.
#[inline]
pub fn term_matches(t: &Term, needle_lower: &str) -> bool {
    contains_ci(t.term, needle_lower) || contains_ci(t.definition, needle_lower)
}

/// What `to_json` renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumpTarget {
    Section(Section),
    Rules,
    Terms,
}

impl DumpTarget {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "scoring" => Some(DumpTarget::Section(Section::Scoring)),
            "team_rules" | "team-rules" => Some(DumpTarget::Section(Section::TeamRules)),
            "rules" => Some(DumpTarget::Rules),
            "terms" | "terminology" => Some(DumpTarget::Terms),
            _ => None,
        }
    }
}

/// Pretty JSON (two-space indent, declaration order).
pub fn to_json(target: DumpTarget) -> serde_json::Result<String> {
    match target {
        DumpTarget::Section(sec) => match section(sec.key()) {
            Some(node) => serde_json::to_string_pretty(node),
            None => Ok(s!("{}")),
        },
        DumpTarget::Rules => serde_json::to_string_pretty(rules()),
        DumpTarget::Terms => serde_json::to_string_pretty(&TermsJson(terms())),
    }
}

// Ordered object of term -> definition.
struct TermsJson(&'static [Term]);

impl serde::Serialize for TermsJson {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for t in self.0 {
            map.serialize_entry(t.term, t.definition)?;
        }
        map.end()
    }
}
