// src/query/mod.rs
//! # Query engine
//!
//! Free-text lookup over the knowledge base. One query in, one text block out.
//!
//! Matching runs in a fixed order and every branch accumulates:
//! 1. rules tree, depth-first in declaration order (leaf key or text);
//! 2. terminology (term or definition);
//! 3. scoring expansion: first declared scoring keyword found in the query;
//! 4. team rules expansion: same, independently.
//!
//! All tests are case-insensitive substring containment. The empty query is
//! contained in everything, so it returns every entry plus nothing from the
//! keyword table (no keyword is a substring of "").

pub mod error;

pub use error::QueryError;

use crate::config::consts::{NO_MATCH, RESULT_SEP};
use crate::core::text::{capitalize, contains_ci, lower};
use crate::kb::{self, KeywordRule, RuleNode, Section, Term, MAX_DEPTH};

/// Read-only view over a rules tree, a term list and a keyword table.
#[derive(Clone, Copy, Debug)]
pub struct QueryEngine {
    rules: &'static RuleNode,
    terms: &'static [Term],
    keywords: &'static [KeywordRule],
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new(kb::rules(), kb::terms(), kb::keywords())
    }
}

impl QueryEngine {
    pub fn new(
        rules: &'static RuleNode,
        terms: &'static [Term],
        keywords: &'static [KeywordRule],
    ) -> Self {
        Self { rules, terms, keywords }
    }

    /// Every match, in order, as separate result blocks.
    pub fn matches(&self, query: &str) -> Vec<String> {
        let needle = lower(query);
        let mut out = Vec::new();

        let mut path: Vec<&str> = Vec::with_capacity(MAX_DEPTH);
        collect_rules(self.rules, &needle, &mut path, &mut out);

        for t in self.terms {
            if kb::term_matches(t, &needle) {
                out.push(format!("Term: {} - {}", t.term, t.definition));
            }
        }

        for section in Section::ALL {
            if let Some(block) = self.expand(section, &needle) {
                out.push(block);
            }
        }
        out
    }

    /// Formatted result for `query`, or the no-match message.
    pub fn search(&self, query: &str) -> String {
        render(&self.matches(query))
    }

    /// First declared keyword for `section` that occurs in the query.
    pub fn trigger(&self, section: Section, needle_lower: &str) -> Option<&'static str> {
        self.keywords
            .iter()
            .filter(|k| k.section == section)
            .find(|k| needle_lower.contains(k.keyword))
            .map(|k| k.keyword)
    }

    fn expand(&self, section: Section, needle_lower: &str) -> Option<String> {
        self.trigger(section, needle_lower)?;
        let node = self.rules.get(section.key())?;
        // Plain strings and ordered maps only; serialization cannot fail.
        let json = serde_json::to_string_pretty(node).ok()?;
        Some(join!(section.label(), " ", &json))
    }
}

// Leaves match on their own key or their text; groups are always descended.
fn collect_rules<'a>(
    node: &'a RuleNode,
    needle: &str,
    path: &mut Vec<&'a str>,
    out: &mut Vec<String>,
) {
    for (key, child) in node.entries() {
        path.push(*key);
        match child {
            RuleNode::Leaf(text) => {
                if contains_ci(*key, needle) || contains_ci(text, needle) {
                    out.push(format!("{}: {}", format_path(path), text));
                }
            }
            RuleNode::Section(_) if path.len() < MAX_DEPTH => {
                collect_rules(child, needle, path, out);
            }
            RuleNode::Section(_) => {}
        }
        path.pop();
    }
}

fn format_path(path: &[&str]) -> String {
    path.iter().map(|k| capitalize(k)).collect::<Vec<_>>().join(" - ")
}

/// Blank-line separated blocks, or the no-match message when there are none.
pub fn render(blocks: &[String]) -> String {
    if blocks.is_empty() { return s!(NO_MATCH); }
    blocks.join(RESULT_SEP)
}

/// `search` against the built-in knowledge base.
pub fn search(query: &str) -> String {
    QueryEngine::default().search(query)
}

/// Boundary entry point: an absent query is rejected, never coerced to "".
pub fn search_input(query: Option<&str>) -> Result<String, QueryError> {
    query.map(search).ok_or(QueryError::MissingQuery)
}
