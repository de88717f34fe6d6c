// src/kb/types.rs
//
// Shapes of the compiled-in knowledge base.
//
// - RuleNode: a rule fact (Leaf) or a named group of facts (Section).
//             Sections nest at most three levels below the root.
// - Term:     one terminology pair.
// - KeywordRule: a broad keyword that pulls in a whole rule section.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One `(key, node)` entry of a section, in declaration order.
pub type Entry = (&'static str, RuleNode);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleNode {
    Leaf(&'static str),
    Section(&'static [Entry]),
}

impl RuleNode {
    #[inline]
    pub fn as_leaf(&self) -> Option<&'static str> {
        match self {
            RuleNode::Leaf(text) => Some(*text),
            RuleNode::Section(_) => None,
        }
    }

    /// Child entries; empty for a leaf.
    #[inline]
    pub fn entries(&self) -> &'static [Entry] {
        match self {
            RuleNode::Leaf(_) => &[],
            RuleNode::Section(entries) => *entries,
        }
    }

    pub fn get(&self, key: &str) -> Option<&'static RuleNode> {
        self.entries().iter().find(|(k, _)| *k == key).map(|(_, node)| node)
    }

    /// Levels below this node (a leaf is 0).
    pub fn depth(&self) -> usize {
        match self {
            RuleNode::Leaf(_) => 0,
            RuleNode::Section(entries) => {
                1 + entries.iter().map(|(_, n)| n.depth()).max().unwrap_or(0)
            }
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            RuleNode::Leaf(_) => 1,
            RuleNode::Section(entries) => entries.iter().map(|(_, n)| n.leaf_count()).sum(),
        }
    }
}

// Sections serialize as JSON objects in declaration order, leaves as strings.
impl Serialize for RuleNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RuleNode::Leaf(text) => serializer.serialize_str(text),
            RuleNode::Section(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, node) in entries.iter() {
                    map.serialize_entry(key, node)?;
                }
                map.end()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Term {
    pub term: &'static str,
    pub definition: &'static str,
}

/// Rule sections that a keyword can expand in full.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Scoring,
    TeamRules,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Scoring, Section::TeamRules];

    /// Top-level key in the rules tree.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Scoring => "scoring",
            Section::TeamRules => "team_rules",
        }
    }

    /// Heading placed in front of the expanded section.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Scoring => "Complete Scoring Rules:",
            Section::TeamRules => "Complete Team Rules:",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordRule {
    pub keyword: &'static str,
    pub section: Section,
}
