// src/config/options.rs
use crate::kb::DumpTarget;

/// Tabs of the reference window, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Search,
    Scoring,
    TeamRules,
    OtherRules,
    Terminology,
}

/// One thing the CLI was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Search(String),
    ListTerms,
    FilterTerms(String),
    Dump(DumpTarget),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Run in order of appearance on the command line.
    pub commands: Vec<Command>,
    pub help: bool,
}

impl CliOptions {
    pub fn new() -> Self { Self::default() }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && !self.help
    }
}
