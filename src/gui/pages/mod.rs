// src/gui/pages/mod.rs
use eframe::egui::{self, RichText};

use crate::{
    config::{consts::NOT_AVAILABLE, options::PageKind},
    core::text::humanize_key,
    gui::app::App,
    kb::RuleNode,
};

pub mod search;
pub mod scoring;
pub mod team_rules;
pub mod other_rules;
pub mod terminology;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page body below the tabs.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App) {}
}

/* ---------- shared rendering for the rules pages ---------- */

pub(crate) fn subheading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(text).size(16.0).strong());
}

/// `**Label:** text` on one wrapped line.
pub(crate) fn fact(ui: &mut egui::Ui, label: &str, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(format!("{label}:")).strong());
        ui.label(text);
    });
}

/// Leaf text, or the placeholder when the key is absent or not a leaf.
pub(crate) fn leaf_or_na(node: Option<&RuleNode>) -> &'static str {
    node.and_then(|n| n.as_leaf()).unwrap_or(NOT_AVAILABLE)
}

/// Labelled facts picked out of `section` by key.
pub(crate) fn facts(ui: &mut egui::Ui, section: &RuleNode, rows: &[(&str, &str)]) {
    for (key, label) in rows {
        fact(ui, label, leaf_or_na(section.get(key)));
    }
}

/// Every leaf of a group, labelled from its key.
pub(crate) fn group_facts(ui: &mut egui::Ui, group: Option<&RuleNode>) {
    match group {
        Some(node) if !node.entries().is_empty() => {
            for (key, child) in node.entries() {
                if let Some(text) = child.as_leaf() {
                    fact(ui, &humanize_key(key), text);
                }
            }
        }
        _ => { ui.label(NOT_AVAILABLE); }
    }
}

pub(crate) fn missing_section(ui: &mut egui::Ui, what: &str) {
    ui.colored_label(ui.visuals().warn_fg_color, format!("{what} data not available."));
}
