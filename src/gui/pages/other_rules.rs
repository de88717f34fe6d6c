// src/gui/pages/other_rules.rs
//
// Top-level rules that belong to no group (deadlines, price changes, …).
// Listed straight from the rules tree so new loose facts show up here.

use eframe::egui;

use crate::{config::options::PageKind, core::text::humanize_key, gui::app::App, kb};
use super::fact;

pub struct OtherRulesPage;
pub static PAGE: OtherRulesPage = OtherRulesPage;

impl super::Page for OtherRulesPage {
    fn title(&self) -> &'static str { "Other Rules" }
    fn kind(&self) -> PageKind { PageKind::OtherRules }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App) {
        ui.heading("Other Important Rules");
        ui.add_space(4.0);

        for (key, text) in kb::loose_rules() {
            fact(ui, &humanize_key(key), text);
        }
    }
}
