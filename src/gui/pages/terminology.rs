// src/gui/pages/terminology.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    gui::{app::App, components::{data_table, search_bar}},
};

pub struct TerminologyPage;
pub static PAGE: TerminologyPage = TerminologyPage;

impl super::Page for TerminologyPage {
    fn title(&self) -> &'static str { "Terminology" }
    fn kind(&self) -> PageKind { PageKind::Terminology }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("FPL Terminology");

        let ev = search_bar::draw(
            ui,
            "Search terminology:",
            "term or definition",
            &mut app.state.gui.term_filter,
            false,
        );
        // Live filter: every keystroke re-filters
        if ev.changed || ev.submitted {
            app.rebuild_terms();
        }

        ui.separator();
        data_table::draw(ui, &app.terms);
    }

    fn on_enter(&self, app: &mut App) {
        app.rebuild_terms();
    }
}
