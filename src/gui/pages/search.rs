// src/gui/pages/search.rs
use eframe::egui::{self, RichText};

use crate::{
    config::options::PageKind,
    gui::{app::App, components::search_bar},
};

pub struct SearchPage;
pub static PAGE: SearchPage = SearchPage;

impl super::Page for SearchPage {
    fn title(&self) -> &'static str { "Search" }
    fn kind(&self) -> PageKind { PageKind::Search }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Search Rules & Terminology");

        let ev = search_bar::draw(
            ui,
            "Query:",
            "e.g. captain, clean sheet, DGW",
            &mut app.state.gui.query_text,
            true,
        );
        if ev.submitted {
            app.submit_search();
        }

        ui.separator();

        let Some(results) = app.state.results.as_deref() else {
            ui.label("Type a query and press Enter.");
            return;
        };
        if let Some(q) = app.state.gui.last_query.as_deref() {
            let shown = if q.is_empty() { "(empty query: every entry)" } else { q };
            ui.label(RichText::new(format!("Results for {shown}")).italics());
        }

        egui::ScrollArea::vertical()
            .id_salt("search_results")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                // Shown verbatim; section expansions are pre-formatted JSON
                ui.label(RichText::new(results).monospace());
            });
    }
}
