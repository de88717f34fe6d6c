// src/gui/components/data_table.rs
//
// Draws a two-column (or wider) table from `TableData`.
// Purely a view: the caller owns filtering.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{HEADER_HEIGHT, ROW_HEIGHT, TERM_COL_WIDTH};
use crate::gui::table_model::TableData;

pub fn draw(ui: &mut egui::Ui, table: &TableData) {
    let cols = table.ncols();
    if cols == 0 || table.is_empty() {
        ui.label("No matching terms.");
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for ci in 0..cols {
        // Last column takes what's left; the rest start at the term width
        let col = if ci + 1 == cols {
            Column::remainder().clip(true)
        } else {
            Column::initial(TERM_COL_WIDTH).resizable(true).clip(true).at_least(40.0)
        };
        builder = builder.column(col);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            for ci in 0..cols {
                let label_text = table.headers.as_ref()
                    .and_then(|hs| hs.get(ci).cloned())
                    .unwrap_or_else(|| format!("Col {}", ci + 1));
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(label_text).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.nrows(), |mut row| {
                let Some(data) = table.rows.get(row.index()) else { return };
                for ci in 0..cols {
                    let cell = data.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.label(cell).on_hover_text(cell);
                    });
                }
            });
        });
}
