// src/gui/pages/scoring.rs
use eframe::egui;

use crate::{config::options::PageKind, gui::app::App, kb::{self, Section}};
use super::{facts, group_facts, leaf_or_na, missing_section, subheading};

pub struct ScoringPage;
pub static PAGE: ScoringPage = ScoringPage;

const OTHER_SCORING: &[(&str, &str)] = &[
    ("assists", "Assists"),
    ("saves", "Saves"),
    ("penalty_save", "Penalty Save"),
    ("penalty_miss", "Penalty Miss"),
    ("yellow_card", "Yellow Card"),
    ("red_card", "Red Card"),
    ("own_goal", "Own Goal"),
    ("bonus", "Bonus Points"),
];

impl super::Page for ScoringPage {
    fn title(&self) -> &'static str { "Scoring" }
    fn kind(&self) -> PageKind { PageKind::Scoring }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App) {
        ui.heading("Scoring Rules");

        let Some(scoring) = kb::section(Section::Scoring.key()) else {
            missing_section(ui, "Scoring rules");
            return;
        };

        egui::ScrollArea::vertical()
            .id_salt("scoring_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                subheading(ui, "Appearance Points");
                ui.label(leaf_or_na(scoring.get("playing")));

                subheading(ui, "Goals");
                group_facts(ui, scoring.get("goals"));

                subheading(ui, "Clean Sheets");
                group_facts(ui, scoring.get("clean_sheets"));

                subheading(ui, "Other Scoring");
                facts(ui, scoring, OTHER_SCORING);
            });
    }
}
