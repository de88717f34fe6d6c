// src/gui/pages/team_rules.rs
use eframe::egui;

use crate::{config::options::PageKind, gui::app::App, kb::{self, Section}};
use super::{facts, group_facts, missing_section, subheading};

pub struct TeamRulesPage;
pub static PAGE: TeamRulesPage = TeamRulesPage;

const SQUAD: &[(&str, &str)] = &[
    ("budget", "Budget"),
    ("squad_size", "Squad Size"),
    ("formation", "Formation"),
    ("captaincy", "Captaincy"),
    ("transfers", "Transfers"),
    ("team_limit", "Team Limit"),
];

impl super::Page for TeamRulesPage {
    fn title(&self) -> &'static str { "Team Rules" }
    fn kind(&self) -> PageKind { PageKind::TeamRules }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App) {
        ui.heading("Team Rules");

        let Some(team) = kb::section(Section::TeamRules.key()) else {
            missing_section(ui, "Team rules");
            return;
        };

        egui::ScrollArea::vertical()
            .id_salt("team_rules_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                facts(ui, team, SQUAD);

                subheading(ui, "Chips");
                group_facts(ui, team.get("chips"));
            });
    }
}
