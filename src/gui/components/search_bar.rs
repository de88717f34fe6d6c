// src/gui/components/search_bar.rs
//
// One-line text box with an optional submit button.
// Shared by the Search tab (submit on Enter/button) and the
// Terminology tab (live filter on every change).

use eframe::egui;

#[derive(Clone, Copy, Debug, Default)]
pub struct SearchBarEvent {
    /// Text changed this frame
    pub changed: bool,
    /// Enter pressed in the box, or the button clicked
    pub submitted: bool,
}

pub fn draw(
    ui: &mut egui::Ui,
    label: &str,
    hint: &str,
    text: &mut String,
    with_button: bool,
) -> SearchBarEvent {
    let mut ev = SearchBarEvent::default();

    ui.horizontal(|ui| {
        ui.label(label);

        let resp = ui.add(
            egui::TextEdit::singleline(text)
                .hint_text(hint)
                .desired_width(360.0),
        );
        ev.changed = resp.changed();
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            ev.submitted = true;
            resp.request_focus();
        }

        if with_button && ui.button("Search").clicked() {
            ev.submitted = true;
        }
        if !with_button && !text.is_empty() && ui.button("Clear").clicked() {
            text.clear();
            ev.changed = true;
        }
    });

    ev
}
