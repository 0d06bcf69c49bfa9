// src/gui/components/source_picker.rs
//
// "Fetch Content" dropdown. Picking a different source starts a fetch;
// picking the current one again does nothing.

use eframe::egui::{self, RichText};

use crate::{config::consts::SELECT_PLACEHOLDER, gui::{actions, app::App}, source::Source};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label(RichText::new("Fetch Content").strong());

    let current = app.state.gui.selected;
    let text = current.map(|s| s.label()).unwrap_or(SELECT_PLACEHOLDER);
    let mut picked: Option<Source> = None;

    egui::ComboBox::from_id_salt("source_picker")
        .selected_text(text)
        .width(185.0)
        .show_ui(ui, |ui| {
            for &src in Source::all() {
                if ui.selectable_label(current == Some(src), src.label()).clicked() {
                    picked = Some(src);
                }
            }
        });

    if let Some(src) = picked {
        actions::fetch(app, src, ui.ctx());
    }
}
