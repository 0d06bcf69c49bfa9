// src/gui/components/empty_state.rs
use eframe::egui::{self, RichText};

use crate::config::consts::EMPTY_DEFAULT_MSG;

/// Text shown by the panel: the override, or the stock message.
pub fn message(custom: Option<&str>) -> &str {
    custom.unwrap_or(EMPTY_DEFAULT_MSG)
}

/// Icon + message panel. `None` shows the default message.
pub fn draw(ui: &mut egui::Ui, custom: Option<&str>) {
    let message = message(custom);

    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        egui::Frame::group(ui.style())
            .inner_margin(20.0)
            .show(ui, |ui| {
                ui.set_max_width(400.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("📄").size(40.0).weak());
                    ui.add_space(10.0);
                    ui.label(RichText::new(message).size(16.0));
                });
            });
    });
}
