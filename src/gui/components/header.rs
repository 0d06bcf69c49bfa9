// src/gui/components/header.rs
use eframe::egui::{self, RichText};

use crate::config::consts::APP_TITLE;

pub fn draw(ui: &mut egui::Ui) {
    ui.add_space(6.0);
    ui.label(RichText::new(APP_TITLE).size(32.0));
    ui.add_space(4.0);
}
