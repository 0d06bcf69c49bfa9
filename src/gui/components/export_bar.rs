// src/gui/components/export_bar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Save to:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(320.0),
        );
    });

    ui.add_space(6.0);

    ui.vertical_centered(|ui| {
        let btn = egui::Button::new(egui::RichText::new("Download CSV").size(20.0).strong().color(egui::Color32::BLACK))
            .fill(egui::Color32::from_rgb(0xD1, 0xCF, 0xFF))
            .min_size(egui::vec2(200.0, 44.0));
        if ui.add(btn).clicked() {
            actions::export(app);
        }
    });

    ui.add_space(4.0);
    ui.label(format!("Status: {}", app.status));
}
