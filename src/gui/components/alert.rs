// src/gui/components/alert.rs
//
// Blocking notification for fetch failures. The rest of the window stays
// dimmed and unclickable until the user dismisses it.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.fetch.alert().map(str::to_owned) else { return };

    let resp = egui::Modal::new(egui::Id::new("fetch_alert")).show(ctx, |ui| {
        ui.set_min_width(260.0);
        ui.label(msg);
        ui.add_space(8.0);
        ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
    });

    if resp.inner || resp.should_close() {
        app.fetch.dismiss_alert();
    }
}
