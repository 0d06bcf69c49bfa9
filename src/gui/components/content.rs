// src/gui/components/content.rs
//
// Main panel body: spinner while loading, empty state when there is nothing
// to show, table + download otherwise.

use eframe::egui::{self, widgets::Spinner};

use crate::{config::consts::EMPTY_MAIN_MSG, fetch::ViewKind, gui::app::App};

use super::{data_table, empty_state, export_bar, pager_bar};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    match app.fetch.view() {
        ViewKind::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.add(Spinner::new().size(96.0));
            });
        }
        ViewKind::Empty => {
            empty_state::draw(ui, Some(EMPTY_MAIN_MSG));
        }
        ViewKind::Table => {
            // Bottom-up so the table takes whatever height is left.
            egui::TopBottomPanel::bottom("export_bar")
                .show_separator_line(false)
                .show_inside(ui, |ui| {
                    pager_bar::draw(ui, app);
                    ui.separator();
                    export_bar::draw(ui, app);
                });

            egui::CentralPanel::default().show_inside(ui, |ui| {
                data_table::draw(ui, app);
            });
        }
    }
}
