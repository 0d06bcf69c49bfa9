// src/gui/components/data_table.rs
//
// Draws the current page window. Purely a view over the loaded collection;
// paging itself lives in the pager bar.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, source::Source};

const ROW_H: f32 = 24.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label(RichText::new("Displaying Content").strong());
    ui.add_space(4.0);

    let source = app.state.gui.selected.unwrap_or(Source::Posts);
    let rows = app.state.gui.pager.visible(app.fetch.records());

    TableBuilder::new(ui)
        .id_salt(("data_table", source.column_index(), app.state.gui.pager.current()))
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::exact(120.0))
        .column(Column::remainder().clip(true))
        .header(ROW_H, |mut header| {
            header.col(|ui| {
                ui.centered_and_justified(|ui| { ui.label(RichText::new("ID").strong()); });
            });
            header.col(|ui| {
                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                    ui.label(RichText::new(source.column_header()).strong());
                });
            });
        })
        .body(|body| {
            body.rows(ROW_H, rows.len(), |mut row| {
                let Some(rec) = rows.get(row.index()) else { return };
                row.col(|ui| {
                    ui.centered_and_justified(|ui| { ui.label(rec.id.to_string()); });
                });
                row.col(|ui| {
                    ui.scope(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.label(source.display_field(rec));
                        });
                    });
                });
            });
        });
}
