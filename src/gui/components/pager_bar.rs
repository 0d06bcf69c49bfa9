// src/gui/components/pager_bar.rs
//
// Previous / numbered / … / last / Next. Clicks go through Pager::go_to,
// so anything out of range is a no-op.

use eframe::egui::{self, Button, RichText};
use tracing::debug;

use crate::{gui::app::App, pager::PageControl};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let pager = app.state.gui.pager;
    let cur = pager.current();
    let mut target: Option<usize> = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 10.0;

        if ui.add_enabled(pager.has_prev(), Button::new("◀")).on_hover_text("Previous").clicked() {
            target = cur.checked_sub(1);
        }

        for ctl in pager.controls() {
            match ctl {
                PageControl::Page(n) => {
                    if ui.selectable_label(n == cur, n.to_string()).clicked() {
                        target = Some(n);
                    }
                }
                PageControl::Ellipsis => {
                    ui.label(RichText::new("...").weak());
                }
            }
        }

        if ui.add_enabled(pager.has_next(), Button::new("▶")).on_hover_text("Next").clicked() {
            target = Some(cur + 1);
        }

        ui.label(RichText::new(format!("Page {cur} of {}", pager.total_pages())).weak());
    });

    if let Some(n) = target {
        if app.state.gui.pager.go_to(n) {
            debug!("UI: page {cur} → {n}");
        }
    }
}
