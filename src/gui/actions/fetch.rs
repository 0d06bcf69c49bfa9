// src/gui/actions/fetch.rs
use eframe::egui;
use tracing::{debug, info};

use crate::{gui::app::App, source::Source};

pub fn fetch(app: &mut App, source: Source, ctx: &egui::Context) {
    let prev = app.state.gui.selected;
    if prev == Some(source) {
        debug!("UI: Source {:?} already selected", source);
        return;
    }
    info!("UI: Source {:?} → {:?}", prev, source);

    // The pager moves to page 1 once the new collection lands (see `App::sync_fetches`).
    app.state.gui.selected = Some(source);

    let ctx = ctx.clone();
    app.fetch.select(source, move || ctx.request_repaint());
    app.status(format!("Loading {}…", source.label().to_lowercase()));
}
