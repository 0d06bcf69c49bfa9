// src/gui/actions/export.rs
use tracing::{debug, error};

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize the dir field first (mutates app) before any &app borrows
    app.persist_options();

    let Some(source) = app.state.gui.selected else {
        debug!("Export: Clicked, but no source is selected");
        return app.status("Nothing to export");
    };
    if app.fetch.records().is_empty() {
        debug!("Export: Clicked, but there's nothing to export");
        return app.status("Nothing to export");
    }

    let msg = match file::write_export(&app.state.options.export, app.fetch.records(), source) {
        Ok(path) => format!("Saved {}", path.display()),
        Err(e) => {
            error!("Export: Error: {e}");
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
