// src/gui/app.rs
use std::{error::Error, path::PathBuf, sync::Arc};

use eframe::egui;
use tracing::{info, warn};

use crate::{
    config::{self, consts::APP_TITLE, state::AppState},
    fetch::{FetchController, FetchEvent},
    net::{Fetcher, HttpFetcher},
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let config_path = config::file::default_path();
    let app_options = crate::log::startup(&config_path, &crate::log::default_path());

    let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new()?);
    let state = AppState::new(app_options);

    info!("Init: export dir={}", state.options.export.dir.display());

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, fetcher, config_path)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded collection + loading flag; workers report back through it
    pub fetch: FetchController,

    // one-line status under the table
    pub status: String,

    pub config_path: PathBuf,
}

impl App {
    pub fn new(state: AppState, fetcher: Arc<dyn Fetcher>, config_path: PathBuf) -> Self {
        Self {
            state,
            fetch: FetchController::new(fetcher),
            status: s!("Idle"),
            config_path,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Pull in finished fetches and keep the pager in step with the data.
    pub fn sync_fetches(&mut self) {
        for ev in self.fetch.poll() {
            match ev {
                FetchEvent::Loaded { source, rows } => {
                    // Fresh collection: start over from page 1.
                    self.state.gui.pager.reset();
                    self.state.gui.pager.set_len(self.fetch.records().len());
                    self.status(format!("Loaded {rows} {}", source.label().to_lowercase()));
                }
                FetchEvent::Failed { source } => {
                    self.status(format!("Failed to load {}", source.label().to_lowercase()));
                }
            }
        }
    }

    /// Apply the dir text field to the options and write them out if the dir
    /// changed. Returns whether anything was saved.
    pub fn persist_options(&mut self) -> bool {
        let before = self.state.options.export.dir.clone();
        self.state.options.export.set_dir(&self.state.gui.out_dir_text);
        if self.state.options.export.dir == before {
            return false;
        }

        info!("Config: export dir → {}", self.state.options.export.dir.display());
        match config::file::save(&self.config_path, &self.state.options) {
            Ok(()) => true,
            Err(e) => {
                warn!("Config: save failed: {e}");
                false
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_fetches();

        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            components::header::draw(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::source_picker::draw(ui, self);

            ui.add_space(8.0);

            components::content::draw(ui, self);
        });

        components::alert::draw(ctx, self);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist_options();
    }
}
