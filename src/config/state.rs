// src/config/state.rs
use super::options::AppOptions;
use crate::pager::Pager;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Dropdown selection. `None` until the user picks a source.
    pub selected: Option<crate::source::Source>,

    /// Table position over the loaded collection.
    pub pager: Pager,

    /// Export dir text field; applied to `options.export` on Download and on exit.
    pub out_dir_text: String,

    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected: None,
            pager: Pager::default(),
            out_dir_text: s!(),
            window_w: 1100.0,
            window_h: 700.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let out_dir_text = options.export.dir.to_string_lossy().into_owned();
        Self {
            options,
            gui: GuiState { out_dir_text, ..GuiState::default() },
        }
    }
}
