// src/config/file.rs
//
// Persisted options: JSON under the store dir. A missing or unreadable file
// is not an error; the app just starts from defaults.

use std::{fs, io, path::{Path, PathBuf}};

use tracing::{debug, warn};

use super::{consts::{CONFIG_FILE, STORE_DIR}, options::AppOptions};
use crate::error::ConfigError;

pub fn default_path() -> PathBuf {
    Path::new(STORE_DIR).join(CONFIG_FILE)
}

/// Parse the options file without logging anything.
pub fn read(path: &Path) -> Result<AppOptions, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|e| ConfigError::Read { path: path.to_path_buf(), source: e })?;
    serde_json::from_str(&text).map_err(|e| ConfigError::Parse { path: path.to_path_buf(), source: e })
}

/// Log why the defaults are in use. A missing file is the normal first run.
pub fn report_fallback(err: &ConfigError) {
    match err {
        ConfigError::Read { .. } => debug!("config: not loaded, using defaults: {err}"),
        ConfigError::Parse { .. } => warn!("config: {err}, using defaults"),
    }
}

pub fn load(path: &Path) -> AppOptions {
    read(path).unwrap_or_else(|e| {
        report_fallback(&e);
        AppOptions::default()
    })
}

pub fn save(path: &Path, opts: &AppOptions) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = serde_json::to_string_pretty(opts).map_err(io::Error::other)?;
    fs::write(path, text)
}
