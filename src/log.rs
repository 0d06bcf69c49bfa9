// src/log.rs
use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::{Mutex, OnceLock},
};

use tracing_subscriber::EnvFilter;

use crate::config::{
    self,
    consts::{LOG_ENV, LOG_FILE, STORE_DIR},
    options::{AppOptions, LogOptions},
};

static INIT: OnceLock<Option<PathBuf>> = OnceLock::new();

pub fn default_path() -> PathBuf {
    Path::new(STORE_DIR).join(LOG_FILE)
}

/// Install the global subscriber writing plain-text lines to `path`.
/// `CONTENT_VIEWER_LOG` overrides the configured filter. Safe to call more
/// than once; only the first call does anything. Returns the log path when
/// file logging is active.
pub fn init(path: &Path, opts: &LogOptions) -> Option<&'static Path> {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(&opts.filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("log: cannot open {}: {e}", path.display());
                return None;
            }
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .try_init()
            .ok()
            .map(|_| path.to_path_buf())
    })
    .as_deref()
}

/// Read the options at `config_path`, start logging with their filter, then
/// record a fallback to defaults so it lands in the log file.
pub fn startup(config_path: &Path, log_path: &Path) -> AppOptions {
    let loaded = config::file::read(config_path);
    let opts = loaded.as_ref().cloned().unwrap_or_default();
    init(log_path, &opts.log);
    if let Err(e) = &loaded {
        config::file::report_fallback(e);
    }
    opts
}
