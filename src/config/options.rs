// src/config/options.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub export: ExportOptions,
    pub log: LogOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Directory the CSV download lands in.
    pub dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { dir: Self::default_dir() }
    }
}

impl ExportOptions {
    /// The user's download folder when the platform has one, `out/` otherwise.
    pub fn default_dir() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path for a given file name inside the export dir.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Parse GUI/CLI text into a dir. Blank text restores the default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.dir = if s.is_empty() { Self::default_dir() } else { Path::new(s).to_path_buf() };
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    /// `EnvFilter` directive used when `CONTENT_VIEWER_LOG` is unset.
    pub filter: String,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self { filter: s!(DEFAULT_LOG_FILTER) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_dir_text_restores_default() {
        let mut export = ExportOptions::with_dir("somewhere/else");
        export.set_dir("   ");
        assert_eq!(export.dir, ExportOptions::default_dir());
    }

    #[test]
    fn path_for_joins_file_name() {
        let export = ExportOptions::with_dir("out");
        assert_eq!(export.path_for("Posts.csv"), Path::new("out").join("Posts.csv"));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let opts: AppOptions = serde_json::from_str(r#"{"export":{"dir":"x"}}"#).unwrap();
        assert_eq!(opts.export.dir, PathBuf::from("x"));
        assert_eq!(opts.log.filter, DEFAULT_LOG_FILTER);
    }
}
