// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    config::options::ExportOptions,
    csv::to_csv_string,
    error::ExportError,
    record::Record,
    source::Source,
};

/// Write the whole collection as `<dir>/Posts.csv` or `<dir>/Comments.csv`,
/// overwriting any earlier download. Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    records: &[Record],
    source: Source,
) -> Result<PathBuf, ExportError> {
    ensure_directory(&export.dir)?;

    let path = export.path_for(source.csv_file_name());
    let contents = to_csv_string(records, source);

    fs::write(&path, contents).map_err(|e| ExportError::Write { path: path.clone(), source: e })?;
    info!(path = %path.display(), rows = records.len(), %source, "export: written");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ExportError::Write { path: dir.to_path_buf(), source: e })?;
    }
    Ok(())
}
