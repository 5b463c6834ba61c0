// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use chrono::{NaiveDate, Utc};

use crate::config::options::ExportOptions;
use crate::export::to_csv_string;
use crate::job::JobRecord;

/// Today's calendar date (UTC), which names the export file.
pub fn export_date() -> NaiveDate {
    Utc::now().date_naive()
}

/// Write `seek-jobs-<date>.csv` into the export dir.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    jobs: &[&JobRecord],
    date: NaiveDate,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path(date);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_csv_string(jobs)?;
    fs::write(&path, contents)?;
    logd!("Export: wrote {} job(s) → {}", jobs.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}
