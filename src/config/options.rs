// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Defaults, overridden by `API_URL` / `JOBS_EXPORT_DIR` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with the variable lookup supplied by the caller.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            opts.api.set_base_url(&url);
        }
        if let Some(dir) = lookup(EXPORT_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            opts.export.set_dir(&dir);
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    base_url: String,
    pub limit: usize,
    pub timeout: Duration,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_API_URL),
            limit: FETCH_LIMIT,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ApiOptions {
    pub fn new(base_url: &str) -> Self {
        let mut api = Self::default();
        api.set_base_url(base_url);
        api
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    /// Trailing slashes are dropped so path joining stays predictable.
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim().trim_end_matches('/').to_string();
    }

    /// `{base}/api/v1/jobs/latest?limit={n}`
    pub fn latest_jobs_url(&self) -> String {
        format!("{}{}?limit={}", self.base_url, LATEST_JOBS_PATH, self.limit)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn dir(&self) -> &Path { &self.out_dir }

    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(crate::file::normalize_separators(s))
        };
    }

    /// `seek-jobs-YYYY-MM-DD.csv`
    pub fn file_name_for(date: NaiveDate) -> String {
        format!("{EXPORT_PREFIX}{}.{EXPORT_EXT}", date.format("%Y-%m-%d"))
    }

    /// Full output path for an export made on `date`.
    pub fn out_path(&self, date: NaiveDate) -> PathBuf {
        self.out_dir.join(Self::file_name_for(date))
    }
}
