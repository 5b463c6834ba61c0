// src/config/consts.rs

// Net config
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "API_URL";
pub const LATEST_JOBS_PATH: &str = "/api/v1/jobs/latest";
pub const FETCH_LIMIT: usize = 100;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("seek_dash/", env!("CARGO_PKG_VERSION"));

// Polling
pub const REFRESH_INTERVAL_SECS: u64 = 5 * 60;

// Local store (logs only; job data is never persisted)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const EXPORT_DIR_ENV: &str = "JOBS_EXPORT_DIR";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_PREFIX: &str = "seek-jobs-";
pub const EXPORT_EXT: &str = "csv";
pub const MISSING_FIELD: &str = "N/A";

// Display formats (en-AU style, local time)
pub const DATE_FMT: &str = "%d/%m/%Y";
pub const TIME_FMT: &str = "%I:%M:%S %p";
pub const DATETIME_FMT: &str = "%d/%m/%Y, %I:%M:%S %p";
pub const DESCRIPTION_PREVIEW_CHARS: usize = 150;

// Initial window size (logical px)
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 760.0];
