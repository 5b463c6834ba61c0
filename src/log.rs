// src/log.rs
//
// Logger setup. The `logf!`/`logd!`/`logw!`/`loge!` macros (see macros.rs)
// go through the `log` facade; this installs the sinks behind it.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn level() -> LevelFilter {
    if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info }
}

/// Append to `.store/debug.log`; `None` if the file can't be opened.
fn file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let dir = PathBuf::from(STORE_DIR);
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Warning: could not create {}: {e}", dir.display());
        return None;
    }
    let path = dir.join(LOG_FILE);
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(e) => {
            eprintln!("Warning: could not open log file {}: {e}", path.display());
            None
        }
    }
}

/// Install terminal + file logging. Safe to call more than once.
pub fn init() {
    let level = level();
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(f) = file_logger(level, config) {
        loggers.push(f);
    }

    // Already initialized → keep the existing logger.
    let _ = CombinedLogger::init(loggers);
}

/// Terminal-only logger for tests; no-ops if another test got there first.
pub fn init_for_tests() {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
