//! File logging for the TUI.
//!
//! The terminal is owned by ratatui while the app runs, so log records go to a
//! file through a `fern` dispatch instead of stderr.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Name of the log file inside the data directory
pub const LOG_FILE_NAME: &str = "todotable.log";

/// Default log file location: `<data_local_dir>/todotable/todotable.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("todotable").join(LOG_FILE_NAME))
}

/// Log file the given config writes to
pub fn resolve_log_file_path(config: &LoggingConfig) -> Result<PathBuf> {
    match &config.file {
        Some(path) => Ok(path.clone()),
        None => get_log_file_path(),
    }
}

/// Build the dispatch without installing it
pub fn build_dispatch(config: &LoggingConfig) -> Result<(fern::Dispatch, PathBuf)> {
    let level = config.level_filter()?;
    let path = resolve_log_file_path(config)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file);

    Ok((dispatch, path))
}

/// Install the global logger. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let (dispatch, path) = build_dispatch(config)?;
    dispatch
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}
