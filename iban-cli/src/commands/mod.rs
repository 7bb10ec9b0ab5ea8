//! CLI command implementations

pub mod compare;
pub mod config;
pub mod format;
pub mod logs;
pub mod parse;

use std::path::PathBuf;

use anyhow::{Context, Result};
use iban_core::{EntryPoint, Error, IbanContext, LogEvent, LoggingService};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let data_dir = get_data_dir().ok()?;
    std::fs::create_dir_all(&data_dir).ok()?;
    LoggingService::new(&data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Short error kind for the event log; never carries the rejected input
pub fn error_kind(err: &Error) -> &'static str {
    match err {
        Error::InvalidIban(_) => "invalid_iban",
        Error::Json(_) => "json",
    }
}

/// Get the data directory from environment or default
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("IBAN_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".iban"))
        .context("Could not find home directory")
}

/// Get or create the IBAN context
pub fn get_context() -> Result<IbanContext> {
    let data_dir = get_data_dir()?;

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    IbanContext::new(&data_dir).context("Failed to initialize context")
}
