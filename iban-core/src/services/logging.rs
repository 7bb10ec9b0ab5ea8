//! Logging service - structured event logging to a JSON lines file
//!
//! Provides a privacy-safe logging system that appends events to
//! `logs.jsonl` in the data directory. Account numbers, BICs and bank
//! names are never logged; callers record event names and error kinds only.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

const LOG_FILE: &str = "logs.jsonl";

/// Counter for generating unique IDs within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique ID based on timestamp + counter
fn generate_id() -> u64 {
    // Lower 16 bits hold the counter, the rest the millisecond timestamp
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    ((now_ms() as u64) << 16) | counter
}

/// Current unix timestamp in milliseconds
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// Entry point for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    Cli,
    Library,
}

impl EntryPoint {
    fn as_str(&self) -> &'static str {
        match self {
            EntryPoint::Cli => "cli",
            EntryPoint::Library => "library",
        }
    }
}

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: None,
            error_message: None,
            error_details: None,
        }
    }

    /// Set the command context (for CLI events)
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set error information
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Set error details
    pub fn with_error_details(mut self, details: impl Into<String>) -> Self {
        self.error_details = Some(details.into());
        self
    }
}

/// A log entry as stored in the log file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: i64,
    pub entry_point: String,
    pub app_version: String,
    pub platform: String,
    pub event: String,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub error_details: Option<String>,
}

/// Service for structured event logging
///
/// Appends one JSON object per line to `logs.jsonl` and answers queries
/// over the log history. Unparseable lines are skipped when reading.
pub struct LoggingService {
    lock: Mutex<()>,
    log_path: PathBuf,
    entry_point: EntryPoint,
    app_version: String,
    platform: &'static str,
}

impl LoggingService {
    /// Create a new logging service
    ///
    /// Creates `logs.jsonl` in the data directory if it doesn't exist.
    pub fn new(
        data_dir: &Path,
        entry_point: EntryPoint,
        app_version: impl Into<String>,
    ) -> Result<Self> {
        let log_path = data_dir.join(LOG_FILE);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

        Ok(Self {
            lock: Mutex::new(()),
            log_path,
            entry_point,
            app_version: app_version.into(),
            platform: detect_platform(),
        })
    }

    /// Log an event
    ///
    /// The entry point, app version, and platform are added from the
    /// service configuration.
    pub fn log(&self, event: LogEvent) -> Result<()> {
        let entry = LogEntry {
            id: generate_id(),
            timestamp: now_ms(),
            entry_point: self.entry_point.as_str().to_string(),
            app_version: self.app_version.clone(),
            platform: self.platform.to_string(),
            event: event.event,
            command: event.command,
            error_message: event.error_message,
            error_details: event.error_details,
        };
        let line = serde_json::to_string(&entry)?;

        let _guard = self.lock.lock().map_err(|e| anyhow!("Lock poisoned: {}", e))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{}", line)?;

        Ok(())
    }

    /// Log a simple event with just a name
    pub fn log_event(&self, event: &str) -> Result<()> {
        self.log(LogEvent::new(event))
    }

    /// Log a CLI command execution
    pub fn log_command(&self, command: &str) -> Result<()> {
        self.log(LogEvent::new("command_executed").with_command(command))
    }

    /// Log an error
    pub fn log_error(&self, event: &str, message: &str, details: Option<&str>) -> Result<()> {
        let mut log_event = LogEvent::new(event).with_error(message);
        if let Some(d) = details {
            log_event = log_event.with_error_details(d);
        }
        self.log(log_event)
    }

    /// Most recent entries first, up to `limit`
    pub fn get_recent(&self, limit: usize) -> Result<Vec<LogEntry>> {
        let entries = self.read_entries()?;
        Ok(entries.into_iter().rev().take(limit).collect())
    }

    /// Most recent entries with an error message, up to `limit`
    pub fn get_errors(&self, limit: usize) -> Result<Vec<LogEntry>> {
        let entries = self.read_entries()?;
        Ok(entries
            .into_iter()
            .rev()
            .filter(|e| e.error_message.is_some())
            .take(limit)
            .collect())
    }

    /// Get the total number of log entries
    pub fn count(&self) -> Result<u64> {
        Ok(self.read_entries()?.len() as u64)
    }

    /// Delete logs older than the specified timestamp (unix ms)
    pub fn delete_before(&self, timestamp_ms: i64) -> Result<u64> {
        let _guard = self.lock.lock().map_err(|e| anyhow!("Lock poisoned: {}", e))?;

        let entries = read_log_file(&self.log_path)?;
        let total = entries.len();
        let kept: Vec<LogEntry> = entries
            .into_iter()
            .filter(|e| e.timestamp >= timestamp_ms)
            .collect();
        let deleted = total - kept.len();

        let mut content = String::new();
        for entry in &kept {
            content.push_str(&serde_json::to_string(entry)?);
            content.push('\n');
        }
        std::fs::write(&self.log_path, content)?;

        Ok(deleted as u64)
    }

    /// Get the path to the log file
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    fn read_entries(&self) -> Result<Vec<LogEntry>> {
        let _guard = self.lock.lock().map_err(|e| anyhow!("Lock poisoned: {}", e))?;
        read_log_file(&self.log_path)
    }
}

fn read_log_file(path: &Path) -> Result<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(entry) = serde_json::from_str::<LogEntry>(&line) {
            entries.push(entry);
        }
    }

    Ok(entries)
}
