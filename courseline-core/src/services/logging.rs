//! Logging service - structured event log
//!
//! Provides a privacy-safe event log stored as JSON lines in `logs.jsonl`
//! in the data directory. No profile data (names, emails, preferences) is
//! ever logged; course ids are the only user-related context recorded.
//!
//! Diagnostics meant for developers go through `tracing` instead.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use chrono::Utc;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::warn;

const LOG_FILE: &str = "logs.jsonl";
/// Sidecar lock; the log file itself is replaced by `delete_before`
const LOCK_FILE: &str = ".logs.lock";

/// Counter for generating unique IDs within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique ID based on timestamp + counter
fn generate_id() -> u64 {
    let timestamp = now_ms().max(0) as u64;

    // Use lower 48 bits for timestamp (good for ~8900 years)
    // Use upper 16 bits for counter (65536 unique IDs per millisecond)
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    (timestamp << 16) | counter
}

/// Get current unix timestamp in milliseconds
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Detect the current platform
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
    pub course_id: Option<String>,
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
            course_id: None,
            command: None,
            error_message: None,
            error_details: None,
        }
    }

    /// Set the course the event is about
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
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

    /// Set error details (additional context)
    pub fn with_error_details(mut self, details: impl Into<String>) -> Self {
        self.error_details = Some(details.into());
        self
    }
}

/// A log entry as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: i64,
    pub entry_point: String,
    pub app_version: String,
    pub platform: String,
    pub event: String,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub error_details: Option<String>,
}

/// Service for structured event logging
pub struct LoggingService {
    // Serializes access from this process; the file lock covers other processes
    guard: Mutex<()>,
    log_path: PathBuf,
    lock_path: PathBuf,
    entry_point: EntryPoint,
    app_version: String,
    platform: &'static str,
}

impl LoggingService {
    /// Create a new logging service writing to `logs.jsonl` in `data_dir`
    pub fn new(
        data_dir: &Path,
        entry_point: EntryPoint,
        app_version: impl Into<String>,
    ) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        let log_path = data_dir.join(LOG_FILE);
        // Create the file up front so `path()` always points at something
        OpenOptions::new().create(true).append(true).open(&log_path)?;

        Ok(Self {
            guard: Mutex::new(()),
            log_path,
            lock_path: data_dir.join(LOCK_FILE),
            entry_point,
            app_version: app_version.into(),
            platform: detect_platform(),
        })
    }

    /// Log an event
    ///
    /// The entry point, app version and platform are filled in from the
    /// service configuration.
    pub fn log(&self, event: LogEvent) -> Result<()> {
        let entry = LogEntry {
            id: generate_id(),
            timestamp: now_ms(),
            entry_point: self.entry_point.as_str().to_string(),
            app_version: self.app_version.clone(),
            platform: self.platform.to_string(),
            event: event.event,
            course_id: event.course_id,
            command: event.command,
            error_message: event.error_message,
            error_details: event.error_details,
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let _guard = self.guard.lock().map_err(|e| anyhow!("Lock poisoned: {}", e))?;
        let lock = self.open_lock()?;
        FileExt::lock_exclusive(&lock)?;
        let written = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.log_path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        let _ = FileExt::unlock(&lock);
        written?;

        Ok(())
    }

    fn open_lock(&self) -> Result<File> {
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&self.lock_path)?;
        Ok(file)
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

    /// Every entry, oldest first
    fn read_all(&self) -> Result<Vec<LogEntry>> {
        let _guard = self.guard.lock().map_err(|e| anyhow!("Lock poisoned: {}", e))?;
        let lock = self.open_lock()?;
        FileExt::lock_shared(&lock)?;
        let entries = self.read_entries();
        let _ = FileExt::unlock(&lock);
        entries
    }

    /// Parse the log file. Unreadable lines are skipped.
    /// Callers hold the sidecar lock.
    fn read_entries(&self) -> Result<Vec<LogEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(&file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<LogEntry>(&line) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(line = index + 1, error = %e, "skipping unreadable log line"),
            }
        }

        Ok(entries)
    }

    fn newest_first(mut entries: Vec<LogEntry>, limit: usize) -> Vec<LogEntry> {
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        entries.truncate(limit);
        entries
    }

    /// Query recent log entries
    ///
    /// Returns the most recent entries, up to the specified limit.
    pub fn get_recent(&self, limit: usize) -> Result<Vec<LogEntry>> {
        Ok(Self::newest_first(self.read_all()?, limit))
    }

    /// Query log entries with errors
    pub fn get_errors(&self, limit: usize) -> Result<Vec<LogEntry>> {
        let errors = self
            .read_all()?
            .into_iter()
            .filter(|e| e.error_message.is_some())
            .collect();
        Ok(Self::newest_first(errors, limit))
    }

    /// Get the total number of log entries
    pub fn count(&self) -> Result<u64> {
        Ok(self.read_all()?.len() as u64)
    }

    /// Delete logs older than the specified timestamp (unix ms)
    ///
    /// The read and the rewrite happen under one exclusive lock, so appends
    /// from other threads or processes are never dropped.
    pub fn delete_before(&self, timestamp_ms: i64) -> Result<u64> {
        let _guard = self.guard.lock().map_err(|e| anyhow!("Lock poisoned: {}", e))?;
        let lock = self.open_lock()?;
        FileExt::lock_exclusive(&lock)?;
        let result = self.rewrite_without_older(timestamp_ms);
        let _ = FileExt::unlock(&lock);
        result
    }

    fn rewrite_without_older(&self, timestamp_ms: i64) -> Result<u64> {
        let (kept, dropped): (Vec<LogEntry>, Vec<LogEntry>) = self
            .read_entries()?
            .into_iter()
            .partition(|e| e.timestamp >= timestamp_ms);

        let mut content = String::new();
        for entry in &kept {
            content.push_str(&serde_json::to_string(entry)?);
            content.push('\n');
        }

        let dir = self
            .log_path
            .parent()
            .ok_or_else(|| anyhow!("log file has no parent directory"))?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&self.log_path).map_err(|e| e.error)?;

        Ok(dropped.len() as u64)
    }

    /// Get the path to the log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_logging_service_creation() {
        let dir = tempdir().unwrap();
        let service = LoggingService::new(dir.path(), EntryPoint::Cli, "1.0.0").unwrap();

        assert!(service.path().exists());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_log_event() {
        let dir = tempdir().unwrap();
        let service = LoggingService::new(dir.path(), EntryPoint::Cli, "1.0.0").unwrap();

        service.log_event("test_event").unwrap();

        let entries = service.get_recent(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, "test_event");
        assert_eq!(entries[0].entry_point, "cli");
        assert_eq!(entries[0].app_version, "1.0.0");
    }

    #[test]
    fn test_log_with_context() {
        let dir = tempdir().unwrap();
        let service = LoggingService::new(dir.path(), EntryPoint::Library, "2.0.0").unwrap();

        service
            .log(
                LogEvent::new("course_completed")
                    .with_course("2")
                    .with_command("progress"),
            )
            .unwrap();

        let entries = service.get_recent(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, "course_completed");
        assert_eq!(entries[0].course_id, Some("2".to_string()));
        assert_eq!(entries[0].command, Some("progress".to_string()));
        assert_eq!(entries[0].entry_point, "library");
    }

    #[test]
    fn test_log_error() {
        let dir = tempdir().unwrap();
        let service = LoggingService::new(dir.path(), EntryPoint::Cli, "1.0.0").unwrap();

        service.log_event("fine").unwrap();
        service
            .log_error("save_failed", "quota exceeded", Some("needed 20 bytes"))
            .unwrap();

        let errors = service.get_errors(10).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].event, "save_failed");
        assert_eq!(errors[0].error_message, Some("quota exceeded".to_string()));
        assert_eq!(errors[0].error_details, Some("needed 20 bytes".to_string()));
    }

    #[test]
    fn test_recent_is_newest_first_and_limited() {
        let dir = tempdir().unwrap();
        let service = LoggingService::new(dir.path(), EntryPoint::Cli, "1.0.0").unwrap();

        for name in ["first", "second", "third"] {
            service.log_event(name).unwrap();
        }

        let entries = service.get_recent(2).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event, "third");
        assert_eq!(entries[1].event, "second");
    }

    #[test]
    fn test_count_and_delete() {
        let dir = tempdir().unwrap();
        let service = LoggingService::new(dir.path(), EntryPoint::Cli, "1.0.0").unwrap();

        service.log_event("event1").unwrap();
        service.log_event("event2").unwrap();
        service.log_event("event3").unwrap();

        assert_eq!(service.count().unwrap(), 3);

        assert_eq!(service.delete_before(0).unwrap(), 0);
        assert_eq!(service.count().unwrap(), 3);

        // Delete all logs (using future timestamp)
        let deleted = service.delete_before(now_ms() + 1000).unwrap();
        assert_eq!(deleted, 3);
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_keeps_concurrent_appends() {
        let dir = tempdir().unwrap();
        // Two services on one directory stand in for two processes
        let writer = LoggingService::new(dir.path(), EntryPoint::Cli, "1.0.0").unwrap();
        let cleaner = LoggingService::new(dir.path(), EntryPoint::Cli, "1.0.0").unwrap();

        std::thread::scope(|s| {
            s.spawn(|| {
                for i in 0..200 {
                    writer.log_event(&format!("event_{}", i)).unwrap();
                }
            });
            s.spawn(|| {
                for _ in 0..50 {
                    assert_eq!(cleaner.delete_before(0).unwrap(), 0);
                }
            });
        });

        assert_eq!(writer.count().unwrap(), 200);
    }

    #[test]
    fn test_skips_corrupt_lines() {
        let dir = tempdir().unwrap();
        let service = LoggingService::new(dir.path(), EntryPoint::Cli, "1.0.0").unwrap();
        service.log_event("good").unwrap();

        let mut file = OpenOptions::new().append(true).open(service.path()).unwrap();
        writeln!(file, "this is not json").unwrap();

        service.log_event("also_good").unwrap();
        assert_eq!(service.count().unwrap(), 2);
    }
}
