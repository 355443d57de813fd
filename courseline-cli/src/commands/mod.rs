//! CLI command implementations

pub mod config;
pub mod course;
pub mod courses;
pub mod doctor;
pub mod enroll;
pub mod history;
pub mod learning;
pub mod logs;
pub mod profile;
pub mod progress;
pub mod reset;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use courseline_core::{CourselineContext, EntryPoint, LogEvent, LoggingService};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let dir = get_courseline_dir().ok()?;
    LoggingService::new(&dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the courseline directory from environment or default
pub fn get_courseline_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("COURSELINE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".courseline"))
        .ok_or_else(|| anyhow!("Could not find home directory; set COURSELINE_DIR"))
}

/// Get or create courseline context
pub fn get_context() -> Result<CourselineContext> {
    let dir = get_courseline_dir()?;

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create courseline directory: {:?}", dir))?;

    CourselineContext::new(&dir).context("Failed to initialize courseline context")
}
