//! Progress command - record progress on an enrolled course

use std::process::exit;

use anyhow::{bail, Result};
use colored::Colorize;
use courseline_core::domain::MAX_PROGRESS;
use courseline_core::{Error, LogEvent, OperationResult};
use serde_json::json;

use super::{get_context, get_logger, log_event};
use crate::output::{self, progress_bar};

pub fn run(id: &str, value: i64, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let was_completed = ctx
        .enrollment_service
        .get_enrollment(id)?
        .is_some_and(|e| e.is_completed());

    let result = ctx
        .enrollment_service
        .update_progress(id, value)
        .and_then(|updated| {
            updated.ok_or_else(|| Error::not_found(format!("enrollment for course '{}'", id)))
        });

    if let Ok(e) = &result {
        if e.is_completed() && !was_completed {
            log_event(
                &logger,
                LogEvent::new("course_completed").with_course(id).with_command("progress"),
            );
        }
    }

    if json {
        let envelope = OperationResult::from(result)
            .with_context("courseId", json!(id))
            .with_context("requested", json!(value));
        output::print_json(&envelope)?;
        if !envelope.success {
            exit(1);
        }
        return Ok(());
    }

    let enrollment = match result {
        Ok(e) => e,
        Err(Error::NotFound(_)) => bail!("You are not enrolled in course '{}'", id),
        Err(e) => return Err(e.into()),
    };

    if was_completed {
        output::info("This course is already completed; progress was not changed.");
    } else if enrollment.is_completed() {
        println!("{} Course completed!", "✓".green());
    } else if value < 0 || value > i64::from(MAX_PROGRESS) {
        output::warning(&format!("Progress clamped to {}%", enrollment.progress));
    }
    println!("  {}", progress_bar(enrollment.progress));

    Ok(())
}
