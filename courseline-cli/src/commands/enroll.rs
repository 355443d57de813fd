//! Enroll command - enroll in a course after checking prerequisites

use std::process::exit;

use anyhow::Result;
use colored::Colorize;
use courseline_core::{LogEvent, OperationResult};
use serde_json::json;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(id: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let result = ctx.enrollment_service.enroll_checked(id);

    match &result {
        Ok(_) => log_event(
            &logger,
            LogEvent::new("course_enrolled").with_course(id).with_command("enroll"),
        ),
        Err(e) => log_event(
            &logger,
            LogEvent::new("enroll_failed")
                .with_course(id)
                .with_command("enroll")
                .with_error(e.to_string()),
        ),
    }

    if json {
        let envelope = OperationResult::from(result).with_context("courseId", json!(id));
        output::print_json(&envelope)?;
        if !envelope.success {
            exit(1);
        }
        return Ok(());
    }

    let enrollment = result?;
    let title = ctx
        .catalog_service
        .get_course(&enrollment.course_id)?
        .map(|c| c.title)
        .unwrap_or_else(|| enrollment.course_id.clone());
    println!("{} Enrolled in {}", "✓".green(), title.bold());

    Ok(())
}
