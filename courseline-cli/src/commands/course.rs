//! Course command - details, prerequisites and enrollment for one course

use anyhow::{bail, Result};
use colored::Colorize;
use serde_json::json;

use super::get_context;
use crate::output::{self, price_label, progress_bar, status_label};

pub fn run(id: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;

    let Some(course) = ctx.catalog_service.get_course(id)? else {
        bail!("Course '{}' not found", id);
    };
    let enrollment = ctx.enrollment_service.get_enrollment(id)?;
    let prerequisites = ctx.enrollment_service.prerequisite_status(id)?;

    if json {
        return output::print_json(&json!({
            "course": course,
            "prerequisites": prerequisites,
            "enrollment": enrollment,
        }));
    }

    println!("{}", course.title.bold());
    println!("{}", format!("by {}", course.instructor).dimmed());
    println!();
    println!("{}", course.description);
    println!();
    println!("  Category:  {}", course.category);
    println!("  Level:     {}", course.level);
    println!("  Duration:  {}", course.duration_display());
    println!("  Price:     {}", price_label(&course));

    if let Some(status) = prerequisites.filter(|_| course.has_prerequisites()) {
        println!();
        println!("{}", "Prerequisites".bold());
        for entry in &status.prerequisites {
            let mark = if entry.completed {
                "✓".green()
            } else {
                "✗".red()
            };
            let title = entry.title.as_deref().unwrap_or("Unknown Course");
            println!("  {} {}", mark, title);
        }
        if !status.satisfied && enrollment.is_none() {
            output::warning("Complete the prerequisites above before enrolling.");
        }
    }

    println!();
    match enrollment {
        Some(e) => {
            println!("Enrollment: {}", status_label(&e));
            println!("  {}", progress_bar(e.progress));
        }
        None => println!("{}", format!("Not enrolled. Run `cl enroll {}` to start.", id).dimmed()),
    }

    Ok(())
}
