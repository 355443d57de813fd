//! History command - completed courses with totals

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output::{self, create_table};

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let history = ctx.history_service.history()?;

    if json {
        return output::print_json(&history);
    }

    if history.entries.is_empty() {
        println!("No completed courses yet.");
        return Ok(());
    }

    println!("{}", "Learning History".bold());
    println!();

    let mut table = create_table();
    table.set_header(vec!["Title", "Category", "Duration", "Completed"]);
    for entry in &history.entries {
        let completed = entry
            .enrollment
            .completed_at
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        table.add_row(vec![
            entry.course.title.clone(),
            entry.course.category.clone(),
            entry.course.duration_display(),
            completed,
        ]);
    }
    println!("{}", table);
    println!();
    println!(
        "Completed {} course(s), {} hours of learning",
        history.summary.total_courses.to_string().green(),
        history.summary.total_hours.to_string().green(),
    );

    Ok(())
}
