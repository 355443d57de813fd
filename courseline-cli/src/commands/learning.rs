//! Learning command - courses the user is enrolled in

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output::{self, create_table, progress_bar, status_label};

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let entries = ctx.history_service.my_learning()?;

    if json {
        return output::print_json(&entries);
    }

    if entries.is_empty() {
        println!("You are not enrolled in any courses yet.");
        println!("{}", "Browse the catalog with `cl courses`.".dimmed());
        return Ok(());
    }

    println!("{}", "My Learning".bold());
    println!();

    let mut table = create_table();
    table.set_header(vec!["ID", "Title", "Status", "Progress", "Enrolled"]);
    for entry in &entries {
        table.add_row(vec![
            entry.course.id.clone(),
            entry.course.title.clone(),
            status_label(&entry.enrollment),
            progress_bar(entry.enrollment.progress),
            entry.enrollment.enrolled_at.format("%Y-%m-%d").to_string(),
        ]);
    }
    println!("{}", table);

    Ok(())
}
