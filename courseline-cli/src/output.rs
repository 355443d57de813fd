//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use courseline_core::{Course, Enrollment, EnrollmentStatus};
use serde::Serialize;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// "Free" or "Paid"
pub fn price_label(course: &Course) -> &'static str {
    if course.is_free {
        "Free"
    } else {
        "Paid"
    }
}

/// Text progress bar, e.g. `[#####     ] 50%`
pub fn progress_bar(progress: u8) -> String {
    const WIDTH: usize = 20;
    let filled = usize::from(progress.min(100)) * WIDTH / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        " ".repeat(WIDTH - filled),
        progress
    )
}

/// Colored status word for an enrollment
pub fn status_label(enrollment: &Enrollment) -> String {
    match enrollment.status {
        EnrollmentStatus::Completed => "completed".green().to_string(),
        EnrollmentStatus::Enrolled => "in progress".yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), format!("[{}]   0%", " ".repeat(20)));
        assert_eq!(progress_bar(50), format!("[{}{}]  50%", "#".repeat(10), " ".repeat(10)));
        assert_eq!(progress_bar(100), format!("[{}] 100%", "#".repeat(20)));
    }
}
