//! Reset command - replace all stored data with the seed

use anyhow::Result;
use colored::Colorize;
use courseline_core::LogEvent;
use dialoguer::Confirm;

use super::{get_context, get_logger, log_event};

pub fn run(force: bool) -> Result<()> {
    let ctx = get_context()?;

    if !force {
        println!(
            "\n{}",
            "This will delete all enrollments and restore the sample catalog and profile."
                .yellow()
        );
        println!("{}\n", "This cannot be undone.".dimmed());

        if !Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()?
        {
            println!("{}\n", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let data = ctx.store.reset()?;
    log_event(&get_logger(), LogEvent::new("data_reset").with_command("reset"));

    println!(
        "\n{} Restored {} courses and the default profile\n",
        "✓".green(),
        data.courses.len()
    );

    Ok(())
}
