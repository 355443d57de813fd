//! Config command - view and change stored settings

use anyhow::{bail, Result};
use clap::Subcommand;
use colored::Colorize;
use courseline_core::config::Config;
use courseline_core::LogEvent;
use serde_json::json;

use super::{get_courseline_dir, get_logger, log_event};
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change settings in settings.json
    Set {
        /// Courses per catalog page
        #[arg(long)]
        page_size: Option<usize>,
        /// Refuse to reseed unusable data instead of replacing it
        #[arg(long)]
        strict_load: Option<bool>,
    },
}

pub fn run(command: ConfigCommands) -> Result<()> {
    let dir = get_courseline_dir()?;
    let mut config = Config::load(&dir)?;

    match command {
        ConfigCommands::Show { json } => {
            if json {
                return output::print_json(&json!({
                    "pageSize": config.page_size,
                    "strictLoad": config.strict_load,
                }));
            }
            println!("  Page size:    {}", config.page_size);
            println!("  Strict load:  {}", config.strict_load);
            println!(
                "{}",
                format!("  File: {}", dir.join("settings.json").display()).dimmed()
            );
        }
        ConfigCommands::Set {
            page_size,
            strict_load,
        } => {
            if page_size.is_none() && strict_load.is_none() {
                bail!("Nothing to change; pass --page-size or --strict-load");
            }
            if let Some(size) = page_size {
                if size == 0 {
                    bail!("Page size must be at least 1");
                }
                config.page_size = size;
            }
            if let Some(strict) = strict_load {
                config.strict_load = strict;
            }

            config.save(&dir)?;
            log_event(
                &get_logger(),
                LogEvent::new("config_changed").with_command("config"),
            );
            println!("{} Settings saved", "✓".green());
        }
    }

    Ok(())
}
