//! Courseline CLI - a course catalog and learning tracker in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use courseline_core::LogEvent;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::courses::CoursesArgs;
use commands::{
    config, course, courses, doctor, enroll, history, learning, logs, profile, progress, reset,
};

/// Courseline - browse courses and track your learning
#[derive(Parser)]
#[command(name = "cl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the course catalog
    Courses {
        /// Page number (starting at 1)
        #[arg(long, default_value = "1")]
        page: usize,
        /// Courses per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
        /// Search titles and descriptions
        #[arg(long, short)]
        search: Option<String>,
        /// Only show one category ("all" for every category)
        #[arg(long)]
        category: Option<String>,
        /// Price filter: all, free or paid
        #[arg(long, default_value = "all")]
        price: String,
        /// Sort by title or duration
        #[arg(long, default_value = "title")]
        sort: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for one course
    Course {
        /// Course ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Enroll in a course
    Enroll {
        /// Course ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record progress on a course (0-100)
    Progress {
        /// Course ID
        id: String,
        /// Progress percentage; values outside 0-100 are clamped
        #[arg(allow_negative_numbers = true)]
        value: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show courses you are enrolled in
    Learning {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show completed courses
    History {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View or edit your profile
    Profile {
        #[command(subcommand)]
        command: profile::ProfileCommands,
    },

    /// Run data health checks
    Doctor {
        /// Show verbose output
        #[arg(long, short)]
        verbose: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Restore the sample catalog and default profile
    Reset {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },

    /// View or change settings
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Courses { .. } => "courses",
            Commands::Course { .. } => "course",
            Commands::Enroll { .. } => "enroll",
            Commands::Progress { .. } => "progress",
            Commands::Learning { .. } => "learning",
            Commands::History { .. } => "history",
            Commands::Profile { .. } => "profile",
            Commands::Doctor { .. } => "doctor",
            Commands::Reset { .. } => "reset",
            Commands::Logs { .. } => "logs",
            Commands::Config { .. } => "config",
        }
    }
}

/// `RUST_LOG` directives when present and valid, otherwise WARN
fn diagnostics_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(diagnostics_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();
    let name = cli.command.name();

    // Logging failures never change the outcome of a command
    let logger = commands::get_logger();
    if let Some(l) = &logger {
        let _ = l.log_command(name);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::log_event(
                &logger,
                LogEvent::new("command_failed")
                    .with_command(name)
                    .with_error(e.to_string()),
            );
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Courses {
            page,
            page_size,
            search,
            category,
            price,
            sort,
            json,
        } => courses::run(CoursesArgs {
            page,
            page_size,
            search,
            category,
            price,
            sort,
            json,
        }),
        Commands::Course { id, json } => course::run(&id, json),
        Commands::Enroll { id, json } => enroll::run(&id, json),
        Commands::Progress { id, value, json } => progress::run(&id, value, json),
        Commands::Learning { json } => learning::run(json),
        Commands::History { json } => history::run(json),
        Commands::Profile { command } => profile::run(command),
        Commands::Doctor { verbose, json } => doctor::run(verbose, json),
        Commands::Reset { force } => reset::run(force),
        Commands::Logs { command } => logs::run(command),
        Commands::Config { command } => config::run(command),
    }
}
