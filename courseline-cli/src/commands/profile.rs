//! Profile command - show and edit the local profile

use std::process::exit;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use courseline_core::domain::{PreferencesUpdate, ProfileUpdate};
use courseline_core::{LogEvent, OperationResult, User};

use super::{get_context, get_logger, log_event};
use crate::output;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the profile and preferences
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update name, email or avatar
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Avatar URL (pass an empty string to remove it)
        #[arg(long)]
        avatar: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update learning preferences
    Prefs {
        /// Comma-separated preferred categories
        #[arg(long, value_delimiter = ',')]
        categories: Option<Vec<String>>,
        #[arg(long)]
        notifications: Option<bool>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_user(user: &User) {
    println!("{}", user.name.bold());
    println!("  Email:         {}", user.email);
    if let Some(avatar) = &user.avatar {
        println!("  Avatar:        {}", avatar);
    }
    let categories = if user.preferences.preferred_categories.is_empty() {
        "none".dimmed().to_string()
    } else {
        user.preferences.preferred_categories.join(", ")
    };
    println!("  Categories:    {}", categories);
    println!(
        "  Notifications: {}",
        if user.preferences.notifications { "on" } else { "off" }
    );
}

fn finish(
    result: courseline_core::domain::result::Result<User>,
    event: &str,
    json: bool,
) -> Result<()> {
    let logger = get_logger();
    match &result {
        Ok(_) => log_event(&logger, LogEvent::new(format!("{}d", event)).with_command("profile")),
        Err(e) => log_event(
            &logger,
            LogEvent::new(format!("{}_failed", event))
                .with_command("profile")
                .with_error(e.to_string()),
        ),
    }

    if json {
        let envelope: OperationResult<User> = result.into();
        output::print_json(&envelope)?;
        if !envelope.success {
            exit(1);
        }
        return Ok(());
    }

    let user = result?;
    output::success("Profile saved.");
    print_user(&user);
    Ok(())
}

pub fn run(command: ProfileCommands) -> Result<()> {
    let ctx = get_context()?;

    match command {
        ProfileCommands::Show { json } => {
            let user = ctx.profile_service.get_user()?;
            if json {
                return output::print_json(&user);
            }
            print_user(&user);
            Ok(())
        }
        ProfileCommands::Update {
            name,
            email,
            avatar,
            json,
        } => {
            let update = ProfileUpdate {
                name,
                email,
                avatar,
            };
            finish(
                ctx.profile_service.update_user_profile(&update),
                "profile_update",
                json,
            )
        }
        ProfileCommands::Prefs {
            categories,
            notifications,
            json,
        } => {
            let update = PreferencesUpdate {
                preferred_categories: categories,
                notifications,
            };
            finish(
                ctx.profile_service.update_user_preferences(&update),
                "preferences_update",
                json,
            )
        }
    }
}
