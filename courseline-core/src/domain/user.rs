//! User domain model

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The only user id in the single-user model
pub const CURRENT_USER_ID: &str = "current-user";

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub preferred_categories: Vec<String>,
    pub notifications: bool,
}

impl Preferences {
    /// Merge an update; unset fields keep their current value
    pub fn merge(&mut self, update: &PreferencesUpdate) {
        if let Some(categories) = &update.preferred_categories {
            self.preferred_categories = normalize_categories(categories);
        }
        if let Some(notifications) = update.notifications {
            self.notifications = notifications;
        }
    }
}

/// The local user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub preferences: Preferences,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: CURRENT_USER_ID.to_string(),
            name: name.into(),
            email: email.into(),
            avatar: None,
            preferences: Preferences::default(),
        }
    }

    /// Apply a profile update. The user id never changes.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(name) = &update.name {
            self.name = name.trim().to_string();
        }
        if let Some(email) = &update.email {
            self.email = email.trim().to_string();
        }
        if let Some(avatar) = &update.avatar {
            let avatar = avatar.trim();
            self.avatar = (!avatar.is_empty()).then(|| avatar.to_string());
        }
    }

    /// Validate profile fields
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if self.email.trim().is_empty() {
            return Err("Email is required");
        }
        if !is_valid_email(&self.email) {
            return Err("Enter a valid email");
        }
        Ok(())
    }
}

/// Partial profile update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// An empty string clears the avatar
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Partial preferences update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    #[serde(default)]
    pub preferred_categories: Option<Vec<String>>,
    #[serde(default)]
    pub notifications: Option<bool>,
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email.trim())
}

/// Trim, drop empties and deduplicate, keeping first-seen order
pub fn normalize_categories(categories: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut result = Vec::new();

    for category in categories {
        let trimmed = category.trim().to_string();
        if !trimmed.is_empty() && seen.insert(trimmed.clone()) {
            result.push(trimmed);
        }
    }

    result
}
