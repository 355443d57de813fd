//! Configuration management
//!
//! Settings live in `settings.json` in the data directory:
//! ```json
//! {
//!   "pageSize": 9,
//!   "strictLoad": false
//! }
//! ```
//! Keys this crate does not manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::LoadPolicy;

const SETTINGS_FILE: &str = "settings.json";

/// Default number of courses per catalog page
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_size: Option<usize>,
    #[serde(default)]
    strict_load: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Courseline configuration (simplified view of settings)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub page_size: usize,
    pub strict_load: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            strict_load: false,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" | "1" | "yes" | "TRUE" | "YES" => Some(true),
        "false" | "0" | "no" | "FALSE" | "NO" => Some(false),
        _ => None,
    }
}

fn read_settings(path: &Path) -> Result<SettingsFile> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable settings.json");
        SettingsFile::default()
    }))
}

impl Config {
    /// Load config from the data directory
    ///
    /// Environment variables take precedence over the settings file:
    /// - `COURSELINE_PAGE_SIZE` (positive integer)
    /// - `COURSELINE_STRICT_LOAD` (true/false)
    pub fn load(dir: &Path) -> Result<Self> {
        let raw = read_settings(&dir.join(SETTINGS_FILE))?;

        let page_size = std::env::var("COURSELINE_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .or(raw.page_size)
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let strict_load = std::env::var("COURSELINE_STRICT_LOAD")
            .ok()
            .as_deref()
            .and_then(parse_flag)
            .unwrap_or(raw.strict_load);

        Ok(Self {
            page_size,
            strict_load,
        })
    }

    /// Save config to the data directory
    /// Preserves other settings that this crate doesn't manage
    pub fn save(&self, dir: &Path) -> Result<()> {
        let settings_path = dir.join(SETTINGS_FILE);
        let mut settings = read_settings(&settings_path)?;

        settings.page_size = Some(self.page_size);
        settings.strict_load = self.strict_load;

        std::fs::create_dir_all(dir)?;
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    pub fn load_policy(&self) -> LoadPolicy {
        if self.strict_load {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Reseed
        }
    }
}
