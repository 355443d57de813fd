//! Course domain model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty level of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Every accepted level, in ascending difficulty
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    /// Parse the on-disk representation of a level
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog course. Courses are reference data: seeded once, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Length in hours
    pub duration: f64,
    pub is_free: bool,
    pub level: Level,
    pub instructor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Ids of courses that must be completed first.
    /// Ids are not checked against the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Vec<String>>,
}

impl Course {
    /// Prerequisite ids, empty when the course has none
    pub fn prerequisite_ids(&self) -> &[String] {
        self.prerequisites.as_deref().unwrap_or(&[])
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisite_ids().is_empty()
    }

    /// Case-insensitive match against title and description.
    /// An empty query matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    /// Format duration for human display
    pub fn duration_display(&self) -> String {
        if self.duration.fract() == 0.0 {
            format!("{} hours", self.duration as i64)
        } else {
            format!("{:.1} hours", self.duration)
        }
    }
}
