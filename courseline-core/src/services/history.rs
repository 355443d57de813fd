//! History service - current learning and completed courses

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::{Course, Enrollment, StoreData, CURRENT_USER_ID};
use crate::store::Store;

/// An enrollment together with its course
#[derive(Debug, Clone, Serialize)]
pub struct LearningEntry {
    pub enrollment: Enrollment,
    pub course: Course,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistorySummary {
    pub total_courses: usize,
    /// Sum of course durations, in hours
    pub total_hours: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningHistory {
    pub summary: HistorySummary,
    /// Newest completion first
    pub entries: Vec<LearningEntry>,
}

/// Enrollments of the current user joined with their course.
/// Enrollments whose course is missing from the catalog are left out.
fn joined(data: &StoreData) -> Vec<LearningEntry> {
    data.enrollments_for(CURRENT_USER_ID)
        .filter_map(|enrollment| {
            data.course(&enrollment.course_id).map(|course| LearningEntry {
                enrollment: enrollment.clone(),
                course: course.clone(),
            })
        })
        .collect()
}

pub struct HistoryService {
    store: Arc<Store>,
}

impl HistoryService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Everything the user is or was enrolled in, in enrollment order
    pub fn my_learning(&self) -> Result<Vec<LearningEntry>> {
        Ok(joined(&self.store.load()?))
    }

    /// Completed courses and totals
    pub fn history(&self) -> Result<LearningHistory> {
        let data = self.store.load()?;

        let mut entries: Vec<LearningEntry> = joined(&data)
            .into_iter()
            .filter(|entry| entry.enrollment.completed_at.is_some())
            .collect();
        entries.sort_by(|a, b| b.enrollment.completed_at.cmp(&a.enrollment.completed_at));

        let summary = HistorySummary {
            total_courses: entries.len(),
            total_hours: entries.iter().map(|e| e.course.duration).sum(),
        };

        Ok(LearningHistory { summary, entries })
    }
}
