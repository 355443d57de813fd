//! Enrollment service - enroll, track progress, check prerequisites
//!
//! All enrollments belong to the single current user.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::{Course, Enrollment, StoreData, CURRENT_USER_ID};
use crate::store::Store;

pub const ALREADY_ENROLLED: &str = "You are already enrolled in this course";
pub const PREREQUISITES_UNMET: &str = "You must complete all prerequisite courses first";

/// One prerequisite of a course and whether the user has finished it
#[derive(Debug, Clone, Serialize)]
pub struct PrerequisiteEntry {
    pub course_id: String,
    /// `None` when the id is not in the catalog
    pub title: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrerequisiteStatus {
    pub course_id: String,
    pub satisfied: bool,
    pub prerequisites: Vec<PrerequisiteEntry>,
}

/// Whether every prerequisite of `course` is completed by the current user.
/// Courses without prerequisites are always satisfied.
pub fn prerequisites_met(course: &Course, data: &StoreData) -> bool {
    course
        .prerequisite_ids()
        .iter()
        .all(|id| data.has_completed(CURRENT_USER_ID, id))
}

fn prerequisite_status(course: &Course, data: &StoreData) -> PrerequisiteStatus {
    let prerequisites = course
        .prerequisite_ids()
        .iter()
        .map(|id| PrerequisiteEntry {
            course_id: id.clone(),
            title: data.course(id).map(|c| c.title.clone()),
            completed: data.has_completed(CURRENT_USER_ID, id),
        })
        .collect();

    PrerequisiteStatus {
        course_id: course.id.clone(),
        satisfied: prerequisites_met(course, data),
        prerequisites,
    }
}

/// Enrollment service for the enrollment lifecycle
pub struct EnrollmentService {
    store: Arc<Store>,
}

impl EnrollmentService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// All enrollments of the current user, oldest first
    pub fn list_enrollments(&self) -> Result<Vec<Enrollment>> {
        let data = self.store.load()?;
        Ok(data.enrollments_for(CURRENT_USER_ID).cloned().collect())
    }

    pub fn get_enrollment(&self, course_id: &str) -> Result<Option<Enrollment>> {
        let data = self.store.load()?;
        Ok(data.enrollment(CURRENT_USER_ID, course_id).cloned())
    }

    /// Enroll the current user in a course.
    ///
    /// Idempotent: an existing enrollment is returned unchanged and nothing is
    /// written. Neither the course nor its prerequisites are checked here.
    pub fn enroll(&self, course_id: &str) -> Result<Enrollment> {
        let mut data = self.store.load()?;

        if let Some(existing) = data.enrollment(CURRENT_USER_ID, course_id) {
            debug!(course_id, "already enrolled, nothing to do");
            return Ok(existing.clone());
        }

        let enrollment = Enrollment::new(CURRENT_USER_ID, course_id, Utc::now());
        data.enrollments.push(enrollment.clone());
        self.store.save(&data)?;
        Ok(enrollment)
    }

    /// Enroll after the checks a user-facing caller is expected to make:
    /// the course exists, the user is not enrolled yet, and every
    /// prerequisite is completed.
    pub fn enroll_checked(&self, course_id: &str) -> Result<Enrollment> {
        let data = self.store.load()?;

        let course = data
            .course(course_id)
            .ok_or_else(|| Error::not_found(format!("course '{}'", course_id)))?;

        if data.enrollment(CURRENT_USER_ID, course_id).is_some() {
            return Err(Error::precondition(ALREADY_ENROLLED));
        }

        if !prerequisites_met(course, &data) {
            return Err(Error::precondition(PREREQUISITES_UNMET));
        }

        self.enroll(course_id)
    }

    /// Set progress for an enrollment, clamped into 0..=100.
    ///
    /// Returns `None` when the user is not enrolled. Reaching 100 completes
    /// the enrollment; completed enrollments are returned unchanged.
    pub fn update_progress(&self, course_id: &str, progress: i64) -> Result<Option<Enrollment>> {
        let mut data = self.store.load()?;

        let Some(enrollment) = data.enrollment_mut(CURRENT_USER_ID, course_id) else {
            debug!(course_id, "not enrolled, progress update ignored");
            return Ok(None);
        };

        let changed = enrollment.apply_progress(progress, Utc::now());
        let updated = enrollment.clone();

        if changed {
            self.store.save(&data)?;
        } else {
            debug!(course_id, progress, "progress unchanged");
        }

        Ok(Some(updated))
    }

    /// Prerequisite breakdown for a course, `None` if the course is unknown
    pub fn prerequisite_status(&self, course_id: &str) -> Result<Option<PrerequisiteStatus>> {
        let data = self.store.load()?;
        Ok(data
            .course(course_id)
            .map(|course| prerequisite_status(course, &data)))
    }
}
