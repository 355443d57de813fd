//! Enrollment domain model
//!
//! An enrollment moves through three states per (user, course) pair:
//! no record, `Enrolled` with progress 0-99, and `Completed` at 100.
//! `Completed` is terminal.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest progress value; reaching it completes the enrollment
pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Enrolled,
    Completed,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Enrolled => "enrolled",
            EnrollmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress record between the user and one course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub user_id: String,
    pub course_id: String,
    pub status: EnrollmentStatus,
    /// Percent complete, 0-100
    pub progress: u8,
    pub enrolled_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Enrollment {
    /// Create a fresh enrollment with no progress
    pub fn new(
        user_id: impl Into<String>,
        course_id: impl Into<String>,
        enrolled_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            course_id: course_id.into(),
            status: EnrollmentStatus::Enrolled,
            progress: 0,
            enrolled_at,
            completed_at: None,
        }
    }

    pub fn belongs_to(&self, user_id: &str, course_id: &str) -> bool {
        self.user_id == user_id && self.course_id == course_id
    }

    pub fn is_completed(&self) -> bool {
        self.status == EnrollmentStatus::Completed
    }

    /// Clamp an arbitrary requested value into 0..=100
    pub fn clamp_progress(value: i64) -> u8 {
        value.clamp(0, i64::from(MAX_PROGRESS)) as u8
    }

    /// Apply a progress update observed at `now`.
    ///
    /// Completed enrollments are left untouched. Reaching 100 completes the
    /// enrollment; `completed_at` is only written if it was not set before.
    /// Returns whether anything changed.
    pub fn apply_progress(&mut self, value: i64, now: DateTime<Utc>) -> bool {
        if self.is_completed() {
            return false;
        }

        let progress = Self::clamp_progress(value);
        let mut changed = progress != self.progress;
        self.progress = progress;

        if progress == MAX_PROGRESS {
            self.status = EnrollmentStatus::Completed;
            if self.completed_at.is_none() {
                self.completed_at = Some(now);
            }
            changed = true;
        }

        changed
    }

    /// Describe how this record breaks the
    /// completed <=> progress 100 <=> completed_at invariant, if it does
    pub fn invariant_violation(&self) -> Option<&'static str> {
        let completed = self.is_completed();
        let full = self.progress == MAX_PROGRESS;
        let stamped = self.completed_at.is_some();

        if self.progress > MAX_PROGRESS {
            Some("progress above 100")
        } else if completed && !full {
            Some("completed with progress below 100")
        } else if !completed && full {
            Some("progress at 100 but not completed")
        } else if completed && !stamped {
            Some("completed without a completion time")
        } else if !completed && stamped {
            Some("completion time set on an unfinished enrollment")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_new_enrollment_starts_at_zero() {
        let e = Enrollment::new("current-user", "1", at(9));
        assert_eq!(e.status, EnrollmentStatus::Enrolled);
        assert_eq!(e.progress, 0);
        assert!(e.completed_at.is_none());
        assert!(e.belongs_to("current-user", "1"));
        assert!(!e.belongs_to("current-user", "2"));
        assert!(e.invariant_violation().is_none());
    }

    #[test]
    fn test_clamp_progress() {
        assert_eq!(Enrollment::clamp_progress(-20), 0);
        assert_eq!(Enrollment::clamp_progress(0), 0);
        assert_eq!(Enrollment::clamp_progress(55), 55);
        assert_eq!(Enrollment::clamp_progress(100), 100);
        assert_eq!(Enrollment::clamp_progress(150), 100);
        assert_eq!(Enrollment::clamp_progress(i64::MAX), 100);
    }

    #[test]
    fn test_progress_can_move_both_ways_before_completion() {
        let mut e = Enrollment::new("current-user", "1", at(9));
        assert!(e.apply_progress(60, at(10)));
        assert_eq!(e.progress, 60);
        assert!(e.apply_progress(30, at(11)));
        assert_eq!(e.progress, 30);
        assert!(!e.apply_progress(30, at(12)));
        assert_eq!(e.status, EnrollmentStatus::Enrolled);
    }

    #[test]
    fn test_reaching_100_completes() {
        let mut e = Enrollment::new("current-user", "1", at(9));
        assert!(e.apply_progress(250, at(10)));
        assert_eq!(e.progress, 100);
        assert_eq!(e.status, EnrollmentStatus::Completed);
        assert_eq!(e.completed_at, Some(at(10)));
        assert!(e.invariant_violation().is_none());
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut e = Enrollment::new("current-user", "1", at(9));
        e.apply_progress(100, at(10));

        assert!(!e.apply_progress(10, at(11)));
        assert!(!e.apply_progress(100, at(12)));
        assert_eq!(e.progress, 100);
        assert_eq!(e.status, EnrollmentStatus::Completed);
        assert_eq!(e.completed_at, Some(at(10)));
    }

    #[test]
    fn test_existing_completion_time_is_kept() {
        // Hand-edited record: stamped but still enrolled
        let mut e = Enrollment::new("current-user", "1", at(9));
        e.progress = 90;
        e.completed_at = Some(at(8));

        e.apply_progress(100, at(12));
        assert_eq!(e.status, EnrollmentStatus::Completed);
        assert_eq!(e.completed_at, Some(at(8)));
    }

    #[test]
    fn test_invariant_violations() {
        let mut e = Enrollment::new("current-user", "1", at(9));
        e.status = EnrollmentStatus::Completed;
        assert_eq!(
            e.invariant_violation(),
            Some("completed with progress below 100")
        );

        let mut e = Enrollment::new("current-user", "1", at(9));
        e.progress = 100;
        assert_eq!(
            e.invariant_violation(),
            Some("progress at 100 but not completed")
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let e = Enrollment::new("current-user", "7", at(9));
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["userId"], "current-user");
        assert_eq!(json["courseId"], "7");
        assert_eq!(json["status"], "enrolled");
        assert!(json["enrolledAt"].is_string());
        assert!(json.get("completedAt").is_none());
    }
}
