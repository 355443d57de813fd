//! The persisted document: catalog, enrollments and the user profile

use serde::{Deserialize, Serialize};

use super::{Course, Enrollment, User};

/// Everything Courseline persists, stored and replaced as one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub user: User,
}

impl StoreData {
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn enrollment(&self, user_id: &str, course_id: &str) -> Option<&Enrollment> {
        self.enrollments
            .iter()
            .find(|e| e.belongs_to(user_id, course_id))
    }

    pub fn enrollment_mut(&mut self, user_id: &str, course_id: &str) -> Option<&mut Enrollment> {
        self.enrollments
            .iter_mut()
            .find(|e| e.belongs_to(user_id, course_id))
    }

    /// Enrollments for one user, in creation order
    pub fn enrollments_for<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Enrollment> {
        self.enrollments.iter().filter(move |e| e.user_id == user_id)
    }

    /// Whether the user has finished the course
    pub fn has_completed(&self, user_id: &str, course_id: &str) -> bool {
        self.enrollment(user_id, course_id)
            .is_some_and(Enrollment::is_completed)
    }
}
