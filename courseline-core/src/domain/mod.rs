//! Core domain entities
//!
//! Pure data structures with their validation logic - no I/O.

mod course;
pub mod enrollment;
pub mod result;
pub mod schema;
mod store_data;
mod user;

pub use course::{Course, Level};
pub use enrollment::{Enrollment, EnrollmentStatus, MAX_PROGRESS};
pub use store_data::StoreData;
pub use user::{
    is_valid_email, normalize_categories, Preferences, PreferencesUpdate, ProfileUpdate, User,
    CURRENT_USER_ID,
};
