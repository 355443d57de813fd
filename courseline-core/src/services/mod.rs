//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and the store. Each service
//! focuses on a specific use case or feature area.

mod catalog;
mod doctor;
mod enrollment;
mod history;
pub mod logging;
mod profile;

pub use catalog::{page_count, page_slice, CatalogService, CourseFilter, CoursePage, PriceFilter, SortBy};
pub use doctor::{CheckResult, CheckStatus, DoctorResult, DoctorService, DoctorSummary};
pub use enrollment::{
    prerequisites_met, EnrollmentService, PrerequisiteEntry, PrerequisiteStatus, ALREADY_ENROLLED,
    PREREQUISITES_UNMET,
};
pub use history::{HistoryService, HistorySummary, LearningEntry, LearningHistory};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use profile::ProfileService;
