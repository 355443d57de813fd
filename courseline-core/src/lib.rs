//! Courseline Core - Business logic for a local course catalog and learning tracker
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core entities (Course, Enrollment, User) and the document validator
//! - **ports**: Trait definitions for external dependencies (Storage)
//! - **store**: The single load/save path for the persisted document
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (filesystem, in-memory, seed data)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod store;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::FileStorage;
use config::Config;
use ports::Storage;
use services::*;
use store::Store;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{Course, Enrollment, EnrollmentStatus, Level, StoreData, User};
pub use services::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use store::LoadPolicy;

/// Main context for Courseline operations
///
/// This is the primary entry point for all business logic. It holds
/// the store, configuration, and all services.
pub struct CourselineContext {
    pub config: Config,
    pub store: Arc<Store>,
    pub catalog_service: CatalogService,
    pub enrollment_service: EnrollmentService,
    pub profile_service: ProfileService,
    pub history_service: HistoryService,
    pub doctor_service: DoctorService,
}

impl CourselineContext {
    /// Create a context backed by files in `dir`
    pub fn new(dir: &Path) -> Result<Self> {
        let config = Config::load(dir)?;
        let storage = Arc::new(FileStorage::new(dir)?);
        Ok(Self::with_storage(config, storage))
    }

    /// Create a context over any storage medium
    pub fn with_storage(config: Config, storage: Arc<dyn Storage>) -> Self {
        let store = Arc::new(Store::with_policy(storage, config.load_policy()));

        Self {
            catalog_service: CatalogService::new(Arc::clone(&store)),
            enrollment_service: EnrollmentService::new(Arc::clone(&store)),
            profile_service: ProfileService::new(Arc::clone(&store)),
            history_service: HistoryService::new(Arc::clone(&store)),
            doctor_service: DoctorService::new(Arc::clone(&store)),
            config,
            store,
        }
    }
}
