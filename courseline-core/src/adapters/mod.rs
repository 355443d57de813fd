//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Local filesystem for the Storage port
//! - In-memory map for the Storage port (tests, embedding)
//! - Seed data for fresh or unusable documents

pub mod file;
pub mod memory;
pub mod seed;

pub use file::FileStorage;
pub use memory::MemoryStorage;
