//! Storage port - key/value persistence abstraction

use thiserror::Error;

/// Failure reported by a storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage quota exceeded: {needed} bytes needed, {limit} bytes available")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("storage lock failed: {0}")]
    Lock(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Byte-oriented key/value medium holding whole documents.
///
/// `set` replaces the value for a key in one step: readers see either the
/// old value or the new one.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}
