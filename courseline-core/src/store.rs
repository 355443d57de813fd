//! Store - the single read/write path for the persisted document
//!
//! The whole document lives under one storage key. Every read loads and
//! checks the full document; every write replaces it. Data that fails the
//! shape check is replaced with the seed under the default policy.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::adapters::seed;
use crate::domain::result::{Error, Result};
use crate::domain::schema::is_valid_store_data;
use crate::domain::StoreData;
use crate::ports::Storage;

/// Storage key for the document
pub const STORAGE_KEY: &str = "lms_data";

/// What `load` does with a stored document that is present but unusable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Replace it with the seed and carry on
    #[default]
    Reseed,
    /// Fail with a validation error and leave it untouched
    Strict,
}

pub struct Store {
    storage: Arc<dyn Storage>,
    policy: LoadPolicy,
}

impl Store {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_policy(storage, LoadPolicy::default())
    }

    pub fn with_policy(storage: Arc<dyn Storage>, policy: LoadPolicy) -> Self {
        Self { storage, policy }
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Load the document, seeding storage when it is absent or unusable.
    ///
    /// A failed read is returned as `Error::Storage` under either policy and
    /// nothing is written.
    pub fn load(&self) -> Result<StoreData> {
        let bytes = self.storage.get(STORAGE_KEY).map_err(|e| {
            warn!(error = %e, "failed to read stored data");
            Error::from(e)
        })?;

        let Some(bytes) = bytes else {
            debug!("no stored data, writing seed");
            return self.reset();
        };

        match decode(&bytes) {
            Ok(data) => Ok(data),
            Err(reason) => match self.policy {
                LoadPolicy::Reseed => {
                    warn!(reason = %reason, "invalid stored data, replacing with seed");
                    self.reset()
                }
                LoadPolicy::Strict => Err(Error::validation(format!(
                    "stored data is invalid: {}",
                    reason
                ))),
            },
        }
    }

    /// Overwrite the stored document
    pub fn save(&self, data: &StoreData) -> Result<()> {
        let bytes = serde_json::to_vec(data)?;
        self.storage.set(STORAGE_KEY, &bytes)?;
        Ok(())
    }

    /// Replace the stored document with the seed and return it
    pub fn reset(&self) -> Result<StoreData> {
        let data = seed::initial_data();
        self.save(&data)?;
        Ok(data)
    }

    /// Stored bytes as-is, without checks or seeding
    pub fn raw(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.storage.get(STORAGE_KEY)?)
    }
}

/// Parse and shape-check a stored document
pub(crate) fn decode(bytes: &[u8]) -> std::result::Result<StoreData, String> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| format!("not valid JSON: {}", e))?;
    if !is_valid_store_data(&value) {
        return Err("document does not match the expected shape".to_string());
    }
    serde_json::from_value(value).map_err(|e| format!("decoding failed: {}", e))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;
    use crate::adapters::MemoryStorage;
    use crate::domain::{Enrollment, CURRENT_USER_ID};
    use crate::ports::StorageError;

    fn store_with(storage: &Arc<MemoryStorage>) -> Store {
        Store::new(Arc::clone(storage) as Arc<dyn Storage>)
    }

    fn stored(storage: &MemoryStorage) -> Value {
        serde_json::from_slice(&storage.get(STORAGE_KEY).unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_load_seeds_empty_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(&storage);

        let data = store.load().unwrap();
        assert_eq!(data, seed::initial_data());
        assert_eq!(stored(&storage), serde_json::to_value(&data).unwrap());
    }

    #[test]
    fn test_load_replaces_invalid_documents() {
        let bad_documents: [&[u8]; 5] = [
            &b"not json"[..],
            &b"null"[..],
            &b"[]"[..],
            &br#"{"courses": [], "enrollments": []}"#[..],
            &br#"{"courses": [{"id": 1}], "enrollments": [], "user": {}}"#[..],
        ];

        for bad in bad_documents {
            let storage = Arc::new(MemoryStorage::new());
            storage.set(STORAGE_KEY, bad).unwrap();
            let store = store_with(&storage);

            let data = store.load().unwrap();
            assert_eq!(data, seed::initial_data());
            assert_eq!(
                stored(&storage),
                serde_json::to_value(seed::initial_data()).unwrap()
            );

            // Second load reads the healed document
            assert_eq!(store.load().unwrap(), data);
        }
    }

    #[test]
    fn test_load_replaces_shape_valid_but_undecodable_document() {
        let storage = Arc::new(MemoryStorage::new());
        let mut doc = serde_json::to_value(seed::initial_data()).unwrap();
        doc["enrollments"] = json!([{
            "userId": CURRENT_USER_ID,
            "courseId": "1",
            "status": "enrolled",
            "progress": 10,
            "enrolledAt": "yesterday"
        }]);
        storage.set(STORAGE_KEY, doc.to_string().as_bytes()).unwrap();

        let data = store_with(&storage).load().unwrap();
        assert!(data.enrollments.is_empty());
    }

    #[test]
    fn test_load_keeps_valid_document() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(&storage);

        let mut data = store.load().unwrap();
        data.enrollments
            .push(Enrollment::new(CURRENT_USER_ID, "3", chrono::Utc::now()));
        store.save(&data).unwrap();

        assert_eq!(store.load().unwrap(), data);
    }

    #[test]
    fn test_strict_policy_reports_invalid_document() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(STORAGE_KEY, b"{\"broken\": true}").unwrap();
        let store = Store::with_policy(
            Arc::clone(&storage) as Arc<dyn Storage>,
            LoadPolicy::Strict,
        );

        let err = store.load().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        // Left untouched
        assert_eq!(stored(&storage), json!({"broken": true}));
    }

    #[test]
    fn test_strict_policy_still_seeds_absent_document() {
        let storage = Arc::new(MemoryStorage::new());
        let store = Store::with_policy(
            Arc::clone(&storage) as Arc<dyn Storage>,
            LoadPolicy::Strict,
        );
        assert_eq!(store.load().unwrap(), seed::initial_data());
    }

    #[test]
    fn test_save_surfaces_quota_errors() {
        let storage = Arc::new(MemoryStorage::with_quota(16));
        let store = store_with(&storage);

        let err = store.save(&seed::initial_data()).unwrap_err();
        assert!(matches!(
            err,
            Error::Storage(StorageError::QuotaExceeded { .. })
        ));

        // Seeding hits the same wall
        assert!(matches!(store.load(), Err(Error::Storage(_))));
    }

    /// Storage whose reads always fail and which counts attempted writes
    struct UnreadableStorage {
        writes: AtomicUsize,
    }

    impl Storage for UnreadableStorage {
        fn get(&self, _key: &str) -> std::result::Result<Option<Vec<u8>>, StorageError> {
            Err(StorageError::Lock("lock held elsewhere".to_string()))
        }

        fn set(&self, _key: &str, _value: &[u8]) -> std::result::Result<(), StorageError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_read_failure_is_surfaced_without_writing() {
        for policy in [LoadPolicy::Reseed, LoadPolicy::Strict] {
            let storage = Arc::new(UnreadableStorage {
                writes: AtomicUsize::new(0),
            });
            let store = Store::with_policy(Arc::clone(&storage) as Arc<dyn Storage>, policy);

            let err = store.load().unwrap_err();
            assert!(
                matches!(err, Error::Storage(StorageError::Lock(_))),
                "{:?}: {:?}",
                policy,
                err
            );
            assert_eq!(storage.writes.load(Ordering::SeqCst), 0, "{:?}", policy);
        }
    }

    #[test]
    fn test_raw_returns_unchecked_document() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(&storage);
        assert!(store.raw().unwrap().is_none());

        storage.set(STORAGE_KEY, b"{oops").unwrap();
        assert_eq!(store.raw().unwrap().as_deref(), Some(&b"{oops"[..]));
    }
}
