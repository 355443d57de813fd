//! Filesystem storage backend
//!
//! Each key is a `<key>.json` file in the data directory. Writes go to a
//! temporary file in the same directory which is then renamed over the
//! target, so a crash mid-write leaves the previous document intact.
//! An advisory lock on `.storage.lock` serializes access between processes.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::ports::{Storage, StorageError};

const LOCK_FILE: &str = ".storage.lock";

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed
    pub fn new(dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the value for `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid storage key: {:?}", key),
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn open_lock(&self) -> Result<File, StorageError> {
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(self.dir.join(LOCK_FILE))?;
        Ok(file)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key)?;
        let lock = self.open_lock()?;
        FileExt::lock_shared(&lock).map_err(|e| StorageError::Lock(e.to_string()))?;

        let result = match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        };

        let _ = FileExt::unlock(&lock);
        result
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let lock = self.open_lock()?;
        FileExt::lock_exclusive(&lock).map_err(|e| StorageError::Lock(e.to_string()))?;

        let result = write_atomically(&self.dir, &path, value);

        let _ = FileExt::unlock(&lock);
        result.map_err(StorageError::Io)
    }
}

fn write_atomically(dir: &Path, path: &Path, value: &[u8]) -> io::Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(value)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(&nested).unwrap();
        assert!(storage.dir().is_dir());
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert!(storage.get("lms_data").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.set("lms_data", br#"{"a":1}"#).unwrap();
        storage.set("lms_data", br#"{"a":2}"#).unwrap();

        let bytes = storage.get("lms_data").unwrap().unwrap();
        assert_eq!(bytes, br#"{"a":2}"#);
        assert!(dir.path().join("lms_data.json").exists());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.set("lms_data", b"{}").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names.len(), 2, "unexpected files: {:?}", names);
        assert!(names.contains(&"lms_data.json".to_string()));
        assert!(names.contains(&LOCK_FILE.to_string()));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert!(storage.set("../escape", b"{}").is_err());
        assert!(storage.get("").is_err());
    }
}
