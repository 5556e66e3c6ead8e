//! Durable key-value persistence.
//!
//! Every write replaces the whole value stored under a key; the last writer wins.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

pub type StorageResult<T> = Result<T, StorageError>;

/// A string-valued key-value store that survives restarts.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&mut self, key: &str, value: String) -> StorageResult<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        let io_err = |source| StorageError::Io {
            key: key.to_owned(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;

        // Replace via a temp file so readers never see a partial value
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;

        log::debug!("Wrote storage key {} to {}", key, path.display());
        Ok(())
    }
}

/// In-process store, used by tests and when no data directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_file_store_overwrites_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        store.set("templates", "{\"a\":1}".to_owned()).unwrap();
        store.set("templates", "{}".to_owned()).unwrap();

        assert_eq!(store.get("templates").unwrap().as_deref(), Some("{}"));
        assert!(!dir.path().join("nested/templates.json.tmp").exists());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::new(dir.path())
            .set("publish", "[]".to_owned())
            .unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.get("publish").unwrap().as_deref(), Some("[]"));
    }
}
