//! Key-value storage backends.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use crate::error::StoreError;

/// A string-keyed store of string values, the shape of a browser's local
/// storage.
pub trait KeyValueStore {
    /// Read the value for `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process storage. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
///
/// Writes go to a temporary file in the same directory and are renamed into
/// place, so a reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` for storage, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Write {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Path of the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidKey` for keys that are empty or contain
    /// characters outside `[A-Za-z0-9._-]`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let write_err = |source| StoreError::Write {
            path: path.clone(),
            source,
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(value.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        tmp.persist(&path).map_err(|error| write_err(error.error))?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote storage value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "[1]").unwrap();
        storage.set("k", "[2]").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn file_keys_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert!(storage.path_for("squaremap_structures_v21").is_ok());
        for bad in ["", "../escape", "a/b", ".hidden", "sp ace"] {
            assert!(
                matches!(storage.path_for(bad), Err(StoreError::InvalidKey(_))),
                "key {bad:?} should be rejected"
            );
        }
    }
}
