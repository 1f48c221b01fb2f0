//! Pluggable key-value storage backends.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::store::StoreError;

/// String key-value storage behind the wardrobe repositories.
///
/// Implementations persist opaque JSON strings under string keys.
/// Swapping backends changes where data lives without touching the
/// repositories.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`, if any.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed storage keeping one `<key>.json` file per key.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Create a backend under the platform data directory.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn in_default_dir() -> Result<Self, StoreError> {
        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or(StoreError::NoStorageDir)?;
        Self::new(base.join("wardrobe"))
    }

    /// The directory this backend writes into.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(StoreError::invalid_key(key));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        std::fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.read("k").unwrap(), None);
        backend.write("k", "[1, 2, 3]").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("[1, 2, 3]"));
        backend.remove("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = std::env::temp_dir().join(format!("wardrobe-test-{}", uuid::Uuid::new_v4()));
        let mut backend = FileBackend::new(&dir).unwrap();

        assert_eq!(backend.read("items").unwrap(), None);
        backend.write("items", "[]").unwrap();
        assert_eq!(backend.read("items").unwrap().as_deref(), Some("[]"));
        backend.remove("items").unwrap();
        assert_eq!(backend.read("items").unwrap(), None);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_file_backend_rejects_path_like_keys() {
        let dir = std::env::temp_dir().join(format!("wardrobe-test-{}", uuid::Uuid::new_v4()));
        let backend = FileBackend::new(&dir).unwrap();
        assert!(backend.read("../escape").is_err());
        assert!(backend.read("").is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_file_backend_remove_missing_is_ok() {
        let dir = std::env::temp_dir().join(format!("wardrobe-test-{}", uuid::Uuid::new_v4()));
        let mut backend = FileBackend::new(&dir).unwrap();
        assert!(backend.remove("never-written").is_ok());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
