//! Key-value storage backends for cart snapshots.
//!
//! The cart persists through a small synchronous key-value interface, the
//! same shape as browser local storage:
//!
//! - [`MemoryStore`] - in-process map, used in tests and ephemeral sessions
//! - [`FileStore`] - one JSON file per key under a directory
//!
//! ```text
//! <dir>/
//!     mafia-cart.json
//! ```

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The key cannot be used by this backend.
    #[error("Invalid storage key {0:?}")]
    InvalidKey(String),
}

/// Synchronous string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory key-value store. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed key-value store.
///
/// Each key maps to `<dir>/<key>.json`. The directory is created on first
/// write. Writes go to a temporary file that is then renamed over the target,
/// so readers never see a partially written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory does not need to exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the file path used for `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidKey` if `key` is not a valid key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(io_error(&self.dir))?;

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value).map_err(io_error(&tmp_path))?;
        std::fs::rename(&tmp_path, &path).map_err(io_error(&path))?;
        Ok(())
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StorageError + use<> {
    let path = path.to_path_buf();
    move |source| StorageError::Io { path, source }
}

/// Check that `key` is usable as a file stem.
///
/// # Errors
///
/// Returns `StorageError::InvalidKey` for empty keys, keys containing path
/// separators, and keys starting with a dot.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let invalid = key.is_empty()
        || key.starts_with('.')
        || key.contains(['/', '\\', '\0'])
        || key.chars().any(char::is_control);

    if invalid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert!(store.get("mafia-cart").unwrap().is_none());

        store.set("mafia-cart", "[]").unwrap();
        assert_eq!(store.get("mafia-cart").unwrap().as_deref(), Some("[]"));

        store.set("mafia-cart", "[1]").unwrap();
        assert_eq!(store.get("mafia-cart").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_store_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("not-created-yet"));
        assert!(store.get("mafia-cart").unwrap().is_none());
    }

    #[test]
    fn test_file_store_creates_dir_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        store.set("mafia-cart", "[]").unwrap();

        let path = dir.path().join("nested").join("mafia-cart.json");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
        assert_eq!(store.get("mafia-cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("mafia-cart", "[]").unwrap();

        assert!(!dir.path().join("mafia-cart.json.tmp").exists());
    }

    #[test]
    fn test_path_for() {
        let store = FileStore::new("/data/cart");
        assert_eq!(
            store.path_for("mafia-cart").unwrap(),
            PathBuf::from("/data/cart/mafia-cart.json")
        );
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("mafia-cart").is_ok());
        assert!(validate_key("cart_2").is_ok());

        for bad in ["", ".", "..", "../escape", "a/b", "a\\b", ".hidden", "tab\there"] {
            assert!(
                matches!(validate_key(bad), Err(StorageError::InvalidKey(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_file_store_rejects_bad_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(matches!(
            store.set("../outside", "[]"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
