//! File-backed key-value store
//!
//! Each key becomes one pretty-printed JSON file directly under the base
//! directory (`<base>/<key>.json`). The two keys the crate uses are fixed
//! constants, so no name sanitization is needed.

use std::fs;
use std::path::PathBuf;

use super::{KeyValue, PersistError, Result};

#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the default data directory (e.g. `~/.local/share/biolog`)
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("biolog"))
            .ok_or(PersistError::DataDirNotFound)
    }

    /// Open a store over the default data directory, creating it if needed
    pub fn open_default() -> Result<Self> {
        let base_dir = Self::default_data_dir()?;
        fs::create_dir_all(&base_dir)?;
        Ok(Self::new(base_dir))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValue for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[test]
    fn test_read_missing_key() {
        let (store, _temp) = create_test_store();
        assert!(store.read("nothing-here").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let (store, _temp) = create_test_store();
        store.write("course-progress", "{\"x\":1}").unwrap();

        let value = store.read("course-progress").unwrap();
        assert_eq!(value.as_deref(), Some("{\"x\":1}"));
    }

    #[test]
    fn test_write_replaces_value() {
        let (store, _temp) = create_test_store();
        store.write("k", "first").unwrap();
        store.write("k", "second").unwrap();

        assert_eq!(store.read("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove() {
        let (store, _temp) = create_test_store();
        store.write("k", "v").unwrap();
        store.remove("k").unwrap();

        assert!(store.read("k").unwrap().is_none());

        // Removing again is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_creates_base_dir_on_write() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("nested").join("dir"));

        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    }
}
