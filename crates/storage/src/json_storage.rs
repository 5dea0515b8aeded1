//! JSON file storage implementation.
//!
//! Stores each key as a file under a root directory (default `.sheet`) and
//! keeps a small per-key meta marker (version + updated_at). Values are
//! written verbatim; callers hand in already-encoded JSON.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{KeyValueStore, Result, StorageError};

/// File-based key-value store.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create storage. This will create the root and `meta/` directories.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(&root)?;
        fs::create_dir_all(root.join("meta"))?;

        Ok(Self { root })
    }

    /// Root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Current write counter for a key; 0 when never written.
    pub fn version(&self, key: &str) -> Result<u64> {
        validate_key(key)?;
        Ok(read_meta_version(&self.meta_path(key)))
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn meta_path(&self, key: &str) -> PathBuf {
        self.root.join("meta").join(format!("{}.meta.json", key))
    }

    /// Read and increment per-key version, return new version.
    fn bump_version(&self, key: &str) -> Result<u64> {
        let path = self.meta_path(key);
        let version = read_meta_version(&path) + 1;
        let meta = serde_json::json!({"version": version, "updated_at": chrono::Utc::now()});
        fs::write(&path, serde_json::to_string_pretty(&meta)?.as_bytes())?;
        Ok(version)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        match fs::read_to_string(self.value_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        fs::write(self.value_path(key), value.as_bytes())?;

        let version = self.bump_version(key)?;
        debug!(key, version, "stored value");
        Ok(())
    }
}

fn read_meta_version(path: &Path) -> u64 {
    // Missing or unreadable meta counts as never written
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str::<serde_json::Value>(&s).ok())
        .and_then(|json| json.get("version").and_then(|v| v.as_u64()))
        .unwrap_or(0)
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();

        assert!(store.get("tp-brulerie-progress").unwrap().is_none());
        assert_eq!(store.version("tp-brulerie-progress").unwrap(), 0);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();

        let value = r#"{"tasks":["t1"],"skills":["cafe"]}"#;
        store.set("tp-brulerie-progress", value).unwrap();

        assert_eq!(store.get("tp-brulerie-progress").unwrap().as_deref(), Some(value));
        assert!(dir.path().join("tp-brulerie-progress.json").exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = JsonFileStore::new(dir.path()).unwrap();
            store.set("progress", "{}").unwrap();
        }

        let store = JsonFileStore::new(dir.path()).unwrap();
        assert_eq!(store.get("progress").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_version_bumps_on_each_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();

        store.set("progress", "{}").unwrap();
        store.set("progress", r#"{"tasks":[]}"#).unwrap();

        assert_eq!(store.version("progress").unwrap(), 2);
        assert_eq!(store.get("progress").unwrap().as_deref(), Some(r#"{"tasks":[]}"#));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(store.set(key, "{}"), Err(StorageError::InvalidKey(_))));
            assert!(matches!(store.get(key), Err(StorageError::InvalidKey(_))));
        }
    }
}
