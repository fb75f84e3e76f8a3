//! Persisted settings backed by a JSON file in the user config
//! directory.
//!
//! Same contract as [`MemoryStore`], plus durability: contents are
//! loaded once at construction and written back on [`sync`]. Load and
//! save problems are logged and degrade to an empty store; they never
//! reach the form.
//!
//! [`sync`]: LocalStore::sync

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{info, warn};

use super::store::{MemoryStore, SettingValue, SettingsStore};

pub struct LocalStore {
    store: MemoryStore,
    path: PathBuf,
}

impl LocalStore {
    /// Open the per-user store at the platform config location.
    pub fn open() -> Result<Self> {
        Ok(Self::open_at(Self::default_path()?))
    }

    /// Open a store persisted at an explicit path. A missing file
    /// starts empty; an unreadable or malformed one is logged and
    /// ignored.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut store = MemoryStore::new();
        match fs::read_to_string(&path) {
            Ok(content) => {
                if let Err(e) = store.import_json(&content) {
                    warn!("Ignoring malformed settings file {}: {}", path.display(), e);
                    store = MemoryStore::new();
                } else {
                    info!("Loaded settings from {}", path.display());
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Could not read settings file {}: {}", path.display(), e),
        }
        Self { store, path }
    }

    fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "cuelight", "cuelight")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current contents back to disk.
    pub fn sync(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self.store.groups())?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Drop every stored group and remove the backing file.
    pub fn clear(&mut self) {
        self.store = MemoryStore::new();
        match fs::remove_file(&self.path) {
            Ok(()) => info!("Removed settings file {}", self.path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Could not remove settings file {}: {}",
                self.path.display(),
                e
            ),
        }
    }

    /// Serialize the contents as a transport payload.
    pub fn export_json(&self) -> Result<String> {
        self.store.export_json()
    }
}

impl SettingsStore for LocalStore {
    fn begin_group(&mut self, group: &str) {
        self.store.begin_group(group);
    }

    fn end_group(&mut self) {
        self.store.end_group();
    }

    fn set_value(&mut self, key: &str, value: SettingValue) {
        self.store.set_value(key, value);
    }

    fn value(&self, key: &str, default: SettingValue) -> SettingValue {
        self.store.value(key, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_path() -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "cuelight-test-{}-{}.json",
            std::process::id(),
            n
        ))
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let path = scratch_path();
        let mut store = LocalStore::open_at(&path);
        store.begin_group("General");
        assert_eq!(store.text_value("stationname", "Radio Eriwan"), "Radio Eriwan");
        store.end_group();
    }

    #[test]
    fn test_sync_then_reopen_preserves_values() {
        let path = scratch_path();
        {
            let mut store = LocalStore::open_at(&path);
            store.begin_group("General");
            store.set_value("stationname", SettingValue::text("Radio Test"));
            store.end_group();
            store.begin_group("LED1");
            store.set_value("used", SettingValue::Bool(false));
            store.end_group();
            store.sync().unwrap();
        }

        let mut store = LocalStore::open_at(&path);
        store.begin_group("General");
        assert_eq!(store.text_value("stationname", ""), "Radio Test");
        store.end_group();
        store.begin_group("LED1");
        assert!(!store.bool_value("used", true));
        store.end_group();

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let path = scratch_path();
        fs::write(&path, "{ definitely not json").unwrap();
        let mut store = LocalStore::open_at(&path);
        store.begin_group("General");
        assert_eq!(store.text_value("stationname", "fallback"), "fallback");
        store.end_group();
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_clear_removes_file_and_contents() {
        let path = scratch_path();
        let mut store = LocalStore::open_at(&path);
        store.begin_group("Clock");
        store.set_value("digital", SettingValue::Bool(false));
        store.end_group();
        store.sync().unwrap();
        assert!(path.exists());

        store.clear();
        assert!(!path.exists());
        store.begin_group("Clock");
        assert!(store.bool_value("digital", true));
        store.end_group();
    }
}
