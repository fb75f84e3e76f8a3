//! The two interchangeable store backends behind the settings form.

use anyhow::Result;

use super::local::LocalStore;
use super::store::{MemoryStore, SettingValue, SettingsStore};

/// Where the form reads and writes its values.
///
/// `Local` is the durable per-user store used in normal operation.
/// `Remote` is an in-memory store whose contents are exchanged as JSON
/// with a remote screen; nothing is persisted on this machine.
pub enum SettingsBackend {
    Local(LocalStore),
    Remote(MemoryStore),
}

impl SettingsBackend {
    pub fn is_remote(&self) -> bool {
        matches!(self, SettingsBackend::Remote(_))
    }

    /// Serialize the full contents as the transport payload.
    pub fn export_json(&self) -> Result<String> {
        match self {
            SettingsBackend::Local(store) => store.export_json(),
            SettingsBackend::Remote(store) => store.export_json(),
        }
    }

    /// Merge a transport payload, group by group. Meaningful for the
    /// remote backend; accepted on both so callers need not care.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        match self {
            SettingsBackend::Local(_) => {
                anyhow::bail!("remote configuration cannot be imported into the local store")
            }
            SettingsBackend::Remote(store) => store.import_json(json),
        }
    }

    /// Persist, where the backend is durable.
    pub fn sync(&self) -> Result<()> {
        match self {
            SettingsBackend::Local(store) => store.sync(),
            SettingsBackend::Remote(_) => Ok(()),
        }
    }
}

impl SettingsStore for SettingsBackend {
    fn begin_group(&mut self, group: &str) {
        match self {
            SettingsBackend::Local(store) => store.begin_group(group),
            SettingsBackend::Remote(store) => store.begin_group(group),
        }
    }

    fn end_group(&mut self) {
        match self {
            SettingsBackend::Local(store) => store.end_group(),
            SettingsBackend::Remote(store) => store.end_group(),
        }
    }

    fn set_value(&mut self, key: &str, value: SettingValue) {
        match self {
            SettingsBackend::Local(store) => store.set_value(key, value),
            SettingsBackend::Remote(store) => store.set_value(key, value),
        }
    }

    fn value(&self, key: &str, default: SettingValue) -> SettingValue {
        match self {
            SettingsBackend::Local(store) => store.value(key, default),
            SettingsBackend::Remote(store) => store.value(key, default),
        }
    }
}
