//! Group-scoped key/value settings stores.
//!
//! Configuration for the display is a flat two-level namespace:
//! group name → key → value (e.g. `LED1` / `activebgcolor`). The store
//! holds whatever the form writes and enforces no schema; typing lives
//! at the form boundary. Reads fall back to a caller-supplied default,
//! writes outside an active group are dropped, nothing here errors.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::Color;

/// A single stored setting.
///
/// Colors travel in their textual `#rrggbb` form, so a serialized config
/// contains only plain strings and booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
}

impl SettingValue {
    pub fn text(value: impl Into<String>) -> Self {
        SettingValue::Text(value.into())
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<Color> for SettingValue {
    fn from(value: Color) -> Self {
        SettingValue::Text(value.to_hex())
    }
}

/// Common contract of the settings backends.
///
/// A group must be opened with [`begin_group`](Self::begin_group) before
/// keys resolve; `begin_group` replaces any previously open group (there
/// is no nesting). Reads never fail: an absent key, or no open group at
/// all, yields the supplied default.
pub trait SettingsStore {
    fn begin_group(&mut self, group: &str);

    fn end_group(&mut self);

    /// Upserts `key` in the open group; dropped silently when no group
    /// is open.
    fn set_value(&mut self, key: &str, value: SettingValue);

    /// The stored value, or `default` when the key (or an open group)
    /// is absent.
    fn value(&self, key: &str, default: SettingValue) -> SettingValue;

    fn text_value(&self, key: &str, default: &str) -> String {
        match self.value(key, SettingValue::text(default)) {
            SettingValue::Text(s) => s,
            SettingValue::Bool(b) => b.to_string(),
        }
    }

    /// Booleans that arrive as `"true"`/`"false"`/`"1"`/`"0"` text (a
    /// peer serializing loosely) are still accepted.
    fn bool_value(&self, key: &str, default: bool) -> bool {
        match self.value(key, SettingValue::Bool(default)) {
            SettingValue::Bool(b) => b,
            SettingValue::Text(s) => match s.trim() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => default,
            },
        }
    }

    /// Parses the stored text as a color; any malformed value reads as
    /// `default`.
    fn color_value(&self, key: &str, default: Color) -> Color {
        match self.value(key, SettingValue::Text(default.to_hex())) {
            SettingValue::Text(s) => s.parse().unwrap_or(default),
            SettingValue::Bool(_) => default,
        }
    }
}

/// In-memory settings store.
///
/// Used when the form edits the configuration of a remote screen: the
/// contents arrive and leave as a JSON object keyed by group name, e.g.
/// `{"General":{"stationname":"..."},"LED1":{"used":true,...}}`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    groups: BTreeMap<String, BTreeMap<String, SettingValue>>,
    current_group: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes the full mapping as the transport payload.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.groups)?)
    }

    /// Merges a transport payload group by group. Unknown groups and
    /// keys are kept verbatim; the schema is enforced at the form
    /// boundary, not here.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        let groups: BTreeMap<String, BTreeMap<String, SettingValue>> =
            serde_json::from_str(json)?;
        for (group, entries) in groups {
            self.begin_group(&group);
            for (key, value) in entries {
                self.set_value(&key, value);
            }
            self.end_group();
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn groups(&self) -> &BTreeMap<String, BTreeMap<String, SettingValue>> {
        &self.groups
    }
}

impl SettingsStore for MemoryStore {
    fn begin_group(&mut self, group: &str) {
        self.current_group = Some(group.to_string());
    }

    fn end_group(&mut self) {
        self.current_group = None;
    }

    fn set_value(&mut self, key: &str, value: SettingValue) {
        if let Some(group) = &self.current_group {
            self.groups
                .entry(group.clone())
                .or_default()
                .insert(key.to_string(), value);
        }
    }

    fn value(&self, key: &str, default: SettingValue) -> SettingValue {
        self.current_group
            .as_ref()
            .and_then(|group| self.groups.get(group))
            .and_then(|entries| entries.get(key))
            .cloned()
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritten_keys_read_as_default() {
        let mut store = MemoryStore::new();
        store.begin_group("Clock");
        assert_eq!(
            store.value("digital", SettingValue::Bool(true)),
            SettingValue::Bool(true)
        );
        assert_eq!(store.text_value("logopath", "fallback"), "fallback");
        store.end_group();
    }

    #[test]
    fn test_written_value_wins_over_default() {
        let mut store = MemoryStore::new();
        store.begin_group("LED1");
        store.set_value("used", SettingValue::Bool(true));
        store.end_group();

        store.begin_group("LED1");
        assert!(store.bool_value("used", false));
        assert_eq!(store.text_value("text", "ON AIR"), "ON AIR");
        store.end_group();
    }

    #[test]
    fn test_write_without_group_is_dropped() {
        let mut store = MemoryStore::new();
        store.set_value("stationname", SettingValue::text("orphan"));
        assert!(store.is_empty());

        store.begin_group("General");
        assert_eq!(store.text_value("stationname", "Radio Eriwan"), "Radio Eriwan");
        store.end_group();
    }

    #[test]
    fn test_read_without_group_yields_default() {
        let mut store = MemoryStore::new();
        store.begin_group("General");
        store.set_value("stationname", SettingValue::text("Radio Eriwan"));
        store.end_group();

        assert_eq!(store.text_value("stationname", "none"), "none");
    }

    #[test]
    fn test_begin_group_replaces_open_group() {
        let mut store = MemoryStore::new();
        store.begin_group("LED1");
        store.begin_group("LED2");
        store.set_value("text", SettingValue::text("PHONE"));
        store.end_group();

        store.begin_group("LED1");
        assert_eq!(store.text_value("text", "unset"), "unset");
        store.end_group();
        store.begin_group("LED2");
        assert_eq!(store.text_value("text", "unset"), "PHONE");
        store.end_group();
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = MemoryStore::new();
        store.begin_group("General");
        store.set_value("stationname", SettingValue::text("Radio Eriwan"));
        store.set_value("stationcolor", SettingValue::text("#ffaa00"));
        store.end_group();
        store.begin_group("LED1");
        store.set_value("used", SettingValue::Bool(true));
        store.end_group();

        let json = store.export_json().unwrap();
        let mut restored = MemoryStore::new();
        restored.import_json(&json).unwrap();
        assert_eq!(restored.groups(), store.groups());
    }

    #[test]
    fn test_import_merges_into_existing_groups() {
        let mut store = MemoryStore::new();
        store.begin_group("General");
        store.set_value("stationname", SettingValue::text("Old Name"));
        store.set_value("slogan", SettingValue::text("Kept"));
        store.end_group();

        store
            .import_json(r#"{"General":{"stationname":"New Name"},"LED1":{"used":false}}"#)
            .unwrap();

        store.begin_group("General");
        assert_eq!(store.text_value("stationname", ""), "New Name");
        assert_eq!(store.text_value("slogan", ""), "Kept");
        store.end_group();
        store.begin_group("LED1");
        assert!(!store.bool_value("used", true));
        store.end_group();
    }

    #[test]
    fn test_import_rejects_malformed_payload() {
        let mut store = MemoryStore::new();
        assert!(store.import_json("not json").is_err());
        assert!(store.import_json(r#"{"General":"flat"}"#).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_bool_coercion_from_text() {
        let mut store = MemoryStore::new();
        store.begin_group("NTP");
        store.set_value("ntpcheck", SettingValue::text("true"));
        store.set_value("mangled", SettingValue::text("yes?"));
        assert!(store.bool_value("ntpcheck", false));
        assert!(!store.bool_value("mangled", false));
        store.end_group();
    }

    #[test]
    fn test_color_value_falls_back_on_garbage() {
        use crate::core::Color;

        let mut store = MemoryStore::new();
        store.begin_group("LEDS");
        store.set_value("inactivebgcolor", SettingValue::text("#222222"));
        store.set_value("inactivetextcolor", SettingValue::text("not-a-color"));

        let fallback = Color::rgb(0x55, 0x55, 0x55);
        assert_eq!(
            store.color_value("inactivebgcolor", fallback),
            Color::rgb(0x22, 0x22, 0x22)
        );
        assert_eq!(store.color_value("inactivetextcolor", fallback), fallback);
        store.end_group();
    }
}
