//! Cuelight: settings console for an on-air studio status display
//!
//! This library provides the building blocks of the settings console:
//! - Group-scoped key/value settings stores (persisted and in-memory)
//! - The fixed configuration schema defaults
//! - The tabbed settings window and its notification events

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use config::{LocalStore, MemoryStore, SettingValue, SettingsBackend, SettingsStore};
pub use core::{Color, SettingsEvent};
pub use ui::SettingsDialog;
