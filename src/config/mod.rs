//! Configuration stores and defaults

mod backend;
pub mod defaults;
mod local;
mod store;

pub use backend::SettingsBackend;
pub use local::LocalStore;
pub use store::{MemoryStore, SettingValue, SettingsStore};
