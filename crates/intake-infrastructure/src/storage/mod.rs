//! Storage layer for atomic settings files.

mod atomic_toml;
mod settings_store;

pub use atomic_toml::AtomicTomlFile;
pub use settings_store::SettingsStore;
