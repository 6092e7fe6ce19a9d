use anyhow::{Context, Result};
use intake_core::IntakeSettings;
use intake_infrastructure::SettingsStore;
use std::path::Path;

/// Loads settings from `path`, or from the default location.
pub fn load_settings(path: Option<&Path>) -> Result<IntakeSettings> {
    let store = match path {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::default_location()?,
    };

    store
        .load()
        .with_context(|| format!("Failed to load settings from {}", store.path().display()))
}
