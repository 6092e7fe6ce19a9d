//! TOML-backed storage for [`IntakeSettings`].

use super::AtomicTomlFile;
use crate::paths::IntakePaths;
use intake_core::config::IntakeSettings;
use intake_core::error::{IntakeError, Result};
use std::path::{Path, PathBuf};

/// Loads and saves the deployment settings file.
pub struct SettingsStore {
    file: AtomicTomlFile<IntakeSettings>,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: AtomicTomlFile::new(path.into()),
        }
    }

    /// Store at `INTAKE_CONFIG`, or the platform config location.
    pub fn default_location() -> Result<Self> {
        let path = IntakePaths::config_file()
            .map_err(|e| IntakeError::config(format!("Failed to resolve config path: {}", e)))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads validated settings; a missing or empty file yields defaults.
    pub fn load(&self) -> Result<IntakeSettings> {
        let settings = match self.file.load()? {
            Some(settings) => {
                tracing::debug!(path = %self.path().display(), "Loaded settings");
                settings
            }
            None => {
                tracing::debug!(path = %self.path().display(), "No settings file, using defaults");
                IntakeSettings::default()
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Validates and writes `settings`.
    pub fn save(&self, settings: &IntakeSettings) -> Result<()> {
        settings.validate()?;
        self.file.save(settings)?;
        tracing::info!(path = %self.path().display(), "Saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::config::TechnologyQuestions;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::new(temp_dir.path().join("config.toml"));

        let settings = store.load().expect("Should load defaults");
        assert_eq!(settings, IntakeSettings::default());
    }

    #[test]
    fn test_save_and_reload_custom_technology() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::new(temp_dir.path().join("intake/config.toml"));

        let settings = IntakeSettings {
            max_questions: 3,
            technologies: vec![TechnologyQuestions {
                name: "Elixir".to_string(),
                intermediate: vec!["What is a GenServer?".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        store.save(&settings).expect("Should save settings");

        let loaded = store.load().expect("Should reload settings");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "max_questions = 0\n").unwrap();

        let err = SettingsStore::new(&path).load().unwrap_err();
        assert!(err.is_config());

        let invalid = IntakeSettings {
            default_language: "xx".to_string(),
            ..Default::default()
        };
        assert!(SettingsStore::new(&path).save(&invalid).is_err());
    }
}
