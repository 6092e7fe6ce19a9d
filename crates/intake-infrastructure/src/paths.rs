//! Unified path management for intake configuration and data.
//!
//! Paths come from the `dirs` crate so they follow platform conventions
//! (XDG on Linux, `Library` on macOS, `AppData` on Windows).

use std::path::PathBuf;

/// Environment variable that overrides the settings file location.
pub const CONFIG_ENV_VAR: &str = "INTAKE_CONFIG";

const APP_DIR: &str = "intake";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// No platform config directory could be determined.
    ConfigDirNotFound,
    /// No platform data directory could be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path resolution for intake.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/intake/            # Config directory
/// └── config.toml              # IntakeSettings
///
/// ~/.local/share/intake/       # Data directory
/// └── candidates/              # One JSON file per completed candidate
///     └── <record-id>.json
/// ```
pub struct IntakePaths;

impl IntakePaths {
    /// Returns the intake configuration directory, e.g. `~/.config/intake/`.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the intake data directory, e.g. `~/.local/share/intake/`.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    /// Returns the settings file path.
    ///
    /// `INTAKE_CONFIG` wins when set and non-empty.
    pub fn config_file() -> Result<PathBuf, PathError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(Self::config_dir()?.join("config.toml")),
        }
    }

    /// Returns the candidate store directory.
    ///
    /// `data_dir_override` comes from `IntakeSettings::data_dir`.
    pub fn candidates_dir(data_dir_override: Option<&PathBuf>) -> Result<PathBuf, PathError> {
        let base = match data_dir_override {
            Some(dir) => dir.clone(),
            None => Self::data_dir()?,
        };
        Ok(base.join("candidates"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_dir_honours_override() {
        let base = PathBuf::from("/tmp/intake-test");
        let dir = IntakePaths::candidates_dir(Some(&base)).unwrap();
        assert_eq!(dir, base.join("candidates"));
    }

    #[test]
    fn test_config_file_name() {
        // Only meaningful when the override is unset.
        if std::env::var_os(CONFIG_ENV_VAR).is_none() {
            if let Ok(path) = IntakePaths::config_file() {
                assert!(path.ends_with("intake/config.toml"));
            }
        }
    }
}
