//! Intake settings model.
//!
//! # File Location
//!
//! - macOS: `~/Library/Application Support/intake/config.toml`
//! - Linux: `~/.config/intake/config.toml`
//! - Windows: `%APPDATA%\intake\config.toml`
//!
//! `INTAKE_CONFIG` overrides the location. Loading and saving live in the
//! infrastructure crate; this module only defines the shape and its checks.

use crate::analysis::DEFAULT_MIN_ANSWER_LENGTH;
use crate::error::{IntakeError, Result};
use crate::language::Language;
use crate::question::DEFAULT_MAX_QUESTIONS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for an intake deployment. Every field has a default, so an empty
/// file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeSettings {
    /// Cap on assessment questions per candidate.
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,

    /// Minimum trimmed character count for an answer's length points.
    #[serde(default = "default_min_answer_length")]
    pub min_answer_length: usize,

    /// Language code used before any input has been seen.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Override for where completed candidate records are stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Extra question-bank entries, layered over the built-in ones.
    #[serde(default, rename = "technology", skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<TechnologyQuestions>,
}

fn default_max_questions() -> usize {
    DEFAULT_MAX_QUESTIONS
}

fn default_min_answer_length() -> usize {
    DEFAULT_MIN_ANSWER_LENGTH
}

fn default_language() -> String {
    Language::En.code().to_string()
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            max_questions: default_max_questions(),
            min_answer_length: default_min_answer_length(),
            default_language: default_language(),
            data_dir: None,
            technologies: Vec::new(),
        }
    }
}

impl IntakeSettings {
    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.max_questions == 0 {
            return Err(IntakeError::config("max_questions must be at least 1"));
        }

        if Language::from_code(&self.default_language).is_none() {
            return Err(IntakeError::config(format!(
                "unsupported default_language '{}'",
                self.default_language
            )));
        }

        for entry in &self.technologies {
            if entry.name.trim().is_empty() {
                return Err(IntakeError::config("technology entry without a name"));
            }
            if entry.is_empty() {
                return Err(IntakeError::config(format!(
                    "technology '{}' has no questions",
                    entry.name
                )));
            }
        }

        Ok(())
    }

    /// The configured default language, English if the code is unknown.
    pub fn language(&self) -> Language {
        Language::from_code(&self.default_language).unwrap_or_default()
    }
}

/// Custom questions for one technology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyQuestions {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub beginner: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intermediate: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advanced: Vec<String>,
}

impl TechnologyQuestions {
    pub fn is_empty(&self) -> bool {
        self.beginner.is_empty() && self.intermediate.is_empty() && self.advanced.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings: IntakeSettings = toml::from_str("").unwrap();
        assert_eq!(settings, IntakeSettings::default());
        assert_eq!(settings.max_questions, 5);
        assert_eq!(settings.min_answer_length, 10);
        assert_eq!(settings.language(), Language::En);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_technology_tables() {
        let settings: IntakeSettings = toml::from_str(
            r#"
max_questions = 3

[[technology]]
name = "Rust"
beginner = ["What is ownership?"]
"#,
        )
        .unwrap();

        assert_eq!(settings.max_questions, 3);
        assert_eq!(settings.technologies.len(), 1);
        assert_eq!(settings.technologies[0].name, "Rust");
        assert!(settings.technologies[0].intermediate.is_empty());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_questions() {
        let settings = IntakeSettings {
            max_questions: 0,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_validate_rejects_unknown_language() {
        let settings = IntakeSettings {
            default_language: "klingon".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().unwrap_err().is_config());
        assert_eq!(settings.language(), Language::En);
    }

    #[test]
    fn test_validate_rejects_empty_technology() {
        let settings = IntakeSettings {
            technologies: vec![TechnologyQuestions {
                name: "Zig".to_string(),
                beginner: vec![],
                intermediate: vec![],
                advanced: vec![],
            }],
            ..Default::default()
        };
        assert!(settings.validate().unwrap_err().is_config());
    }
}
