//! Language detection and localized prompt text.

pub mod catalog;
pub mod detector;

pub use catalog::{MessageKey, render, template};
pub use detector::{HeuristicLanguageDetector, LanguageDetector, detect_or_default};

use serde::{Deserialize, Serialize};

/// Languages the assistant can greet in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Hi,
    Zh,
    Ja,
    Ko,
    Pt,
    It,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Hi => "hi",
            Self::Zh => "zh",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Pt => "pt",
            Self::It => "it",
        }
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::Hi => "Hindi",
            Self::Zh => "Chinese",
            Self::Ja => "Japanese",
            Self::Ko => "Korean",
            Self::Pt => "Portuguese",
            Self::It => "Italian",
        }
    }

    /// Parses a code, returning `None` for anything unsupported.
    pub fn from_code(code: &str) -> Option<Self> {
        code.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_code_round_trip() {
        for language in Language::iter() {
            assert_eq!(Language::from_code(language.code()), Some(language));
            assert_eq!(language.to_string(), language.code());
        }
        assert_eq!(Language::iter().count(), 10);
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_string(&Language::Ko).unwrap(), "\"ko\"");
    }
}
