//! Conversation stages.

use serde::{Deserialize, Serialize};

/// Number of stages shown to the candidate as "Stage n of N".
pub const TOTAL_STAGES: u8 = 10;

/// One step of the intake conversation.
///
/// Stages advance strictly in declaration order, except for `Ended`, which is
/// reachable from every other stage when the candidate says goodbye.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    #[default]
    Greeting,
    CollectingName,
    CollectingEmail,
    CollectingPhone,
    CollectingExperience,
    CollectingPosition,
    CollectingLocation,
    CollectingTechStack,
    TechnicalQuestions,
    Completed,
    Ended,
}

impl Stage {
    /// Fixed progress percentage. `Ended` has none of its own.
    pub fn completion_percentage(&self) -> Option<u8> {
        match self {
            Self::Greeting => Some(0),
            Self::CollectingName => Some(10),
            Self::CollectingEmail => Some(20),
            Self::CollectingPhone => Some(30),
            Self::CollectingExperience => Some(40),
            Self::CollectingPosition => Some(50),
            Self::CollectingLocation => Some(60),
            Self::CollectingTechStack => Some(70),
            Self::TechnicalQuestions => Some(80),
            Self::Completed => Some(100),
            Self::Ended => None,
        }
    }

    /// 1-based position among the regular stages.
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            Self::Greeting => Some(1),
            Self::CollectingName => Some(2),
            Self::CollectingEmail => Some(3),
            Self::CollectingPhone => Some(4),
            Self::CollectingExperience => Some(5),
            Self::CollectingPosition => Some(6),
            Self::CollectingLocation => Some(7),
            Self::CollectingTechStack => Some(8),
            Self::TechnicalQuestions => Some(9),
            Self::Completed => Some(10),
            Self::Ended => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Greeting => "Initial Greeting",
            Self::CollectingName => "Collecting Name",
            Self::CollectingEmail => "Collecting Email",
            Self::CollectingPhone => "Collecting Phone",
            Self::CollectingExperience => "Collecting Experience",
            Self::CollectingPosition => "Collecting Position",
            Self::CollectingLocation => "Collecting Location",
            Self::CollectingTechStack => "Collecting Tech Stack",
            Self::TechnicalQuestions => "Technical Assessment",
            Self::Completed => "Assessment Complete",
            Self::Ended => "Conversation Ended",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Greeting => "👋",
            Self::CollectingName => "👤",
            Self::CollectingEmail => "📧",
            Self::CollectingPhone => "📱",
            Self::CollectingExperience => "⭐",
            Self::CollectingPosition => "💼",
            Self::CollectingLocation => "📍",
            Self::CollectingTechStack => "💻",
            Self::TechnicalQuestions => "🧠",
            Self::Completed => "✅",
            Self::Ended => "🚪",
        }
    }

    /// Whether no further fields can be collected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Ended)
    }
}
