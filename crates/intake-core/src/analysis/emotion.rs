//! Keyword-based emotion tagging. Informational only.

use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Emotion {
    Confident,
    Nervous,
    Excited,
    Frustrated,
    Satisfied,
    Neutral,
}

impl Emotion {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Confident => "💪",
            Self::Nervous => "😰",
            Self::Excited => "🎉",
            Self::Frustrated => "😤",
            Self::Satisfied => "✨",
            Self::Neutral => "😐",
        }
    }
}

const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Confident,
        &["confident", "sure", "certain", "experienced", "skilled", "expert"],
    ),
    (
        Emotion::Nervous,
        &["nervous", "worried", "anxious", "uncertain", "unsure", "confused"],
    ),
    (
        Emotion::Excited,
        &["excited", "enthusiastic", "passionate", "motivated", "eager"],
    ),
    (
        Emotion::Frustrated,
        &["frustrated", "annoyed", "difficult", "challenging", "stuck"],
    ),
    (
        Emotion::Satisfied,
        &["good", "great", "excellent", "perfect", "wonderful", "amazing"],
    ),
];

/// Returns every emotion whose keywords occur in `text`, or `[Neutral]`.
pub fn detect_emotions(text: &str) -> Vec<Emotion> {
    let lowered = text.to_lowercase();
    let detected: Vec<Emotion> = EMOTION_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(emotion, _)| *emotion)
        .collect();

    if detected.is_empty() {
        vec![Emotion::Neutral]
    } else {
        detected
    }
}

/// Emoji for the first detected emotion.
pub fn primary_emotion_emoji(emotions: &[Emotion]) -> &'static str {
    emotions.first().map_or(Emotion::Neutral.emoji(), Emotion::emoji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_is_neutral() {
        assert_eq!(detect_emotions("I used a queue."), vec![Emotion::Neutral]);
    }

    #[test]
    fn test_multiple_emotions_in_table_order() {
        let emotions = detect_emotions("I was NERVOUS at first but the result was great");
        assert_eq!(emotions, vec![Emotion::Nervous, Emotion::Satisfied]);
        assert_eq!(primary_emotion_emoji(&emotions), "😰");
    }

    #[test]
    fn test_primary_emoji_defaults_to_neutral() {
        assert_eq!(primary_emotion_emoji(&[]), "😐");
    }
}
