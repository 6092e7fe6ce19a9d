//! Heuristic answer-quality scoring.
//!
//! The score measures thoroughness, not correctness. Each check adds its
//! points independently of the others.

use serde::{Deserialize, Serialize};

/// Minimum trimmed character count for an answer to earn the length points.
pub const DEFAULT_MIN_ANSWER_LENGTH: usize = 10;

/// Terms whose presence earns the technical-vocabulary bonus.
pub const TECHNICAL_TERMS: &[&str] = &[
    "algorithm",
    "database",
    "framework",
    "api",
    "function",
    "class",
    "object",
];

pub const MORE_DETAIL_FEEDBACK: &str = "Try to provide more detailed answers";
pub const TECHNICAL_TERMS_FEEDBACK: &str = "Great use of technical terminology!";

const LENGTH_POINTS: u32 = 30;
const WORD_COUNT_POINTS: u32 = 25;
const CAPITALIZATION_POINTS: u32 = 10;
const PUNCTUATION_POINTS: u32 = 15;
const TECHNICAL_TERM_POINTS: u32 = 20;
const MIN_WORDS: usize = 5;

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
pub enum QualityLevel {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl QualityLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else if score >= 40 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }

    /// Emoji used to acknowledge an accepted answer.
    pub fn ack_emoji(&self) -> &'static str {
        match self {
            Self::Excellent => "⭐",
            Self::Good => "👍",
            Self::Fair | Self::NeedsImprovement => "👌",
        }
    }
}

/// Quality verdict for one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityResult {
    pub level: QualityLevel,
    /// Score in `0..=100`.
    pub score: u32,
    pub word_count: usize,
    /// Advisory messages, in the order the checks produced them.
    pub feedback: Vec<String>,
}

/// Scores `text` against the additive quality checks.
pub fn analyze_quality(text: &str, min_length: usize) -> QualityResult {
    let word_count = text.split_whitespace().count();
    let char_count = text.trim().chars().count();
    let lowered = text.to_lowercase();

    let mut score = 0;
    let mut feedback = Vec::new();

    if char_count >= min_length {
        score += LENGTH_POINTS;
    } else {
        feedback.push(MORE_DETAIL_FEEDBACK.to_string());
    }

    if word_count >= MIN_WORDS {
        score += WORD_COUNT_POINTS;
    }

    if text.chars().any(char::is_uppercase) {
        score += CAPITALIZATION_POINTS;
    }

    if text.contains(['.', '!', '?']) {
        score += PUNCTUATION_POINTS;
    }

    if TECHNICAL_TERMS.iter().any(|term| lowered.contains(term)) {
        score += TECHNICAL_TERM_POINTS;
        feedback.push(TECHNICAL_TERMS_FEEDBACK.to_string());
    }

    QualityResult {
        level: QualityLevel::from_score(score),
        score,
        word_count,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_marks() {
        let result = analyze_quality(
            "A hash function maps keys to buckets in the database index.",
            DEFAULT_MIN_ANSWER_LENGTH,
        );
        assert_eq!(result.score, 100);
        assert_eq!(result.level, QualityLevel::Excellent);
        assert_eq!(result.feedback, vec![TECHNICAL_TERMS_FEEDBACK.to_string()]);
    }

    #[test]
    fn test_short_answer_gets_feedback() {
        let result = analyze_quality("yes", DEFAULT_MIN_ANSWER_LENGTH);
        assert_eq!(result.score, 0);
        assert_eq!(result.word_count, 1);
        assert_eq!(result.level, QualityLevel::NeedsImprovement);
        assert_eq!(result.feedback, vec![MORE_DETAIL_FEEDBACK.to_string()]);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(QualityLevel::from_score(100), QualityLevel::Excellent);
        assert_eq!(QualityLevel::from_score(80), QualityLevel::Excellent);
        assert_eq!(QualityLevel::from_score(79), QualityLevel::Good);
        assert_eq!(QualityLevel::from_score(60), QualityLevel::Good);
        assert_eq!(QualityLevel::from_score(59), QualityLevel::Fair);
        assert_eq!(QualityLevel::from_score(40), QualityLevel::Fair);
        assert_eq!(QualityLevel::from_score(39), QualityLevel::NeedsImprovement);
    }

    #[test]
    fn test_each_check_never_lowers_score() {
        let base = "it uses a hash map to cache results";
        let base_score = analyze_quality(base, DEFAULT_MIN_ANSWER_LENGTH).score;

        let variants = [
            format!("{base}."),
            format!("It{}", &base[2..]),
            format!("{base} behind an api"),
        ];
        for variant in variants {
            let score = analyze_quality(&variant, DEFAULT_MIN_ANSWER_LENGTH).score;
            assert!(score > base_score, "{variant:?} scored {score} vs {base_score}");
        }
    }

    #[test]
    fn test_configurable_min_length() {
        assert_eq!(analyze_quality("short one", 5).score, 30);
        assert_eq!(analyze_quality("short one", 50).score, 0);
    }
}
