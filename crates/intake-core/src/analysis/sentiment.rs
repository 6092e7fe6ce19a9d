//! Sentiment scoring for free-text answers.
//!
//! The core only owns the discretization of a polarity score into a
//! [`SentimentLabel`]. Producing the raw `(polarity, subjectivity)` pair is the
//! job of a [`SentimentBackend`]; [`LexiconSentiment`] is the built-in one.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Discrete sentiment bucket derived from polarity.
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
pub enum SentimentLabel {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl SentimentLabel {
    /// Buckets a polarity in `[-1, 1]`.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.3 {
            Self::VeryPositive
        } else if polarity > 0.1 {
            Self::Positive
        } else if polarity > -0.1 {
            Self::Neutral
        } else if polarity > -0.3 {
            Self::Negative
        } else {
            Self::VeryNegative
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::VeryPositive => "🌟",
            Self::Positive => "😊",
            Self::Neutral => "😐",
            Self::Negative => "😟",
            Self::VeryNegative => "😔",
        }
    }
}

/// Raw output of a sentiment backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Sentiment attached to an answer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Polarity in `[-1, 1]`, rounded to two decimals.
    pub polarity: f64,
    /// Subjectivity in `[0, 1]`, rounded to two decimals.
    pub subjectivity: f64,
    /// Absolute polarity.
    pub confidence: f64,
}

impl SentimentResult {
    /// The fallback used whenever a backend cannot score the text.
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            polarity: 0.0,
            subjectivity: 0.0,
            confidence: 0.0,
        }
    }

    fn from_score(score: SentimentScore) -> Self {
        // Bucket on the unrounded value; rounding is for reporting only.
        let raw_polarity = score.polarity.clamp(-1.0, 1.0);
        let polarity = round2(raw_polarity);
        let subjectivity = round2(score.subjectivity.clamp(0.0, 1.0));
        Self {
            label: SentimentLabel::from_polarity(raw_polarity),
            polarity,
            subjectivity,
            confidence: polarity.abs(),
        }
    }
}

/// Failure reported by a sentiment backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("text is empty")]
    EmptyText,
    #[error("unsupported text: {0}")]
    Unsupported(String),
    #[error("sentiment backend failed: {0}")]
    Backend(String),
}

/// Produces a polarity/subjectivity pair for a piece of text.
pub trait SentimentBackend: Send + Sync {
    fn score(&self, text: &str) -> Result<SentimentScore, AnalysisError>;
}

/// Scores `text` with `backend`, substituting neutral sentiment on any failure.
pub fn analyze_sentiment(backend: &dyn SentimentBackend, text: &str) -> SentimentResult {
    match backend.score(text) {
        Ok(score) if score.polarity.is_finite() && score.subjectivity.is_finite() => {
            SentimentResult::from_score(score)
        }
        Ok(score) => {
            tracing::warn!(?score, "Sentiment backend returned non-finite score, using neutral");
            SentimentResult::neutral()
        }
        Err(e) => {
            tracing::debug!(error = %e, "Sentiment backend failed, using neutral");
            SentimentResult::neutral()
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Lexicon backend
// ============================================================================

/// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("nice", 0.6, 1.0),
    ("fine", 0.42, 0.5),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("interesting", 0.5, 0.5),
    ("enthusiastic", 0.6, 0.8),
    ("passionate", 0.5, 0.9),
    ("eager", 0.25, 0.5),
    ("confident", 0.5, 0.8),
    ("comfortable", 0.4, 0.75),
    ("easy", 0.43, 0.83),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("strong", 0.43, 0.73),
    ("successful", 0.75, 0.95),
    ("effective", 0.6, 0.8),
    ("clean", 0.37, 0.69),
    ("elegant", 0.5, 0.85),
    ("robust", 0.3, 0.5),
    ("reliable", 0.3, 0.5),
    ("useful", 0.3, 0.1),
    ("helpful", 0.3, 0.2),
    ("proud", 0.8, 1.0),
    ("fun", 0.3, 0.2),
    ("impressive", 1.0, 1.0),
    ("powerful", 0.3, 1.0),
    ("sure", 0.5, 0.89),
    ("satisfied", 0.5, 1.0),
    ("challenging", 0.1, 0.5),
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("hate", -0.8, 0.9),
    ("difficult", -0.5, 1.0),
    ("hard", -0.29, 0.54),
    ("confusing", -0.3, 0.7),
    ("confused", -0.4, 0.7),
    ("frustrated", -0.6, 0.8),
    ("frustrating", -0.6, 0.8),
    ("annoying", -0.8, 0.9),
    ("annoyed", -0.6, 0.8),
    ("boring", -1.0, 1.0),
    ("slow", -0.3, 0.4),
    ("wrong", -0.5, 0.9),
    ("broken", -0.4, 0.4),
    ("unsure", -0.3, 0.9),
    ("uncertain", -0.2, 0.6),
    ("worried", -0.4, 0.8),
    ("nervous", -0.2, 0.5),
    ("anxious", -0.25, 0.75),
    ("stuck", -0.3, 0.4),
    ("failed", -0.5, 0.3),
    ("failure", -0.3, 0.3),
    ("buggy", -0.4, 0.6),
    ("messy", -0.4, 0.6),
    ("complicated", -0.4, 0.8),
    ("painful", -0.6, 0.8),
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("impossible", -0.67, 1.0),
    ("useless", -0.5, 0.2),
    ("weak", -0.375, 0.625),
    ("ugly", -0.7, 1.0),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("highly", 1.4),
    ("super", 1.4),
    ("so", 1.2),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "cannot", "hardly", "without"];

/// How many following words a negation reaches.
const NEGATION_WINDOW: usize = 3;

static DEFAULT_LEXICON: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    LEXICON
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect()
});

static DEFAULT_INTENSIFIERS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

static DEFAULT_NEGATIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATIONS.iter().copied().collect());

/// Word-lexicon sentiment scorer.
///
/// Each lexicon hit contributes its polarity and subjectivity, scaled by a
/// preceding intensifier and flipped (×-0.5) when a negation occurs within the
/// previous three words. The result is the mean over all hits; text without a
/// hit scores `(0, 0)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn is_negation(token: &str) -> bool {
        DEFAULT_NEGATIONS.contains(token) || token.ends_with("n't")
    }
}

impl SentimentBackend for LexiconSentiment {
    fn score(&self, text: &str) -> Result<SentimentScore, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyText);
        }

        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();
        let mut intensity = 1.0;
        let mut negation_left = 0usize;

        for token in Self::tokenize(text) {
            if Self::is_negation(&token) {
                negation_left = NEGATION_WINDOW;
                continue;
            }
            if let Some(factor) = DEFAULT_INTENSIFIERS.get(token.as_str()) {
                intensity *= factor;
                continue;
            }

            match DEFAULT_LEXICON.get(token.as_str()) {
                Some(&(polarity, subjectivity)) => {
                    let mut polarity = polarity * intensity;
                    if negation_left > 0 {
                        polarity *= -0.5;
                    }
                    polarities.push(polarity);
                    subjectivities.push((subjectivity * intensity).min(1.0));
                    negation_left = 0;
                }
                None => {
                    negation_left = negation_left.saturating_sub(1);
                }
            }
            intensity = 1.0;
        }

        if polarities.is_empty() {
            return Ok(SentimentScore {
                polarity: 0.0,
                subjectivity: 0.0,
            });
        }

        let count = polarities.len() as f64;
        Ok(SentimentScore {
            polarity: (polarities.iter().sum::<f64>() / count).clamp(-1.0, 1.0),
            subjectivity: (subjectivities.iter().sum::<f64>() / count).clamp(0.0, 1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingBackend;

    impl SentimentBackend for FailingBackend {
        fn score(&self, _text: &str) -> Result<SentimentScore, AnalysisError> {
            Err(AnalysisError::Backend("offline".to_string()))
        }
    }

    struct NanBackend;

    impl SentimentBackend for NanBackend {
        fn score(&self, _text: &str) -> Result<SentimentScore, AnalysisError> {
            Ok(SentimentScore {
                polarity: f64::NAN,
                subjectivity: 0.5,
            })
        }
    }

    #[test]
    fn test_label_buckets() {
        assert_eq!(SentimentLabel::from_polarity(0.31), SentimentLabel::VeryPositive);
        assert_eq!(SentimentLabel::from_polarity(0.3), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(0.11), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.09), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.1), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(-0.3), SentimentLabel::VeryNegative);
        assert_eq!(SentimentLabel::from_polarity(-1.0), SentimentLabel::VeryNegative);
    }

    struct FixedBackend(f64);

    impl SentimentBackend for FixedBackend {
        fn score(&self, _text: &str) -> Result<SentimentScore, AnalysisError> {
            Ok(SentimentScore {
                polarity: self.0,
                subjectivity: 0.5,
            })
        }
    }

    #[test]
    fn test_label_uses_unrounded_polarity() {
        let result = analyze_sentiment(&FixedBackend(0.304), "fine");
        assert_eq!(result.label, SentimentLabel::VeryPositive);
        assert_eq!(result.polarity, 0.3);

        let result = analyze_sentiment(&FixedBackend(-0.104), "meh");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.polarity, -0.1);
    }

    #[test]
    fn test_label_serializes_snake_case() {
        assert_eq!(SentimentLabel::VeryPositive.to_string(), "very_positive");
        let json = serde_json::to_string(&SentimentLabel::VeryNegative).unwrap();
        assert_eq!(json, "\"very_negative\"");
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let result = analyze_sentiment(&LexiconSentiment, "   ");
        assert_eq!(result, SentimentResult::neutral());
    }

    #[test]
    fn test_backend_failure_is_neutral() {
        assert_eq!(analyze_sentiment(&FailingBackend, "great"), SentimentResult::neutral());
        assert_eq!(analyze_sentiment(&NanBackend, "great"), SentimentResult::neutral());
    }

    #[test]
    fn test_positive_and_negative_text() {
        let positive = analyze_sentiment(&LexiconSentiment, "I really love this, it is great!");
        assert_eq!(positive.label, SentimentLabel::VeryPositive);
        assert!(positive.subjectivity > 0.0);

        let negative = analyze_sentiment(&LexiconSentiment, "That was a terrible, awful experience.");
        assert_eq!(negative.label, SentimentLabel::VeryNegative);
        assert!((negative.confidence - negative.polarity.abs()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let plain = LexiconSentiment.score("the design is good").unwrap();
        let negated = LexiconSentiment.score("the design is not good").unwrap();
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
    }

    #[test]
    fn test_text_without_hits_scores_zero() {
        let result = analyze_sentiment(&LexiconSentiment, "A hash map stores keys and values.");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.polarity, 0.0);
    }
}
