//! Free-text answer analysis.
//!
//! # Module Structure
//!
//! - `sentiment`: polarity/subjectivity scoring and its discretization
//! - `quality`: additive heuristic quality score
//! - `emotion`: keyword emotion tagging

pub mod emotion;
pub mod quality;
pub mod sentiment;

pub use emotion::{Emotion, detect_emotions, primary_emotion_emoji};
pub use quality::{DEFAULT_MIN_ANSWER_LENGTH, QualityLevel, QualityResult, analyze_quality};
pub use sentiment::{
    AnalysisError, LexiconSentiment, SentimentBackend, SentimentLabel, SentimentResult,
    SentimentScore, analyze_sentiment,
};

use std::sync::Arc;

/// Everything the analyzer learned about one answer.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AnswerAnalysis {
    pub sentiment: SentimentResult,
    pub quality: QualityResult,
    pub emotions: Vec<Emotion>,
}

/// Scores answers for sentiment, quality and emotion.
#[derive(Clone)]
pub struct TextQualityAnalyzer {
    sentiment_backend: Arc<dyn SentimentBackend>,
    min_answer_length: usize,
}

impl TextQualityAnalyzer {
    pub fn new(sentiment_backend: Arc<dyn SentimentBackend>, min_answer_length: usize) -> Self {
        Self {
            sentiment_backend,
            min_answer_length,
        }
    }

    pub fn min_answer_length(&self) -> usize {
        self.min_answer_length
    }

    pub fn analyze(&self, text: &str) -> AnswerAnalysis {
        AnswerAnalysis {
            sentiment: analyze_sentiment(self.sentiment_backend.as_ref(), text),
            quality: analyze_quality(text, self.min_answer_length),
            emotions: detect_emotions(text),
        }
    }
}

impl Default for TextQualityAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(LexiconSentiment), DEFAULT_MIN_ANSWER_LENGTH)
    }
}

impl std::fmt::Debug for TextQualityAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextQualityAnalyzer")
            .field("min_answer_length", &self.min_answer_length)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_combines_all_scores() {
        let analysis = TextQualityAnalyzer::default()
            .analyze("I am confident this algorithm is excellent.");
        assert_eq!(analysis.quality.level, QualityLevel::Excellent);
        assert_eq!(analysis.sentiment.label, SentimentLabel::VeryPositive);
        assert_eq!(analysis.emotions, vec![Emotion::Confident, Emotion::Satisfied]);
    }
}
