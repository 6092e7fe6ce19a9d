//! Aggregate statistics and exports over stored candidates.

use chrono::Utc;
use intake_core::analysis::SentimentLabel;
use intake_core::language::Language;
use intake_core::session::{AnswerRecord, CandidateFields, CandidateRecord};
use serde::Serialize;
use std::collections::HashMap;

pub const TOP_POSITIONS: usize = 5;
pub const TOP_TECHNOLOGIES: usize = 10;

/// Answer counts by sentiment direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_candidates: usize,
    pub average_experience: Option<f64>,
    pub min_experience: Option<f64>,
    pub max_experience: Option<f64>,
    /// Most requested positions, most frequent first.
    pub top_positions: Vec<(String, usize)>,
    /// Most listed technologies, most frequent first.
    pub top_technologies: Vec<(String, usize)>,
    /// Percentage of candidates with at least one recorded answer.
    pub completion_rate: f64,
    pub sentiment_distribution: SentimentDistribution,
}

/// Summarizes `records`. An empty slice yields zero counts and no experience figures.
pub fn summary_stats(records: &[CandidateRecord]) -> SummaryStats {
    let experiences: Vec<f64> = records.iter().filter_map(|r| r.fields.experience).collect();

    let average_experience = (!experiences.is_empty())
        .then(|| experiences.iter().sum::<f64>() / experiences.len() as f64);
    let min_experience = experiences.iter().copied().reduce(f64::min);
    let max_experience = experiences.iter().copied().reduce(f64::max);

    let positions = records
        .iter()
        .filter_map(|r| r.fields.desired_position.as_deref());
    let technologies = records
        .iter()
        .filter_map(|r| r.fields.tech_stack.as_deref())
        .flatten()
        .map(String::as_str);

    let answered = records.iter().filter(|r| !r.answers.is_empty()).count();
    let completion_rate = if records.is_empty() {
        0.0
    } else {
        answered as f64 / records.len() as f64 * 100.0
    };

    SummaryStats {
        total_candidates: records.len(),
        average_experience,
        min_experience,
        max_experience,
        top_positions: top_counts(positions, TOP_POSITIONS),
        top_technologies: top_counts(technologies, TOP_TECHNOLOGIES),
        completion_rate,
        sentiment_distribution: sentiment_distribution(records.iter().flat_map(|r| &r.answers)),
    }
}

/// Counts occurrences and keeps the `limit` most frequent, ties alphabetical.
fn top_counts<'a>(items: impl Iterator<Item = &'a str>, limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_default() += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(item, count)| (item.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

fn sentiment_distribution<'a>(answers: impl Iterator<Item = &'a AnswerRecord>) -> SentimentDistribution {
    answers.fold(SentimentDistribution::default(), |mut dist, answer| {
        match answer.sentiment.label {
            SentimentLabel::VeryPositive | SentimentLabel::Positive => dist.positive += 1,
            SentimentLabel::Neutral => dist.neutral += 1,
            SentimentLabel::Negative | SentimentLabel::VeryNegative => dist.negative += 1,
        }
        dist
    })
}

/// A candidate as it appears in an export; the storage id is left out.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedCandidate<'a> {
    pub session_id: &'a str,
    pub submitted_at: &'a str,
    pub language: Language,
    pub fields: &'a CandidateFields,
    pub answers: &'a [AnswerRecord],
    pub completion_percent: u8,
    pub session_duration_minutes: f64,
}

impl<'a> From<&'a CandidateRecord> for ExportedCandidate<'a> {
    fn from(record: &'a CandidateRecord) -> Self {
        Self {
            session_id: &record.session_id,
            submitted_at: &record.submitted_at,
            language: record.language,
            fields: &record.fields,
            answers: &record.answers,
            completion_percent: record.completion_percent,
            session_duration_minutes: record.session_duration_minutes,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportBundle<'a> {
    /// RFC 3339
    pub export_timestamp: String,
    pub total_candidates: usize,
    pub candidates: Vec<ExportedCandidate<'a>>,
}

pub fn export_bundle(records: &[CandidateRecord]) -> ExportBundle<'_> {
    ExportBundle {
        export_timestamp: Utc::now().to_rfc3339(),
        total_candidates: records.len(),
        candidates: records.iter().map(ExportedCandidate::from).collect(),
    }
}
