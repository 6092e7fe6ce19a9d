//! Session domain model.
//!
//! A [`Session`] is one candidate conversation. It is a plain value: the stage
//! machine takes it, mutates it for one turn and hands it back, so independent
//! sessions never share state.

use super::stage::Stage;
use crate::analysis::{Emotion, QualityResult, SentimentResult};
use crate::language::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validated candidate fields.
///
/// Each field is written once, by the stage that collects it; a `None` means
/// that stage has not been passed yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Years of professional experience, within `0..=50`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Technologies in the order the candidate listed them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
}

/// One recorded answer to an assessment question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    pub answer_text: String,
    /// RFC 3339
    pub timestamp: String,
    pub sentiment: SentimentResult,
    pub quality: QualityResult,
    #[serde(default)]
    pub emotions: Vec<Emotion>,
}

/// One candidate conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// When the session was created (RFC 3339)
    pub started_at: String,
    pub stage: Stage,
    /// The stage the candidate left from, once `stage` is `Ended`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_from: Option<Stage>,
    #[serde(default)]
    pub fields: CandidateFields,
    /// Assessment questions, fixed once generated.
    #[serde(default)]
    pub questions: Vec<String>,
    /// Cursor into `questions`; always equals `answers.len()`.
    #[serde(default)]
    pub question_index: usize,
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
    #[serde(default)]
    pub language: Language,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: Utc::now().to_rfc3339(),
            stage: Stage::Greeting,
            ended_from: None,
            fields: CandidateFields::default(),
            questions: Vec::new(),
            question_index: 0,
            answers: Vec::new(),
            language,
        }
    }

    /// The question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.question_index).map(String::as_str)
    }

    /// Progress percentage; an ended session reports the stage it left from.
    pub fn completion_percentage(&self) -> u8 {
        match self.stage {
            Stage::Ended => self
                .ended_from
                .and_then(|stage| stage.completion_percentage())
                .unwrap_or(0),
            stage => stage.completion_percentage().unwrap_or(0),
        }
    }

    /// Minutes since `started_at`, rounded to two decimals.
    pub fn duration_minutes(&self, now: DateTime<Utc>) -> f64 {
        let Ok(started) = DateTime::parse_from_rfc3339(&self.started_at) else {
            tracing::warn!(session_id = %self.id, "Unparseable session start time");
            return 0.0;
        };
        let seconds = (now - started.with_timezone(&Utc)).num_milliseconds() as f64 / 1000.0;
        (seconds.max(0.0) / 60.0 * 100.0).round() / 100.0
    }

    /// The finalized record handed to persistence.
    pub fn to_candidate_record(&self, now: DateTime<Utc>) -> CandidateRecord {
        CandidateRecord {
            id: Uuid::new_v4().to_string(),
            session_id: self.id.clone(),
            submitted_at: now.to_rfc3339(),
            language: self.language,
            fields: self.fields.clone(),
            answers: self.answers.clone(),
            completion_percent: self.completion_percentage(),
            session_duration_minutes: self.duration_minutes(now),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Language::En)
    }
}

/// A finished candidate as persisted by a [`CandidateRepository`].
///
/// [`CandidateRepository`]: super::CandidateRepository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: String,
    pub session_id: String,
    /// RFC 3339
    pub submitted_at: String,
    pub language: Language,
    pub fields: CandidateFields,
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
    pub completion_percent: u8,
    #[serde(default)]
    pub session_duration_minutes: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_session_starts_at_greeting() {
        let session = Session::new(Language::Fr);
        assert_eq!(session.stage, Stage::Greeting);
        assert_eq!(session.language, Language::Fr);
        assert_eq!(session.fields, CandidateFields::default());
        assert!(session.current_question().is_none());
        assert!(Uuid::parse_str(&session.id).is_ok());
    }

    #[test]
    fn test_ended_session_reports_previous_progress() {
        let mut session = Session::default();
        session.stage = Stage::Ended;
        session.ended_from = Some(Stage::CollectingPhone);
        assert_eq!(session.completion_percentage(), 30);
    }

    #[test]
    fn test_duration_minutes() {
        let session = Session::default();
        let started = DateTime::parse_from_rfc3339(&session.started_at)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(session.duration_minutes(started + Duration::seconds(90)), 1.5);
        assert_eq!(session.duration_minutes(started - Duration::seconds(5)), 0.0);
    }

    #[test]
    fn test_candidate_record_copies_session() {
        let mut session = Session::default();
        session.stage = Stage::Completed;
        session.fields.name = Some("Ada Lovelace".to_string());

        let record = session.to_candidate_record(Utc::now());
        assert_eq!(record.session_id, session.id);
        assert_ne!(record.id, session.id);
        assert_eq!(record.completion_percent, 100);
        assert_eq!(record.fields.name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_empty_fields_serialize_compactly() {
        let json = serde_json::to_string(&CandidateFields::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
