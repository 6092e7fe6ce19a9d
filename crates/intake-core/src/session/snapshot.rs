//! Read-only views of a session for presentation layers.

use super::model::{CandidateFields, Session};
use super::stage::{Stage, TOTAL_STAGES};
use crate::analysis::primary_emotion_emoji;
use crate::language::Language;
use serde::{Deserialize, Serialize};

/// How many technologies a summary lists before collapsing the rest.
pub const SUMMARY_TECH_LIMIT: usize = 5;

/// Candidate details suitable for a sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub name: Option<String>,
    /// e.g. `"5 years"`
    pub experience: Option<String>,
    pub desired_position: Option<String>,
    /// First few technologies, then `"+N more"`.
    pub tech_stack: Option<String>,
}

impl CandidateSummary {
    pub fn from_fields(fields: &CandidateFields) -> Self {
        Self {
            name: fields.name.clone(),
            experience: fields.experience.map(|years| format!("{years} years")),
            desired_position: fields.desired_position.clone(),
            tech_stack: fields.tech_stack.as_deref().map(summarize_tech_stack),
        }
    }
}

fn summarize_tech_stack(techs: &[String]) -> String {
    let shown = techs
        .iter()
        .take(SUMMARY_TECH_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    match techs.len().saturating_sub(SUMMARY_TECH_LIMIT) {
        0 => shown,
        hidden => format!("{shown} +{hidden} more"),
    }
}

/// Progress and summary at one point in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub stage: Stage,
    pub stage_name: String,
    pub stage_icon: String,
    /// `Some(n)` for "Stage n of `total_stages`"; `None` once ended.
    pub stage_ordinal: Option<u8>,
    pub total_stages: u8,
    pub completion_percent: u8,
    pub language: Language,
    /// 1-based number of the question being asked, with the total.
    pub question_progress: Option<(usize, usize)>,
    /// Emoji for the dominant emotion of the latest recorded answer.
    pub last_answer_mood: Option<String>,
    pub summary: CandidateSummary,
}

impl Session {
    pub fn snapshot(&self) -> SessionSnapshot {
        let question_progress = (self.stage == Stage::TechnicalQuestions)
            .then(|| (self.question_index + 1, self.questions.len()));

        SessionSnapshot {
            session_id: self.id.clone(),
            stage: self.stage,
            stage_name: self.stage.display_name().to_string(),
            stage_icon: self.stage.icon().to_string(),
            stage_ordinal: self.stage.ordinal(),
            total_stages: TOTAL_STAGES,
            completion_percent: self.completion_percentage(),
            language: self.language,
            question_progress,
            last_answer_mood: self
                .answers
                .last()
                .map(|answer| primary_emotion_emoji(&answer.emotions).to_string()),
            summary: CandidateSummary::from_fields(&self.fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn techs(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("t{i}")).collect()
    }

    #[test]
    fn test_tech_stack_summary_truncates() {
        assert_eq!(summarize_tech_stack(&techs(3)), "t1, t2, t3");
        assert_eq!(summarize_tech_stack(&techs(5)), "t1, t2, t3, t4, t5");
        assert_eq!(summarize_tech_stack(&techs(7)), "t1, t2, t3, t4, t5 +2 more");
    }

    #[test]
    fn test_summary_formats_experience() {
        let fields = CandidateFields {
            experience: Some(3.5),
            ..Default::default()
        };
        assert_eq!(
            CandidateSummary::from_fields(&fields).experience.as_deref(),
            Some("3.5 years")
        );

        let fields = CandidateFields {
            experience: Some(5.0),
            ..Default::default()
        };
        assert_eq!(
            CandidateSummary::from_fields(&fields).experience.as_deref(),
            Some("5 years")
        );
    }

    #[test]
    fn test_snapshot_question_progress() {
        let mut session = Session::default();
        assert_eq!(session.snapshot().question_progress, None);
        assert_eq!(session.snapshot().last_answer_mood, None);
        assert_eq!(session.snapshot().stage_ordinal, Some(1));

        session.stage = Stage::TechnicalQuestions;
        session.questions = vec!["a".into(), "b".into()];
        session.question_index = 1;
        let snapshot = session.snapshot();
        assert_eq!(snapshot.question_progress, Some((2, 2)));
        assert_eq!(snapshot.completion_percent, 80);
        assert_eq!(snapshot.stage_name, "Technical Assessment");
    }
}
