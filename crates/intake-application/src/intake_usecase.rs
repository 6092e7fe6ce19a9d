//! Intake use case.
//!
//! `IntakeUseCase` owns the live sessions, runs each turn through the
//! [`StageMachine`] and hands the finished candidate to the
//! [`CandidateRepository`] the moment a session reaches `completed`.

use crate::session::SessionCache;
use anyhow::{Context, Result};
use chrono::Utc;
use intake_core::config::IntakeSettings;
use intake_core::conversation::StageMachine;
use intake_core::error::IntakeError;
use intake_core::language::Language;
use intake_core::session::{CandidateRecord, CandidateRepository, Session, SessionSnapshot, Stage};
use std::sync::Arc;

/// The result of one candidate turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub reply: String,
    pub snapshot: SessionSnapshot,
    /// The record persisted by this turn, if it completed the assessment.
    pub saved_record: Option<CandidateRecord>,
}

/// Use case for running candidate intake conversations.
///
/// # Responsibilities
///
/// - Creating sessions in the configured default language
/// - Applying turns to the right session and nothing else
/// - Persisting each completed candidate exactly once
pub struct IntakeUseCase {
    machine: StageMachine,
    sessions: SessionCache,
    candidate_repository: Arc<dyn CandidateRepository>,
    default_language: Language,
}

impl IntakeUseCase {
    pub fn new(settings: &IntakeSettings, candidate_repository: Arc<dyn CandidateRepository>) -> Self {
        Self::with_machine(StageMachine::new(settings), candidate_repository)
    }

    /// Uses a pre-built machine, e.g. one with custom collaborators.
    ///
    /// New sessions start in the machine's default language.
    pub fn with_machine(
        machine: StageMachine,
        candidate_repository: Arc<dyn CandidateRepository>,
    ) -> Self {
        Self {
            default_language: machine.default_language(),
            machine,
            sessions: SessionCache::new(),
            candidate_repository,
        }
    }

    pub fn machine(&self) -> &StageMachine {
        &self.machine
    }

    /// Starts a new session and returns its id.
    pub async fn start_session(&self) -> String {
        let session = Session::new(self.default_language);
        let session_id = session.id.clone();
        self.sessions.insert(session).await;

        tracing::info!(session_id = %session_id, "Started intake session");
        session_id
    }

    /// Applies one candidate message to a session.
    ///
    /// When this turn moves the session into `completed`, the candidate
    /// record is saved before returning. The session keeps its new state
    /// even if saving fails; the error is returned to the caller.
    pub async fn submit(&self, session_id: &str, input: &str) -> Result<TurnOutcome> {
        let machine = &self.machine;
        let (reply, snapshot, record) = self
            .sessions
            .update(session_id, |session| {
                let before = session.stage;
                let reply = machine.handle_turn(session, input);
                let completed_now = before != Stage::Completed && session.stage == Stage::Completed;
                let record = completed_now.then(|| session.to_candidate_record(Utc::now()));
                (reply, session.snapshot(), record)
            })
            .await
            .ok_or_else(|| IntakeError::not_found("session", session_id))?;

        tracing::debug!(
            session_id = %session_id,
            stage = %snapshot.stage,
            language = %snapshot.language,
            "Processed turn"
        );

        let saved_record = match record {
            Some(record) => {
                self.candidate_repository
                    .save(&record)
                    .await
                    .with_context(|| format!("Failed to save candidate for session {}", session_id))?;
                tracing::info!(
                    session_id = %session_id,
                    candidate_id = %record.id,
                    answers = record.answers.len(),
                    "Persisted completed candidate"
                );
                Some(record)
            }
            None => None,
        };

        Ok(TurnOutcome {
            reply,
            snapshot,
            saved_record,
        })
    }

    /// Returns the progress view of a session.
    pub async fn snapshot(&self, session_id: &str) -> Result<SessionSnapshot> {
        self.sessions
            .get(session_id)
            .await
            .map(|session| session.snapshot())
            .ok_or_else(|| IntakeError::not_found("session", session_id).into())
    }

    /// Returns a copy of the full session.
    pub async fn session(&self, session_id: &str) -> Option<Session> {
        self.sessions.get(session_id).await
    }

    /// Drops a session from memory; stored candidates are untouched.
    pub async fn close_session(&self, session_id: &str) -> Option<Session> {
        let removed = self.sessions.remove(session_id).await;
        if removed.is_some() {
            tracing::info!(session_id = %session_id, "Closed intake session");
        }
        removed
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.len().await
    }
}
