//! Candidate repository trait.
//!
//! Defines the interface for persisting finished candidates.

use super::model::CandidateRecord;
use anyhow::Result;
use async_trait::async_trait;

/// An abstract store for completed candidate records.
///
/// The core hands over a record exactly once, when a session reaches
/// `completed`. Redaction or encryption of personal fields is the
/// implementation's concern.
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Stores `record`, replacing any record with the same id.
    async fn save(&self, record: &CandidateRecord) -> Result<()>;

    /// Finds a record by its id.
    ///
    /// - `Ok(Some(record))`: found
    /// - `Ok(None)`: no such record
    async fn find_by_id(&self, id: &str) -> Result<Option<CandidateRecord>>;

    /// Lists every stored record, oldest submission first.
    async fn list_all(&self) -> Result<Vec<CandidateRecord>>;

    /// Deletes a record. Deleting a missing record is not an error.
    async fn delete(&self, id: &str) -> Result<()>;
}
