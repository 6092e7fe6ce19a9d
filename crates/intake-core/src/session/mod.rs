//! Session domain module.
//!
//! # Module Structure
//!
//! - `stage`: Conversation stages and their presentation descriptors (`Stage`)
//! - `model`: The session value and its records (`Session`, `AnswerRecord`, `CandidateRecord`)
//! - `snapshot`: Read-only progress views (`SessionSnapshot`, `CandidateSummary`)
//! - `repository`: Persistence interface for completed candidates

mod model;
mod repository;
mod snapshot;
mod stage;

pub use model::{AnswerRecord, CandidateFields, CandidateRecord, Session};
pub use repository::CandidateRepository;
pub use snapshot::{CandidateSummary, SUMMARY_TECH_LIMIT, SessionSnapshot};
pub use stage::{Stage, TOTAL_STAGES};
