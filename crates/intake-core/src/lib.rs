//! Domain core of the candidate-intake assistant.
//!
//! Everything here is synchronous and free of I/O apart from the
//! [`session::CandidateRepository`] trait, which infrastructure implements.
//!
//! # Module Structure
//!
//! - `validation`: Pure candidate-field validators
//! - `analysis`: Answer sentiment, quality and emotion scoring
//! - `question`: Question bank and balanced selection
//! - `language`: Language detection and the localized message catalog
//! - `session`: Session model, stages, snapshots and the repository trait
//! - `conversation`: The stage machine
//! - `config`: Deployment settings
//! - `error`: Error type shared by the outer crates

pub mod analysis;
pub mod config;
pub mod conversation;
pub mod error;
pub mod language;
pub mod question;
pub mod session;
pub mod validation;

// Re-export common types
pub use config::{IntakeSettings, TechnologyQuestions};
pub use conversation::StageMachine;
pub use error::{IntakeError, Result};
pub use session::{Session, Stage};
