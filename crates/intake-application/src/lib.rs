//! Application layer for intake.
//!
//! Coordinates the domain core with a candidate store: live sessions,
//! persistence on completion, and reporting over stored candidates.

pub mod analytics;
pub mod intake_usecase;
pub mod session;

pub use analytics::{ExportBundle, SummaryStats, export_bundle, summary_stats};
pub use intake_usecase::{IntakeUseCase, TurnOutcome};
