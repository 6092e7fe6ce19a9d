//! Filesystem collaborators for the intake core.

pub mod json_candidate_repository;
pub mod paths;
pub mod storage;

pub use crate::json_candidate_repository::JsonCandidateRepository;
pub use crate::paths::IntakePaths;
pub use crate::storage::SettingsStore;
