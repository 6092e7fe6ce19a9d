//! Technical question bank and selection.

mod builtin;

pub mod bank;
pub mod selector;

pub use bank::{QuestionBank, Tier, experience_tier_from_years, generic_questions};
pub use selector::{DEFAULT_MAX_QUESTIONS, PLACEHOLDER_TECHNOLOGY, select_questions};
