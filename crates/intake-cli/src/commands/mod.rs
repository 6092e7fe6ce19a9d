pub mod analyze;
pub mod questions;
pub mod report;
pub mod technologies;
pub mod utils;
pub mod validate;
