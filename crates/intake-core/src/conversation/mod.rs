//! Conversation orchestration.
//!
//! # Module Structure
//!
//! - `machine`: The stage machine (`StageMachine`)
//! - `ending`: Ending-keyword detection

mod ending;
mod machine;

pub use ending::{ENDING_KEYWORDS, is_ending_message};
pub use machine::{StageMachine, parse_tech_stack};
