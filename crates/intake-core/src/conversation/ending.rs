//! Detection of "I want to leave" input.

/// Words and phrases that end the conversation from any stage.
pub const ENDING_KEYWORDS: &[&str] = &[
    "goodbye",
    "bye",
    "exit",
    "quit",
    "thank you",
    "thanks",
    "done",
    "finish",
];

/// Returns true if `input` contains an ending keyword anywhere, ignoring case.
///
/// Matching is by substring, so `"goodbyes"` and `"I'm finished"` also end.
pub fn is_ending_message(input: &str) -> bool {
    let lowered = input.to_lowercase();
    ENDING_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_match_case_insensitively() {
        for input in ["thanks, goodbye", "Bye!", "I'm DONE", "Thank you", "exit", "quit now"] {
            assert!(is_ending_message(input), "{input:?} should end");
        }
    }

    #[test]
    fn test_keywords_inside_other_words_match() {
        for input in [
            "I'm finished here",
            "donex",
            "goodbyes",
            "Exiting early is handled by a guard.",
            "Abandoned carts",
        ] {
            assert!(is_ending_message(input), "{input:?} should end");
        }
    }

    #[test]
    fn test_ordinary_answers_do_not_end() {
        for input in [
            "A byte is eight bits.",
            "Thank   you",
            "Software Developer",
            "Python, SQL",
            "",
        ] {
            assert!(!is_ending_message(input), "{input:?} should not end");
        }
    }
}
