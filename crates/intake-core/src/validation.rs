//! Candidate field validation.
//!
//! Every function here is pure: the same input always gives the same answer
//! and unparseable input is an ordinary `false`, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lower bound (inclusive) for years of experience.
pub const MIN_EXPERIENCE_YEARS: f64 = 0.0;
/// Upper bound (inclusive) for years of experience.
pub const MAX_EXPERIENCE_YEARS: f64 = 50.0;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{7,14}$").expect("phone pattern is a valid regex"));

/// Why an experience value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceError {
    /// The text is not a number at all.
    NotANumber,
    /// The number is outside `0..=50`.
    OutOfRange,
}

/// Returns true if `name` is at least two characters long and made of letters,
/// optionally separated by spaces, hyphens or apostrophes.
pub fn validate_name(name: &str) -> bool {
    if name.trim().chars().count() < 2 {
        return false;
    }

    let mut letters = name
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '\''))
        .peekable();

    letters.peek().is_some() && letters.all(char::is_alphabetic)
}

/// Returns true if `email` has the shape `local@domain.tld`.
///
/// Only the syntax is checked; the mailbox is never contacted.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns true if `phone` holds 8 to 15 digits with a non-zero leading digit,
/// optionally prefixed with `+`. Spaces, hyphens and parentheses are ignored.
pub fn validate_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    PHONE_PATTERN.is_match(&cleaned)
}

/// Parses years of experience, telling apart garbage from out-of-range values.
pub fn parse_experience(input: &str) -> Result<f64, ExperienceError> {
    let years: f64 = input
        .trim()
        .parse()
        .map_err(|_| ExperienceError::NotANumber)?;

    // NaN fails both comparisons and lands here too.
    if (MIN_EXPERIENCE_YEARS..=MAX_EXPERIENCE_YEARS).contains(&years) {
        Ok(years)
    } else {
        Err(ExperienceError::OutOfRange)
    }
}

/// Validates years of experience.
///
/// Returns `(true, years)` for a number within `0..=50`, otherwise `(false, 0.0)`.
pub fn validate_experience(input: &str) -> (bool, f64) {
    match parse_experience(input) {
        Ok(years) => (true, years),
        Err(_) => (false, 0.0),
    }
}

/// Returns true if the trimmed text has at least `min_chars` characters.
pub fn validate_min_length(text: &str, min_chars: usize) -> bool {
    text.trim().chars().count() >= min_chars
}
