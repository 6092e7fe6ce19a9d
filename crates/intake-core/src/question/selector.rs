//! Balanced question selection over a tech stack.

use super::bank::{QuestionBank, experience_tier_from_years, generic_questions};

/// Default cap on the number of assessment questions.
pub const DEFAULT_MAX_QUESTIONS: usize = 5;

/// Technology name used when the stack is empty.
pub const PLACEHOLDER_TECHNOLOGY: &str = "your primary technology";

/// Picks an ordered, technology-balanced list of at most `max_total`
/// questions for `tech_stack` at the tier implied by `years`.
///
/// Every technology gets `max(1, max_total / n)` questions. When that
/// overshoots the cap, the first question of each technology is kept (in
/// stack order) and the remaining slots are backfilled from the rest in
/// generation order. A `max_total` of zero is treated as one.
pub fn select_questions(
    bank: &QuestionBank,
    tech_stack: &[String],
    years: f64,
    max_total: usize,
) -> Vec<String> {
    let max_total = max_total.max(1);

    if tech_stack.is_empty() {
        let mut fallback = generic_questions(PLACEHOLDER_TECHNOLOGY, 5);
        fallback.truncate(max_total);
        return fallback;
    }

    let tier = experience_tier_from_years(years);
    let per_tech = (max_total / tech_stack.len()).max(1);

    // (question, is first of its technology)
    let mut generated: Vec<(String, bool)> = Vec::new();
    for tech in tech_stack {
        let questions = bank.get_questions(tech, tier, per_tech);
        generated.extend(
            questions
                .into_iter()
                .enumerate()
                .map(|(i, question)| (question, i == 0)),
        );
    }

    let selected = if generated.len() > max_total {
        balance(generated, max_total)
    } else {
        generated.into_iter().map(|(question, _)| question).collect()
    };

    tracing::debug!(
        technologies = tech_stack.len(),
        tier = %tier,
        per_tech,
        selected = selected.len(),
        "Selected assessment questions"
    );

    selected
}

fn balance(generated: Vec<(String, bool)>, max_total: usize) -> Vec<String> {
    let (firsts, overflow): (Vec<_>, Vec<_>) =
        generated.into_iter().partition(|(_, is_first)| *is_first);

    let mut selected: Vec<String> = firsts.into_iter().map(|(question, _)| question).collect();
    let remaining = max_total.saturating_sub(selected.len());
    selected.extend(overflow.into_iter().take(remaining).map(|(question, _)| question));
    selected.truncate(max_total);
    selected
}
