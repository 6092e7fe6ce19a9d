//! Technology → tier → questions lookup.

use super::builtin::BUILTIN_QUESTIONS;
use crate::config::TechnologyQuestions;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Experience bucket used to pick question difficulty.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

/// Maps years of experience to a tier: under 2 is beginner, under 5 is
/// intermediate, anything else advanced.
pub fn experience_tier_from_years(years: f64) -> Tier {
    if years < 2.0 {
        Tier::Beginner
    } else if years < 5.0 {
        Tier::Intermediate
    } else {
        Tier::Advanced
    }
}

/// Number of generic templates; requests beyond this cycle through them.
pub const GENERIC_TEMPLATE_COUNT: usize = 5;

fn generic_template(index: usize, tech: &str) -> String {
    match index % GENERIC_TEMPLATE_COUNT {
        0 => format!("Describe your experience with {tech} and its main features."),
        1 => format!("What are the key advantages of using {tech} in development?"),
        2 => format!("Can you explain a challenging project where you used {tech}?"),
        3 => format!("How do you stay updated with the latest developments in {tech}?"),
        _ => format!("What best practices do you follow when working with {tech}?"),
    }
}

/// Exactly `count` generic questions templated on `tech`.
pub fn generic_questions(tech: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| generic_template(i, tech)).collect()
}

/// Read-only question table.
///
/// Technology names are matched case-insensitively after trimming.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    entries: HashMap<String, HashMap<Tier, Vec<String>>>,
}

impl QuestionBank {
    /// The bank shipped with the crate.
    pub fn builtin() -> Self {
        let entries = BUILTIN_QUESTIONS
            .iter()
            .map(|(tech, [beginner, intermediate, advanced])| {
                let tiers: HashMap<Tier, Vec<String>> = [
                    (Tier::Beginner, *beginner),
                    (Tier::Intermediate, *intermediate),
                    (Tier::Advanced, *advanced),
                ]
                .into_iter()
                .map(|(tier, questions)| {
                    (tier, questions.iter().map(|q| q.to_string()).collect())
                })
                .collect();
                (tech.to_string(), tiers)
            })
            .collect();

        Self { entries }
    }

    /// The built-in bank with `custom` entries layered on top.
    ///
    /// A custom entry replaces the built-in entry of the same name outright.
    pub fn with_custom(custom: &[TechnologyQuestions]) -> Self {
        let mut bank = Self::builtin();
        for entry in custom {
            bank.insert(entry);
        }
        bank
    }

    pub fn insert(&mut self, entry: &TechnologyQuestions) {
        let tiers: HashMap<Tier, Vec<String>> = [
            (Tier::Beginner, &entry.beginner),
            (Tier::Intermediate, &entry.intermediate),
            (Tier::Advanced, &entry.advanced),
        ]
        .into_iter()
        .filter(|(_, questions)| !questions.is_empty())
        .map(|(tier, questions)| (tier, questions.clone()))
        .collect();

        let key = normalize(&entry.name);
        tracing::debug!(technology = %key, tiers = tiers.len(), "Registered custom questions");
        self.entries.insert(key, tiers);
    }

    pub fn is_known(&self, tech: &str) -> bool {
        self.entries.contains_key(&normalize(tech))
    }

    /// Up to `count` questions for `tech` at `tier`.
    ///
    /// A known technology yields the head of the requested tier, falling back
    /// to the intermediate list when that tier is absent. An unknown one
    /// yields exactly `count` generic questions.
    pub fn get_questions(&self, tech: &str, tier: Tier, count: usize) -> Vec<String> {
        let Some(tiers) = self.entries.get(&normalize(tech)) else {
            return generic_questions(tech.trim(), count);
        };

        let questions = tiers
            .get(&tier)
            .or_else(|| tiers.get(&Tier::Intermediate))
            .or_else(|| [Tier::Beginner, Tier::Advanced].iter().find_map(|t| tiers.get(t)))
            .map(Vec::as_slice)
            .unwrap_or_default();

        questions.iter().take(count).cloned().collect()
    }

    /// Every technology with dedicated questions, sorted.
    pub fn supported_technologies(&self) -> Vec<String> {
        let mut techs: Vec<String> = self.entries.keys().cloned().collect();
        techs.sort();
        techs
    }
}

fn normalize(tech: &str) -> String {
    tech.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_tier_boundaries() {
        assert_eq!(experience_tier_from_years(0.0), Tier::Beginner);
        assert_eq!(experience_tier_from_years(1.0), Tier::Beginner);
        assert_eq!(experience_tier_from_years(1.99), Tier::Beginner);
        assert_eq!(experience_tier_from_years(2.0), Tier::Intermediate);
        assert_eq!(experience_tier_from_years(3.0), Tier::Intermediate);
        assert_eq!(experience_tier_from_years(5.0), Tier::Advanced);
        assert_eq!(experience_tier_from_years(7.0), Tier::Advanced);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(Tier::Beginner.to_string(), "beginner");
        assert_eq!("advanced".parse::<Tier>().unwrap(), Tier::Advanced);
    }

    #[test]
    fn test_known_technology_is_case_insensitive() {
        let bank = QuestionBank::builtin();
        let questions = bank.get_questions("  PyThOn ", Tier::Beginner, 2);
        assert_eq!(
            questions,
            vec![
                "What are the basic data types in Python?".to_string(),
                "Explain the difference between list and tuple.".to_string(),
            ]
        );
    }

    #[test]
    fn test_known_technology_caps_at_list_length() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.get_questions("redis", Tier::Advanced, 20).len(), 5);
    }

    #[test]
    fn test_unknown_technology_gets_exact_generic_count() {
        let bank = QuestionBank::builtin();
        let questions = bank.get_questions("Elixir", Tier::Advanced, 7);
        assert_eq!(questions.len(), 7);
        assert_eq!(
            questions[0],
            "Describe your experience with Elixir and its main features."
        );
        assert_eq!(questions[5], questions[0]);
        assert!(bank.get_questions("Elixir", Tier::Advanced, 0).is_empty());
    }

    #[test]
    fn test_custom_entry_replaces_builtin_and_falls_back_to_intermediate() {
        let bank = QuestionBank::with_custom(&[TechnologyQuestions {
            name: "Python".to_string(),
            beginner: vec![],
            intermediate: vec!["How do you profile a Python service?".to_string()],
            advanced: vec![],
        }]);

        assert_eq!(
            bank.get_questions("python", Tier::Beginner, 3),
            vec!["How do you profile a Python service?".to_string()]
        );
    }

    #[test]
    fn test_custom_entry_adds_technology() {
        let bank = QuestionBank::with_custom(&[TechnologyQuestions {
            name: "Rust".to_string(),
            beginner: vec!["What does the borrow checker enforce?".to_string()],
            intermediate: vec![],
            advanced: vec![],
        }]);

        assert!(bank.is_known("rust"));
        // no intermediate list either, so any tier the entry has is used
        assert_eq!(bank.get_questions("rust", Tier::Advanced, 1).len(), 1);
    }

    #[test]
    fn test_supported_technologies_sorted() {
        let techs = QuestionBank::builtin().supported_technologies();
        assert_eq!(techs.len(), 13);
        assert_eq!(techs.first().map(String::as_str), Some("angular"));
        assert_eq!(techs.last().map(String::as_str), Some("sql"));
        let mut sorted = techs.clone();
        sorted.sort();
        assert_eq!(techs, sorted);
    }
}
