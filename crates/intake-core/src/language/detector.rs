//! Input language detection.

use super::Language;

/// Guesses the language of a piece of user input.
pub trait LanguageDetector: Send + Sync {
    /// Returns `None` when the language cannot be determined.
    fn detect(&self, text: &str) -> Option<Language>;
}

/// Runs `detector`, degrading to `fallback` when it has no answer.
///
/// Callers pass the deployment's configured default language.
pub fn detect_or_default(detector: &dyn LanguageDetector, text: &str, fallback: Language) -> Language {
    detector.detect(text).unwrap_or(fallback)
}

/// Hits needed before a Latin-script language is reported.
const MIN_HITS: usize = 2;

const LATIN_MARKERS: &[(Language, &[&str], &[char])] = &[
    (
        Language::En,
        &[
            "the", "and", "is", "are", "was", "i", "you", "my", "with", "have", "this", "that",
            "what", "of", "to",
        ],
        &[],
    ),
    (
        Language::Es,
        &[
            "el", "la", "los", "las", "que", "y", "es", "un", "una", "por", "con", "para",
            "hola", "gracias", "mi", "soy", "tengo",
        ],
        &['ñ', '¿', '¡'],
    ),
    (
        Language::Fr,
        &[
            "le", "la", "les", "des", "est", "et", "un", "une", "je", "vous", "pour", "avec",
            "bonjour", "merci", "suis", "pas",
        ],
        &['ê', 'è', 'ù', 'œ'],
    ),
    (
        Language::De,
        &[
            "der", "die", "das", "und", "ist", "ich", "nicht", "ein", "eine", "mit", "für",
            "hallo", "danke", "bin", "habe",
        ],
        &['ß', 'ä', 'ö', 'ü'],
    ),
    (
        Language::Pt,
        &[
            "o", "os", "as", "que", "e", "é", "um", "uma", "com", "para", "não", "olá",
            "obrigado", "sou", "tenho", "eu",
        ],
        &['ã', 'õ'],
    ),
    (
        Language::It,
        &[
            "il", "lo", "gli", "che", "è", "e", "un", "una", "con", "per", "ciao", "grazie",
            "sono", "ho", "io", "non",
        ],
        &['ì', 'ò'],
    ),
];

/// Dependency-free detector.
///
/// Non-Latin scripts decide the language on their own (Devanagari, Hangul,
/// kana, Han). Latin text is scored by stop-word and diacritic hits; fewer
/// than two hits or a tie for first place yields `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicLanguageDetector;

impl HeuristicLanguageDetector {
    pub fn new() -> Self {
        Self
    }

    fn detect_script(text: &str) -> Option<Language> {
        let (mut devanagari, mut hangul, mut kana, mut han) = (0usize, 0usize, 0usize, 0usize);
        for c in text.chars() {
            match c as u32 {
                0x0900..=0x097F => devanagari += 1,
                0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7AF => hangul += 1,
                0x3040..=0x30FF => kana += 1,
                0x4E00..=0x9FFF => han += 1,
                _ => {}
            }
        }

        // Japanese mixes kana with Han, so any kana wins over Han.
        if kana > 0 && kana + han >= hangul.max(devanagari) {
            return Some(Language::Ja);
        }

        [
            (Language::Hi, devanagari),
            (Language::Ko, hangul),
            (Language::Zh, han),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .max_by_key(|(_, count)| *count)
        .map(|(language, _)| language)
    }

    fn detect_latin(text: &str) -> Option<Language> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        let scores: Vec<(Language, usize)> = LATIN_MARKERS
            .iter()
            .map(|(language, stopwords, diacritics)| {
                let word_hits = tokens.iter().filter(|t| stopwords.contains(t)).count();
                let mark_hits = lowered.chars().filter(|c| diacritics.contains(c)).count();
                (*language, word_hits + mark_hits)
            })
            .collect();

        let best = scores.iter().map(|(_, hits)| *hits).max().unwrap_or(0);
        if best < MIN_HITS {
            return None;
        }

        let mut leaders = scores.iter().filter(|(_, hits)| *hits == best);
        match (leaders.next(), leaders.next()) {
            (Some((language, _)), None) => Some(*language),
            _ => None,
        }
    }
}

impl LanguageDetector for HeuristicLanguageDetector {
    fn detect(&self, text: &str) -> Option<Language> {
        Self::detect_script(text).or_else(|| Self::detect_latin(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SilentDetector;

    impl LanguageDetector for SilentDetector {
        fn detect(&self, _text: &str) -> Option<Language> {
            None
        }
    }

    #[test]
    fn test_short_inputs_use_the_fallback() {
        let detector = HeuristicLanguageDetector;
        for text in ["Hi", "John Doe", "john@example.com", "5", "New York", "Python, SQL", ""] {
            assert_eq!(detect_or_default(&detector, text, Language::En), Language::En, "{text}");
            assert_eq!(detect_or_default(&detector, text, Language::De), Language::De, "{text}");
        }
    }

    #[test]
    fn test_latin_languages() {
        let detector = HeuristicLanguageDetector;
        assert_eq!(
            detector.detect("Hola, soy ingeniero y tengo experiencia"),
            Some(Language::Es)
        );
        assert_eq!(
            detector.detect("Bonjour, je suis très content"),
            Some(Language::Fr)
        );
        assert_eq!(
            detector.detect("Hallo, ich bin Entwickler und habe Erfahrung"),
            Some(Language::De)
        );
        assert_eq!(
            detector.detect("I have worked with the team for years"),
            Some(Language::En)
        );
    }

    #[test]
    fn test_scripts() {
        let detector = HeuristicLanguageDetector;
        assert_eq!(detector.detect("नमस्ते"), Some(Language::Hi));
        assert_eq!(detector.detect("안녕하세요"), Some(Language::Ko));
        assert_eq!(detector.detect("こんにちは、世界"), Some(Language::Ja));
        assert_eq!(detector.detect("你好世界"), Some(Language::Zh));
    }

    #[test]
    fn test_tie_is_undetermined() {
        // "un" and "una" hit Spanish and Italian equally
        assert_eq!(HeuristicLanguageDetector.detect("un una"), None);
    }

    #[test]
    fn test_detector_failure_falls_back() {
        assert_eq!(detect_or_default(&SilentDetector, "hola", Language::En), Language::En);
        assert_eq!(detect_or_default(&SilentDetector, "hola", Language::Ja), Language::Ja);
    }

    #[test]
    fn test_detected_language_wins_over_fallback() {
        assert_eq!(
            detect_or_default(
                &HeuristicLanguageDetector,
                "I have worked with the team for years",
                Language::De
            ),
            Language::En
        );
    }
}
