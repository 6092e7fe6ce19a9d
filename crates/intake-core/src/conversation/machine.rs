//! The conversation stage machine.

use super::ending::is_ending_message;
use crate::analysis::{QualityLevel, SentimentBackend, TextQualityAnalyzer};
use crate::config::IntakeSettings;
use crate::language::{
    HeuristicLanguageDetector, Language, LanguageDetector, MessageKey, detect_or_default, render,
    template,
};
use crate::question::{QuestionBank, select_questions};
use crate::session::{AnswerRecord, Session, Stage};
use crate::validation::{
    ExperienceError, MIN_EXPERIENCE_YEARS, parse_experience, validate_email, validate_min_length,
    validate_name, validate_phone,
};
use chrono::Utc;
use minijinja::context;
use std::sync::Arc;

const MIN_POSITION_LENGTH: usize = 3;
const MIN_LOCATION_LENGTH: usize = 2;
const MIN_TECH_STACK_LENGTH: usize = 3;

/// Drives a [`Session`] through the intake stages.
///
/// The machine holds only read-only collaborators, so one instance can serve
/// any number of sessions. It never fails: invalid input produces a reprompt
/// and leaves the session where it was.
#[derive(Clone)]
pub struct StageMachine {
    bank: QuestionBank,
    analyzer: TextQualityAnalyzer,
    detector: Arc<dyn LanguageDetector>,
    default_language: Language,
    max_questions: usize,
}

impl StageMachine {
    pub fn new(settings: &IntakeSettings) -> Self {
        Self {
            bank: QuestionBank::with_custom(&settings.technologies),
            analyzer: TextQualityAnalyzer::new(
                Arc::new(crate::analysis::LexiconSentiment),
                settings.min_answer_length,
            ),
            detector: Arc::new(HeuristicLanguageDetector),
            default_language: settings.language(),
            max_questions: settings.max_questions,
        }
    }

    pub fn with_language_detector(mut self, detector: Arc<dyn LanguageDetector>) -> Self {
        self.detector = detector;
        self
    }

    pub fn with_sentiment_backend(mut self, backend: Arc<dyn SentimentBackend>) -> Self {
        self.analyzer = TextQualityAnalyzer::new(backend, self.analyzer.min_answer_length());
        self
    }

    /// Language used when a turn's input gives no clear signal.
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn question_bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn analyzer(&self) -> &TextQualityAnalyzer {
        &self.analyzer
    }

    /// Processes one turn, consuming and returning the session.
    pub fn process_turn(&self, mut session: Session, input: &str) -> (Session, String) {
        let reply = self.handle_turn(&mut session, input);
        (session, reply)
    }

    /// Processes one turn in place and returns the reply text.
    pub fn handle_turn(&self, session: &mut Session, input: &str) -> String {
        if session.stage == Stage::Ended {
            return farewell(session.language);
        }

        session.language = detect_or_default(self.detector.as_ref(), input, self.default_language);

        if is_ending_message(input) {
            tracing::info!(
                session_id = %session.id,
                from = %session.stage,
                "Candidate ended the conversation"
            );
            session.ended_from = Some(session.stage);
            session.stage = Stage::Ended;
            return farewell(session.language);
        }

        tracing::debug!(
            session_id = %session.id,
            stage = %session.stage,
            language = %session.language,
            "Processing turn"
        );

        match session.stage {
            Stage::Greeting => self.greet(session),
            Stage::CollectingName => self.collect_name(session, input),
            Stage::CollectingEmail => self.collect_email(session, input),
            Stage::CollectingPhone => self.collect_phone(session, input),
            Stage::CollectingExperience => self.collect_experience(session, input),
            Stage::CollectingPosition => self.collect_position(session, input),
            Stage::CollectingLocation => self.collect_location(session, input),
            Stage::CollectingTechStack => self.collect_tech_stack(session, input),
            Stage::TechnicalQuestions => self.answer_question(session, input),
            Stage::Completed => render(MessageKey::CompletedFollowUp, session.language, ()),
            Stage::Ended => farewell(session.language),
        }
    }

    fn greet(&self, session: &mut Session) -> String {
        advance(session, Stage::CollectingName);
        let language = session.language;
        render(
            MessageKey::Welcome,
            language,
            context! {
                greeting => template(MessageKey::Greeting, language),
                name_request => template(MessageKey::NameRequest, language),
            },
        )
    }

    fn collect_name(&self, session: &mut Session, input: &str) -> String {
        let name = input.trim();
        if !validate_name(name) {
            return reprompt(MessageKey::NameInvalid, session.language);
        }

        session.fields.name = Some(name.to_string());
        advance(session, Stage::CollectingEmail);
        let language = session.language;
        render(
            MessageKey::NameAccepted,
            language,
            context! {
                name => name,
                email_request => template(MessageKey::EmailRequest, language),
            },
        )
    }

    fn collect_email(&self, session: &mut Session, input: &str) -> String {
        let email = input.trim();
        if !validate_email(email) {
            return reprompt(MessageKey::EmailInvalid, session.language);
        }

        session.fields.email = Some(email.to_string());
        advance(session, Stage::CollectingPhone);
        render(MessageKey::EmailAccepted, session.language, ())
    }

    fn collect_phone(&self, session: &mut Session, input: &str) -> String {
        let phone = input.trim();
        if !validate_phone(phone) {
            return reprompt(MessageKey::PhoneInvalid, session.language);
        }

        session.fields.phone = Some(phone.to_string());
        advance(session, Stage::CollectingExperience);
        render(MessageKey::PhoneAccepted, session.language, ())
    }

    fn collect_experience(&self, session: &mut Session, input: &str) -> String {
        let years = match parse_experience(input) {
            Ok(years) => years,
            Err(ExperienceError::NotANumber) => {
                return reprompt(MessageKey::ExperienceNotANumber, session.language);
            }
            Err(ExperienceError::OutOfRange) => {
                return reprompt(MessageKey::ExperienceOutOfRange, session.language);
            }
        };

        session.fields.experience = Some(years);
        advance(session, Stage::CollectingPosition);
        render(MessageKey::ExperienceAccepted, session.language, ())
    }

    fn collect_position(&self, session: &mut Session, input: &str) -> String {
        if !validate_min_length(input, MIN_POSITION_LENGTH) {
            return reprompt(MessageKey::PositionInvalid, session.language);
        }

        session.fields.desired_position = Some(input.trim().to_string());
        advance(session, Stage::CollectingLocation);
        render(MessageKey::PositionAccepted, session.language, ())
    }

    fn collect_location(&self, session: &mut Session, input: &str) -> String {
        if !validate_min_length(input, MIN_LOCATION_LENGTH) {
            return reprompt(MessageKey::LocationInvalid, session.language);
        }

        session.fields.location = Some(input.trim().to_string());
        advance(session, Stage::CollectingTechStack);
        render(MessageKey::LocationAccepted, session.language, ())
    }

    fn collect_tech_stack(&self, session: &mut Session, input: &str) -> String {
        let tech_stack = parse_tech_stack(input);
        if !validate_min_length(input, MIN_TECH_STACK_LENGTH) || tech_stack.is_empty() {
            return reprompt(MessageKey::TechStackInvalid, session.language);
        }

        let years = session.fields.experience.unwrap_or(MIN_EXPERIENCE_YEARS);
        let mut questions = select_questions(&self.bank, &tech_stack, years, self.max_questions);
        if questions.is_empty() {
            // Custom entries can leave a technology without questions.
            questions = select_questions(&self.bank, &[], years, self.max_questions);
        }

        tracing::info!(
            session_id = %session.id,
            technologies = tech_stack.len(),
            questions = questions.len(),
            "Generated assessment questions"
        );

        let reply = render(
            MessageKey::TechStackAccepted,
            session.language,
            context! {
                technologies => &tech_stack,
                total => questions.len(),
                question => questions.first(),
            },
        );

        session.fields.tech_stack = Some(tech_stack);
        session.questions = questions;
        session.question_index = 0;
        advance(session, Stage::TechnicalQuestions);
        reply
    }

    fn answer_question(&self, session: &mut Session, input: &str) -> String {
        let Some(question) = session.current_question().map(str::to_string) else {
            advance(session, Stage::Completed);
            return render(MessageKey::AssessmentComplete, session.language, ());
        };

        let analysis = self.analyzer.analyze(input);
        if analysis.quality.level == QualityLevel::NeedsImprovement {
            tracing::debug!(
                session_id = %session.id,
                score = analysis.quality.score,
                "Answer needs more detail"
            );
            return render(
                MessageKey::AnswerNeedsDetail,
                session.language,
                context! { feedback => &analysis.quality.feedback },
            )
            .trim()
            .to_string();
        }

        let sentiment_emoji = analysis.sentiment.label.emoji();
        let quality_emoji = analysis.quality.level.ack_emoji();
        let tip = analysis.quality.feedback.first().cloned();

        session.answers.push(AnswerRecord {
            question,
            answer_text: input.trim().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            sentiment: analysis.sentiment,
            quality: analysis.quality,
            emotions: analysis.emotions,
        });
        session.question_index += 1;

        let Some(next_question) = session.current_question() else {
            advance(session, Stage::Completed);
            return render(MessageKey::AssessmentComplete, session.language, ());
        };

        render(
            MessageKey::AnswerAccepted,
            session.language,
            context! {
                sentiment_emoji => sentiment_emoji,
                quality_emoji => quality_emoji,
                tip => tip,
                number => session.question_index + 1,
                total => session.questions.len(),
                question => next_question,
            },
        )
    }
}

impl Default for StageMachine {
    fn default() -> Self {
        Self::new(&IntakeSettings::default())
    }
}

impl std::fmt::Debug for StageMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageMachine")
            .field("analyzer", &self.analyzer)
            .field("default_language", &self.default_language)
            .field("max_questions", &self.max_questions)
            .finish_non_exhaustive()
    }
}

/// Splits comma-separated technologies, dropping empty entries.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(str::to_string)
        .collect()
}

fn advance(session: &mut Session, to: Stage) {
    tracing::info!(session_id = %session.id, from = %session.stage, to = %to, "Stage transition");
    session.stage = to;
}

fn reprompt(key: MessageKey, language: Language) -> String {
    render(key, language, ())
}

fn farewell(language: Language) -> String {
    render(
        MessageKey::Farewell,
        language,
        context! { thank_you => template(MessageKey::ThankYou, language) },
    )
}
