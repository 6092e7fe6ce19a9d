//! Localized prompt catalog.
//!
//! Every message has an English template. A handful of keys carry
//! translations; any other `(key, language)` pair falls back to English.
//! Templates use minijinja syntax and are rendered with [`render`].

use super::Language;
use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum MessageKey {
    // Translated
    Greeting,
    NameRequest,
    EmailRequest,
    ThankYou,

    // Stage prompts
    Welcome,
    NameInvalid,
    NameAccepted,
    EmailInvalid,
    EmailAccepted,
    PhoneInvalid,
    PhoneAccepted,
    ExperienceNotANumber,
    ExperienceOutOfRange,
    ExperienceAccepted,
    PositionInvalid,
    PositionAccepted,
    LocationInvalid,
    LocationAccepted,
    TechStackInvalid,
    TechStackAccepted,
    AnswerNeedsDetail,
    AnswerAccepted,
    AssessmentComplete,
    CompletedFollowUp,
    Farewell,
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Greeting => "Hello! Welcome to TalentScout's Hiring Assistant! 👋",
        MessageKey::NameRequest => "What's your full name?",
        MessageKey::EmailRequest => "Could you please provide your email address?",
        MessageKey::ThankYou => "Thank you for using TalentScout's Hiring Assistant!",
        MessageKey::Welcome => {
            "{{ greeting }}\n\n\
             I'm here to help you with your job application process. I'll gather some \
             information about you and ask relevant technical questions based on your \
             expertise.\n\n\
             Let's start! {{ name_request }}"
        }
        MessageKey::NameInvalid => "Please provide your full name (at least 2 characters).",
        MessageKey::NameAccepted => "Nice to meet you, {{ name }}! 😊\n\n{{ email_request }}",
        MessageKey::EmailInvalid => {
            "Please provide a valid email address (e.g., john@example.com)."
        }
        MessageKey::EmailAccepted => "Great! Now, could you please provide your phone number?",
        MessageKey::PhoneInvalid => {
            "Please provide a valid phone number (e.g., +1234567890 or 1234567890)."
        }
        MessageKey::PhoneAccepted => {
            "Perfect! How many years of professional experience do you have?"
        }
        MessageKey::ExperienceNotANumber => {
            "Please provide your experience as a number (e.g., 3.5 for 3.5 years)."
        }
        MessageKey::ExperienceOutOfRange => "Please provide a valid number of years (0-50).",
        MessageKey::ExperienceAccepted => {
            "Excellent! What position(s) are you interested in? \
             (e.g., Software Developer, Data Scientist, etc.)"
        }
        MessageKey::PositionInvalid => {
            "Please provide the position you're interested in (at least 3 characters)."
        }
        MessageKey::PositionAccepted => {
            "Great choice! What's your current location? (City, State/Country)"
        }
        MessageKey::LocationInvalid => "Please provide your current location.",
        MessageKey::LocationAccepted => {
            "Perfect! Now, let's talk about your technical skills.\n\n\
             Please list your tech stack including:\n\
             - Programming languages (e.g., Python, JavaScript, Java)\n\
             - Frameworks (e.g., React, Django, Spring)\n\
             - Databases (e.g., PostgreSQL, MongoDB)\n\
             - Tools & Technologies (e.g., Docker, AWS, Git)\n\n\
             Separate each technology with commas."
        }
        MessageKey::TechStackInvalid => {
            "Please provide at least one technology from your tech stack."
        }
        MessageKey::TechStackAccepted => {
            "Excellent! I can see you have experience with: {{ technologies | join(\", \") }} 💻\n\n\
             Now I'll ask you {{ total }} technical questions to assess your skills. \
             Don't worry, just answer to the best of your ability!\n\n\
             **Question 1/{{ total }}:**\n\
             {{ question }}"
        }
        MessageKey::AnswerNeedsDetail => {
            "Please provide a more detailed answer. {{ feedback | join(\"; \") }}"
        }
        MessageKey::AnswerAccepted => {
            "Thank you for your answer! {{ sentiment_emoji }} {{ quality_emoji }}\n\
             {% if tip %}💡 {{ tip }}{% endif %}\n\n\
             **Question {{ number }}/{{ total }}:**\n\
             {{ question }}"
        }
        MessageKey::AssessmentComplete => {
            "🎉 Congratulations! You've completed the technical assessment!\n\n\
             Thank you for taking the time to answer all our questions. \
             Here's what happens next:\n\n\
             ✅ **Your Information Summary:**\n\
             - We have collected your contact details and professional information\n\
             - Your technical answers have been recorded for review\n\
             - Our recruitment team will evaluate your responses\n\n\
             📞 **Next Steps:**\n\
             1. Our technical team will review your answers within 2-3 business days\n\
             2. If there's a good match, you'll receive a call/email for the next round\n\
             3. We may schedule a detailed technical interview or coding challenge\n\n\
             Thank you for your interest in opportunities with TalentScout! \
             We'll be in touch soon.\n\n\
             Is there anything else you'd like to know about our process?"
        }
        MessageKey::CompletedFollowUp => {
            "Your assessment is complete and your answers have been recorded. \
             Our recruitment team will be in touch soon. Say goodbye whenever you're ready to leave."
        }
        MessageKey::Farewell => {
            "{{ thank_you }} 👋\n\n\
             We appreciate your time and interest. If you'd like to start a new session \
             or have any questions, feel free to start over.\n\n\
             Have a great day! 🌟"
        }
    }
}

/// `[greeting, name_request, email_request, thank_you]` per language.
const TRANSLATIONS: &[(Language, [&str; 4])] = &[
    (
        Language::Es,
        [
            "¡Hola! ¡Bienvenido al Asistente de Contratación de TalentScout! 👋",
            "¿Cuál es tu nombre completo?",
            "¿Podrías proporcionar tu dirección de correo electrónico?",
            "¡Gracias por usar el Asistente de Contratación de TalentScout!",
        ],
    ),
    (
        Language::Fr,
        [
            "Bonjour ! Bienvenue sur l'Assistant de Recrutement de TalentScout ! 👋",
            "Quel est votre nom complet ?",
            "Pourriez-vous fournir votre adresse e-mail ?",
            "Merci d'avoir utilisé l'Assistant de Recrutement de TalentScout !",
        ],
    ),
    (
        Language::De,
        [
            "Hallo! Willkommen beim Einstellungsassistenten von TalentScout! 👋",
            "Wie lautet Ihr vollständiger Name?",
            "Könnten Sie bitte Ihre E-Mail-Adresse angeben?",
            "Vielen Dank, dass Sie den Einstellungsassistenten von TalentScout genutzt haben!",
        ],
    ),
    (
        Language::Hi,
        [
            "नमस्ते! TalentScout के भर्ती सहायक में आपका स्वागत है! 👋",
            "आपका पूरा नाम क्या है?",
            "क्या आप अपना ईमेल पता बता सकते हैं?",
            "TalentScout के भर्ती सहायक का उपयोग करने के लिए धन्यवाद!",
        ],
    ),
    (
        Language::Zh,
        [
            "你好！欢迎使用 TalentScout 招聘助手！👋",
            "请问您的全名是什么？",
            "请提供您的电子邮件地址。",
            "感谢您使用 TalentScout 招聘助手！",
        ],
    ),
    (
        Language::Ja,
        [
            "こんにちは！TalentScout 採用アシスタントへようこそ！👋",
            "お名前（フルネーム）を教えてください。",
            "メールアドレスを教えていただけますか？",
            "TalentScout 採用アシスタントをご利用いただきありがとうございます！",
        ],
    ),
    (
        Language::Ko,
        [
            "안녕하세요! TalentScout 채용 도우미에 오신 것을 환영합니다! 👋",
            "성함이 어떻게 되시나요?",
            "이메일 주소를 알려주시겠어요?",
            "TalentScout 채용 도우미를 이용해 주셔서 감사합니다!",
        ],
    ),
    (
        Language::Pt,
        [
            "Olá! Bem-vindo ao Assistente de Contratação da TalentScout! 👋",
            "Qual é o seu nome completo?",
            "Poderia informar o seu endereço de e-mail?",
            "Obrigado por usar o Assistente de Contratação da TalentScout!",
        ],
    ),
    (
        Language::It,
        [
            "Ciao! Benvenuto nell'Assistente di Selezione di TalentScout! 👋",
            "Qual è il tuo nome completo?",
            "Potresti fornire il tuo indirizzo email?",
            "Grazie per aver utilizzato l'Assistente di Selezione di TalentScout!",
        ],
    ),
];

const TRANSLATED_KEYS: [MessageKey; 4] = [
    MessageKey::Greeting,
    MessageKey::NameRequest,
    MessageKey::EmailRequest,
    MessageKey::ThankYou,
];

static CATALOG: Lazy<HashMap<(MessageKey, Language), &'static str>> = Lazy::new(|| {
    TRANSLATIONS
        .iter()
        .flat_map(|(language, texts)| {
            TRANSLATED_KEYS
                .into_iter()
                .zip(texts.iter())
                .map(move |(key, text)| ((key, *language), *text))
        })
        .collect()
});

static TEMPLATE_ENV: Lazy<Environment<'static>> = Lazy::new(Environment::new);

/// Raw template for `key` in `language`, falling back to English.
pub fn template(key: MessageKey, language: Language) -> &'static str {
    CATALOG
        .get(&(key, language))
        .copied()
        .unwrap_or_else(|| english(key))
}

/// Renders `key` in `language` with `ctx`.
///
/// A render failure yields the raw English template rather than an error.
pub fn render<S: Serialize>(key: MessageKey, language: Language, ctx: S) -> String {
    let source = template(key, language);
    match TEMPLATE_ENV.render_str(source, ctx) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(key = %key, language = %language, error = %e, "Failed to render prompt");
            english(key).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_key_has_english_text() {
        for key in MessageKey::iter() {
            assert!(!template(key, Language::En).is_empty(), "{key} has no text");
        }
    }

    #[test]
    fn test_translated_keys_cover_every_language() {
        for language in Language::iter().filter(|l| *l != Language::En) {
            for key in TRANSLATED_KEYS {
                assert_ne!(template(key, language), english(key), "{key}/{language}");
            }
        }
    }

    #[test]
    fn test_missing_translation_falls_back_to_english() {
        assert_eq!(
            template(MessageKey::EmailAccepted, Language::Ja),
            english(MessageKey::EmailAccepted)
        );
    }

    #[test]
    fn test_render_substitutes_values() {
        let text = render(
            MessageKey::NameAccepted,
            Language::En,
            context! { name => "Ada", email_request => "Email?" },
        );
        assert_eq!(text, "Nice to meet you, Ada! 😊\n\nEmail?");
    }

    #[test]
    fn test_render_join_filter() {
        let text = render(
            MessageKey::AnswerNeedsDetail,
            Language::En,
            context! { feedback => vec!["a", "b"] },
        );
        assert_eq!(text, "Please provide a more detailed answer. a; b");
    }

    #[test]
    fn test_render_optional_tip() {
        let with_tip = render(
            MessageKey::AnswerAccepted,
            Language::En,
            context! {
                sentiment_emoji => "😐",
                quality_emoji => "👍",
                tip => "Try harder",
                number => 2,
                total => 3,
                question => "Q2",
            },
        );
        assert!(with_tip.contains("💡 Try harder"));
        assert!(with_tip.ends_with("**Question 2/3:**\nQ2"));

        let without_tip = render(
            MessageKey::AnswerAccepted,
            Language::En,
            context! { sentiment_emoji => "😐", quality_emoji => "👍", number => 2, total => 3, question => "Q2" },
        );
        assert!(!without_tip.contains('💡'));
    }
}
