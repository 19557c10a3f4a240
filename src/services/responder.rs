//! 消息分类服务
//!
//! Maps one lower-cased message to one canned response. Branches are tried in
//! a fixed order and the first match wins:
//!
//! 1. greeting (whole-word match, random tip appended)
//! 2. help
//! 3. knowledge table, in table order
//! 4. vaccination, then age group: child, adult, elderly
//! 5. emergency
//! 6. tip request (random tip)
//! 7. fallback

use std::sync::Arc;
use tracing::debug;

use crate::knowledge::{
    ADULT_TRIGGERS, CHILD_TRIGGERS, ELDERLY_TRIGGERS, EMERGENCY_KEYWORDS, EMERGENCY_TEXT,
    FALLBACK_TEXT, GREETING_TEMPLATE, GREETING_TIP_LABEL, GREETINGS, HEALTH_TIPS, HELP_TEXT,
    HELP_TRIGGER, KNOWLEDGE, TIP_TRIGGERS, VACCINATION, VACCINATION_CLARIFICATION,
    VACCINATION_TRIGGERS,
};
use crate::models::knowledge::{AgeGroup, ResponseCategory, ResponseResult};
use crate::services::random::{RandomSource, choose};

/// Keyword responder.
///
/// Stateless apart from the injected random source; safe to share across
/// request handlers.
#[derive(Clone)]
pub struct Responder {
    random: Arc<dyn RandomSource>,
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder")
            .field("random", &"Arc<dyn RandomSource>")
            .finish()
    }
}

impl Responder {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self {
            random: Arc::from(random),
        }
    }

    /// Classifies already lower-cased `text`.
    ///
    /// `language` is the caller's selected UI language. Matching does not
    /// depend on it: non-English triggers sit in the same tables.
    pub fn classify(&self, text: &str, language: &str) -> ResponseResult {
        let result = self.select(text);
        debug!(
            category = %result.category,
            language = language,
            "Classified message"
        );
        result
    }

    /// One random health tip.
    pub fn random_tip(&self) -> &'static str {
        choose(self.random.as_ref(), HEALTH_TIPS).unwrap_or_default()
    }

    fn select(&self, text: &str) -> ResponseResult {
        if is_greeting(text) {
            let greeting = format!(
                "{}\n\n{} {}",
                GREETING_TEMPLATE,
                GREETING_TIP_LABEL,
                self.random_tip()
            );
            return ResponseResult::new(ResponseCategory::Greeting, greeting);
        }

        if text.contains(HELP_TRIGGER) {
            return ResponseResult::new(ResponseCategory::Help, HELP_TEXT);
        }

        if let Some(entry) = KNOWLEDGE.iter().find(|entry| entry.matches(text)) {
            return ResponseResult::new(ResponseCategory::Knowledge, entry.render());
        }

        if contains_any(text, VACCINATION_TRIGGERS) {
            return match detect_age_group(text) {
                Some(group) => ResponseResult::new(
                    ResponseCategory::Vaccination,
                    VACCINATION.schedule_for(group),
                ),
                None => ResponseResult::new(
                    ResponseCategory::VaccinationClarification,
                    VACCINATION_CLARIFICATION,
                ),
            };
        }

        if contains_any(text, EMERGENCY_KEYWORDS) {
            return ResponseResult::new(ResponseCategory::Emergency, EMERGENCY_TEXT);
        }

        if contains_any(text, TIP_TRIGGERS) {
            return ResponseResult::new(ResponseCategory::Tip, self.random_tip());
        }

        ResponseResult::new(ResponseCategory::Fallback, FALLBACK_TEXT)
    }
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Splits on every non-alphanumeric character.
///
/// Triggers are split the same way, so scripts whose combining signs are not
/// alphanumeric (Devanagari virama) still line up token for token.
fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Whether `phrase` occurs in `text_words` as a run of whole words.
fn contains_phrase(text_words: &[&str], phrase: &str) -> bool {
    let phrase_words = words(phrase);
    !phrase_words.is_empty()
        && text_words
            .windows(phrase_words.len())
            .any(|window| window == phrase_words.as_slice())
}

fn contains_any_phrase(text_words: &[&str], phrases: &[&str]) -> bool {
    phrases
        .iter()
        .any(|phrase| contains_phrase(text_words, phrase))
}

/// First age group, in detection order, named in `text` as a whole word.
///
/// "kidney" does not name a child.
pub fn detect_age_group(text: &str) -> Option<AgeGroup> {
    let text_words = words(text);
    AgeGroup::DETECTION_ORDER.into_iter().find(|group| {
        let triggers = match group {
            AgeGroup::Child => CHILD_TRIGGERS,
            AgeGroup::Adult => ADULT_TRIGGERS,
            AgeGroup::Elderly => ELDERLY_TRIGGERS,
        };
        contains_any_phrase(&text_words, triggers)
    })
}

/// Whether `text` contains a greeting as a whole word or phrase.
///
/// Short greetings such as "hi" must not fire inside "child" or "this".
pub fn is_greeting(text: &str) -> bool {
    contains_any_phrase(&words(text), GREETINGS)
}

/// Creates a responder over the given random source.
pub fn create_responder(random: Box<dyn RandomSource>) -> Responder {
    Responder::new(random)
}
