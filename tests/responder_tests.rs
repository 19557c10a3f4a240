//! 应答器集成测试
//!
//! Branch precedence, injected random selection and robustness against
//! arbitrary input, exercised through the public library API.

use healthmate::knowledge::{EMERGENCY_TEXT, FALLBACK_TEXT, HEALTH_TIPS, HELP_TEXT, VACCINATION};
use healthmate::models::knowledge::{ResponseCategory, TIPS_HEADER};
use healthmate::services::random::RandomSource;
use healthmate::services::{Responder, SeededRandom, ThreadRandom};

/// Always returns the last index.
struct LastIndex;

impl RandomSource for LastIndex {
    fn pick(&self, len: usize) -> usize {
        len - 1
    }
}

fn responder() -> Responder {
    Responder::new(Box::new(ThreadRandom))
}

fn classify(text: &str) -> (ResponseCategory, String) {
    let result = responder().classify(&text.to_lowercase(), "english");
    (result.category, result.response_text)
}

#[test]
fn test_greeting_beats_knowledge() {
    let (category, text) = classify("hello, I have fever");
    assert_eq!(category, ResponseCategory::Greeting);
    assert!(!text.contains("For fever"));
}

#[test]
fn test_help_beats_emergency() {
    let (category, text) = classify("Help, this is an emergency");
    assert_eq!(category, ResponseCategory::Help);
    assert_eq!(text, HELP_TEXT);
}

#[test]
fn test_fever_with_unrelated_words() {
    let (category, text) = classify("my son has had a FEVER since yesterday, chest pain too");
    assert_eq!(category, ResponseCategory::Knowledge);
    assert!(text.starts_with("For fever"));
    assert!(text.contains(TIPS_HEADER));
}

#[test]
fn test_child_vaccination_schedule() {
    let (category, text) = classify("child vaccination schedule");
    assert_eq!(category, ResponseCategory::Vaccination);
    assert_eq!(text, VACCINATION.child);
}

#[test]
fn test_vaccination_alone_asks_for_age_group() {
    let (category, _) = classify("Vaccination");
    assert_eq!(category, ResponseCategory::VaccinationClarification);
}

#[test]
fn test_vaccination_precedes_emergency() {
    let (category, text) = classify("severe pain in my leg, what vaccination for child");
    assert_eq!(category, ResponseCategory::Vaccination);
    assert_eq!(text, VACCINATION.child);
}

#[test]
fn test_kidney_is_not_a_child() {
    let (category, text) = classify("Vaccination for kidney patients");
    assert_eq!(category, ResponseCategory::VaccinationClarification);
    assert_ne!(text, VACCINATION.child);
}

#[test]
fn test_emergency() {
    let (category, text) = classify("URGENT: difficulty breathing");
    assert_eq!(category, ResponseCategory::Emergency);
    assert_eq!(text, EMERGENCY_TEXT);
}

#[test]
fn test_tip_is_member_of_tips() {
    for _ in 0..20 {
        let (category, text) = classify("give me a tip");
        assert_eq!(category, ResponseCategory::Tip);
        assert!(HEALTH_TIPS.contains(&text.as_str()));
    }
}

#[test]
fn test_injected_source_controls_tip() {
    let responder = Responder::new(Box::new(LastIndex));
    let result = responder.classify("tips please", "english");
    assert_eq!(result.response_text, HEALTH_TIPS[HEALTH_TIPS.len() - 1]);

    let greeting = responder.classify("namaste", "hindi");
    assert!(greeting.response_text.ends_with(HEALTH_TIPS[HEALTH_TIPS.len() - 1]));
}

#[test]
fn test_seeded_sources_agree() {
    let a = Responder::new(Box::new(SeededRandom::new(2024)));
    let b = Responder::new(Box::new(SeededRandom::new(2024)));
    for _ in 0..10 {
        assert_eq!(a.random_tip(), b.random_tip());
    }
}

#[test]
fn test_never_panics_on_odd_input() {
    let inputs = [
        "",
        " ",
        "\t\n",
        "ñandú",
        "🤒🤒",
        "\u{0}",
        "a".repeat(10_000).as_str(),
        "टीकाकरण",
        "hi\u{200b}there",
    ]
    .map(|s| s.to_string());

    let responder = responder();
    for input in &inputs {
        let result = responder.classify(input, "english");
        assert!(!result.response_text.is_empty());
    }
}

#[test]
fn test_unmatched_text_is_fallback() {
    for input in ["what is the weather", "random words here", "1234567"] {
        let (category, text) = classify(input);
        assert_eq!(category, ResponseCategory::Fallback);
        assert_eq!(text, FALLBACK_TEXT);
    }
}
