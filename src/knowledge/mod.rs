//! 静态知识库
//!
//! Read-only tables the responder matches against. All trigger strings are
//! lower case; callers fold input case before matching.

use crate::models::knowledge::{KnowledgeEntry, VaccinationTable};

/// Knowledge entries in match priority order.
pub static KNOWLEDGE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        keyword: "fever",
        response: "For fever: rest, fluids, and monitoring temperature are recommended. \
                   Consult a doctor if it persists for more than 3 days or goes above 103°F (39.4°C).",
        tips: &[
            "Drink plenty of water, soups, and ORS",
            "Use a cool, damp cloth on the forehead",
            "Wear light clothing and keep the room ventilated",
            "Take paracetamol only as directed",
        ],
    },
    KnowledgeEntry {
        keyword: "cold",
        response: "For cold: stay hydrated, rest, and avoid unnecessary medication. \
                   Most colds clear up within 7-10 days.",
        tips: &[
            "Gargle with warm salt water",
            "Inhale steam to ease congestion",
            "Drink warm fluids like herbal tea",
        ],
    },
    KnowledgeEntry {
        keyword: "cough",
        response: "For cough: warm fluids and rest usually help. \
                   See a doctor if it lasts more than 2 weeks or you cough up blood.",
        tips: &[
            "Take a spoon of honey with warm water",
            "Avoid smoke and dusty places",
            "Keep your throat moist",
        ],
    },
    KnowledgeEntry {
        keyword: "headache",
        response: "For headache: rest in a quiet, dark room and stay hydrated. \
                   Seek care if it is sudden and severe or comes with vision changes.",
        tips: &[
            "Limit screen time",
            "Apply a cold or warm compress",
            "Keep regular meal and sleep times",
        ],
    },
    KnowledgeEntry {
        keyword: "body pain",
        response: "This may be due to overexertion or infection. Rest and fluids are helpful.",
        tips: &[
            "Take a warm bath",
            "Do gentle stretching",
            "Get enough sleep",
        ],
    },
    KnowledgeEntry {
        keyword: "stomach",
        response: "For stomach upset: eat light, bland food and sip fluids often. \
                   Consult a doctor if you notice blood, high fever, or signs of dehydration.",
        tips: &[
            "Try bananas, rice, and toast",
            "Avoid spicy and oily food",
            "Use ORS to replace lost fluids",
        ],
    },
    KnowledgeEntry {
        keyword: "diet",
        response: "A balanced diet includes fruits, vegetables, whole grains, lean protein, \
                   and healthy fats in the right portions.",
        tips: &[
            "Fill half your plate with vegetables",
            "Limit sugar and processed food",
            "Eat at regular times",
        ],
    },
    KnowledgeEntry {
        keyword: "nutrition",
        response: "Good nutrition means getting enough vitamins, minerals, protein, \
                   and fibre from a variety of foods.",
        tips: &[
            "Eat a rainbow of fruits and vegetables",
            "Include pulses, eggs, or fish for protein",
            "Choose whole grains over refined ones",
        ],
    },
    KnowledgeEntry {
        keyword: "exercise",
        response: "Adults should aim for at least 150 minutes of moderate activity per week, \
                   plus muscle-strengthening exercise on 2 days.",
        tips: &[
            "Start with a 30-minute daily walk",
            "Warm up before and stretch after",
            "Pick an activity you enjoy",
        ],
    },
    KnowledgeEntry {
        keyword: "stress",
        response: "To manage stress: take regular breaks, stay active, and talk to people you trust. \
                   Reach out to a professional if stress feels overwhelming.",
        tips: &[
            "Practice deep breathing for 5 minutes",
            "Try meditation or yoga",
            "Limit caffeine",
        ],
    },
    KnowledgeEntry {
        keyword: "sleep",
        response: "Adults need 7-9 hours of sleep. Keep a consistent schedule and a calm bedtime routine.",
        tips: &[
            "Avoid screens an hour before bed",
            "Keep the bedroom dark and cool",
            "Avoid heavy meals late at night",
        ],
    },
    KnowledgeEntry {
        keyword: "water",
        response: "Most adults need about 8 glasses (2 litres) of water a day, \
                   more in hot weather or when exercising.",
        tips: &[
            "Carry a reusable water bottle",
            "Drink a glass of water with every meal",
        ],
    },
];

/// Vaccination schedules by age group.
pub static VACCINATION: VaccinationTable = VaccinationTable {
    child: "BCG, OPV, Hepatitis B, DPT, MMR are recommended for children aged 0-5. \
            Follow your national immunization schedule and keep the vaccination card safe.",
    adult: "Annual flu vaccine, Tetanus booster every 10 years, and Hepatitis B \
            (if not vaccinated earlier) are recommended for adults.",
    elderly: "Annual flu vaccine, Pneumococcal vaccine, and Shingles vaccine are recommended \
              for adults over 60. Check with your doctor about boosters.",
};

/// Asked when a vaccination query names no age group.
pub const VACCINATION_CLARIFICATION: &str =
    "Please specify age group: child, adult, or elderly.";

/// General health tips, used for greetings and tip requests.
pub static HEALTH_TIPS: &[&str] = &[
    "💧 Drink at least 8 glasses of water a day.",
    "🚶 A 30-minute walk every day keeps your heart healthy.",
    "🥗 Fill half your plate with fruits and vegetables.",
    "😴 Aim for 7-9 hours of sleep every night.",
    "🧼 Wash your hands with soap for at least 20 seconds.",
    "🧘 Take a few minutes every day to breathe deeply and relax.",
    "🚭 Avoid tobacco and limit alcohol.",
    "🩺 Get a regular health check-up once a year.",
];

/// Greeting terms, matched as whole words.
pub static GREETINGS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good evening",
    "namaste",
    "नमस्ते",
];

pub const HELP_TRIGGER: &str = "help";

pub static VACCINATION_TRIGGERS: &[&str] = &["vaccination", "vaccine", "immunization", "टीकाकरण", "टीका"];

// Age-group triggers are matched as whole words.
pub static CHILD_TRIGGERS: &[&str] = &[
    "child", "children", "kid", "kids", "baby", "babies", "infant", "infants", "toddler",
    "बच्चे", "बच्चा", "बच्चों",
];

pub static ADULT_TRIGGERS: &[&str] = &["adult", "adults", "वयस्क"];

pub static ELDERLY_TRIGGERS: &[&str] = &["elderly", "senior", "seniors", "old age", "बुजुर्ग"];

pub static EMERGENCY_KEYWORDS: &[&str] = &[
    "emergency",
    "urgent",
    "severe pain",
    "chest pain",
    "difficulty breathing",
    "unconscious",
];

pub static TIP_TRIGGERS: &[&str] = &["tip", "tips"];

pub const GREETING_TEMPLATE: &str = "Hello! 👋 I'm your HealthMate assistant. I can help you with \
     symptoms, nutrition, exercise, vaccinations, and general wellness. How can I assist you today?";

pub const GREETING_TIP_LABEL: &str = "💡 Health Tip:";

pub const HELP_TEXT: &str = "I can help you with:\n\
     • Symptoms like fever, cold, cough, headache, and body pain\n\
     • Nutrition and diet advice\n\
     • Exercise recommendations\n\
     • Stress and sleep management\n\
     • Vaccination schedules for children, adults, and the elderly\n\
     • Daily health tips\n\n\
     Just type your question!";

pub const EMERGENCY_TEXT: &str = "🚨 This sounds like it could be an emergency. \
     Please call your local emergency number (108 in India, 911 in the US) or go to \
     the nearest hospital immediately. Do not wait for symptoms to get worse.";

pub const FALLBACK_TEXT: &str =
    "I'm sorry, I couldn't find relevant information. Please try again or type 'help' to see what I can do.";

/// Quick suggestions offered to the chat page.
pub static SUGGESTIONS: &[&str] = &[
    "What to do for fever?",
    "Healthy diet tips",
    "Exercise recommendations",
    "Stress management",
    "Child vaccination schedule",
    "Sleep better",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_knowledge_keywords_unique() {
        let keywords: HashSet<_> = KNOWLEDGE.iter().map(|e| e.keyword).collect();
        assert_eq!(keywords.len(), KNOWLEDGE.len());
    }

    #[test]
    fn test_all_triggers_lower_case() {
        let groups: [&[&str]; 7] = [
            GREETINGS,
            VACCINATION_TRIGGERS,
            CHILD_TRIGGERS,
            ADULT_TRIGGERS,
            ELDERLY_TRIGGERS,
            EMERGENCY_KEYWORDS,
            TIP_TRIGGERS,
        ];
        for trigger in groups.iter().flat_map(|g| g.iter()) {
            assert_eq!(*trigger, trigger.to_lowercase());
        }
        for entry in KNOWLEDGE {
            assert_eq!(entry.keyword, entry.keyword.to_lowercase());
        }
    }

    #[test]
    fn test_fever_is_first_entry() {
        assert_eq!(KNOWLEDGE[0].keyword, "fever");
        assert!(KNOWLEDGE[0].response.starts_with("For fever"));
        assert!(!KNOWLEDGE[0].tips.is_empty());
    }

    #[test]
    fn test_health_tips_not_empty() {
        assert!(!HEALTH_TIPS.is_empty());
        assert!(HEALTH_TIPS.iter().all(|tip| !tip.is_empty()));
    }
}
