//! Follow-up suggestions, routed by keywords in the user's message.
//!
//! Rules are evaluated in order and the first match wins. Matching is a
//! case-insensitive substring test, so short keywords such as "ai" also fire
//! inside longer words.

/// One routing rule: any keyword hit selects `suggestions`.
struct SuggestionRule {
    keywords: &'static [&'static str],
    suggestions: &'static [&'static str; 5],
}

pub const AI_ML_SUGGESTIONS: &[&str; 5] = &[
    "What skills do I need for a career in AI?",
    "Best online courses for machine learning",
    "AI engineer vs data scientist: which is better?",
    "How do I build an AI portfolio project?",
    "Top companies hiring for AI roles in India",
];

pub const SALARY_SUGGESTIONS: &[&str; 5] = &[
    "How do I negotiate a higher salary?",
    "Highest paying careers for freshers",
    "Salary trends in the IT sector",
    "How do salaries grow with experience?",
    "Government vs private sector pay",
];

pub const INTERVIEW_SUGGESTIONS: &[&str; 5] = &[
    "Common interview questions and answers",
    "How do I write a strong resume?",
    "Tips for technical interviews",
    "How should I follow up after an interview?",
    "Best job portals in India",
];

pub const CAREER_CHANGE_SUGGESTIONS: &[&str; 5] = &[
    "How do I switch careers without experience?",
    "Skills that transfer across industries",
    "Is it too late to change my career?",
    "Short courses for a career transition",
    "How do I explain a career change in interviews?",
];

pub const DEFAULT_SUGGESTIONS: &[&str; 5] = &[
    "Explore careers that match my interests",
    "What are the fastest growing careers?",
    "How do I choose the right career path?",
    "Which skills should I learn next?",
    "Take the career assessment",
];

const RULES: &[SuggestionRule] = &[
    SuggestionRule {
        keywords: &[
            "ai",
            "artificial intelligence",
            "machine learning",
            "ml",
            "data science",
        ],
        suggestions: AI_ML_SUGGESTIONS,
    },
    SuggestionRule {
        keywords: &["salary", "pay", "income", "earn", "package"],
        suggestions: SALARY_SUGGESTIONS,
    },
    SuggestionRule {
        keywords: &["interview", "job search", "resume", "apply", "hiring"],
        suggestions: INTERVIEW_SUGGESTIONS,
    },
    SuggestionRule {
        keywords: &["career change", "change career", "switch", "transition"],
        suggestions: CAREER_CHANGE_SUGGESTIONS,
    },
];

/// Picks the suggestion list for `message`. Only the input is inspected,
/// never the model's reply.
pub fn suggestions_for(message: &str) -> &'static [&'static str; 5] {
    let lowered = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k)))
        .map(|rule| rule.suggestions)
        .unwrap_or(DEFAULT_SUGGESTIONS)
}
