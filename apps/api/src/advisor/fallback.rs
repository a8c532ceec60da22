//! Canned replies served when Gemini is unconfigured or a call fails.

use crate::models::chat::ChatResponse;

const GREETINGS: &[&str] = &["hi", "hello", "hey"];

const WELCOME_MESSAGE: &str = "Hello! I'm CareerPath AI, your personal career guide. \
I can help you explore career options, understand salary trends, prepare for \
interviews and plan your next move. What would you like to talk about today?";

const WELCOME_SUGGESTIONS: &[&str; 5] = &[
    "Which career suits my interests?",
    "What are the highest paying jobs in India?",
    "How do I prepare for my first interview?",
    "What skills are in demand right now?",
    "How do I switch careers?",
];

const READY_MESSAGE: &str = "Thanks for your question! I'm ready to help you plan your \
career. While my detailed AI answers are unavailable at the moment, you can start \
with one of the topics below or take the career assessment for personalised \
recommendations.";

const READY_SUGGESTIONS: &[&str; 5] = &[
    "Take the career assessment",
    "Explore careers in technology",
    "Learn about government job options",
    "Tips for building a strong resume",
    "How do I choose the right college course?",
];

fn is_greeting(message: &str) -> bool {
    let lowered = message.trim().to_lowercase();
    GREETINGS.iter().any(|g| lowered.contains(g))
}

/// Greeting messages get the welcome payload; everything else gets the
/// generic readiness payload. Both carry exactly five suggestions.
pub fn fallback_response(message: &str) -> ChatResponse {
    if is_greeting(message) {
        ChatResponse::new(WELCOME_MESSAGE.to_string(), WELCOME_SUGGESTIONS, None)
    } else {
        ChatResponse::new(READY_MESSAGE.to_string(), READY_SUGGESTIONS, None)
    }
}
