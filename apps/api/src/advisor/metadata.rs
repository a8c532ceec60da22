//! Career-card metadata scraped from a model reply.
//!
//! Only rupee salaries (₹ with LPA / lakhs) are recognised. Replies quoting
//! other currencies fall back to the placeholders.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::chat::CareerMetadata;

pub const SALARY_PLACEHOLDER: &str = "Varies";
pub const GROWTH_PLACEHOLDER: &str = "Steady";
pub const DIFFICULTY_PLACEHOLDER: &str = "Moderate";

fn salary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)₹\s?\d+(?:\.\d+)?(?:\s?(?:-|–|to)\s?₹?\s?\d+(?:\.\d+)?)?\s?(?:LPA|lakhs?|L)\b",
        )
        .expect("salary pattern is valid")
    })
}

fn growth_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\d+(?:\.\d+)?\s?%\s?(?:annual\s+)?(?:growth|increase|annually)")
            .expect("growth pattern is valid")
    })
}

/// Returns metadata when the reply mentions a salary range or a growth
/// percentage, `None` otherwise.
pub fn extract_metadata(reply: &str) -> Option<CareerMetadata> {
    let salary = salary_pattern().find(reply).map(|m| m.as_str().trim());
    let growth = growth_pattern().find(reply).map(|m| m.as_str().trim());

    if salary.is_none() && growth.is_none() {
        return None;
    }

    Some(CareerMetadata {
        salary_range: salary.unwrap_or(SALARY_PLACEHOLDER).to_string(),
        growth_rate: growth.unwrap_or(GROWTH_PLACEHOLDER).to_string(),
        difficulty_level: DIFFICULTY_PLACEHOLDER.to_string(),
    })
}
