// Advisor LLM prompt fragments.

use serde_json::Value;

/// Persona, tone and formatting rules prepended to every user message.
pub const ADVISOR_SYSTEM_PROMPT: &str = "\
You are CareerPath AI, a friendly and knowledgeable career counsellor for students \
and early-career professionals in India.

RESPONSE RULES:
- Keep every answer under 200 words.
- Be encouraging, practical and specific to the user's situation.
- Use short paragraphs; use bullet points (•) for lists of options or steps.
- Do NOT invent statistics you are unsure of.
- Quote salaries in Indian Rupees with the ₹ symbol and LPA (lakhs per annum), \
  for example: ₹6-12 LPA.
- Express job market growth as a percentage, for example: 25% growth.
- End with one concrete next step the user can take this week.";

/// Builds the full prompt: system rules, the literal user message, and the
/// context as pretty JSON when present.
pub fn build_prompt(message: &str, context: Option<&Value>) -> String {
    let mut prompt = format!("{ADVISOR_SYSTEM_PROMPT}\n\nUser question: {message}");

    if let Some(context) = context.filter(|c| !c.is_null()) {
        let serialized =
            serde_json::to_string_pretty(context).unwrap_or_else(|_| context.to_string());
        prompt.push_str("\n\nAdditional context: ");
        prompt.push_str(&serialized);
    }

    prompt
}
