use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upper bound on follow-up prompts attached to a reply.
pub const MAX_SUGGESTIONS: usize = 5;

/// One user turn. Not persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Free-form data (assessment answers, profile fields) embedded verbatim into the prompt.
    #[serde(default)]
    pub context: Option<Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseKind {
    #[default]
    Plain,
    /// Reply mentions salary or growth figures; the UI renders it as a card.
    CareerCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMetadata {
    pub salary_range: String,
    pub growth_rate: String,
    pub difficulty_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub content: String,
    pub suggestions: Vec<String>,
    pub response_kind: ResponseKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CareerMetadata>,
}

impl ChatResponse {
    /// Builds a response, capping suggestions at `MAX_SUGGESTIONS`.
    pub fn new(
        content: String,
        suggestions: &[&str],
        metadata: Option<CareerMetadata>,
    ) -> Self {
        let response_kind = if metadata.is_some() {
            ResponseKind::CareerCard
        } else {
            ResponseKind::Plain
        };
        Self {
            content,
            suggestions: suggestions
                .iter()
                .take(MAX_SUGGESTIONS)
                .map(|s| s.to_string())
                .collect(),
            response_kind,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_are_capped() {
        let many = ["a", "b", "c", "d", "e", "f", "g"];
        let response = ChatResponse::new("reply".into(), &many, None);
        assert_eq!(response.suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(response.suggestions[4], "e");
    }

    #[test]
    fn test_metadata_selects_career_card() {
        let metadata = CareerMetadata {
            salary_range: "₹4-8 LPA".into(),
            growth_rate: "Steady".into(),
            difficulty_level: "Moderate".into(),
        };
        let response = ChatResponse::new("reply".into(), &[], Some(metadata));
        assert_eq!(response.response_kind, ResponseKind::CareerCard);
    }

    #[test]
    fn test_serializes_camel_case_and_omits_missing_metadata() {
        let response = ChatResponse::new("reply".into(), &["next"], None);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["responseKind"], "plain");
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn test_request_context_is_optional() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hello"}"#).unwrap();
        assert!(req.context.is_none());

        let req: ChatRequest =
            serde_json::from_str(r#"{"message": "hello", "context": {"stream": "science"}}"#)
                .unwrap();
        assert_eq!(req.context.unwrap()["stream"], "science");
    }
}
