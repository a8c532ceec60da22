//! Career advisor. Turns a chat message into a reply with follow-up suggestions.
//!
//! Flow: build_prompt → Gemini → suggestions_for(message) + extract_metadata(reply).
//! Any failure (no key, HTTP error, blocked or empty reply) degrades to the
//! deterministic fallback; `generate_response` never returns an error.

pub mod fallback;
pub mod handlers;
pub mod metadata;
pub mod prompts;
pub mod suggestions;

use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use crate::advisor::fallback::fallback_response;
use crate::advisor::metadata::extract_metadata;
use crate::advisor::prompts::build_prompt;
use crate::advisor::suggestions::suggestions_for;
use crate::llm_client::{GeminiClient, GenerativeModel};
use crate::models::chat::ChatResponse;

/// Values shipped in `.env.example` files that are not real keys.
const PLACEHOLDER_KEYS: &[&str] = &["your_gemini_api_key_here", "your-api-key", "YOUR_API_KEY"];

/// Decided once at startup and never retried.
#[derive(Clone)]
pub enum AdvisorBackend {
    Available(Arc<dyn GenerativeModel>),
    Unavailable,
}

#[derive(Clone)]
pub struct CareerAdvisor {
    backend: AdvisorBackend,
}

impl CareerAdvisor {
    /// Configures Gemini from an API key. Blank and placeholder keys leave the
    /// advisor unavailable for its lifetime.
    pub fn from_api_key(api_key: Option<&str>, http: Client) -> Self {
        match api_key.map(str::trim) {
            Some(key) if !key.is_empty() && !PLACEHOLDER_KEYS.contains(&key) => {
                Self::with_model(Arc::new(GeminiClient::new(http, key.to_string())))
            }
            _ => {
                info!("No usable Gemini API key; advisor will serve fallback replies");
                Self::unavailable()
            }
        }
    }

    pub fn with_model(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            backend: AdvisorBackend::Available(model),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            backend: AdvisorBackend::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.backend, AdvisorBackend::Available(_))
    }

    pub async fn generate_response(&self, message: &str, context: Option<&Value>) -> ChatResponse {
        let model = match &self.backend {
            AdvisorBackend::Available(model) => model,
            AdvisorBackend::Unavailable => return fallback_response(message),
        };

        let prompt = build_prompt(message, context);
        match model.generate(&prompt).await {
            Ok(reply) => {
                let metadata = extract_metadata(&reply);
                ChatResponse::new(reply, suggestions_for(message), metadata)
            }
            Err(e) => {
                warn!("Gemini call failed, serving fallback reply: {e}");
                fallback_response(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::advisor::suggestions::{DEFAULT_SUGGESTIONS, SALARY_SUGGESTIONS};
    use crate::llm_client::LlmError;
    use crate::models::chat::ResponseKind;

    /// Replies with fixed text and records the last prompt it saw.
    struct CannedModel {
        reply: String,
        last_prompt: Mutex<Option<String>>,
    }

    impl CannedModel {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                last_prompt: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl GenerativeModel for CannedModel {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl GenerativeModel for FailingModel {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_missing_or_placeholder_key_is_unavailable() {
        assert!(!CareerAdvisor::from_api_key(None, Client::new()).is_available());
        assert!(!CareerAdvisor::from_api_key(Some("   "), Client::new()).is_available());
        assert!(
            !CareerAdvisor::from_api_key(Some("your_gemini_api_key_here"), Client::new())
                .is_available()
        );
        assert!(CareerAdvisor::from_api_key(Some("AIzaSyExample"), Client::new()).is_available());
    }

    #[tokio::test]
    async fn test_unavailable_greeting_gets_welcome_payload() {
        let advisor = CareerAdvisor::unavailable();
        for message in ["Hi", "hello!", "Hey there"] {
            let response = advisor.generate_response(message, None).await;
            assert!(response.content.starts_with("Hello! I'm CareerPath AI"));
            assert_eq!(response.suggestions.len(), 5);
        }
    }

    #[tokio::test]
    async fn test_unavailable_other_message_gets_ready_payload() {
        let advisor = CareerAdvisor::unavailable();
        let response = advisor
            .generate_response("Tell me about careers in law", None)
            .await;
        assert!(response.content.starts_with("Thanks for your question!"));
        assert_eq!(response.suggestions.len(), 5);
        assert_eq!(response.response_kind, ResponseKind::Plain);
    }

    #[tokio::test]
    async fn test_salary_message_routes_suggestions_regardless_of_reply() {
        let model = CannedModel::new("Interview prep matters more than anything.");
        let advisor = CareerAdvisor::with_model(model);
        let response = advisor
            .generate_response("What salary can a nurse expect?", None)
            .await;

        assert_eq!(response.content, "Interview prep matters more than anything.");
        let expected: Vec<String> = SALARY_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        assert_eq!(response.suggestions, expected);
        assert_eq!(response.response_kind, ResponseKind::Plain);
    }

    #[tokio::test]
    async fn test_salary_figures_in_reply_produce_career_card() {
        let model = CannedModel::new("Nurses earn ₹3-6 LPA, with 12% growth.");
        let advisor = CareerAdvisor::with_model(model);
        let response = advisor.generate_response("Tell me about nursing", None).await;

        assert_eq!(response.response_kind, ResponseKind::CareerCard);
        let metadata = response.metadata.unwrap();
        assert_eq!(metadata.salary_range, "₹3-6 LPA");
        assert_eq!(metadata.growth_rate, "12% growth");
        let expected: Vec<String> = DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        assert_eq!(response.suggestions, expected);
    }

    #[tokio::test]
    async fn test_prompt_carries_message_and_context() {
        let model = CannedModel::new("ok");
        let advisor = CareerAdvisor::with_model(model.clone());
        let context = json!({"grade": 12, "stream": "science"});
        advisor
            .generate_response("Which course after 12th?", Some(&context))
            .await;

        let prompt = model.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("User question: Which course after 12th?"));
        assert!(prompt.contains("\"stream\": \"science\""));
    }

    #[tokio::test]
    async fn test_model_failure_degrades_to_fallback() {
        let advisor = CareerAdvisor::with_model(Arc::new(FailingModel));

        let greeting = advisor.generate_response("hey", None).await;
        assert!(greeting.content.starts_with("Hello! I'm CareerPath AI"));

        let other = advisor.generate_response("Tell me about law", None).await;
        assert!(other.content.starts_with("Thanks for your question!"));
        assert_eq!(other.suggestions.len(), 5);
    }
}
