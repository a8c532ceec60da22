//! Axum route handlers for the Advisor API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::state::AppState;

/// POST /api/chat
///
/// Always answers 200 for a non-empty message; model failures surface as the
/// fallback reply, not as an error.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let response = state
        .advisor
        .generate_response(&request.message, request.context.as_ref())
        .await;

    Ok(Json(response))
}
