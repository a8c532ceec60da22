//! Auxiliary endpoints: ping, demo and the admin health probe.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::state::AppState;

const DEFAULT_PING_MESSAGE: &str = "ping";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/ping
pub async fn handle_ping(State(state): State<AppState>) -> Json<MessageResponse> {
    let message = state
        .config
        .ping_message
        .clone()
        .unwrap_or_else(|| DEFAULT_PING_MESSAGE.to_string());
    Json(MessageResponse { message })
}

/// GET /api/demo
pub async fn handle_demo() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the career API".to_string(),
    })
}

/// GET /api/admin/health
///
/// Runs one read-only query against Supabase. Uses its own `{ok, ...}` body
/// rather than the `AppError` envelope.
pub async fn handle_admin_health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let Some(db) = state.db.as_ref() else {
        warn!("Admin health check requested without Supabase configuration");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "ok": false, "error": "Missing Supabase configuration" })),
        );
    };

    match db.sample().await {
        Ok(sample) => (StatusCode::OK, Json(json!({ "ok": true, "sample": sample }))),
        Err(e) => {
            error!("Admin health query failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false, "error": e.to_string() })),
            )
        }
    }
}
