//! Axum route handlers for the Auth API. Stateless: the client keeps its tokens.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::{ensure_guest_allowed, AuthBackend, AuthSession, AuthUser, SignUpOutcome};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct OAuthQuery {
    pub redirect_to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OAuthUrlResponse {
    pub url: String,
}

fn backend(state: &AppState) -> Result<&Arc<dyn AuthBackend>, AppError> {
    state
        .auth
        .as_ref()
        .ok_or_else(|| AppError::ServiceUnavailable("Authentication is not configured".to_string()))
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))
}

fn validate_credentials(req: &CredentialsRequest) -> Result<(), AppError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<AuthSession>, AppError> {
    validate_credentials(&req)?;
    let session = backend(&state)?
        .sign_in_with_password(req.email.trim(), &req.password)
        .await?;
    Ok(Json(session))
}

/// POST /api/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<SignUpOutcome>, AppError> {
    validate_credentials(&req)?;
    let outcome = backend(&state)?
        .sign_up(req.email.trim(), &req.password)
        .await?;
    Ok(Json(outcome))
}

/// POST /api/auth/guest
pub async fn handle_guest(State(state): State<AppState>) -> Result<Json<AuthSession>, AppError> {
    ensure_guest_allowed(state.config.enable_guest_login)?;
    let session = backend(&state)?.sign_in_anonymously().await?;
    Ok(Json(session))
}

/// GET /api/auth/oauth/:provider
pub async fn handle_oauth_url(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(query): Query<OAuthQuery>,
) -> Result<Json<OAuthUrlResponse>, AppError> {
    let url = backend(&state)?.oauth_authorize_url(&provider, query.redirect_to.as_deref())?;
    Ok(Json(OAuthUrlResponse { url }))
}

/// GET /api/auth/user
pub async fn handle_get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AuthUser>, AppError> {
    let token = bearer_token(&headers)?;
    let user = backend(&state)?.get_user(token).await?;
    Ok(Json(user))
}

/// POST /api/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let token = bearer_token(&headers)?;
    backend(&state)?.sign_out(token).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def");
    }

    #[test]
    fn test_missing_or_malformed_bearer_is_unauthorized() {
        assert!(matches!(
            bearer_token(&HeaderMap::new()),
            Err(AppError::Unauthorized(_))
        ));

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));
        assert!(bearer_token(&headers).is_err());
    }

    #[test]
    fn test_blank_credentials_rejected() {
        let req = CredentialsRequest {
            email: "  ".to_string(),
            password: "pw".to_string(),
        };
        assert!(matches!(
            validate_credentials(&req),
            Err(AppError::Validation(_))
        ));
    }
}
