//! Authentication. Delegates every credential check to Supabase Auth (GoTrue).
//!
//! `AuthBackend` is the seam: `SupabaseAuth` talks HTTP, tests plug in fakes.
//! `AuthFacade` layers a session cache and change notifications on top.

pub mod facade;
pub mod handlers;
pub mod supabase;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use supabase::SupabaseAuth;

/// OAuth providers enabled on the Supabase project.
pub const OAUTH_PROVIDERS: &[&str] = &["google", "github", "linkedin_oidc"];

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Guest login is disabled")]
    GuestDisabled,

    #[error("Unsupported OAuth provider: {0}")]
    UnsupportedProvider(String),

    /// Credentials or token refused by the auth service.
    #[error("Authentication rejected: {0}")]
    Rejected(String),

    /// Request understood but refused, e.g. an already registered email or a weak password.
    #[error("Invalid auth request: {0}")]
    Invalid(String),

    #[error("Auth API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected auth response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    pub user: AuthUser,
}

/// Sign-up either logs the user in directly or waits on email confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignUpOutcome {
    Session(AuthSession),
    ConfirmationRequired(AuthUser),
}

#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError>;

    /// Creates an anonymous (guest) user and session.
    async fn sign_in_anonymously(&self) -> Result<AuthSession, AuthError>;

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// URL the browser is sent to for an OAuth sign-in.
    fn oauth_authorize_url(
        &self,
        provider: &str,
        redirect_to: Option<&str>,
    ) -> Result<String, AuthError>;
}

/// Rejects guest sign-in unless the feature flag is on.
pub fn ensure_guest_allowed(enabled: bool) -> Result<(), AuthError> {
    if enabled {
        Ok(())
    } else {
        Err(AuthError::GuestDisabled)
    }
}

pub fn ensure_supported_provider(provider: &str) -> Result<(), AuthError> {
    if OAUTH_PROVIDERS.contains(&provider) {
        Ok(())
    } else {
        Err(AuthError::UnsupportedProvider(provider.to_string()))
    }
}
