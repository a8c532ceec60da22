pub mod api;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::auth::handlers as auth;
use crate::i18n::handlers as i18n;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auxiliary API
        .route("/api/ping", get(api::handle_ping))
        .route("/api/demo", get(api::handle_demo))
        .route("/api/admin/health", get(api::handle_admin_health))
        // Advisor
        .route("/api/chat", post(advisor::handle_chat))
        // Resume
        .route(
            "/api/resume/extract",
            post(resume::handle_extract).layer(DefaultBodyLimit::max(resume::MAX_UPLOAD_BYTES)),
        )
        // Translations
        .route("/api/i18n/:lang", get(i18n::handle_table))
        .route("/api/i18n/:lang/:key", get(i18n::handle_lookup))
        // Auth
        .route("/api/auth/login", post(auth::handle_login))
        .route("/api/auth/signup", post(auth::handle_signup))
        .route("/api/auth/guest", post(auth::handle_guest))
        .route("/api/auth/oauth/:provider", get(auth::handle_oauth_url))
        .route("/api/auth/user", get(auth::handle_get_user))
        .route("/api/auth/logout", post(auth::handle_logout))
        .with_state(state)
}
