mod advisor;
mod auth;
mod config;
mod db;
mod errors;
mod i18n;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::CareerAdvisor;
use crate::auth::{AuthBackend, SupabaseAuth};
use crate::config::Config;
use crate::db::SupabaseDb;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career API v{}", env!("CARGO_PKG_VERSION"));

    // One HTTP client shared by Gemini and Supabase calls
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;

    let advisor = CareerAdvisor::from_api_key(config.gemini_api_key.as_deref(), http.clone());
    if advisor.is_available() {
        info!("Advisor initialized (model: {})", llm_client::MODEL);
    }

    let auth = SupabaseAuth::from_config(&config.supabase, http.clone())
        .map(|a| Arc::new(a) as Arc<dyn AuthBackend>);
    info!(
        "Supabase auth {} (guest login {})",
        if auth.is_some() { "enabled" } else { "not configured" },
        if config.enable_guest_login { "on" } else { "off" }
    );

    let db = SupabaseDb::from_config(&config.supabase, http);

    let state = AppState {
        advisor: Arc::new(advisor),
        auth,
        db,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
