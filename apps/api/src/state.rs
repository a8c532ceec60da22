use std::sync::Arc;

use crate::advisor::CareerAdvisor;
use crate::auth::AuthBackend;
use crate::config::Config;
use crate::db::SupabaseDb;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<CareerAdvisor>,
    /// `None` when the Supabase URL or anon key is missing; auth routes answer 503.
    pub auth: Option<Arc<dyn AuthBackend>>,
    /// `None` when the Supabase URL or both keys are missing; the admin health check fails.
    pub db: Option<SupabaseDb>,
    pub config: Config,
}

impl AppState {
    /// State with no external services configured.
    #[cfg(test)]
    pub fn offline(config: Config) -> Self {
        Self {
            advisor: Arc::new(CareerAdvisor::unavailable()),
            auth: None,
            db: None,
            config,
        }
    }
}
