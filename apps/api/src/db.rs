use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::config::SupabaseConfig;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Query failed (status {status}): {message}")]
    Query { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

/// Read-only handle on the Supabase REST (PostgREST) API.
#[derive(Clone)]
pub struct SupabaseDb {
    client: Client,
    rest_url: String,
    api_key: String,
    health_table: String,
}

impl SupabaseDb {
    /// Returns `None` unless the URL and at least one key are configured.
    /// The service-role key is preferred over the anon key.
    pub fn from_config(config: &SupabaseConfig, client: Client) -> Option<Self> {
        let url = config.url.as_deref()?;
        let api_key = config
            .service_role_key
            .as_deref()
            .or(config.anon_key.as_deref())?;

        info!("Supabase REST client initialized");
        Some(Self {
            client,
            rest_url: format!("{}/rest/v1", url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            health_table: config.health_table.clone(),
        })
    }

    fn sample_url(&self) -> String {
        format!("{}/{}?select=*&limit=1", self.rest_url, self.health_table)
    }

    /// Reads at most one row from the health table and returns how many came back.
    pub async fn sample(&self) -> Result<usize, BackendError> {
        let response = self
            .client
            .get(self.sample_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<PostgrestError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(BackendError::Query {
                status: status.as_u16(),
                message,
            });
        }

        let rows: Vec<Value> = response.json().await?;
        Ok(rows.len())
    }
}
