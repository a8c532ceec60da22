use anyhow::{Context, Result};

/// Supabase project settings. Every field is optional: a missing value only
/// disables the routes that need it.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub service_role_key: Option<String>,
    /// Table probed by the admin health check.
    pub health_table: String,
}

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail startup; every external service degrades softly.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub enable_guest_login: bool,
    pub supabase: SupabaseConfig,
    pub ping_message: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini_api_key: None,
            enable_guest_login: false,
            supabase: SupabaseConfig {
                url: None,
                anon_key: None,
                service_role_key: None,
                health_table: DEFAULT_HEALTH_TABLE.to_string(),
            },
            ping_message: None,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

const DEFAULT_HEALTH_TABLE: &str = "profiles";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            // The VITE_ names are what the browser bundle used; accept both.
            gemini_api_key: optional_env(&["GEMINI_API_KEY", "VITE_GEMINI_API_KEY"]),
            enable_guest_login: optional_env(&["ENABLE_GUEST_LOGIN", "VITE_ENABLE_GUEST_LOGIN"])
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            supabase: SupabaseConfig {
                url: optional_env(&["SUPABASE_URL", "VITE_SUPABASE_URL"]),
                anon_key: optional_env(&["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"]),
                service_role_key: optional_env(&["SUPABASE_SERVICE_ROLE_KEY"]),
                health_table: optional_env(&["SUPABASE_HEALTH_TABLE"])
                    .unwrap_or_else(|| DEFAULT_HEALTH_TABLE.to_string()),
            },
            ping_message: optional_env(&["PING_MESSAGE"]),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Returns the first non-blank value among `keys`.
fn optional_env(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
