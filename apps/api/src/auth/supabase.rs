use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::auth::{
    ensure_supported_provider, AuthBackend, AuthError, AuthSession, AuthUser, SignUpOutcome,
};
use crate::config::SupabaseConfig;

/// GoTrue reports errors under several field names depending on its version.
#[derive(Debug, Default, Deserialize)]
struct GoTrueError {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl GoTrueError {
    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
    }
}

/// Supabase Auth over its REST API, authenticated with the project's anon key.
#[derive(Clone)]
pub struct SupabaseAuth {
    client: Client,
    auth_url: String,
    authorize_url: Url,
    anon_key: String,
}

impl SupabaseAuth {
    /// Returns `None` unless both the project URL and anon key are configured.
    pub fn from_config(config: &SupabaseConfig, client: Client) -> Option<Self> {
        let base = config.url.as_deref()?.trim_end_matches('/');
        let anon_key = config.anon_key.as_deref()?;
        let auth_url = format!("{base}/auth/v1");

        let authorize_url = match Url::parse(&format!("{auth_url}/authorize")) {
            Ok(url) => url,
            Err(e) => {
                warn!("Invalid SUPABASE_URL '{base}': {e}; auth disabled");
                return None;
            }
        };

        Some(Self {
            client,
            auth_url,
            authorize_url,
            anon_key: anon_key.to_string(),
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{path}", self.auth_url))
            .header("apikey", &self.anon_key)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AuthError> {
        let response = check_status(request.send().await?).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

async fn check_status(response: Response) -> Result<Response, AuthError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<GoTrueError>(&body)
        .ok()
        .and_then(GoTrueError::into_message)
        .unwrap_or(body);
    debug!("Supabase auth returned {status}: {message}");

    Err(match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AuthError::Rejected(message)
        }
        StatusCode::UNPROCESSABLE_ENTITY => AuthError::Invalid(message),
        _ => AuthError::Api {
            status: status.as_u16(),
            message,
        },
    })
}

#[async_trait]
impl AuthBackend for SupabaseAuth {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let request = self
            .request(reqwest::Method::POST, "/token?grant_type=password")
            .json(&json!({ "email": email, "password": password }));
        self.send(request).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let request = self
            .request(reqwest::Method::POST, "/signup")
            .json(&json!({ "email": email, "password": password }));
        self.send(request).await
    }

    async fn sign_in_anonymously(&self) -> Result<AuthSession, AuthError> {
        let request = self
            .request(reqwest::Method::POST, "/signup")
            .json(&json!({ "data": {} }));
        self.send(request).await
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let request = self
            .request(reqwest::Method::GET, "/user")
            .bearer_auth(access_token);
        self.send(request).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let request = self
            .request(reqwest::Method::POST, "/logout")
            .bearer_auth(access_token);
        check_status(request.send().await?).await?;
        Ok(())
    }

    fn oauth_authorize_url(
        &self,
        provider: &str,
        redirect_to: Option<&str>,
    ) -> Result<String, AuthError> {
        ensure_supported_provider(provider)?;

        let mut url = self.authorize_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("provider", provider);
            if let Some(redirect_to) = redirect_to {
                query.append_pair("redirect_to", redirect_to);
            }
        }
        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode as HttpStatus, routing::post, Json, Router};
    use serde_json::Value;

    use super::*;
    use crate::test_support::{client, serve_stub};

    const USER: &str = r#"{"id": "6f1c1c2e-8d1a-4c47-9a55-0b4c1d2e3f40", "email": "asha@example.com"}"#;

    fn config(url: Option<&str>, anon: Option<&str>) -> SupabaseConfig {
        SupabaseConfig {
            url: url.map(String::from),
            anon_key: anon.map(String::from),
            service_role_key: None,
            health_table: "profiles".to_string(),
        }
    }

    fn auth() -> SupabaseAuth {
        SupabaseAuth::from_config(
            &config(Some("https://demo.supabase.co/"), Some("anon-key")),
            Client::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_requires_url_and_anon_key() {
        assert!(SupabaseAuth::from_config(&config(None, Some("k")), Client::new()).is_none());
        assert!(
            SupabaseAuth::from_config(&config(Some("https://demo.supabase.co"), None), Client::new())
                .is_none()
        );
    }

    #[test]
    fn test_invalid_url_disables_auth() {
        assert!(SupabaseAuth::from_config(&config(Some("not a url"), Some("k")), Client::new()).is_none());
    }

    #[test]
    fn test_oauth_url_encodes_redirect() {
        let url = auth()
            .oauth_authorize_url("google", Some("https://app.example.com/auth/callback"))
            .unwrap();
        assert_eq!(
            url,
            "https://demo.supabase.co/auth/v1/authorize?provider=google\
             &redirect_to=https%3A%2F%2Fapp.example.com%2Fauth%2Fcallback"
        );
    }

    #[test]
    fn test_oauth_url_without_redirect() {
        let url = auth().oauth_authorize_url("github", None).unwrap();
        assert_eq!(url, "https://demo.supabase.co/auth/v1/authorize?provider=github");
    }

    #[test]
    fn test_oauth_rejects_unknown_provider() {
        assert!(matches!(
            auth().oauth_authorize_url("orkut", None),
            Err(AuthError::UnsupportedProvider(_))
        ));
    }

    #[test]
    fn test_gotrue_error_message_precedence() {
        let modern: GoTrueError = serde_json::from_str(
            r#"{"code": 400, "error_code": "invalid_credentials", "msg": "Invalid login credentials"}"#,
        )
        .unwrap();
        assert_eq!(modern.into_message().as_deref(), Some("Invalid login credentials"));

        let legacy: GoTrueError = serde_json::from_str(
            r#"{"error": "invalid_grant", "error_description": "Email not confirmed"}"#,
        )
        .unwrap();
        assert_eq!(legacy.into_message().as_deref(), Some("Email not confirmed"));
    }

    /// GoTrue stand-in: one accepted password, a taken email, a broken user endpoint.
    fn gotrue() -> Router {
        Router::new()
            .route(
                "/auth/v1/token",
                post(|Json(body): Json<Value>| async move {
                    if body["password"] == "correct-horse" {
                        let session = format!(
                            r#"{{"access_token": "at", "refresh_token": "rt", "expires_in": 3600, "user": {USER}}}"#
                        );
                        (HttpStatus::OK, session)
                    } else {
                        (
                            HttpStatus::BAD_REQUEST,
                            r#"{"code": 400, "error_code": "invalid_credentials", "msg": "Invalid login credentials"}"#
                                .to_string(),
                        )
                    }
                }),
            )
            .route(
                "/auth/v1/signup",
                post(|| async {
                    (
                        HttpStatus::UNPROCESSABLE_ENTITY,
                        r#"{"code": 422, "error_code": "user_already_exists", "msg": "User already registered"}"#,
                    )
                }),
            )
            .route(
                "/auth/v1/user",
                axum::routing::get(|| async {
                    (HttpStatus::INTERNAL_SERVER_ERROR, "upstream exploded")
                }),
            )
    }

    async fn stub_auth() -> SupabaseAuth {
        let base = serve_stub(gotrue()).await;
        SupabaseAuth::from_config(&config(Some(base.as_str()), Some("anon-key")), client()).unwrap()
    }

    #[tokio::test]
    async fn test_password_sign_in_returns_session() {
        let session = stub_auth()
            .await
            .sign_in_with_password("asha@example.com", "correct-horse")
            .await
            .unwrap();
        assert_eq!(session.access_token, "at");
        assert_eq!(session.user.email.as_deref(), Some("asha@example.com"));
    }

    #[tokio::test]
    async fn test_bad_password_is_rejected_with_gotrue_message() {
        let err = stub_auth()
            .await
            .sign_in_with_password("asha@example.com", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Rejected(m) if m == "Invalid login credentials"));
    }

    #[tokio::test]
    async fn test_sign_up_422_is_invalid_request() {
        let err = stub_auth()
            .await
            .sign_up("asha@example.com", "pw")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Invalid(m) if m == "User already registered"));
    }

    #[tokio::test]
    async fn test_server_error_is_api_error_with_raw_body() {
        let err = stub_auth().await.get_user("token").await.unwrap_err();
        assert!(matches!(
            err,
            AuthError::Api { status: 500, message } if message == "upstream exploded"
        ));
    }
}
