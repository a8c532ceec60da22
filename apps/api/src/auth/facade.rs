#![allow(dead_code)]

//! Session-holding auth facade for embedders.
//!
//! Not used by the HTTP routes in `auth::handlers`, which stay stateless and
//! call `AuthBackend` directly.
//!
//! Consumers either poll `current()`, hold an `AuthSubscription`, or register a
//! callback with `on_change`. Every successful sign-in, restore or sign-out
//! publishes a fresh `AuthSnapshot`.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::auth::{
    ensure_guest_allowed, AuthBackend, AuthError, AuthSession, AuthUser, SignUpOutcome,
};

/// What subscribers see. Tokens never leave the facade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthSnapshot {
    pub user: Option<AuthUser>,
    pub is_authenticated: bool,
}

impl AuthSnapshot {
    fn signed_out() -> Self {
        Self {
            user: None,
            is_authenticated: false,
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveSession {
    access_token: String,
    user: AuthUser,
}

fn snapshot_of(session: &Option<ActiveSession>) -> AuthSnapshot {
    match session {
        Some(active) => AuthSnapshot {
            user: Some(active.user.clone()),
            is_authenticated: true,
        },
        None => AuthSnapshot::signed_out(),
    }
}

/// Receiving end of the facade's state channel.
pub struct AuthSubscription {
    rx: watch::Receiver<Option<ActiveSession>>,
}

impl AuthSubscription {
    pub fn snapshot(&self) -> AuthSnapshot {
        snapshot_of(&self.rx.borrow())
    }

    /// Waits for the next state change. Returns `None` once the facade is dropped.
    pub async fn changed(&mut self) -> Option<AuthSnapshot> {
        self.rx.changed().await.ok()?;
        Some(snapshot_of(&self.rx.borrow_and_update()))
    }
}

pub struct AuthFacade {
    backend: Arc<dyn AuthBackend>,
    guest_enabled: bool,
    state: watch::Sender<Option<ActiveSession>>,
}

impl AuthFacade {
    pub fn new(backend: Arc<dyn AuthBackend>, guest_enabled: bool) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            backend,
            guest_enabled,
            state,
        }
    }

    pub fn current(&self) -> AuthSnapshot {
        snapshot_of(&self.state.borrow())
    }

    pub fn subscribe(&self) -> AuthSubscription {
        AuthSubscription {
            rx: self.state.subscribe(),
        }
    }

    /// Spawns a task that calls `callback` with every new snapshot until the
    /// facade is dropped or the handle is aborted.
    pub fn on_change<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: Fn(AuthSnapshot) + Send + 'static,
    {
        let mut subscription = self.subscribe();
        tokio::spawn(async move {
            while let Some(snapshot) = subscription.changed().await {
                callback(snapshot);
            }
        })
    }

    fn publish(&self, session: Option<ActiveSession>) {
        self.state.send_replace(session);
    }

    fn adopt(&self, session: &AuthSession) {
        self.publish(Some(ActiveSession {
            access_token: session.access_token.clone(),
            user: session.user.clone(),
        }));
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let session = self.backend.sign_in_with_password(email, password).await?;
        info!("User {} signed in", session.user.id);
        self.adopt(&session);
        Ok(session)
    }

    /// Publishes a new state only when sign-up returned a session.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let outcome = self.backend.sign_up(email, password).await?;
        if let SignUpOutcome::Session(session) = &outcome {
            self.adopt(session);
        }
        Ok(outcome)
    }

    pub async fn sign_in_as_guest(&self) -> Result<AuthSession, AuthError> {
        ensure_guest_allowed(self.guest_enabled)?;
        let session = self.backend.sign_in_anonymously().await?;
        info!("Guest user {} signed in", session.user.id);
        self.adopt(&session);
        Ok(session)
    }

    /// Re-establishes state from a stored access token.
    pub async fn restore(&self, access_token: &str) -> Result<AuthSnapshot, AuthError> {
        let user = self.backend.get_user(access_token).await?;
        self.publish(Some(ActiveSession {
            access_token: access_token.to_string(),
            user,
        }));
        Ok(self.current())
    }

    /// Always clears local state; a failed remote logout is only logged.
    pub async fn sign_out(&self) {
        let token = self.state.borrow().as_ref().map(|s| s.access_token.clone());
        if let Some(token) = token {
            if let Err(e) = self.backend.sign_out(&token).await {
                warn!("Remote sign-out failed: {e}");
            }
        }
        self.publish(None);
    }

    pub fn oauth_authorize_url(
        &self,
        provider: &str,
        redirect_to: Option<&str>,
    ) -> Result<String, AuthError> {
        self.backend.oauth_authorize_url(provider, redirect_to)
    }
}
