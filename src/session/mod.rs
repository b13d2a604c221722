//! Session management
//!
//! Owns the current user, the bearer token (held in the shared client
//! cell), and the login/register/logout/restore flows. Remote failures
//! never escape this boundary: credential operations return an
//! [`AuthOutcome`] and profile refreshes log and move on.

mod persist;

pub use persist::TokenFile;

use crate::api::models::{LoginRequest, RegisterRequest, Role, User};
use crate::client::ApiClient;
use crate::router;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Result of a credential exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Session established; `redirect` is where the UI should land next
    Success { redirect: &'static str },
    /// The attempt failed; `message` is safe to show to the user
    Failure { message: String },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success { .. })
    }
}

/// Point-in-time view of the session for the route guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub is_admin: bool,
}

/// Process-wide session state.
///
/// The token lives in the [`ApiClient`]'s shared cell so every request
/// built by any clone of the client sees it; `authenticated` is derived
/// from its presence and never stored separately. A generation counter
/// gives "latest operation wins": a response that resolves after a newer
/// login, register, or logout has started is discarded instead of
/// clobbering the newer state.
pub struct SessionStore {
    api: ApiClient,
    user: RwLock<Option<User>>,
    tokens: TokenFile,
    generation: AtomicU64,
}

impl SessionStore {
    pub fn new(api: ApiClient, tokens: TokenFile) -> Self {
        Self {
            api,
            user: RwLock::new(None),
            tokens,
            generation: AtomicU64::new(0),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }

    /// Restore a persisted session at startup.
    ///
    /// If a token is on disk and no user is loaded yet, install the token
    /// and eagerly fetch the profile once. Until that completes the session
    /// counts as authenticated with no user loaded.
    pub async fn restore(&self) {
        if self.api.token().await.is_some() {
            return;
        }
        if let Some(token) = self.tokens.load() {
            self.api.set_token(token).await;
            self.fetch_user().await;
        }
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token is persisted and installed, the user stored,
    /// and the role-appropriate landing route returned. On failure the
    /// prior session state is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let generation = self.begin();
        match self.api.login(&request).await {
            Ok(response) => self.establish(generation, response.token, response.user).await,
            Err(err) => AuthOutcome::Failure {
                message: err.to_string(),
            },
        }
    }

    /// Create an account, defaulting an unspecified role to student
    pub async fn register(&self, mut request: RegisterRequest) -> AuthOutcome {
        request.role = request.role.or(Some(Role::Student));
        let generation = self.begin();
        match self.api.register(&request).await {
            Ok(response) => self.establish(generation, response.token, response.user).await,
            Err(err) => AuthOutcome::Failure {
                message: err.to_string(),
            },
        }
    }

    async fn establish(&self, generation: u64, token: String, user: User) -> AuthOutcome {
        if self.is_stale(generation) {
            return AuthOutcome::Failure {
                message: "Superseded by a newer sign-in".to_string(),
            };
        }
        if let Err(err) = self.tokens.save(&token) {
            // Keep the in-memory session; only resumption is affected.
            tracing::warn!("Failed to persist session token: {}", err);
        }
        self.api.set_token(token).await;
        let redirect = router::landing(user.role);
        *self.user.write().await = Some(user);
        AuthOutcome::Success { redirect }
    }

    /// Refresh the stored user from the backend.
    ///
    /// A 401 means the token is no longer valid and tears the session
    /// down; any other failure is logged and leaves the session intact so
    /// a network blip cannot silently log the user out.
    pub async fn fetch_user(&self) {
        if self.api.token().await.is_none() {
            return;
        }
        let generation = self.begin();
        match self.api.current_user().await {
            Ok(user) => {
                if !self.is_stale(generation) {
                    *self.user.write().await = Some(user);
                }
            }
            Err(err) if err.is_unauthorized() => {
                if !self.is_stale(generation) {
                    self.logout().await;
                }
            }
            Err(err) => {
                tracing::warn!("Failed to refresh current user: {}", err);
            }
        }
    }

    /// Tear the session down: user, token, and persisted token.
    /// Idempotent; logging out while logged out is a no-op.
    pub async fn logout(&self) {
        self.begin();
        *self.user.write().await = None;
        self.api.clear_token().await;
        if let Err(err) = self.tokens.clear() {
            tracing::warn!("Failed to clear persisted token: {}", err);
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.api.token().await.is_some()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    pub async fn is_admin(&self) -> bool {
        self.user
            .read()
            .await
            .as_ref()
            .map(User::is_admin)
            .unwrap_or(false)
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            authenticated: self.is_authenticated().await,
            is_admin: self.is_admin().await,
        }
    }
}
