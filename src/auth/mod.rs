//! Auth context: the single source of truth for who is signed in.
//!
//! ARCHITECTURE
//! ============
//! `AuthContext` is constructed once at boot and shared with the UI shell.
//! It owns the in-memory `AuthState`, talks to identity providers only
//! through `IdentityAdapter`, and writes every change through to the
//! `SessionStore` before the operation resolves.
//!
//! State is published on a `watch` channel so screens can re-render on
//! change without polling.
//!
//! ORDERING
//! ========
//! Within a sign-in or sign-out the in-memory update happens before the
//! storage write, and the write is awaited. A failed write is returned to
//! the caller with memory already updated; the next `restore` reconciles.
//! Nothing here serializes concurrent sign-ins; the shell disables its
//! controls while one is running.

pub mod apple;
pub mod google;

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::config::{ConfigError, GoogleConfig};
use crate::identity::{AuthRequest, AuthorizationResult, Grant, IdentityAdapter, IdentityError, Scope};
use crate::storage::{self, SessionStore, StorageError, USER_KEY};
use crate::user::User;

pub use google::{GoogleUserInfoClient, UserInfoFetch};

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The requested provider was not wired into this context.
    #[error("{provider} sign-in is not configured")]
    NotConfigured { provider: &'static str },

    /// Provider configuration is present but unusable.
    #[error("invalid auth configuration: {0}")]
    Config(#[from] ConfigError),

    /// The provider or its network exchange failed.
    #[error("identity provider failed: {0}")]
    ProviderFailed(String),

    /// The provider answered with something we cannot map to a user.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// Reading or writing the session store failed.
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl From<IdentityError> for AuthError {
    fn from(e: IdentityError) -> Self {
        Self::ProviderFailed(e.to_string())
    }
}

impl AuthError {
    /// Stable code the shell maps to user-facing alerts.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotConfigured { .. } | Self::Config(_) => "E_NOT_CONFIGURED",
            Self::ProviderFailed(_) => "E_PROVIDER_FAILED",
            Self::MalformedResponse(_) => "E_MALFORMED_RESPONSE",
            Self::Storage(_) => "E_STORAGE",
        }
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Snapshot of the authentication state exposed to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the initial restore from storage has finished.
    pub user_storage_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, user_storage_loading: true }
    }
}

/// Outcome of a sign-in that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignIn {
    SignedIn(User),
    Cancelled,
}

// =============================================================================
// CONTEXT
// =============================================================================

struct GoogleProvider {
    config: GoogleConfig,
    adapter: Arc<dyn IdentityAdapter>,
    user_info: Arc<dyn UserInfoFetch>,
}

pub struct AuthContext {
    store: Arc<dyn SessionStore>,
    google: Option<GoogleProvider>,
    apple: Option<Arc<dyn IdentityAdapter>>,
    state: watch::Sender<AuthState>,
}

pub struct AuthContextBuilder {
    store: Arc<dyn SessionStore>,
    google: Option<GoogleProvider>,
    apple: Option<Arc<dyn IdentityAdapter>>,
}

impl AuthContextBuilder {
    /// Enable Google sign-in through a browser-redirect adapter.
    #[must_use]
    pub fn google(
        mut self,
        config: GoogleConfig,
        adapter: Arc<dyn IdentityAdapter>,
        user_info: Arc<dyn UserInfoFetch>,
    ) -> Self {
        self.google = Some(GoogleProvider { config, adapter, user_info });
        self
    }

    /// Enable Apple sign-in through a platform-native adapter.
    #[must_use]
    pub fn apple(mut self, adapter: Arc<dyn IdentityAdapter>) -> Self {
        self.apple = Some(adapter);
        self
    }

    #[must_use]
    pub fn build(self) -> AuthContext {
        let (state, _) = watch::channel(AuthState::default());
        AuthContext { store: self.store, google: self.google, apple: self.apple, state }
    }
}

impl AuthContext {
    #[must_use]
    pub fn builder(store: Arc<dyn SessionStore>) -> AuthContextBuilder {
        AuthContextBuilder { store, google: None, apple: None }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().user_storage_loading
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Adopt the persisted user, if any. Clears the loading flag whether or
    /// not the read succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the record cannot be read or decoded.
    pub async fn restore(&self) -> Result<Option<User>, AuthError> {
        let restored = storage::get_json::<User, _>(self.store.as_ref(), USER_KEY).await;
        self.state.send_modify(|state| {
            if let Ok(Some(user)) = &restored {
                state.user = Some(user.clone());
            }
            state.user_storage_loading = false;
        });
        let restored = restored?;
        info!(restored = restored.is_some(), "session restored");
        Ok(restored)
    }

    /// Sign in through the Google OAuth implicit flow.
    ///
    /// A cancelled flow resolves to [`SignIn::Cancelled`] with the state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if Google is not configured, the provider fails,
    /// the user-info response cannot be mapped, or the write-through fails.
    /// The user is left unchanged in every case except a failed write-through.
    pub async fn sign_in_with_google(&self) -> Result<SignIn, AuthError> {
        let google = self.google.as_ref().ok_or(AuthError::NotConfigured { provider: "google" })?;
        let auth_url = google.config.authorize_url()?;

        let token = match google.adapter.authenticate(&AuthRequest::OAuthRedirect { auth_url }).await? {
            AuthorizationResult::Success(Grant::AccessToken(token)) => token,
            AuthorizationResult::Success(Grant::Credential(_)) => {
                return Err(AuthError::MalformedResponse("redirect flow returned a native credential".into()));
            }
            AuthorizationResult::Cancelled => {
                info!(provider = "google", "sign-in cancelled");
                return Ok(SignIn::Cancelled);
            }
            AuthorizationResult::Failed(reason) => return Err(AuthError::ProviderFailed(reason)),
        };

        let url = google.config.userinfo_request_url(&token)?;
        let body = google.user_info.fetch(&url).await?;
        let user = google::parse_user_info(&body)?.into_user();

        self.commit(user.clone()).await?;
        info!(provider = "google", user_id = %user.id, "signed in");
        Ok(SignIn::SignedIn(user))
    }

    /// Sign in through the platform-native Apple flow.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if Apple is not configured, the provider fails,
    /// no display name can be derived, or storage fails.
    pub async fn sign_in_with_apple(&self) -> Result<SignIn, AuthError> {
        let adapter = self.apple.as_ref().ok_or(AuthError::NotConfigured { provider: "apple" })?;
        let request = AuthRequest::Native { scopes: vec![Scope::FullName, Scope::Email] };

        let credential = match adapter.authenticate(&request).await? {
            AuthorizationResult::Success(Grant::Credential(credential)) => credential,
            AuthorizationResult::Success(Grant::AccessToken(_)) => {
                return Err(AuthError::MalformedResponse("native flow returned an access token".into()));
            }
            AuthorizationResult::Cancelled => {
                info!(provider = "apple", "sign-in cancelled");
                return Ok(SignIn::Cancelled);
            }
            AuthorizationResult::Failed(reason) => return Err(AuthError::ProviderFailed(reason)),
        };

        let user = apple::resolve_user(self.store.as_ref(), &credential).await?;

        self.commit(user.clone()).await?;
        info!(provider = "apple", user_id = %user.id, "signed in");
        Ok(SignIn::SignedIn(user))
    }

    /// Forget the signed-in user in memory and in storage.
    ///
    /// The user's transactions and cached provider profile are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the record cannot be removed.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.state.send_modify(|state| state.user = None);
        self.store.remove(USER_KEY).await?;
        info!("signed out");
        Ok(())
    }

    async fn commit(&self, user: User) -> Result<(), AuthError> {
        self.state.send_modify(|state| state.user = Some(user.clone()));
        storage::set_json(self.store.as_ref(), USER_KEY, &user).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
