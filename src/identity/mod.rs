//! Identity adapters — the seam between the auth flow and provider SDKs.
//!
//! DESIGN
//! ======
//! Provider SDKs are black boxes owned by the UI shell. Each one is wrapped
//! in an `IdentityAdapter` whose only job is to run the external flow and
//! hand back an `AuthorizationResult`. A user backing out of the provider
//! screen is `AuthorizationResult::Cancelled`, an ordinary value; only a
//! flow that could not run at all is an `Err`.
//!
//! The raw shapes providers return are normalized here (`RedirectResponse`,
//! `NativeCredential`) so adapters stay a thin call into the SDK.

pub mod native;
pub mod redirect;

pub use native::{NativeCredential, PersonName, Scope};
pub use redirect::{RedirectParams, RedirectResponse};

use url::Url;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The provider SDK raised an error while running the flow.
    #[error("identity provider error: {0}")]
    Provider(String),

    /// The flow is not available on this platform or build.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// REQUEST / RESULT
// =============================================================================

/// What to ask of an identity adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    /// Open a browser-based authorization flow at `auth_url`.
    OAuthRedirect { auth_url: Url },
    /// Run the platform's built-in credential flow with the given scopes.
    Native { scopes: Vec<Scope> },
}

/// What a successful flow yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
    /// Bearer token from an OAuth implicit flow.
    AccessToken(String),
    /// Credential object from a native flow.
    Credential(NativeCredential),
}

/// Normalized outcome of an identity flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationResult {
    Success(Grant),
    /// The user dismissed or cancelled the provider screen.
    Cancelled,
    /// The provider completed the flow with an error.
    Failed(String),
}

// =============================================================================
// ADAPTER TRAIT
// =============================================================================

/// Attempt external authentication. Enables mocking in tests.
#[async_trait::async_trait]
pub trait IdentityAdapter: Send + Sync {
    /// Run the provider flow described by `request`.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] only when the flow could not run.
    /// Cancellation and provider-reported failures are `Ok` values.
    async fn authenticate(&self, request: &AuthRequest) -> Result<AuthorizationResult, IdentityError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
