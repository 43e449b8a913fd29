//! Google user-info exchange — access token to profile.
//!
//! Thin HTTP wrapper around the user-info endpoint. Pure parsing in
//! `parse_user_info` for testability.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::AuthError;
use crate::config::HttpTimeouts;
use crate::user::User;

// =============================================================================
// FETCH TRAIT
// =============================================================================

/// Fetch the raw user-info body for a prepared request URL. Enables mocking in tests.
#[async_trait::async_trait]
pub trait UserInfoFetch: Send + Sync {
    /// GET `url` and return the response body.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::ProviderFailed`] on transport failure or a
    /// non-success status.
    async fn fetch(&self, url: &Url) -> Result<String, AuthError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct GoogleUserInfoClient {
    http: reqwest::Client,
}

impl GoogleUserInfoClient {
    /// Build a client with the configured connect and request timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::ProviderFailed`] if the HTTP client cannot be built.
    pub fn new(timeouts: HttpTimeouts) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| AuthError::ProviderFailed(format!("http client build failed: {e}")))?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait]
impl UserInfoFetch for GoogleUserInfoClient {
    async fn fetch(&self, url: &Url) -> Result<String, AuthError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AuthError::ProviderFailed(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::ProviderFailed(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(AuthError::ProviderFailed(format!("user-info request failed: {status}: {body}")));
        }
        Ok(body)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Google `oauth2/v1/userinfo` payload. Only the fields we map are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl GoogleUserInfo {
    /// `given_name` becomes the display name; `name` stands in when absent.
    #[must_use]
    pub fn into_user(self) -> User {
        let name = self.given_name.or(self.name).unwrap_or_default();
        User { id: self.id, name, email: self.email, photo: self.picture }
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Parse a user-info response body.
///
/// # Errors
///
/// Returns [`AuthError::MalformedResponse`] if the body is not JSON or lacks
/// `id` or `email`.
pub fn parse_user_info(body: &str) -> Result<GoogleUserInfo, AuthError> {
    let info: GoogleUserInfo =
        serde_json::from_str(body).map_err(|e| AuthError::MalformedResponse(format!("google user-info: {e}")))?;
    if info.id.is_empty() {
        return Err(AuthError::MalformedResponse("google user-info: empty id".into()));
    }
    Ok(info)
}

#[cfg(test)]
#[path = "google_test.rs"]
mod tests;
