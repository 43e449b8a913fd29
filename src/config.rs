//! Configuration parsed from environment variables.

use std::path::PathBuf;

use url::Url;

pub const DEFAULT_GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const DEFAULT_GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v1/userinfo";
pub const DEFAULT_STORAGE_PATH: &str = "gofinances-storage.json";
pub const DEFAULT_HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

const GOOGLE_RESPONSE_TYPE: &str = "token";
const GOOGLE_SCOPE: &str = "profile email";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configured URL could not be parsed.
    #[error("invalid url in {var}: {reason}")]
    InvalidUrl { var: String, reason: String },
}

// =============================================================================
// GOOGLE
// =============================================================================

/// Google OAuth implicit-flow configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleConfig {
    pub client_id: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub userinfo_url: String,
}

impl GoogleConfig {
    /// Load from `GOOGLE_CLIENT_ID` and `GOOGLE_REDIRECT_URI`, with optional
    /// `GOOGLE_AUTH_URL` / `GOOGLE_USERINFO_URL` overrides.
    /// Returns `None` if either required var is missing (Google sign-in is disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("GOOGLE_CLIENT_ID").ok()?;
        let redirect_uri = std::env::var("GOOGLE_REDIRECT_URI").ok()?;
        let auth_url = std::env::var("GOOGLE_AUTH_URL").unwrap_or_else(|_| DEFAULT_GOOGLE_AUTH_URL.to_string());
        let userinfo_url =
            std::env::var("GOOGLE_USERINFO_URL").unwrap_or_else(|_| DEFAULT_GOOGLE_USERINFO_URL.to_string());
        Some(Self { client_id, redirect_uri, auth_url, userinfo_url })
    }

    /// Build the authorization URL for the token (implicit) flow.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `auth_url` is not a valid URL.
    pub fn authorize_url(&self) -> Result<Url, ConfigError> {
        Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("response_type", GOOGLE_RESPONSE_TYPE),
                ("scope", GOOGLE_SCOPE),
            ],
        )
        .map_err(|e| ConfigError::InvalidUrl { var: "GOOGLE_AUTH_URL".into(), reason: e.to_string() })
    }

    /// Build the user-info URL carrying `access_token` as a query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `userinfo_url` is not a valid URL.
    pub fn userinfo_request_url(&self, access_token: &str) -> Result<Url, ConfigError> {
        Url::parse_with_params(&self.userinfo_url, &[("alt", "json"), ("access_token", access_token)])
            .map_err(|e| ConfigError::InvalidUrl { var: "GOOGLE_USERINFO_URL".into(), reason: e.to_string() })
    }
}

// =============================================================================
// APP
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_HTTP_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_HTTP_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_path: PathBuf,
    pub google: Option<GoogleConfig>,
    pub http: HttpTimeouts,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `GOFINANCES_STORAGE_PATH`: default `gofinances-storage.json`
    /// - `GOOGLE_*`: see [`GoogleConfig::from_env`]
    /// - `HTTP_REQUEST_TIMEOUT_SECS`: default 30
    /// - `HTTP_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        let storage_path = std::env::var("GOFINANCES_STORAGE_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH), PathBuf::from);
        let http = HttpTimeouts {
            request_secs: env_parse_u64("HTTP_REQUEST_TIMEOUT_SECS", DEFAULT_HTTP_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("HTTP_CONNECT_TIMEOUT_SECS", DEFAULT_HTTP_CONNECT_TIMEOUT_SECS),
        };
        Self { storage_path, google: GoogleConfig::from_env(), http }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
