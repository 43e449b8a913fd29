//! Browser-redirect OAuth response normalization.

use serde::Deserialize;

use super::{AuthorizationResult, Grant};

/// Fragment parameters returned to the redirect URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RedirectParams {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Raw `{ type, params }` result of a browser auth session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedirectResponse {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub params: RedirectParams,
}

impl RedirectResponse {
    /// Map the session outcome onto [`AuthorizationResult`].
    ///
    /// `cancel` and `dismiss` are user cancellations. `success` without an
    /// access token, `error`, `locked` and unknown types are failures.
    #[must_use]
    pub fn into_result(self) -> AuthorizationResult {
        match self.kind.as_str() {
            "success" => match self.params.access_token {
                Some(token) if !token.is_empty() => AuthorizationResult::Success(Grant::AccessToken(token)),
                _ => AuthorizationResult::Failed("success response without access_token".into()),
            },
            "cancel" | "dismiss" => AuthorizationResult::Cancelled,
            "locked" => AuthorizationResult::Failed("another auth session is already in progress".into()),
            "error" => AuthorizationResult::Failed(
                self.params
                    .error_description
                    .or(self.params.error)
                    .unwrap_or_else(|| "authorization error".into()),
            ),
            other => AuthorizationResult::Failed(format!("unknown auth session result type: {other}")),
        }
    }
}
