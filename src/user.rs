//! The signed-in user record shared by the auth flow and the session store.

use serde::{Deserialize, Serialize};

/// A user as normalized from any identity provider.
///
/// `id` is the provider-issued identifier and is the only identity the
/// application relies on. The record is replaced wholesale on re-sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
