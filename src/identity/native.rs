//! Platform-native sign-in credential.
//!
//! The platform returns `email` and `full_name` only on the first consent
//! for an app; later sign-ins carry just the stable `user` id. Both fields
//! are therefore optional and callers must fall back to what they cached.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    FullName,
    Email,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCredential {
    /// Stable provider-issued user id.
    pub user: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<PersonName>,
}

impl NativeCredential {
    /// The given name, if the platform supplied a non-blank one.
    #[must_use]
    pub fn given_name(&self) -> Option<&str> {
        self.full_name
            .as_ref()
            .and_then(|n| n.given_name.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}
