//! Apple credential to user mapping, with the first-consent profile cache.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::form_urlencoded;

use super::AuthError;
use crate::identity::NativeCredential;
use crate::storage::{self, SessionStore, apple_profile_key};
use crate::user::User;

const AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";

/// Name and email as first consented. Apple never sends them again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentedProfile {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Initials avatar URL for a display name.
#[must_use]
pub fn avatar_url(name: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!("{AVATAR_BASE_URL}?name={encoded}&length=1")
}

/// Build the signed-in user from a credential, filling fields the platform
/// withheld from the cached first-consent profile. Fresh fields refresh
/// the cache once a name is known; a rejected credential leaves it untouched.
///
/// # Errors
///
/// Returns [`AuthError::MalformedResponse`] when no given name is available
/// from either source, or [`AuthError::Storage`] if the cache cannot be
/// read or written.
pub async fn resolve_user<S>(store: &S, credential: &NativeCredential) -> Result<User, AuthError>
where
    S: SessionStore + ?Sized,
{
    let key = apple_profile_key(&credential.user);
    let cached: ConsentedProfile = storage::get_json(store, &key).await?.unwrap_or_default();

    let fresh = ConsentedProfile {
        name: credential.given_name().map(str::to_owned).or_else(|| cached.name.clone()),
        email: credential.email().map(str::to_owned).or_else(|| cached.email.clone()),
    };
    let Some(name) = fresh.name.clone() else {
        return Err(AuthError::MalformedResponse(
            "apple credential has no given name and no consented profile is cached".into(),
        ));
    };
    if fresh != cached {
        storage::set_json(store, &key, &fresh).await?;
        debug!("apple consented profile cached");
    }

    let email = fresh.email.unwrap_or_else(|| {
        warn!("apple credential has no email; signing in without one");
        String::new()
    });

    let photo = avatar_url(&name);
    Ok(User { id: credential.user.clone(), name, email, photo: Some(photo) })
}

#[cfg(test)]
#[path = "apple_test.rs"]
mod tests;
