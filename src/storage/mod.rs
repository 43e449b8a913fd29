//! Session store — durable device-local key-value persistence.
//!
//! DESIGN
//! ======
//! The store is a plain string-to-string map with three operations. Every
//! call is a single attempt; failures propagate to the caller unchanged.
//! Values are JSON documents, so `get_json`/`set_json` cover the common
//! encode/decode step.
//!
//! KEYS
//! ====
//! All keys live under the `@gofinances:` namespace:
//! - `@gofinances:user`: the signed-in user.
//! - `@gofinances:transactions_user:<id>`: that user's transaction list.
//! - `@gofinances:apple_profile:<id>`: first-consent Apple profile.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding the JSON-serialized signed-in user.
pub const USER_KEY: &str = "@gofinances:user";

const TRANSACTIONS_PREFIX: &str = "@gofinances:transactions_user:";
const APPLE_PROFILE_PREFIX: &str = "@gofinances:apple_profile:";

/// Key holding the transaction list of one user.
#[must_use]
pub fn transactions_key(user_id: &str) -> String {
    format!("{TRANSACTIONS_PREFIX}{user_id}")
}

/// Key holding the cached first-consent Apple profile for a provider id.
#[must_use]
pub fn apple_profile_key(provider_id: &str) -> String {
    format!("{APPLE_PROFILE_PREFIX}{provider_id}")
}

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing medium could not be read or written.
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded for storage.
    #[error("storage serialize failed: {0}")]
    Serialize(String),

    /// A stored value (or the store itself) could not be decoded.
    #[error("stored value for '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Device-local key-value storage. Enables in-memory substitution in tests.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing medium cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the write does not complete.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing medium cannot be updated.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode the JSON value stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] if the stored text is not valid JSON
/// for `T`, or any error from the underlying store.
pub async fn get_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: SessionStore + ?Sized,
{
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Corrupt { key: key.to_owned(), reason: e.to_string() })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] if encoding fails, or any error from
/// the underlying store.
pub async fn set_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized + Sync,
    S: SessionStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.set(key, &raw).await
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
