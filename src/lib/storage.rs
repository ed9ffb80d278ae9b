//! `localStorage` persistence for the bearer token, a cached copy of the
//! signed-in user, and the email awaiting OTP verification. Values are only
//! ever read back by this client; the backend stays authoritative.

use super::errors::AppError;
use serde::{Serialize, de::DeserializeOwned};
use web_sys::Storage;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";
const PENDING_EMAIL_KEY: &str = "pendingLecturerEmail";

fn local_storage() -> Result<Storage, AppError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
        .ok_or_else(|| AppError::Storage("Browser storage is unavailable.".to_string()))
}

fn read(key: &str) -> Option<String> {
    local_storage()
        .ok()?
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.trim().is_empty())
}

fn write(key: &str, value: &str) -> Result<(), AppError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| AppError::Storage(format!("Failed to persist {key}.")))
}

fn remove(key: &str) {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Returns the stored bearer token, if any.
pub fn token() -> Option<String> {
    read(TOKEN_KEY)
}

/// Persists the token together with the user it belongs to.
pub fn store_session<U: Serialize>(token: &str, user: &U) -> Result<(), AppError> {
    let user_json = serde_json::to_string(user)
        .map_err(|err| AppError::Serialization(format!("Failed to encode user: {err}")))?;
    write(TOKEN_KEY, token)?;
    write(USER_KEY, &user_json)
}

/// Returns the cached user, ignoring entries that no longer decode.
pub fn cached_user<U: DeserializeOwned>() -> Option<U> {
    read(USER_KEY).and_then(|json| serde_json::from_str(&json).ok())
}

/// Drops the token and cached user.
pub fn clear_session() {
    remove(TOKEN_KEY);
    remove(USER_KEY);
}

pub fn pending_email() -> Option<String> {
    read(PENDING_EMAIL_KEY)
}

pub fn set_pending_email(email: &str) {
    if let Err(err) = write(PENDING_EMAIL_KEY, email) {
        tracing::warn!(error = %err, "could not remember pending verification email");
    }
}

pub fn clear_pending_email() {
    remove(PENDING_EMAIL_KEY);
}
