//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Three families reach the UI: transport failures, authorization failures
//! (401/403) and validation failures (a body that does not match the typed
//! schema, or a payload that reports an error in place of content). Every
//! variant is `Clone` so view state can hold the last failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Error returned by every backend operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// No identity is present, so no bearer token can be attached.
    #[error("not signed in")]
    NoSession,
    /// The backend rejected the bearer token (HTTP 401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// The caller lacks the role for this endpoint (HTTP 403).
    #[error("access denied: {0}")]
    Forbidden(String),
    /// Any other non-success HTTP status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// The response did not match the expected schema.
    #[error("invalid response: {0}")]
    Validation(String),
    /// HTTP is only wired up in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True for the 403 case that pages render as an access-denied panel.
    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// Short text suitable for a toast or inline error panel.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::NoSession => "Please log in to continue.".to_owned(),
            Self::Unauthorized(_) => "Your session has expired. Please log in again.".to_owned(),
            Self::Forbidden(_) => "Access denied.".to_owned(),
            Self::Status { message, .. } | Self::Validation(message) => message.clone(),
            Self::Unavailable => "This action is only available in the browser.".to_owned(),
        }
    }
}

/// Backend error body: `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Map a non-success status and its raw body to an [`ApiError`].
#[must_use]
pub fn error_from_status(status: u16, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .map(|b| b.error)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with status {status}"));
    match status {
        401 => ApiError::Unauthorized(message),
        403 => ApiError::Forbidden(message),
        _ => ApiError::Status { status, message },
    }
}

/// Decode a JSON body into `T`, reporting shape mismatches as validation errors.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the body is not valid JSON for `T`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Validation(e.to_string()))
}
