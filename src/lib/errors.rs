//! Error type shared by API helpers, feature clients and forms. Messages are
//! rendered directly in alerts and toasts, so they must never carry tokens,
//! passwords or OTP codes.

use serde::Deserialize;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("{0}")]
    Validation(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("Request failed ({status}){}", detail(.message))]
    Http {
        status: u16,
        message: Option<String>,
    },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}

impl AppError {
    /// Builds an HTTP error from a response status and raw body, keeping only
    /// the backend `message` field when the body is JSON.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .and_then(|message| sanitize_message(&message));
        AppError::Http { status, message }
    }

    /// Shorthand for a form validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Text for a toast: the backend message or validation text when there is
    /// one, otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            AppError::Validation(message) => message.clone(),
            AppError::Unauthorized | AppError::Timeout(_) => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Trims and truncates a backend message; returns `None` when nothing is left.
pub fn sanitize_message(message: &str) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_response_extracts_backend_message() {
        let err = AppError::from_response(400, r#"{"message":"Hall is already booked"}"#);
        assert_eq!(
            err,
            AppError::Http {
                status: 400,
                message: Some("Hall is already booked".to_string())
            }
        );
        assert_eq!(err.user_message("Failed to book hall"), "Hall is already booked");
        assert_eq!(err.to_string(), "Request failed (400): Hall is already booked");
    }

    #[test]
    fn from_response_ignores_non_json_bodies() {
        let err = AppError::from_response(502, "<html>Bad gateway</html>");
        assert_eq!(
            err,
            AppError::Http {
                status: 502,
                message: None
            }
        );
        assert_eq!(err.user_message("Failed to fetch halls"), "Failed to fetch halls");
        assert_eq!(err.to_string(), "Request failed (502)");
    }

    #[test]
    fn sanitize_message_truncates_long_messages() {
        let long = "x".repeat(500);
        assert_eq!(sanitize_message(&long).map(|m| m.len()), Some(MAX_ERROR_CHARS));
        assert_eq!(sanitize_message("   "), None);
    }

    #[test]
    fn user_message_falls_back_for_transport_errors() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Failed to fetch users"), "Failed to fetch users");

        let err = AppError::validation("Passwords do not match");
        assert_eq!(err.user_message("Registration failed"), "Passwords do not match");
    }
}
