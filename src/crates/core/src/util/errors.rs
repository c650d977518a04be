//! Error types for the orchestration core

use std::fmt::Display;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactCheckError {
    #[error("Platform not available")]
    PlatformUnavailable,

    #[error("{0}")]
    Auth(String),

    #[error("AI request timed out")]
    Timeout(Duration),

    #[error("{0}")]
    AiRequest(String),

    #[error("{0}")]
    ImageToText(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store is no longer running")]
    StoreClosed,
}

pub type FactCheckResult<T> = Result<T, FactCheckError>;

/// User-readable message for `err`, or `fallback` when the error carries none.
pub fn user_message<E: Display + ?Sized>(err: &E, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_messages_use_fallback() {
        let err = FactCheckError::Auth(String::new());
        assert_eq!(user_message(&err, "Sign in failed"), "Sign in failed");

        let err = FactCheckError::Auth("popup closed".to_string());
        assert_eq!(user_message(&err, "Sign in failed"), "popup closed");
    }

    #[test]
    fn unavailable_platform_message_is_fixed() {
        assert_eq!(
            FactCheckError::PlatformUnavailable.to_string(),
            "Platform not available"
        );
    }

    #[test]
    fn timeout_message_is_fixed() {
        let err = FactCheckError::Timeout(Duration::from_secs(15));
        assert_eq!(err.to_string(), "AI request timed out");
    }
}
