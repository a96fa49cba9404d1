//! Error types for authentication, storage and configuration

use thiserror::Error;

/// Message surfaced when a recognized failure carries an empty message
pub const LOGIN_FAILED: &str = "Login failed";

/// Rejections produced by the authentication service.
///
/// The display strings are the raw backend messages; the error formatter
/// turns them into end-user copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingFields,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid password")]
    InvalidPassword,
}

/// Every way a login attempt can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginFailure {
    /// Rejection from the mock authentication service
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Rejection carrying some other backend message
    #[error("{0}")]
    Rejected(String),

    /// Failure that has no user-facing message
    #[error("internal failure: {0}")]
    Internal(String),
}

impl LoginFailure {
    /// The message the login session stores for display, if any.
    ///
    /// Internal failures have none; an empty rejection message becomes
    /// [`LOGIN_FAILED`].
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Auth(err) => Some(err.to_string()),
            Self::Rejected(message) if message.is_empty() => Some(LOGIN_FAILED.to_string()),
            Self::Rejected(message) => Some(message.clone()),
            Self::Internal(_) => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

/// Browser storage access failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage access denied: {0}")]
    Denied(String),
}

/// Configuration load failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("latency range is empty: min {min_ms}ms must be below max {max_ms}ms")]
    InvalidLatency { min_ms: u64, max_ms: u64 },
}
