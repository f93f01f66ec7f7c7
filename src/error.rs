//! Error types for inquirydesk.

use thiserror::Error;

/// Common error type for inquirydesk.
///
/// The first five variants are the kinds callers are expected to act on.
/// Everything below them is an internal fault and is reported to HTTP
/// clients as a generic server error.
#[derive(Error, Debug)]
pub enum DeskError {
    /// Missing or malformed required input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Duplicate administrator registration.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Bad credentials or an invalid/expired session token.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The targeted resource does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// A notification could not be delivered.
    #[error("delivery failed: {0}")]
    DeliveryFailed(String),

    /// Database error.
    ///
    /// Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Any other internal fault.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DeskError {
    /// Whether this error is an internal fault rather than a caller-facing kind.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DeskError::Database(_) | DeskError::Io(_) | DeskError::Config(_) | DeskError::Internal(_)
        )
    }
}

impl From<sqlx::Error> for DeskError {
    fn from(e: sqlx::Error) -> Self {
        DeskError::Database(e.to_string())
    }
}

/// Result type alias for inquirydesk operations.
pub type Result<T> = std::result::Result<T, DeskError>;
