/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Rejections
 *
 * Rejections are the human-readable strings shown to the user when a form
 * submission is refused (unknown user, missing access token, disallowed
 * photo type, foreign post, ...). They are not failures of the server.
 *
 * ## System Errors
 *
 * Database, I/O, hashing and configuration failures. These are logged and
 * answered with a generic message so internals never reach the browser.
 */

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use post_scheduler::backend::error::BackendError;
///
/// let err = BackendError::rejected("Post not found.");
/// assert_eq!(err.message(), "Post not found.");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A form submission was refused; the message is shown as-is.
    #[error("{message}")]
    Rejected {
        /// Human-readable message returned as the response body
        message: String,
    },

    /// Invalid or incomplete configuration at startup
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Human-readable error message
        message: String,
    },

    /// Database error, including constraint violations such as a duplicate email
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure while preparing the schema
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    /// Filesystem error while storing an upload
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed multipart body
    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),
}

impl BackendError {
    /// Create a rejection carrying the message shown to the user
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Rejected` - 200 OK, the message is the page body
    /// - `Multipart` - 400 Bad Request
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Rejected { .. } => StatusCode::OK,
            Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::ConfigError { .. }
            | Self::Database(_)
            | Self::Migration(_)
            | Self::Password(_)
            | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to send to the client
    pub fn message(&self) -> String {
        match self {
            Self::Rejected { message } => message.clone(),
            Self::Multipart(err) => err.body_text(),
            _ => "Internal Server Error".to_string(),
        }
    }

    /// Whether this error is a server-side failure worth logging at error level
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_error() {
        let error = BackendError::rejected("User not found.");
        match &error {
            BackendError::Rejected { message } => assert_eq!(message, "User not found."),
            _ => panic!("Expected Rejected"),
        }
        assert_eq!(error.status_code(), StatusCode::OK);
        assert_eq!(error.message(), "User not found.");
        assert!(!error.is_internal());
    }

    #[test]
    fn test_config_error() {
        let error = BackendError::config("SESSION_SECRET too short");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.to_string().contains("SESSION_SECRET too short"));
    }

    #[test]
    fn test_database_error_hides_details() {
        let error: BackendError = sqlx::Error::RowNotFound.into();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Internal Server Error");
        assert!(error.is_internal());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: BackendError = io.into();
        match error {
            BackendError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
