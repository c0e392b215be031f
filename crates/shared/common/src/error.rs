//! Unified error handling for remote API calls.
//!
//! Every failure of a call to the user-management API ends up as an
//! [`AppError`]. Screens turn it into inline UI state through
//! [`AppError::user_message`].

use domain::DomainError;
use thiserror::Error;

/// Message shown whenever the server could not be reached.
pub const MSG_CONNECTION_FAILED: &str = "Error connecting to the server. Please try again.";

/// Message shown when login is rejected.
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Message for a 409 that came without a body.
pub const MSG_USER_EXISTS: &str = "User already exists";

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Authentication required")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0}")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Remote API errors
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Response parse error: {0}")]
    Decode(String),

    // Local errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs and CLI output
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Forbidden => "FORBIDDEN",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Http { .. } => "HTTP_ERROR",
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Build an error from a non-success HTTP status and its body.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            400 => AppError::BadRequest(body),
            401 => AppError::Unauthorized,
            403 => AppError::Forbidden,
            404 => AppError::NotFound,
            409 if body.is_empty() => AppError::Conflict(MSG_USER_EXISTS.to_string()),
            409 => AppError::Conflict(body),
            _ => AppError::Http {
                status,
                message: body,
            },
        }
    }

    /// HTTP status code, when the failure came from a response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Unauthorized | AppError::InvalidCredentials => Some(401),
            AppError::Forbidden => Some(403),
            AppError::NotFound => Some(404),
            AppError::Conflict(_) => Some(409),
            AppError::BadRequest(_) => Some(400),
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the request never completed
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_))
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidCredentials => MSG_INVALID_CREDENTIALS.to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) if !msg.is_empty() => msg.clone(),
            AppError::Conflict(msg) => msg.clone(),

            // Hide details for transport/internal errors
            AppError::Network(e) => {
                tracing::error!("Network error: {}", e);
                MSG_CONNECTION_FAILED.to_string()
            }
            AppError::Decode(e) => {
                tracing::error!("Unexpected response: {}", e);
                "The server sent an unexpected response".to_string()
            }
            AppError::Http { status, message } => {
                tracing::error!("Request failed with {}: {}", status, message);
                "The request failed".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

// =============================================================================
// reqwest conversion
// =============================================================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::from_status(status.as_u16(), err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownField(_) | DomainError::UnknownRole(_) => {
                AppError::BadRequest(err.to_string())
            }
            DomainError::InvalidState(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        AppError::Network(msg.into())
    }
}
