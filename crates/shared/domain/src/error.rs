//! Domain-level errors.
//!
//! These errors represent malformed domain input, such as an unknown form
//! field or role name. Field validation failures are never errors: they are
//! returned as messages by the validators.

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A form field name that does not exist on the draft
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A role name outside of USER / ADMIN
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// The requested operation is not allowed in the current form state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        DomainError::UnknownField(name.into())
    }

    /// Create an unknown role error
    pub fn unknown_role(name: impl Into<String>) -> Self {
        DomainError::UnknownRole(name.into())
    }

    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        DomainError::InvalidState(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
