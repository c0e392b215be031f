//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "USER";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "ADMIN";

/// Shown when a user record carries no role at all
pub const NO_ROLE_LABEL: &str = "No Role";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum length of first and last names
pub const MAX_NAME_LENGTH: usize = 100;

/// Emitted by the email validator for anything that is not `x@y.z`
pub const MSG_INVALID_EMAIL: &str = "Invalid email format";

/// Emitted on the user table when the email field is empty
pub const MSG_EMAIL_REQUIRED: &str = "Email is required.";

/// Emitted when a required password is empty
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required.";

/// Emitted for passwords that are too short or lack mixed case / digits
pub const MSG_WEAK_PASSWORD: &str =
    "Password must be at least 6 characters long and must contain letters in mixed case";

/// Separator used to join error messages into a summary line
pub const SUMMARY_SEPARATOR: &str = ", ";

// =============================================================================
// Error-map keys
// =============================================================================

pub const KEY_EMAIL: &str = "email";
pub const KEY_PASSWORD: &str = "password";
pub const KEY_FIRST_NAME: &str = "firstName";
pub const KEY_LAST_NAME: &str = "lastName";
