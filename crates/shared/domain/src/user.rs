//! User records, drafts and related types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{NO_ROLE_LABEL, ROLE_ADMIN, ROLE_USER};
use crate::error::DomainError;

/// Identifier assigned to users by the remote API
pub type UserId = i64;

/// User roles enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Check if this role can access a required role
    pub fn can_access(&self, required: &UserRole) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::User => matches!(required, UserRole::User),
        }
    }

    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::User => ROLE_USER,
        }
    }
}

/// Lenient conversion used for API responses: anything that is not ADMIN is a
/// plain user.
impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case(ROLE_ADMIN) {
            UserRole::Admin
        } else {
            UserRole::User
        }
    }
}

/// Strict conversion used for user input.
impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ROLE_ADMIN) {
            Ok(UserRole::Admin)
        } else if s.eq_ignore_ascii_case(ROLE_USER) {
            Ok(UserRole::User)
        } else {
            Err(DomainError::unknown_role(s))
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Draft
// =============================================================================

/// Editable fields of a [`UserDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
    Password,
    Role,
}

impl FromStr for DraftField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(DraftField::FirstName),
            "lastName" => Ok(DraftField::LastName),
            "email" => Ok(DraftField::Email),
            "passwordHash" | "password" => Ok(DraftField::Password),
            "role" => Ok(DraftField::Role),
            other => Err(DomainError::unknown_field(other)),
        }
    }
}

/// The record being registered, added or edited.
///
/// `password_hash` carries the raw password; nothing is hashed client-side.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

// Don't expose the password in debug output
impl std::fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDraft")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

impl UserDraft {
    /// Empty draft with the default USER role
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one field from raw input.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownRole`] when `field` is the role and
    /// `value` is neither USER nor ADMIN.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<(), DomainError> {
        match field {
            DraftField::FirstName => self.first_name = value.to_string(),
            DraftField::LastName => self.last_name = value.to_string(),
            DraftField::Email => self.email = value.to_string(),
            DraftField::Password => self.password_hash = value.to_string(),
            DraftField::Role => self.role = value.parse()?,
        }
        Ok(())
    }
}

/// Editing an existing record starts from its fetched values, with an empty
/// password.
impl From<&UserRecord> for UserDraft {
    fn from(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            password_hash: String::new(),
            role: record.role(),
        }
    }
}

// =============================================================================
// API records
// =============================================================================

/// Role entry attached to a user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    pub role_name: String,
}

/// User as listed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<RoleRef>,
}

impl UserRecord {
    /// Name of the first role, or "No Role"
    pub fn primary_role(&self) -> &str {
        self.roles
            .first()
            .map(|r| r.role_name.as_str())
            .unwrap_or(NO_ROLE_LABEL)
    }

    /// Typed role derived from the first role entry
    pub fn role(&self) -> UserRole {
        self.roles
            .first()
            .map(|r| UserRole::from(r.role_name.as_str()))
            .unwrap_or_default()
    }

    /// Copy of this record with the edited draft values applied
    pub fn with_draft(&self, draft: &UserDraft) -> Self {
        Self {
            id: self.id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            roles: vec![RoleRef {
                role_name: draft.role.to_string(),
            }],
        }
    }
}

/// Profile details returned by `/api/user/details/{email}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Login request body
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub name: String,
    pub role: String,
}

impl LoginResponse {
    /// Typed role of the logged-in user
    pub fn user_role(&self) -> UserRole {
        UserRole::from(self.role.as_str())
    }
}
