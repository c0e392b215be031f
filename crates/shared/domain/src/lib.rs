//! Domain layer - user records, drafts and client-side validation rules.
//!
//! This crate contains pure domain logic with no I/O: the types exchanged
//! with the user-management API, the field validators and the form
//! validation aggregator.

pub mod constants;
pub mod error;
pub mod form;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use form::{validate_draft, FieldError, FormValidationState, ValidationErrorMap, ValidationProfile};
pub use user::{
    DraftField, LoginRequest, LoginResponse, RoleRef, UserDetails, UserDraft, UserId, UserRecord,
    UserRole,
};
pub use validation::{validate_email, validate_password, validate_string_length};
