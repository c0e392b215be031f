//! Form validation aggregator.
//!
//! Runs the field validators over a [`UserDraft`] and folds the results into
//! a [`FormValidationState`]. The aggregator keeps no state: every call
//! recomputes the whole error map from the draft.

use crate::constants::{
    KEY_EMAIL, KEY_FIRST_NAME, KEY_LAST_NAME, KEY_PASSWORD, MAX_NAME_LENGTH, MSG_EMAIL_REQUIRED,
    MSG_PASSWORD_REQUIRED, SUMMARY_SEPARATOR,
};
use crate::user::UserDraft;
use crate::validation::{validate_email, validate_password, validate_string_length};

/// Which screen's rules apply to a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationProfile {
    /// Self-registration: email and password validators run unconditionally.
    Registration,
    /// Admin user table: empty email/password get "required" messages, and
    /// the password is waived while editing an existing user.
    UserTable { edit_mode: bool },
}

/// One entry of the error map. An empty message means the field is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field name to error message, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorMap {
    entries: Vec<FieldError>,
}

impl ValidationErrorMap {
    fn push(&mut self, field: &'static str, message: String) {
        self.entries.push(FieldError { field, message });
    }

    /// Message recorded for `field`; `None` when the field was not evaluated
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Non-empty message for `field`, if any
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.get(field).filter(|m| !m.is_empty())
    }

    /// Only the entries carrying an error
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter().filter(|e| !e.message.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derived verdict for a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidationState {
    pub errors: ValidationErrorMap,
    pub is_valid: bool,
    pub summary_message: String,
}

impl FormValidationState {
    fn from_errors(errors: ValidationErrorMap) -> Self {
        let is_valid = errors.errors().next().is_none();
        let summary_message = errors
            .errors()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(SUMMARY_SEPARATOR);

        Self {
            errors,
            is_valid,
            summary_message,
        }
    }
}

/// Validate `draft` under `profile`.
///
/// Evaluation order is email, password, first name, last name.
pub fn validate_draft(draft: &UserDraft, profile: ValidationProfile) -> FormValidationState {
    let mut errors = ValidationErrorMap::default();

    match profile {
        ValidationProfile::Registration => {
            errors.push(KEY_EMAIL, validate_email(&draft.email));
            errors.push(KEY_PASSWORD, validate_password(&draft.password_hash));
        }
        ValidationProfile::UserTable { edit_mode } => {
            let email = if draft.email.is_empty() {
                MSG_EMAIL_REQUIRED.to_string()
            } else {
                validate_email(&draft.email)
            };
            errors.push(KEY_EMAIL, email);

            if !edit_mode {
                let password = if draft.password_hash.is_empty() {
                    MSG_PASSWORD_REQUIRED.to_string()
                } else {
                    validate_password(&draft.password_hash)
                };
                errors.push(KEY_PASSWORD, password);
            }
        }
    }

    errors.push(
        KEY_FIRST_NAME,
        validate_string_length(&draft.first_name, MAX_NAME_LENGTH),
    );
    errors.push(
        KEY_LAST_NAME,
        validate_string_length(&draft.last_name, MAX_NAME_LENGTH),
    );

    FormValidationState::from_errors(errors)
}
