//! Form state controller.
//!
//! Owns the draft of one form session and decides when validation runs,
//! when errors are visible and when the submit action is enabled.

use domain::{
    validate_draft, DomainError, DomainResult, DraftField, FormValidationState, UserDraft,
    UserRecord, ValidationErrorMap, ValidationProfile,
};
use tracing::debug;

/// When validation runs and errors are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Re-validate on every change; errors always visible.
    ShowErrorsAlways,
    /// Validate from the first submit on; errors hidden until then.
    ShowErrorsAfterFirstSubmit,
}

/// Lifecycle of a form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    /// A create/update request is in flight
    Submitting,
    Saved,
    Cancelled,
}

impl FormPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FormPhase::Saved | FormPhase::Cancelled)
    }
}

/// Result of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// Draft is valid; send it and report back with `mark_saved`/`mark_failed`
    Ready(UserDraft),
    /// Validation failed; errors are now visible
    Invalid,
    /// The form is not in the editing phase
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct FormController {
    draft: UserDraft,
    profile: ValidationProfile,
    policy: ValidationPolicy,
    has_submitted: bool,
    validation: Option<FormValidationState>,
    phase: FormPhase,
}

impl FormController {
    pub fn new(draft: UserDraft, profile: ValidationProfile, policy: ValidationPolicy) -> Self {
        Self {
            draft,
            profile,
            policy,
            has_submitted: false,
            validation: None,
            phase: FormPhase::Editing,
        }
    }

    /// Self-registration form: registration rules, errors after first submit.
    pub fn registration() -> Self {
        Self::new(
            UserDraft::new(),
            ValidationProfile::Registration,
            ValidationPolicy::ShowErrorsAfterFirstSubmit,
        )
    }

    /// Admin "add user" form.
    pub fn add_user() -> Self {
        Self::new(
            UserDraft::new(),
            ValidationProfile::UserTable { edit_mode: false },
            ValidationPolicy::ShowErrorsAlways,
        )
    }

    /// Admin "edit user" form, pre-filled from `record`.
    pub fn edit_user(record: &UserRecord) -> Self {
        Self::new(
            UserDraft::from(record),
            ValidationProfile::UserTable { edit_mode: true },
            ValidationPolicy::ShowErrorsAlways,
        )
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Latest validation result, if validation has run
    pub fn validation(&self) -> Option<&FormValidationState> {
        self.validation.as_ref()
    }

    /// Update one field and re-validate when the policy asks for it.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> DomainResult<()> {
        if self.phase != FormPhase::Editing {
            return Err(DomainError::invalid_state(format!(
                "cannot edit a form in the {:?} phase",
                self.phase
            )));
        }

        self.draft.set_field(field, value)?;

        if self.validates_on_change() {
            self.revalidate();
        }
        Ok(())
    }

    /// [`set_field`](Self::set_field) addressed by input name
    pub fn set_input(&mut self, name: &str, value: &str) -> DomainResult<()> {
        let field: DraftField = name.parse()?;
        self.set_field(field, value)
    }

    fn validates_on_change(&self) -> bool {
        self.policy == ValidationPolicy::ShowErrorsAlways || self.has_submitted
    }

    /// Recompute validation from scratch.
    pub fn revalidate(&mut self) -> &FormValidationState {
        self.validation.insert(validate_draft(&self.draft, self.profile))
    }

    /// Whether the last validation passed; false before any validation ran.
    pub fn is_form_valid(&self) -> bool {
        self.validation.as_ref().is_some_and(|v| v.is_valid)
    }

    /// Errors the user should currently see
    pub fn visible_errors(&self) -> Option<&ValidationErrorMap> {
        let shown = match self.policy {
            ValidationPolicy::ShowErrorsAlways => true,
            ValidationPolicy::ShowErrorsAfterFirstSubmit => self.has_submitted,
        };
        if shown {
            self.validation.as_ref().map(|v| &v.errors)
        } else {
            None
        }
    }

    /// Visible error for one error-map key
    pub fn visible_error(&self, key: &str) -> Option<&str> {
        self.visible_errors().and_then(|e| e.error_for(key))
    }

    /// Summary of the last validation ("" when none ran)
    pub fn summary_message(&self) -> &str {
        self.validation
            .as_ref()
            .map(|v| v.summary_message.as_str())
            .unwrap_or("")
    }

    /// Submit-button enablement.
    ///
    /// After-first-submit forms only disable the button once a submit has
    /// been attempted, so the very first press is always possible even when
    /// the form is not valid. Always-validating forms disable it whenever the
    /// form is not valid.
    pub fn is_submit_disabled(&self) -> bool {
        if self.phase != FormPhase::Editing {
            return true;
        }
        match self.policy {
            ValidationPolicy::ShowErrorsAfterFirstSubmit => {
                !self.is_form_valid() && self.has_submitted
            }
            ValidationPolicy::ShowErrorsAlways => !self.is_form_valid(),
        }
    }

    /// Press submit: validate and, when valid, hand the draft out for sending.
    pub fn submit(&mut self) -> Submit {
        if self.phase != FormPhase::Editing {
            return Submit::Unavailable;
        }

        self.has_submitted = true;
        if self.revalidate().is_valid {
            self.phase = FormPhase::Submitting;
            Submit::Ready(self.draft.clone())
        } else {
            debug!("Submit rejected: {}", self.summary_message());
            Submit::Invalid
        }
    }

    /// The request succeeded; the draft is discarded.
    pub fn mark_saved(&mut self) {
        self.phase = FormPhase::Saved;
        self.discard();
    }

    /// The request failed; keep the draft for another attempt.
    pub fn mark_failed(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
    }

    /// Abandon the form without sending anything.
    pub fn cancel(&mut self) {
        if !self.phase.is_terminal() {
            self.phase = FormPhase::Cancelled;
            self.discard();
        }
    }

    fn discard(&mut self) {
        self.draft = UserDraft::new();
        self.validation = None;
    }
}
