//! Self-registration screen.

use tracing::{error, info};

use domain::{DomainResult, DraftField, UserRecord};

use super::SubmitOutcome;
use crate::clients::UserApi;
use crate::forms::{FormController, Submit};

/// Shown after the API accepted a registration.
pub const MSG_REGISTRATION_SUCCESS: &str = "Registration successful!";

#[derive(Debug, Clone)]
pub struct RegistrationScreen {
    form: FormController,
    message: String,
}

impl Default for RegistrationScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationScreen {
    pub fn new() -> Self {
        Self {
            form: FormController::registration(),
            message: String::new(),
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Summary line under the form
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.form.is_submit_disabled()
    }

    pub fn set_field(&mut self, field: DraftField, value: &str) -> DomainResult<()> {
        self.form.set_field(field, value)?;
        self.sync_message();
        Ok(())
    }

    fn sync_message(&mut self) {
        if self.form.validation().is_some() {
            self.message = self.form.summary_message().to_string();
        }
    }

    /// Press "Register".
    pub async fn register(&mut self, api: &dyn UserApi) -> SubmitOutcome<UserRecord> {
        let draft = match self.form.submit() {
            Submit::Ready(draft) => draft,
            Submit::Invalid => {
                self.sync_message();
                return SubmitOutcome::Invalid(self.message.clone());
            }
            Submit::Unavailable => return SubmitOutcome::Unavailable,
        };
        self.sync_message();

        match api.register(&draft).await {
            Ok(user) => {
                info!("Registered {}", user.email);
                self.form.mark_saved();
                self.message = MSG_REGISTRATION_SUCCESS.to_string();
                SubmitOutcome::Saved(user)
            }
            Err(e) => {
                error!("Failed to register new user: {}", e);
                self.form.mark_failed();
                self.message = e.user_message();
                SubmitOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MockUserApi;
    use crate::forms::FormPhase;
    use common::AppError;
    use domain::{UserDraft, MSG_INVALID_EMAIL, MSG_WEAK_PASSWORD};

    fn created(draft: &UserDraft) -> UserRecord {
        UserRecord {
            id: 42,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            roles: vec![],
        }
    }

    fn fill(screen: &mut RegistrationScreen, email: &str, password: &str) {
        screen.set_field(DraftField::FirstName, "A").unwrap();
        screen.set_field(DraftField::LastName, "B").unwrap();
        screen.set_field(DraftField::Email, email).unwrap();
        screen.set_field(DraftField::Password, password).unwrap();
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_api() {
        let mut api = MockUserApi::new();
        api.expect_register().never();

        let mut screen = RegistrationScreen::new();
        fill(&mut screen, "bad", "weak");
        assert_eq!(screen.message(), "");

        let outcome = screen.register(&api).await;
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(
            screen.message(),
            format!("{}, {}", MSG_INVALID_EMAIL, MSG_WEAK_PASSWORD)
        );
        assert!(screen.is_submit_disabled());
    }

    #[tokio::test]
    async fn test_message_tracks_edits_after_submit() {
        let api = MockUserApi::new();
        let mut screen = RegistrationScreen::new();
        fill(&mut screen, "bad", "Abc123");
        let _ = screen.register(&api).await;
        assert_eq!(screen.message(), MSG_INVALID_EMAIL);

        screen.set_field(DraftField::Email, "a@b.co").unwrap();
        assert_eq!(screen.message(), "");
        assert!(!screen.is_submit_disabled());
    }

    #[tokio::test]
    async fn test_successful_registration() {
        let mut api = MockUserApi::new();
        api.expect_register()
            .withf(|draft| draft.email == "a@b.co" && draft.password_hash == "Abc123")
            .times(1)
            .returning(|draft| Ok(created(draft)));

        let mut screen = RegistrationScreen::new();
        fill(&mut screen, "a@b.co", "Abc123");

        let SubmitOutcome::Saved(user) = screen.register(&api).await else {
            panic!("expected registration to succeed");
        };
        assert_eq!(user.id, 42);
        assert_eq!(screen.message(), "Registration successful!");
        assert_eq!(screen.form().phase(), FormPhase::Saved);
    }

    #[tokio::test]
    async fn test_failed_registration_keeps_draft() {
        let mut api = MockUserApi::new();
        api.expect_register()
            .returning(|_| Err(AppError::from_status(409, "")));

        let mut screen = RegistrationScreen::new();
        fill(&mut screen, "a@b.co", "Abc123");

        let outcome = screen.register(&api).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(AppError::Conflict(_))));
        assert_eq!(screen.message(), "User already exists");
        assert_eq!(screen.form().phase(), FormPhase::Editing);
        assert_eq!(screen.form().draft().email, "a@b.co");
    }
}
