//! Commands module - CLI command implementations.
//!
//! Each command drives one or more screens and prints the result.

pub mod login;
pub mod profile;
pub mod register;
pub mod users;

use common::{AppError, AppResult};
use domain::{DomainResult, DraftField};

use crate::cli::args::{CredentialArgs, UserFields};
use crate::screens::SubmitOutcome;
use crate::session::Session;
use crate::state::AppState;

/// Log in through the login screen.
pub(crate) async fn authenticate(state: &AppState, args: &CredentialArgs) -> AppResult<Session> {
    let mut screen = state.login_screen(&args.email, &args.password);
    match screen.login(state.api()).await {
        Some(session) => Ok(session),
        None => {
            if let Some(message) = screen.error() {
                eprintln!("{}", message);
            }
            Err(AppError::Unauthorized)
        }
    }
}

/// Feed `fields` into a form one input at a time, the way a user types them.
pub(crate) fn fill_fields<F>(fields: &UserFields, mut set: F) -> DomainResult<()>
where
    F: FnMut(DraftField, &str) -> DomainResult<()>,
{
    set(DraftField::FirstName, &fields.first_name)?;
    set(DraftField::LastName, &fields.last_name)?;
    set(DraftField::Email, &fields.user_email)?;
    set(DraftField::Password, &fields.user_password)?;
    set(DraftField::Role, &fields.role)?;
    Ok(())
}

/// Turn anything but a saved outcome into an error for `main`.
pub(crate) fn saved<T>(outcome: SubmitOutcome<T>) -> AppResult<T> {
    match outcome {
        SubmitOutcome::Saved(value) => Ok(value),
        SubmitOutcome::Invalid(message) => Err(AppError::validation(message)),
        SubmitOutcome::Failed(e) => Err(e),
        SubmitOutcome::Unavailable => Err(AppError::internal("form is not open for editing")),
    }
}
