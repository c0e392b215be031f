//! Screen controllers.
//!
//! Each screen owns its UI state and turns every API failure into local
//! state (an error message, a retained draft). Nothing propagates out of a
//! screen as an error.

pub mod login;
pub mod profile;
pub mod registration;
pub mod user_table;

pub use login::LoginScreen;
pub use profile::{ProfileScreen, ProfileView, UserProfile};
pub use registration::RegistrationScreen;
pub use user_table::{DeleteReport, RemovalPolicy, TableView, UserTableScreen};

/// Message shown when a screen has nothing to display.
pub const MSG_NO_DATA: &str = "No user data available.";

/// Outcome of submitting a form to the API.
#[derive(Debug)]
pub enum SubmitOutcome<T> {
    /// The API accepted the request
    Saved(T),
    /// Local validation failed; nothing was sent
    Invalid(String),
    /// The request was sent and failed; the draft is kept
    Failed(common::AppError),
    /// No form is open, or it is not in the editing phase
    Unavailable,
}

impl<T> SubmitOutcome<T> {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }
}
