//! Login screen.

use tracing::{info, warn};

use crate::clients::UserApi;
use crate::session::Session;

#[derive(Debug, Default, Clone)]
pub struct LoginScreen {
    pub email: String,
    pub password: String,
    error: Option<String>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            error: None,
        }
    }

    /// Message from the last failed attempt
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Try to log in. On failure the reason is kept in [`error`](Self::error).
    pub async fn login(&mut self, api: &dyn UserApi) -> Option<Session> {
        match api.login(&self.email, &self.password).await {
            Ok(response) => {
                self.error = None;
                let session = Session::from_login(response, &self.email, &self.password);
                info!("Logged in as {} ({})", session.email, session.role);
                Some(session)
            }
            Err(e) => {
                let message = e.user_message();
                warn!("Login failed for {}: {}", self.email, message);
                self.error = Some(message);
                None
            }
        }
    }
}
