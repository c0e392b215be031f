//! Application state for dependency injection.

use std::sync::Arc;

use crate::clients::UserApi;
use crate::config::ConsoleConfig;
use crate::screens::{
    LoginScreen, ProfileScreen, RegistrationScreen, RemovalPolicy, UserTableScreen,
};
use crate::session::{CredentialPolicy, Session};

/// Shared state handed to every command.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn UserApi>,
    pub credential_policy: CredentialPolicy,
    pub removal_policy: RemovalPolicy,
}

impl AppState {
    /// Create new app state.
    pub fn new(api: Arc<dyn UserApi>, config: &ConsoleConfig) -> Self {
        Self {
            api,
            credential_policy: config.credential_policy.clone(),
            removal_policy: config.removal_policy,
        }
    }

    pub fn api(&self) -> &dyn UserApi {
        self.api.as_ref()
    }

    pub fn login_screen(&self, email: &str, password: &str) -> LoginScreen {
        LoginScreen::with_credentials(email, password)
    }

    pub fn registration_screen(&self) -> RegistrationScreen {
        RegistrationScreen::new()
    }

    /// Profile screen for `session`, using the configured credentials.
    pub fn profile_screen(&self, session: Session) -> ProfileScreen {
        let auth = self.credential_policy.credentials_for(&session);
        ProfileScreen::new(Some(session), Some(auth))
    }

    pub fn user_table_screen(&self, session: Session) -> UserTableScreen {
        let auth = self.credential_policy.credentials_for(&session);
        UserTableScreen::new(session, auth, self.removal_policy)
    }
}
