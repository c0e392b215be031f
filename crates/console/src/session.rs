//! Authenticated session.
//!
//! A [`Session`] is created from a successful login and handed to every
//! screen that needs the caller's identity.

use domain::{LoginResponse, UserRole};

/// HTTP basic-auth credential pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Don't expose the password in debug output (security)
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Parse a `user:password` pair. The password may itself contain ':'.
    pub fn parse(pair: &str) -> Option<Self> {
        let (username, password) = pair.split_once(':')?;
        if username.is_empty() {
            return None;
        }
        Some(Self::new(username, password))
    }
}

/// The logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Display name returned by the login endpoint
    pub name: String,
    pub email: String,
    pub role: UserRole,
    credentials: Credentials,
}

impl Session {
    /// Build a session from a login response and the credentials that
    /// produced it.
    pub fn from_login(response: LoginResponse, email: &str, password: &str) -> Self {
        Self {
            role: response.user_role(),
            name: response.name,
            email: email.to_string(),
            credentials: Credentials::new(email, password),
        }
    }

    /// Check if the session belongs to an administrator
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// The session's own credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Which credentials are attached to credentialed API calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CredentialPolicy {
    /// Use the logged-in user's own credentials
    #[default]
    Session,
    /// Use one fixed pair for every caller
    Static(Credentials),
}

impl CredentialPolicy {
    /// Credentials to send on behalf of `session`
    pub fn credentials_for(&self, session: &Session) -> Credentials {
        match self {
            CredentialPolicy::Session => session.credentials().clone(),
            CredentialPolicy::Static(credentials) => credentials.clone(),
        }
    }
}
