//! Own-profile screen.

use tracing::{error, info};

use domain::{UserDetails, UserRole};

use super::MSG_NO_DATA;
use crate::clients::UserApi;
use crate::routes::Route;
use crate::session::{Credentials, Session};

/// Profile data shown to the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
}

/// What the screen currently renders.
#[derive(Debug, PartialEq, Eq)]
pub enum ProfileView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Loaded(&'a UserProfile),
}

#[derive(Debug, Clone)]
pub struct ProfileScreen {
    session: Option<Session>,
    auth: Option<Credentials>,
    user: Option<UserProfile>,
    error: Option<String>,
    loading: bool,
}

impl ProfileScreen {
    /// Without a session there is nothing to fetch and the screen starts empty.
    pub fn new(session: Option<Session>, auth: Option<Credentials>) -> Self {
        let loading = session.is_some();
        Self {
            session,
            auth,
            user: None,
            error: None,
            loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Fetch the logged-in user's details.
    pub async fn load(&mut self, api: &dyn UserApi) {
        let Some(session) = self.session.as_ref() else {
            self.loading = false;
            return;
        };
        let auth = self
            .auth
            .clone()
            .unwrap_or_else(|| session.credentials().clone());

        self.loading = true;
        match api.user_details(&auth, &session.email).await {
            Ok(details) => {
                self.error = None;
                self.user = Some(profile_from(details, session.role));
            }
            Err(e) if e.is_transport() => {
                self.error = Some(e.user_message());
            }
            Err(e) => {
                error!("Error: {}", e);
            }
        }
        self.loading = false;
    }

    /// Drop the session and go back to the login screen.
    pub fn logout(&mut self) -> Route {
        if let Some(session) = self.session.take() {
            info!("User {} logged out", session.email);
        }
        self.auth = None;
        self.user = None;
        Route::Login
    }

    pub fn view(&self) -> ProfileView<'_> {
        if self.loading {
            return ProfileView::Loading;
        }
        if let Some(error) = self.error.as_deref() {
            return ProfileView::Error(error);
        }
        match self.user.as_ref() {
            Some(user) => ProfileView::Loaded(user),
            None => ProfileView::Empty,
        }
    }

    /// Text for the empty view
    pub fn empty_message(&self) -> &'static str {
        MSG_NO_DATA
    }
}

fn profile_from(details: UserDetails, role: UserRole) -> UserProfile {
    UserProfile {
        first_name: details.first_name,
        last_name: details.last_name,
        email: details.email,
        role,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MockUserApi;
    use common::AppError;
    use domain::LoginResponse;

    fn session() -> Session {
        Session::from_login(
            LoginResponse {
                name: "Ada".to_string(),
                role: "USER".to_string(),
            },
            "ada@example.com",
            "Secret1",
        )
    }

    fn details() -> UserDetails {
        UserDetails {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_loads_details_for_session_email() {
        let mut api = MockUserApi::new();
        api.expect_user_details()
            .withf(|auth, email| auth.username == "ada@example.com" && email == "ada@example.com")
            .returning(|_, _| Ok(details()));

        let mut screen = ProfileScreen::new(Some(session()), None);
        assert_eq!(screen.view(), ProfileView::Loading);

        screen.load(&api).await;
        let ProfileView::Loaded(user) = screen.view() else {
            panic!("expected loaded profile");
        };
        assert_eq!(user.last_name, "Lovelace");
        assert_eq!(user.role, UserRole::User);
    }

    #[tokio::test]
    async fn test_explicit_credentials_win() {
        let mut api = MockUserApi::new();
        api.expect_user_details()
            .withf(|auth, _| auth.username == "admin@admin.com")
            .returning(|_, _| Ok(details()));

        let fixed = Credentials::new("admin@admin.com", "admin");
        let mut screen = ProfileScreen::new(Some(session()), Some(fixed));
        screen.load(&api).await;
        assert!(screen.user().is_some());
    }

    #[tokio::test]
    async fn test_network_error_is_shown() {
        let mut api = MockUserApi::new();
        api.expect_user_details()
            .returning(|_, _| Err(AppError::network("refused")));

        let mut screen = ProfileScreen::new(Some(session()), None);
        screen.load(&api).await;
        assert!(!screen.is_loading());
        assert_eq!(
            screen.view(),
            ProfileView::Error("Error connecting to the server. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_http_error_leaves_empty_view() {
        let mut api = MockUserApi::new();
        api.expect_user_details()
            .returning(|_, _| Err(AppError::NotFound));

        let mut screen = ProfileScreen::new(Some(session()), None);
        screen.load(&api).await;
        assert_eq!(screen.view(), ProfileView::Empty);
    }

    #[tokio::test]
    async fn test_without_session_nothing_is_fetched() {
        let mut api = MockUserApi::new();
        api.expect_user_details().never();

        let mut screen = ProfileScreen::new(None, None);
        assert_eq!(screen.view(), ProfileView::Empty);
        screen.load(&api).await;
        assert_eq!(screen.view(), ProfileView::Empty);
        assert_eq!(screen.empty_message(), "No user data available.");
    }

    #[test]
    fn test_logout_discards_session() {
        let mut screen = ProfileScreen::new(Some(session()), None);
        assert_eq!(screen.logout(), Route::Login);
        assert!(screen.session().is_none());
    }
}
