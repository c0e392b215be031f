//! Role-gated navigation.

use std::fmt;

use domain::UserRole;

use crate::session::Session;

/// Screens reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The root route
    Login,
    /// Admin user table
    Users,
    UserInfo,
    Register,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Users => "/users",
            Route::UserInfo => "/userInfo",
            Route::Register => "/register",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Login),
            "/users" => Some(Route::Users),
            "/userInfo" => Some(Route::UserInfo),
            "/register" => Some(Route::Register),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Where a request for `requested` actually lands.
///
/// Opening the login page with a live session goes to the user table, which
/// only an administrator may see; everyone else is sent to their profile.
pub fn resolve(requested: Route, session: Option<&Session>) -> Route {
    match requested {
        Route::Login => match session {
            Some(session) => resolve(Route::Users, Some(session)),
            None => Route::Login,
        },
        Route::Users => match session {
            Some(session) if session.role.can_access(&UserRole::Admin) => Route::Users,
            _ => Route::UserInfo,
        },
        Route::UserInfo | Route::Register => requested,
    }
}
