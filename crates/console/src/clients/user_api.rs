//! The remote user-management API as seen by the screens.

use async_trait::async_trait;

use common::AppResult;
use domain::{LoginResponse, UserDetails, UserDraft, UserRecord};

use crate::session::Credentials;

#[cfg(test)]
use mockall::automock;

/// Operations offered by the user-management API.
///
/// Credentialed operations take the basic-auth pair to send explicitly.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserApi: Send + Sync {
    /// `POST /api/auth/login`
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse>;

    /// `POST /api/user/register`
    async fn register(&self, draft: &UserDraft) -> AppResult<UserRecord>;

    /// `GET /api/user`
    async fn list_users(&self, auth: &Credentials) -> AppResult<Vec<UserRecord>>;

    /// `GET /api/user/details/{email}`
    async fn user_details(&self, auth: &Credentials, email: &str) -> AppResult<UserDetails>;

    /// `DELETE /api/user/{email}`
    async fn delete_user(&self, auth: &Credentials, email: &str) -> AppResult<()>;
}
