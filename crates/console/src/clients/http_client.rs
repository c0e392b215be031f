//! `reqwest` implementation of [`UserApi`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use common::{ApiConfig, AppError, AppResult};
use domain::{LoginRequest, LoginResponse, UserDetails, UserDraft, UserRecord};

use super::UserApi;
use crate::session::Credentials;

/// HTTP client for the user-management API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct HttpUserApi {
    http: Client,
    config: ApiConfig,
}

impl HttpUserApi {
    /// Build a client from validated configuration.
    pub fn new(config: ApiConfig) -> AppResult<Self> {
        config.check()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    fn authed(builder: RequestBuilder, auth: &Credentials) -> RequestBuilder {
        builder.basic_auth(&auth.username, Some(&auth.password))
    }

    /// Fail with the mapped status error unless the response is a success.
    async fn ensure_success(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::from_status(status.as_u16(), body))
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> AppResult<T> {
        let response = Self::ensure_success(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        debug!("POST /api/auth/login for {}", email);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;

        // Any non-success answer counts as rejected credentials
        if !response.status().is_success() {
            warn!("Login rejected with status {}", response.status());
            return Err(AppError::InvalidCredentials);
        }

        Ok(response.json::<LoginResponse>().await?)
    }

    async fn register(&self, draft: &UserDraft) -> AppResult<UserRecord> {
        debug!("POST /api/user/register for {}", draft.email);
        Self::send_json(self.http.post(self.url("/api/user/register")).json(draft)).await
    }

    async fn list_users(&self, auth: &Credentials) -> AppResult<Vec<UserRecord>> {
        debug!("GET /api/user");
        Self::send_json(Self::authed(self.http.get(self.url("/api/user")), auth)).await
    }

    async fn user_details(&self, auth: &Credentials, email: &str) -> AppResult<UserDetails> {
        debug!("GET /api/user/details/{}", email);
        let path = format!("/api/user/details/{}", urlencoding::encode(email));
        Self::send_json(Self::authed(self.http.get(self.url(&path)), auth)).await
    }

    async fn delete_user(&self, auth: &Credentials, email: &str) -> AppResult<()> {
        debug!("DELETE /api/user/{}", email);
        let path = format!("/api/user/{}", urlencoding::encode(email));
        let response = Self::authed(self.http.delete(self.url(&path)), auth)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
