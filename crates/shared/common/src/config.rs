//! Shared configuration structures.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Default base URL of the user-management API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Connection settings for the remote user-management API.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ApiConfig {
    /// Base URL, e.g. "http://localhost:8080"
    #[validate(url(message = "API base URL must be a valid URL"))]
    pub base_url: String,
    /// Per-request timeout in milliseconds (None = wait indefinitely)
    #[validate(range(min = 1, message = "Request timeout must be positive"))]
    pub request_timeout_ms: Option<u64>,
    /// Connection timeout in milliseconds
    #[validate(range(min = 1, message = "Connect timeout must be positive"))]
    pub connect_timeout_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: None,
            connect_timeout_ms: None,
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with no timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Run the declarative checks and fold the first failure into an
    /// [`AppError::Config`].
    pub fn check(&self) -> AppResult<()> {
        self.validate().map_err(|e| {
            let message = e
                .field_errors()
                .values()
                .next()
                .and_then(|errors| errors.first())
                .and_then(|error| error.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| "Invalid API configuration".to_string());
            AppError::config(message)
        })
    }

    /// Build an absolute URL for `path` (which starts with '/')
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }
}
