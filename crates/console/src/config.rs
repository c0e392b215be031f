//! Console configuration.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use common::{ApiConfig, DEFAULT_API_BASE_URL};
use tracing::warn;

use crate::screens::RemovalPolicy;
use crate::session::{CredentialPolicy, Credentials};

/// Console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Remote API connection settings
    pub api: ApiConfig,
    /// Credentials attached to credentialed calls
    pub credential_policy: CredentialPolicy,
    /// Rows removed from the table after a bulk delete
    pub removal_policy: RemovalPolicy,
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value. Values that fail to parse are logged and replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential_policy = match lookup("ADMIN_BASIC_AUTH") {
            Some(pair) => match Credentials::parse(&pair) {
                Some(credentials) => CredentialPolicy::Static(credentials),
                None => {
                    warn!("ADMIN_BASIC_AUTH is not a user:password pair, ignoring it");
                    CredentialPolicy::Session
                }
            },
            None => CredentialPolicy::Session,
        };

        Self {
            api: ApiConfig {
                base_url: lookup("API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
                request_timeout_ms: parse_var(&lookup, "API_TIMEOUT_MS"),
                connect_timeout_ms: parse_var(&lookup, "API_CONNECT_TIMEOUT_MS"),
            },
            credential_policy,
            removal_policy: parse_var(&lookup, "DELETE_REMOVAL_POLICY").unwrap_or_default(),
        }
    }

    /// Point the API at a different base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }
}

/// Parse `key` when set; a value that does not parse is logged and dropped.
fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{} has invalid value {:?} ({}), using the default", key, raw, e);
            None
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            credential_policy: CredentialPolicy::Session,
            removal_policy: RemovalPolicy::ConfirmedOnly,
        }
    }
}
