//! Remote-store connection configuration

use crate::error::{ClientError, ClientResult};
use homees_config as config;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the hosted store
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Project base URL (no trailing slash required)
    pub project_url: String,

    /// Anonymous API key, sent on every request
    pub anon_key: String,

    /// Per-user access token; the anon key is used when absent
    pub access_token: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(project_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            project_url: project_url.into(),
            anon_key: anon_key.into(),
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Attach a per-user access token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Build the configuration from environment variables
    pub fn from_env() -> ClientResult<Self> {
        let project_url = config::env_string(config::HOMEES_PROJECT_URL).ok_or_else(|| {
            ClientError::config(format!("{} is not set", config::HOMEES_PROJECT_URL))
        })?;
        let anon_key = config::env_string(config::HOMEES_ANON_KEY).ok_or_else(|| {
            ClientError::config(format!("{} is not set", config::HOMEES_ANON_KEY))
        })?;

        Ok(Self {
            project_url,
            anon_key,
            access_token: config::env_string(config::HOMEES_ACCESS_TOKEN),
            timeout_secs: config::env_u64_or(
                config::HOMEES_HTTP_TIMEOUT_SECS,
                DEFAULT_TIMEOUT_SECS,
            ),
        })
    }

    pub(crate) fn validate(&self) -> ClientResult<()> {
        if self.project_url.trim().is_empty() {
            return Err(ClientError::config("project_url is empty"));
        }
        if self.anon_key.trim().is_empty() {
            return Err(ClientError::config("anon_key is empty"));
        }
        Ok(())
    }
}
