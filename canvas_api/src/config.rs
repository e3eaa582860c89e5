//! Client configuration.

use std::time::Duration;

use crate::Error;

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const BASE_URL_VAR: &str = "CANVAS_BASE_URL";
pub const ACCESS_TOKEN_VAR: &str = "CANVAS_ACCESS_TOKEN";
pub const TIMEOUT_VAR: &str = "CANVAS_TIMEOUT_SECS";

/// Connection settings for [`crate::Client`].
#[derive(Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://school.instructure.com/api/v1`.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub access_token: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(base_url: &str, access_token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("canvas_api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Reads `CANVAS_BASE_URL`, `CANVAS_ACCESS_TOKEN` and the optional
    /// `CANVAS_TIMEOUT_SECS`, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env file: {}", e);
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("{} is not set", name)))
        };
        let base_url = required(BASE_URL_VAR)?;
        let access_token = required(ACCESS_TOKEN_VAR)?;
        let mut config = Self::new(&base_url, &access_token);

        if let Some(secs) = lookup(TIMEOUT_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!("{} must be a whole number of seconds", TIMEOUT_VAR))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
