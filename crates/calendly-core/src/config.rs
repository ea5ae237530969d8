use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Calendly API base URL
pub const DEFAULT_API_URL: &str = "https://api.calendly.com";

/// Calendly OAuth authorization base URL
pub const DEFAULT_AUTH_URL: &str = "https://auth.calendly.com";

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// OAuth application client ID
    pub client_id: String,

    /// OAuth application client secret
    pub client_secret: String,

    /// Bearer token for API calls
    pub access_token: String,

    /// Token exchanged for a new access token
    pub refresh_token: String,

    /// API base URL
    pub api_url: String,

    /// Authorization server base URL
    pub auth_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{} not set", key)))
        };

        let config = Self {
            client_id: required("CALENDLY_CLIENT_ID")?,
            client_secret: required("CALENDLY_CLIENT_SECRET")?,
            access_token: required("CALENDLY_ACCESS_TOKEN")?,
            refresh_token: required("CALENDLY_REFRESH_TOKEN")?,

            api_url: lookup("CALENDLY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),

            auth_url: lookup("CALENDLY_AUTH_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
        };

        tracing::debug!(api_url = %config.api_url, auth_url = %config.auth_url, "Loaded configuration");

        Ok(config)
    }

    /// Create a test configuration
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            access_token: "A1".to_string(),
            refresh_token: "R1".to_string(),
            api_url: "http://localhost:8080".to_string(),
            auth_url: "http://localhost:8081".to_string(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("auth_url", &self.auth_url)
            .finish()
    }
}
