//! Client configuration
//!
//! Credentials are fixed for the lifetime of a client. Configuration can be
//! built directly, deserialized with serde, or read from the environment:
//!
//! - `TORTOISELABS_USERNAME` (required)
//! - `TORTOISELABS_API_KEY` (required)
//! - `TORTOISELABS_URL` (optional, defaults to [`DEFAULT_BASE_URL`])

use crate::error::TortoiseLabsError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://manage.tortois.es";

/// Account username and API key used for HTTP Basic auth
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    username: String,
    api_key: String,
}

impl Credentials {
    /// Create credentials from a username and the API key issued by the control panel
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// Account username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// `Authorization` header value: `Basic base64(username:api_key)`
    ///
    /// Both parts are used verbatim, so a `:` inside either one is encoded as is.
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.api_key);
        format!("Basic {}", STANDARD.encode(raw.as_bytes()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Everything needed to construct a [`crate::TortoiseLabsClient`]
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL requests are sent to, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Basic auth credentials
    #[serde(flatten)]
    pub credentials: Credentials,

    /// Request timeout in milliseconds; the transport default applies when unset
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    /// Configuration for the production API host
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            credentials: Credentials::new(username, api_key),
            timeout_ms: None,
        }
    }

    /// Point the client at a different host
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Request timeout, if one was configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Load configuration from `TORTOISELABS_*` environment variables
    pub fn from_env() -> Result<Self, TortoiseLabsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, TortoiseLabsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = lookup("TORTOISELABS_USERNAME").ok_or_else(|| {
            TortoiseLabsError::InvalidConfig(
                "TORTOISELABS_USERNAME environment variable is required".to_string(),
            )
        })?;
        let api_key = lookup("TORTOISELABS_API_KEY").ok_or_else(|| {
            TortoiseLabsError::InvalidConfig(
                "TORTOISELABS_API_KEY environment variable is required".to_string(),
            )
        })?;

        let mut config = Self::new(username, api_key);
        if let Some(url) = lookup("TORTOISELABS_URL") {
            config.base_url = url;
        }
        Ok(config)
    }
}
