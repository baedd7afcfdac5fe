//! TortoiseLabs client errors

use thiserror::Error;

/// Errors that can occur when talking to the TortoiseLabs API
#[derive(Debug, Error)]
pub enum TortoiseLabsError {
    /// Connection failure or a non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not the JSON we expected
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid request arguments (e.g., a non-finite credit amount)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Client configuration is unusable (missing credentials, bad header value)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TortoiseLabsError {
    /// True for connection and HTTP status failures
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// True when a response body could not be decoded
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

impl From<reqwest::Error> for TortoiseLabsError {
    fn from(err: reqwest::Error) -> Self {
        TortoiseLabsError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for TortoiseLabsError {
    fn from(err: serde_json::Error) -> Self {
        TortoiseLabsError::Decode(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for TortoiseLabsError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        TortoiseLabsError::InvalidConfig(format!("invalid header value: {err}"))
    }
}
