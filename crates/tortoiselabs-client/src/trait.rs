//! Transport trait for mocking
//!
//! The client sends every request through this trait. [`crate::HttpTransport`]
//! is the real implementation; tests can substitute a mock.

use crate::common::{ApiRequest, RawResponse};
use crate::error::TortoiseLabsError;

/// Sends a built request and returns the raw status and body
///
/// Implementations report connection failures as
/// [`TortoiseLabsError::Transport`]. Status handling and JSON decoding are
/// done by the client, not the transport.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return its status and body
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TortoiseLabsError>;
}
