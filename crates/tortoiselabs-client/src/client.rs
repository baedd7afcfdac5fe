//! TortoiseLabs API client
//!
//! Sends authenticated GET/POST requests to the TortoiseLabs control panel
//! API (`https://manage.tortois.es`) and decodes JSON responses. Endpoint
//! wrappers live in the resource facades returned by [`TortoiseLabsClient::vps`],
//! [`TortoiseLabsClient::dns`], [`TortoiseLabsClient::support`] and
//! [`TortoiseLabsClient::billing`].

use crate::billing::Billing;
use crate::common::{ApiRequest, HttpMethod, HttpTransport, RawResponse, decode_json};
use crate::config::{ClientConfig, Credentials};
use crate::dns::Dns;
use crate::error::TortoiseLabsError;
use crate::support::Support;
use crate::transport_trait::Transport;
use crate::vps::Vps;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// TortoiseLabs API client
pub struct TortoiseLabsClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    credentials: Credentials,
}

impl fmt::Debug for TortoiseLabsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TortoiseLabsClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl TortoiseLabsClient {
    /// Create a client for the production API
    ///
    /// # Arguments
    /// * `username` - Account username
    /// * `api_key` - API key from the control panel
    pub fn new(
        username: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, TortoiseLabsError> {
        Self::from_config(ClientConfig::new(username, api_key))
    }

    /// Create a client from a full configuration, using the reqwest transport
    pub fn from_config(config: ClientConfig) -> Result<Self, TortoiseLabsError> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client that sends requests through `transport`
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: config.credentials,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the account username
    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// VPS lifecycle endpoints
    pub fn vps(&self) -> Vps<'_> {
        Vps::new(self)
    }

    /// DNS zone and record endpoints
    pub fn dns(&self) -> Dns<'_> {
        Dns::new(self)
    }

    /// Support ticket endpoints
    pub fn support(&self) -> Support<'_> {
        Support::new(self)
    }

    /// Invoice and credit endpoints
    pub fn billing(&self) -> Billing<'_> {
        Billing::new(self)
    }

    /// Send a request and return the raw response
    ///
    /// This is the general entry point the typed methods build on. Pass
    /// `auth = false` to omit the Basic auth header.
    ///
    /// # Returns
    /// * `Ok(RawResponse)` - Any 2xx response
    /// * `Err(TortoiseLabsError::Transport)` - Connection failure or non-2xx status
    pub async fn send_request(
        &self,
        path: &str,
        method: HttpMethod,
        auth: bool,
        params: &[(&str, &str)],
    ) -> Result<RawResponse, TortoiseLabsError> {
        let credentials = auth.then_some(&self.credentials);
        let request = ApiRequest::build(&self.base_url, path, method, credentials, params)?;

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(TortoiseLabsError::Transport(format!(
                "{} {} failed: {} - {}",
                method, path, response.status, response.body
            )));
        }

        Ok(response)
    }

    /// Authenticated GET, decoding the body as JSON
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, TortoiseLabsError> {
        let response = self.send_request(path, HttpMethod::Get, true, params).await?;
        decode_json(&response.body)
    }

    /// Authenticated form POST, decoding the body as JSON
    pub async fn post(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, TortoiseLabsError> {
        let response = self.send_request(path, HttpMethod::Post, true, params).await?;
        decode_json(&response.body)
    }

    /// Authenticated form POST whose body is ignored
    ///
    /// Succeeds whenever the exchange completes with a 2xx status, even if
    /// the body is not JSON.
    pub async fn post_action(&self, path: &str, params: &[(&str, &str)]) -> Result<(), TortoiseLabsError> {
        self.send_request(path, HttpMethod::Post, true, params).await?;
        Ok(())
    }

    /// Authenticated GET whose body is ignored
    pub async fn get_action(&self, path: &str, params: &[(&str, &str)]) -> Result<(), TortoiseLabsError> {
        self.send_request(path, HttpMethod::Get, true, params).await?;
        Ok(())
    }

    /// Check the credentials by listing the account's VPS instances
    ///
    /// # Returns
    /// * `Ok(())` - Credentials are accepted and the API is reachable
    /// * `Err(TortoiseLabsError)` - Credentials rejected or API unreachable
    pub async fn validate_credentials(&self) -> Result<(), TortoiseLabsError> {
        debug!("Validating TortoiseLabs credentials for {}", self.username());
        self.get_action("/vps/list/", &[]).await?;
        debug!("Credentials validated successfully");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use serde_json::json;

    pub(crate) fn mock_client() -> (TortoiseLabsClient, MockTransport) {
        let mock = MockTransport::new();
        let config = ClientConfig::new("alice", "key").with_base_url("https://api.test/");
        let client = TortoiseLabsClient::with_transport(config, Arc::new(mock.clone()));
        (client, mock)
    }

    #[tokio::test]
    async fn test_get_returns_decoded_body() {
        let (client, mock) = mock_client();
        let body = json!({"vpslist": [{"id": 1, "name": "node1"}], "ok": null});
        mock.push_json(body.clone());

        let value = client.get("/vps/list/", &[("x", "1")]).await.unwrap();
        assert_eq!(value, body);

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://api.test/vps/list/?x=1");
        assert_eq!(request.header("authorization"), Some("Basic YWxpY2U6a2V5"));
    }

    #[tokio::test]
    async fn test_post_returns_decoded_body() {
        let (client, mock) = mock_client();
        mock.push_json(json!(["a", 1, true]));

        let value = client.post("/vps/3/setnickname/", &[("nickname", "db")]).await.unwrap();
        assert_eq!(value, json!(["a", 1, true]));

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body.as_deref(), Some("nickname=db"));
        assert_eq!(request.header("content-length"), Some("11"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let (client, mock) = mock_client();
        mock.push_response(200, "<html>maintenance</html>");
        mock.push_response(200, "");

        assert!(client.get("/vps/list/", &[]).await.unwrap_err().is_decode());
        assert!(client.post("/vps/signup/", &[]).await.unwrap_err().is_decode());
    }

    #[tokio::test]
    async fn test_post_action_ignores_body() {
        let (client, mock) = mock_client();
        mock.push_response(200, "not json at all");

        client
            .post_action("/vps/signup/", &[("plan", "1"), ("region", "2")])
            .await
            .unwrap();
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_for_every_call_type() {
        let (client, mock) = mock_client();
        mock.push_failure("connection refused")
            .push_failure("connection refused")
            .push_failure("connection refused");

        assert!(client.get("/a", &[]).await.unwrap_err().is_transport());
        assert!(client.post("/b", &[]).await.unwrap_err().is_transport());
        assert!(client.post_action("/c", &[]).await.unwrap_err().is_transport());
    }

    #[tokio::test]
    async fn test_error_status_is_transport_error() {
        let (client, mock) = mock_client();
        mock.push_response(401, r#"{"error": "unauthorized"}"#)
            .push_response(500, "boom")
            .push_response(404, "");

        let err = client.get("/vps/list/", &[]).await.unwrap_err();
        assert!(matches!(&err, TortoiseLabsError::Transport(msg) if msg.contains("401")));
        assert!(client.post("/vps/signup/", &[]).await.unwrap_err().is_transport());
        assert!(client.post_action("/vps/signup/", &[]).await.unwrap_err().is_transport());
    }

    #[tokio::test]
    async fn test_send_request_without_auth() {
        let (client, mock) = mock_client();
        client
            .send_request("/vps/signup/", HttpMethod::Get, false, &[])
            .await
            .unwrap();
        assert!(mock.last_request().unwrap().header("authorization").is_none());
    }

    #[tokio::test]
    async fn test_validate_credentials() {
        let (client, mock) = mock_client();
        mock.push_response(200, "{}").push_response(403, "forbidden");

        client.validate_credentials().await.unwrap();
        assert!(client.validate_credentials().await.is_err());
        assert_eq!(mock.requests()[0].url, "https://api.test/vps/list/");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let (client, _) = mock_client();
        let printed = format!("{client:?}");
        assert!(printed.contains("https://api.test"));
        assert!(printed.contains("alice"));
        assert!(!printed.contains("\"key\""));
        assert!(format!("{:?}", client.vps()).contains("TortoiseLabsClient"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let (client, _) = mock_client();
        assert_eq!(client.base_url(), "https://api.test");
        assert_eq!(client.username(), "alice");
    }
}
