//! Common utilities for the TortoiseLabs API client
//!
//! Request building, the reqwest-backed transport, and response decoding.

pub mod query;

use crate::config::Credentials;
use crate::error::TortoiseLabsError;
use crate::transport_trait::Transport;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// The two HTTP methods the API uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Parameters go in the query string
    Get,
    /// Parameters go in a form-encoded body
    Post,
}

impl HttpMethod {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// A fully formed request, ready to hand to a [`Transport`]
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// GET or POST
    pub method: HttpMethod,
    /// Absolute URL, including the query string for GET
    pub url: String,
    /// Accept, Authorization and (for POST) form headers
    pub headers: HeaderMap,
    /// Form-encoded body; `None` for GET
    pub body: Option<String>,
}

impl ApiRequest {
    /// Build a request for `path` relative to `base_url`
    ///
    /// GET parameters are appended as a query string; POST parameters become
    /// a form body with matching `Content-Type` and `Content-Length` headers.
    /// The Basic auth header is attached only when `credentials` is given.
    pub fn build(
        base_url: &str,
        path: &str,
        method: HttpMethod,
        credentials: Option<&Credentials>,
        params: &[(&str, &str)],
    ) -> Result<Self, TortoiseLabsError> {
        let mut url = format!("{base_url}{path}");
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(credentials) = credentials {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&credentials.authorization_header())?,
            );
        }

        let body = match method {
            HttpMethod::Get => {
                let query = query::encode_query(params);
                if !query.is_empty() {
                    url = format!("{url}?{query}");
                }
                None
            }
            HttpMethod::Post => {
                let body = query::encode_form(params);
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded"),
                );
                headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
                Some(body)
            }
        };

        Ok(Self {
            method,
            url,
            headers,
            body,
        })
    }

    /// Header value as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Status code and body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Undecoded response body
    pub body: String,
}

impl RawResponse {
    /// A 200 response with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Parse a response body as JSON
pub fn decode_json(body: &str) -> Result<Value, TortoiseLabsError> {
    serde_json::from_str(body).map_err(|e| {
        TortoiseLabsError::Decode(format!(
            "{} - Response (first 500 chars): {}",
            e,
            body.chars().take(500).collect::<String>()
        ))
    })
}

/// Transport that sends requests over HTTPS with reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport, optionally with a request timeout
    pub fn new(timeout: Option<Duration>) -> Result<Self, TortoiseLabsError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TortoiseLabsError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method.as_reqwest(), &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("{} {} -> {}", request.method, request.url, status);
        Ok(RawResponse { status, body })
    }
}
