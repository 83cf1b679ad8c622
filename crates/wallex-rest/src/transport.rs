//! HTTP transport abstraction
//!
//! The facade talks to the network only through [`Transport`], so tests (or
//! callers with their own HTTP stack) can substitute another implementation.
//! The transport returns whatever status and body it received; deciding what
//! a non-200 status means is left to the caller.

use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;
use thiserror::Error;
use tracing::{instrument, trace};

/// Header carrying the API key on every authenticated request
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection could not be established (DNS, refused, TLS handshake)
    #[error("connection failed: {0}")]
    Connect(String),

    /// Request exceeded the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Request could not be built or sent
    #[error("request failed: {0}")]
    Request(String),

    /// Response body could not be read
    #[error("failed to read response body: {0}")]
    Body(String),

    /// An API key was supplied but it is empty
    #[error("API key must not be empty")]
    InvalidApiKey,
}

impl TransportError {
    /// Check if the failure is transient
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connect(_) | Self::Timeout | Self::Body(_))
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Raw response: status and body exactly as received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response from a status and body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for HTTP transport abstraction
///
/// Implementations must be shareable across tasks; one call is one round trip.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the response, whatever its status
    ///
    /// When `api_key` is given it is attached as the `X-API-Key` header.
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
        api_key: Option<&str>,
    ) -> Result<HttpResponse, TransportError>;
}

/// Real HTTP transport using reqwest
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the HTTP stack's defaults (no request timeout)
    pub fn new() -> Result<Self, TransportError> {
        Self::with_options(None, None)
    }

    /// Create a transport with an optional per-request timeout and user agent
    pub fn with_options(
        timeout: Option<Duration>,
        user_agent: Option<&str>,
    ) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(TransportError::from_reqwest)?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

const DEFAULT_USER_AGENT: &str = concat!("wallex-rest/", env!("CARGO_PKG_VERSION"));

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, body, api_key), fields(authenticated = api_key.is_some()))]
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
        api_key: Option<&str>,
    ) -> Result<HttpResponse, TransportError> {
        let mut request = self.client.request(method, url);

        if let Some(key) = api_key {
            if key.is_empty() {
                return Err(TransportError::InvalidApiKey);
            }
            request = request.header(API_KEY_HEADER, key);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(TransportError::from_reqwest)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        trace!(status, len = body.len(), "Received response");

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// A request captured by [`MockTransport`]
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub api_key: Option<String>,
}

/// Mock transport for testing
///
/// Returns queued responses in order and records every request it sees.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MockTransport {
    responses: parking_lot::Mutex<std::collections::VecDeque<Result<HttpResponse, TransportError>>>,
    requests: parking_lot::Mutex<Vec<RecordedRequest>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockTransport {
    /// Create a mock with no queued responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body
    pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.responses
            .lock()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Queue a 200 response with the given JSON body
    pub fn push_ok(&self, body: &str) {
        self.push_response(200, body);
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests seen so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        _body: Option<Vec<u8>>,
        api_key: Option<&str>,
    ) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(RecordedRequest {
            method,
            url: url.to_string(),
            api_key: api_key.map(str::to_string),
        });

        if api_key.is_some_and(str::is_empty) {
            return Err(TransportError::InvalidApiKey);
        }

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connect("mock: no response queued".into())))
    }
}
