//! HTTP transport and the three entity operations.
//!
//! [`AgoraClient`] owns a [`Transport`] and the caller's auth token. Each
//! operation builds a [`Request`](crate::request::Request), hands it to the
//! transport, checks the status against the one the operation expects, and
//! parses the body as JSON. Nothing is retried.
//!
//! [`HttpTransport`] is the production transport over `reqwest::blocking`.
//! Tests substitute a canned transport to exercise the status and parsing
//! logic without a network.

use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use serde_json::Value;
use tracing::{debug, warn};

use crate::request::{create_request, fetch_request, list_request, Method, Request};
use crate::types::{Endpoint, ListFilter, NewEntity};
use crate::validation::{validate_synopsis, ValidationError};

/// Default repository host.
pub const DEFAULT_BASE_URL: &str = "https://agora-ci.broadinstitute.org";

// ---------------------------------------------------------------------------
// ClientError
// ---------------------------------------------------------------------------

/// Errors that can occur while performing a repository operation.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A local check failed; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The connection or the exchange itself failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The repository answered with a status other than the expected one.
    #[error(
        "Agora HTTP request failed\n\
         Request URL: {url}\n\
         Request body:\n{}\n\
         Response:\n{status} {reason} {body}",
        .request_body.as_deref().unwrap_or("None")
    )]
    UnexpectedStatus {
        url: String,
        request_body: Option<String>,
        status: u16,
        reason: String,
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// A raw HTTP response, before status checking and JSON parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Reason phrase for `status` (e.g. `"Not Found"`), empty if unknown.
    pub reason: String,
    pub body: String,
}

/// Sends one request and returns the raw response.
///
/// Implementations attach `Cookie: <auth>` to every request and
/// `Content-Type: application/json` when the request has a body.
pub trait Transport {
    /// Full URL the request is sent to, used in diagnostics.
    fn url_for(&self, request: &Request) -> String;

    fn send(&self, auth: &str, request: &Request) -> Result<RawResponse, ClientError>;
}

/// HTTPS transport over a blocking `reqwest` client.
///
/// Idle connections are never kept, so every call opens a fresh
/// connection to the host.
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Create a transport for `base_url` (scheme and host, no trailing path).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL with any trailing `/` removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn url_for(&self, request: &Request) -> String {
        format!("{}{}", self.base_url, request.path)
    }

    fn send(&self, auth: &str, request: &Request) -> Result<RawResponse, ClientError> {
        let url = self.url_for(request);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &url).header(COOKIE, auth);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;
        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

// ---------------------------------------------------------------------------
// AgoraClient
// ---------------------------------------------------------------------------

/// Performs create, fetch and list operations against the repository.
pub struct AgoraClient<T: Transport> {
    transport: T,
    auth: String,
}

impl<T: Transport> AgoraClient<T> {
    /// # Arguments
    ///
    /// * `transport` — where requests go.
    /// * `auth` — raw `Cookie` header value sent with every request.
    pub fn new(transport: T, auth: impl Into<String>) -> Self {
        Self {
            transport,
            auth: auth.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and return its parsed JSON body.
    ///
    /// Fails with [`ClientError::UnexpectedStatus`] when the response status
    /// differs from `request.expected_status`.
    pub fn send(&self, request: &Request) -> Result<Value, ClientError> {
        debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.send(&self.auth, request)?;
        debug!(status = response.status, "received response");

        if response.status != request.expected_status {
            let url = self.transport.url_for(request);
            warn!(
                %url,
                expected = request.expected_status,
                status = response.status,
                "unexpected response status"
            );
            return Err(ClientError::UnexpectedStatus {
                url,
                request_body: request.body.as_ref().map(Value::to_string),
                status: response.status,
                reason: response.reason,
                body: response.body,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// Create a new entity (or a new snapshot of an existing one).
    ///
    /// The synopsis is checked before anything is sent.
    pub fn create(&self, endpoint: Endpoint, entity: &NewEntity) -> Result<Value, ClientError> {
        validate_synopsis(&entity.synopsis)?;
        self.send(&create_request(endpoint, entity))
    }

    /// Fetch one snapshot of an entity by its coordinates.
    pub fn fetch(
        &self,
        endpoint: Endpoint,
        namespace: &str,
        name: &str,
        snapshot_id: u64,
    ) -> Result<Value, ClientError> {
        self.send(&fetch_request(endpoint, namespace, name, snapshot_id))
    }

    /// List entities matching `filter`.
    pub fn list(&self, endpoint: Endpoint, filter: &ListFilter) -> Result<Value, ClientError> {
        self.send(&list_request(endpoint, filter))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
