//! Request descriptors for the three repository operations.
//!
//! Everything here is pure computation: a [`Request`] names the method,
//! the path (with any query string), and the optional JSON body. The
//! [`client`](crate::client) module adds the host, the auth cookie, and the
//! content-type header when it sends one.

use serde_json::{json, Value};
use urlencoding::encode;

use crate::types::{Endpoint, ListFilter, NewEntity};

/// HTTP methods used by the repository API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to perform one HTTP call, minus host and credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Absolute path, including the query string when there is one.
    pub path: String,
    pub body: Option<Value>,
    /// Status the repository returns on success.
    pub expected_status: u16,
}

// ── Create ────────────────────────────────────────────────────────────────────

/// `POST {endpoint}` with the entity as body; expects `201 Created`.
pub fn create_request(endpoint: Endpoint, entity: &NewEntity) -> Request {
    Request {
        method: Method::Post,
        path: endpoint.path().to_string(),
        body: Some(json!({
            "namespace": entity.namespace,
            "name": entity.name,
            "synopsis": entity.synopsis,
            "documentation": entity.documentation,
            "entityType": entity.entity_type.to_string(),
            "payload": entity.payload,
        })),
        expected_status: 201,
    }
}

// ── Fetch ─────────────────────────────────────────────────────────────────────

/// `GET {endpoint}/{namespace}/{name}/{snapshot_id}`; expects `200 OK`.
pub fn fetch_request(endpoint: Endpoint, namespace: &str, name: &str, snapshot_id: u64) -> Request {
    Request {
        method: Method::Get,
        path: format!(
            "{}/{}/{}/{}",
            endpoint.path(),
            encode(namespace),
            encode(name),
            snapshot_id
        ),
        body: None,
        expected_status: 200,
    }
}

// ── List ──────────────────────────────────────────────────────────────────────

/// `GET {endpoint}[?{query}]`; expects `200 OK`.
///
/// The `?` is omitted entirely when the filter is empty.
pub fn list_request(endpoint: Endpoint, filter: &ListFilter) -> Request {
    let path = if filter.is_empty() {
        endpoint.path().to_string()
    } else {
        format!("{}?{}", endpoint.path(), query_string(filter))
    };
    Request {
        method: Method::Get,
        path,
        body: None,
        expected_status: 200,
    }
}

/// Render a filter as `key=value` pairs joined by `&`, values percent-encoded.
pub fn query_string(filter: &ListFilter) -> String {
    filter
        .pairs()
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
