//! Public API client seam for external consumers.
//!
//! Placeholder plumbing: `StubClient` answers every request with a canned
//! success so downstream wiring can be tested without a live endpoint.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;

/// An API request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// HTTP-style method (GET, POST, ...).
    pub method: String,
    /// Request path.
    pub path: String,
    /// Optional request body.
    pub body: Option<Value>,
    /// Request headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Create a request with no body or headers.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body: None,
            headers: HashMap::new(),
        }
    }
}

/// An API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// HTTP-style status code.
    pub status: u16,
    /// Response body.
    pub body: Value,
    /// Response headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

/// API operation interface.
pub trait Client {
    /// Perform an API operation.
    fn execute(&self, request: &Request) -> Result<Response>;
}

/// Placeholder client returning a canned success response.
pub struct StubClient {
    base_url: String,
}

impl StubClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Client for StubClient {
    fn execute(&self, _request: &Request) -> Result<Response> {
        Ok(Response {
            status: 200,
            body: json!({ "status": "ok" }),
            headers: HashMap::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_client_returns_ok() {
        let client = StubClient::new("https://example.test");
        let response = client.execute(&Request::new("GET", "/health")).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body["status"], "ok");
    }

    #[test]
    fn test_request_defaults() {
        let request = Request::new("POST", "/items");
        assert!(request.body.is_none());
        assert!(request.headers.is_empty());
    }
}
