//! HTTP transport types shared by the request builder and the transports.
//!
//! # Design
//! Requests and responses are plain data. `RoutesClient` builds
//! `HttpRequest` values without touching the network, a `Transport`
//! executes them, and the facade hands the resulting `HttpResponse` back to
//! the caller untouched. Keeping the catalog pure means every wire shape can
//! be asserted in a unit test without a server.
//!
//! All fields use owned types (`String`, `Vec`) so values move freely
//! between the builder, the transport and the caller.

use std::fmt;

use serde::de::DeserializeOwned;

/// HTTP method for a request. The catalog only ever reads or posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is the absolute URL without a query string. Query parameters are
/// kept as unencoded pairs in `query`; the transport is responsible for
/// encoding them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Parse the body as JSON, if there is one.
    pub fn body_json(&self) -> Option<Result<serde_json::Value, serde_json::Error>> {
        self.body.as_deref().map(serde_json::from_str)
    }
}

/// An HTTP response described as plain data.
///
/// The client never inspects `body` on success; it is returned to the
/// caller exactly as the transport produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON. A convenience for callers; the client itself
    /// never validates success bodies.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
