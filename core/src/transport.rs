//! The seam between the catalog and the network.
//!
//! # Design
//! A transport executes one `HttpRequest` and reports what happened at the
//! wire level. Any response that arrived, whatever its status, is `Ok`;
//! judging the status belongs to the facade. `Err` is reserved for the two
//! ways a call can fail without a response: it never left (`Setup`) or
//! nothing came back (`NoResponse`).

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::ClientConfig;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Wire-level failure reported by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Dispatched, but no response arrived.
    #[error("no response: {reason}")]
    NoResponse { reason: String, timed_out: bool },

    /// Rejected before dispatch.
    #[error("request not dispatched: {0}")]
    Setup(String),
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by a single pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build the HTTP client once from `config`: its timeout and default
    /// headers apply to every request sent through this transport.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.default_headers() {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| TransportError::Setup(format!("invalid header name: {e}")))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| TransportError::Setup(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, request.url.as_str());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(from_reqwest)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        // A body cut off mid-read counts as no response at all.
        let body = response.text().await.map_err(from_reqwest)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn from_reqwest(err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        return TransportError::Setup(error_chain(&err));
    }
    TransportError::NoResponse {
        reason: error_chain(&err),
        timed_out: err.is_timeout(),
    }
}

/// Flatten an error and its sources into one line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
