//! Error types for the flight routes client.
//!
//! # Design
//! Every failure lands in exactly one of three variants, chosen by the stage
//! of the request lifecycle that failed: the backend answered with a
//! non-2xx status, nothing answered, or the request was never sent. The
//! variants carry the original failure data as-is; nothing is rewritten or
//! summarised, so callers can show one error path and still dig into the
//! detail when they need to.

use std::fmt;

use thiserror::Error;

use crate::http::HttpMethod;

/// Classification tag attached to every [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    ServerError,
    NetworkError,
    SetupError,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::ServerError => "server-error",
            FailureKind::NetworkError => "network-error",
            FailureKind::SetupError => "setup-error",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outgoing request a network failure belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub method: HttpMethod,
    pub url: String,
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// Errors returned by every `FlightRoutesApi` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend responded with a 4xx or 5xx status.
    #[error("server error (HTTP {status}): {body}")]
    Server { status: u16, body: String },

    /// The request went out but no response came back: timeout,
    /// connectivity loss or a policy block.
    #[error("network error for {context}: {reason}")]
    Network {
        context: RequestContext,
        reason: String,
        timed_out: bool,
    },

    /// The request could not be built or dispatched.
    #[error("request setup failed: {message}")]
    Setup { message: String },
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Server { .. } => FailureKind::ServerError,
            ApiError::Network { .. } => FailureKind::NetworkError,
            ApiError::Setup { .. } => FailureKind::SetupError,
        }
    }

    /// HTTP status of a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
