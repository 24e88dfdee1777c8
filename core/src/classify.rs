//! Central failure classification.
//!
//! Every failed call passes through [`classify`] exactly once. It records a
//! single diagnostic event tagged with the failure category and hands the
//! failure back unchanged as an [`ApiError`]; it never retries, swallows or
//! rewrites anything.

use tracing::error;

use crate::error::{ApiError, RequestContext};
use crate::http::HttpResponse;

/// The raw shape of a failure, before classification.
#[derive(Debug, Clone)]
pub enum Failure {
    /// A response arrived with a non-2xx status.
    Response(HttpResponse),
    /// The request was handed to the transport and nothing came back.
    NoResponse {
        context: RequestContext,
        reason: String,
        timed_out: bool,
    },
    /// The request was never dispatched.
    Setup { message: String },
}

pub fn classify(failure: Failure) -> ApiError {
    let err = match failure {
        Failure::Response(response) => ApiError::Server {
            status: response.status,
            body: response.body,
        },
        Failure::NoResponse {
            context,
            reason,
            timed_out,
        } => ApiError::Network {
            context,
            reason,
            timed_out,
        },
        Failure::Setup { message } => ApiError::Setup { message },
    };

    match &err {
        ApiError::Server { status, body } => {
            error!(kind = %err.kind(), status, body = %body, "API error");
        }
        ApiError::Network {
            context,
            reason,
            timed_out,
        } => {
            error!(
                kind = %err.kind(),
                method = %context.method,
                url = %context.url,
                reason = %reason,
                timed_out,
                "network error (timeout or connectivity)"
            );
        }
        ApiError::Setup { message } => {
            error!(kind = %err.kind(), message = %message, "request setup error");
        }
    }

    err
}
