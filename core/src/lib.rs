//! Async API client core for the flight routes analytics service.
//!
//! # Overview
//! Builds requests for a fixed catalog of backend operations, shapes their
//! payloads so optional fields are omitted rather than sent as `null`, and
//! classifies every failure as a server, network or setup error. Response
//! bodies are never interpreted; callers get them back exactly as the
//! backend sent them.
//!
//! # Design
//! - `RoutesClient` is stateless and pure: one `build_*` method per
//!   operation, producing plain-data `HttpRequest` values.
//! - `Transport` is the I/O seam. `ReqwestTransport` is the real one; tests
//!   substitute their own.
//! - `FlightRoutesApi` wires the two together and routes every failure
//!   through `classify`, which logs it once via `tracing`.
//! - `ClientConfig` is resolved by the caller once and never mutated.

pub mod api;
pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::FlightRoutesApi;
pub use classify::{classify, Failure};
pub use client::RoutesClient;
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, FailureKind, RequestContext};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport, TransportError};
pub use types::{AlternativeHubsRequest, HubRemovalRequest, RouteAlternativesRequest, TopHubsQuery};
