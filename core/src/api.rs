//! Async facade over the endpoint catalog.
//!
//! # Design
//! `FlightRoutesApi` pairs a `RoutesClient` with a `Transport`. Each method
//! builds its request, hands it to the transport and returns the response
//! untouched when the status is 2xx. Every other outcome goes through
//! [`classify`] exactly once before reaching the caller, so all failures
//! share one shape no matter where they came from.
//!
//! The facade holds no mutable state; independent calls never observe each
//! other and may be issued concurrently from a shared reference.

use tracing::{instrument, Span};

use crate::classify::{classify, Failure};
use crate::client::RoutesClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, RequestContext};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport, TransportError};
use crate::types::{AlternativeHubsRequest, HubRemovalRequest, RouteAlternativesRequest, TopHubsQuery};

/// Typed async client for the flight routes analytics backend.
///
/// ```no_run
/// use flight_routes_core::{ClientConfig, FlightRoutesApi, RouteAlternativesRequest};
///
/// # async fn example() -> Result<(), flight_routes_core::ApiError> {
/// let api = FlightRoutesApi::new(ClientConfig::from_env())?;
/// let request = RouteAlternativesRequest::new("LHR", "JFK").with_max_stops(Some(1));
/// let response = api.find_alternative_routes(&request).await?;
/// println!("{}", response.body);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FlightRoutesApi<T = ReqwestTransport> {
    config: ClientConfig,
    routes: RoutesClient,
    transport: T,
}

impl FlightRoutesApi<ReqwestTransport> {
    /// Create a client that talks HTTP through reqwest.
    ///
    /// # Errors
    ///
    /// Returns a setup error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(&config).map_err(|e| ApiError::Setup {
            message: e.to_string(),
        })?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> FlightRoutesApi<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let routes = RoutesClient::new(config.base_url());
        Self {
            config,
            routes,
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn search_airports(&self, query: &str) -> Result<HttpResponse, ApiError> {
        self.send(self.routes.build_search_airports(query)).await
    }

    pub async fn get_airport_info(&self, iata: &str) -> Result<HttpResponse, ApiError> {
        self.send(self.routes.build_get_airport_info(iata)).await
    }

    pub async fn find_alternative_routes(
        &self,
        request: &RouteAlternativesRequest,
    ) -> Result<HttpResponse, ApiError> {
        let request = self
            .routes
            .build_find_alternative_routes(request)
            .map_err(setup_failure)?;
        self.send(request).await
    }

    pub async fn get_top_hubs(&self, query: &TopHubsQuery) -> Result<HttpResponse, ApiError> {
        self.send(self.routes.build_top_hubs(query)).await
    }

    pub async fn analyze_hub_removal(
        &self,
        request: &HubRemovalRequest,
    ) -> Result<HttpResponse, ApiError> {
        let request = self
            .routes
            .build_analyze_hub_removal(request)
            .map_err(setup_failure)?;
        self.send(request).await
    }

    pub async fn find_alternative_hubs(
        &self,
        request: &AlternativeHubsRequest,
    ) -> Result<HttpResponse, ApiError> {
        let request = self
            .routes
            .build_find_alternative_hubs(request)
            .map_err(setup_failure)?;
        self.send(request).await
    }

    pub async fn get_graph_stats(&self) -> Result<HttpResponse, ApiError> {
        self.send(self.routes.build_graph_stats()).await
    }

    pub async fn health_check(&self) -> Result<HttpResponse, ApiError> {
        self.send(self.routes.build_health_check()).await
    }

    #[instrument(
        name = "api_request",
        skip(self, request),
        fields(
            http.method = %request.method,
            http.url = %request.url,
            http.status_code = tracing::field::Empty,
        )
    )]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let context = RequestContext {
            method: request.method,
            url: request.url.clone(),
        };

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(TransportError::NoResponse { reason, timed_out }) => {
                return Err(classify(Failure::NoResponse {
                    context,
                    reason,
                    timed_out,
                }));
            }
            Err(TransportError::Setup(message)) => {
                return Err(classify(Failure::Setup { message }));
            }
        };

        Span::current().record("http.status_code", response.status);
        if !response.is_success() {
            return Err(classify(Failure::Response(response)));
        }
        Ok(response)
    }
}

fn setup_failure(err: serde_json::Error) -> ApiError {
    classify(Failure::Setup {
        message: err.to_string(),
    })
}
