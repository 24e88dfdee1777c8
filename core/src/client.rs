//! Stateless request builder for the flight routes API.
//!
//! # Design
//! `RoutesClient` holds only a `base_url` and carries no mutable state
//! between calls. Each backend operation has one `build_*` method that turns
//! typed arguments into an `HttpRequest`; nothing here validates airport
//! codes, ranges or list contents, that is the backend's job. Executing the
//! request and classifying failures is left to `FlightRoutesApi`.

use serde::Serialize;

use crate::http::{HttpMethod, HttpRequest};
use crate::types::{AlternativeHubsRequest, HubRemovalRequest, RouteAlternativesRequest, TopHubsQuery};

/// Builds `HttpRequest` values for every catalog operation without touching
/// the network.
#[derive(Debug, Clone)]
pub struct RoutesClient {
    base_url: String,
}

impl RoutesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /airports/search?q=<query>`
    pub fn build_search_airports(&self, query: &str) -> HttpRequest {
        self.get("/airports/search", vec![("q".to_string(), query.to_string())])
    }

    /// `GET /airports/<iata>`
    pub fn build_get_airport_info(&self, iata: &str) -> HttpRequest {
        self.get(&format!("/airports/{iata}"), Vec::new())
    }

    /// `POST /routes/alternatives`
    pub fn build_find_alternative_routes(
        &self,
        input: &RouteAlternativesRequest,
    ) -> Result<HttpRequest, serde_json::Error> {
        self.post("/routes/alternatives", input)
    }

    /// `GET /hubs/top?metric=<metric>&top_k=<n>`
    pub fn build_top_hubs(&self, query: &TopHubsQuery) -> HttpRequest {
        self.get("/hubs/top", query.to_pairs())
    }

    /// `POST /hubs/removal-analysis`
    pub fn build_analyze_hub_removal(
        &self,
        input: &HubRemovalRequest,
    ) -> Result<HttpRequest, serde_json::Error> {
        self.post("/hubs/removal-analysis", input)
    }

    /// `POST /hubs/alternatives`
    pub fn build_find_alternative_hubs(
        &self,
        input: &AlternativeHubsRequest,
    ) -> Result<HttpRequest, serde_json::Error> {
        self.post("/hubs/alternatives", input)
    }

    /// `GET /graph/stats`
    pub fn build_graph_stats(&self) -> HttpRequest {
        self.get("/graph/stats", Vec::new())
    }

    /// `GET /health`
    pub fn build_health_check(&self) -> HttpRequest {
        self.get("/health", Vec::new())
    }

    fn get(&self, path: &str, query: Vec<(String, String)>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.base_url),
            query,
            headers: Vec::new(),
            body: None,
        }
    }

    fn post<T: Serialize>(&self, path: &str, input: &T) -> Result<HttpRequest, serde_json::Error> {
        let body = serde_json::to_string(input)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{path}", self.base_url),
            query: Vec::new(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}
