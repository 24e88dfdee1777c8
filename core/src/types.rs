//! Request payloads and query parameters for the flight routes API.
//!
//! # Design
//! Required fields are plain values and are always serialized, including
//! falsy ones such as `0` or an empty list. Optional fields are `Option<T>`
//! and are skipped entirely when `None`: the backend treats an explicit
//! `null` differently from an absent key, so omission is decided per field
//! at the type level rather than by editing a map after the fact.
//!
//! Defaults live in the constructors. A `with_*` call overrides exactly one
//! field, so a default applies only when the caller never supplies a value.

use serde::{Deserialize, Serialize};

/// Optimisation criterion used when none is given.
pub const DEFAULT_COST_TYPE: &str = "time";
/// Number of alternative routes requested when none is given.
pub const DEFAULT_K_PATHS: u32 = 5;
/// Ranking metric for top hubs when none is given.
pub const DEFAULT_HUB_METRIC: &str = "degree";
/// Result size for the top hubs ranking.
pub const DEFAULT_TOP_HUBS: u32 = 20;
/// Result size for alternative hub suggestions.
pub const DEFAULT_ALTERNATIVE_HUBS: u32 = 5;

/// Body of `POST /routes/alternatives`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAlternativesRequest {
    pub source: String,
    pub destination: String,
    pub cost_type: String,
    pub k_paths: u32,
    /// Upper bound on intermediate stops. `None` means unlimited and is
    /// omitted from the wire payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stops: Option<u32>,
}

impl RouteAlternativesRequest {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            cost_type: DEFAULT_COST_TYPE.to_string(),
            k_paths: DEFAULT_K_PATHS,
            max_stops: None,
        }
    }

    #[must_use]
    pub fn with_cost_type(mut self, cost_type: impl Into<String>) -> Self {
        self.cost_type = cost_type.into();
        self
    }

    #[must_use]
    pub fn with_k_paths(mut self, k_paths: u32) -> Self {
        self.k_paths = k_paths;
        self
    }

    /// Set or clear the stop limit. Passing `None` restores "unlimited".
    #[must_use]
    pub fn with_max_stops(mut self, max_stops: Option<u32>) -> Self {
        self.max_stops = max_stops;
        self
    }
}

/// Body of `POST /hubs/removal-analysis`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubRemovalRequest {
    pub source: String,
    pub destination: String,
    pub hubs_to_remove: Vec<String>,
}

impl HubRemovalRequest {
    pub fn new<I, S>(source: impl Into<String>, destination: impl Into<String>, hubs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: source.into(),
            destination: destination.into(),
            hubs_to_remove: hubs.into_iter().map(Into::into).collect(),
        }
    }
}

/// Body of `POST /hubs/alternatives`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeHubsRequest {
    pub source: String,
    pub destination: String,
    pub primary_hub: String,
    pub top_k: u32,
}

impl AlternativeHubsRequest {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        primary_hub: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            primary_hub: primary_hub.into(),
            top_k: DEFAULT_ALTERNATIVE_HUBS,
        }
    }

    #[must_use]
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }
}

/// Query parameters of `GET /hubs/top`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopHubsQuery {
    pub metric: String,
    pub top_k: u32,
}

impl Default for TopHubsQuery {
    fn default() -> Self {
        Self {
            metric: DEFAULT_HUB_METRIC.to_string(),
            top_k: DEFAULT_TOP_HUBS,
        }
    }
}

impl TopHubsQuery {
    #[must_use]
    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = metric.into();
        self
    }

    #[must_use]
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("metric".to_string(), self.metric.clone()),
            ("top_k".to_string(), self.top_k.to_string()),
        ]
    }
}
