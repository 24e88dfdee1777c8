use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub iata: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

/// Fixed undirected route network served by the mock backend.
#[derive(Debug)]
pub struct Network {
    pub airports: Vec<Airport>,
    pub routes: Vec<(String, String)>,
}

pub type Db = Arc<Network>;

pub const COST_TYPES: [&str; 3] = ["time", "distance", "cost"];
pub const HUB_METRICS: [&str; 3] = ["degree", "betweenness", "pagerank"];

fn airport(iata: &str, name: &str, city: &str, country: &str) -> Airport {
    Airport {
        iata: iata.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
    }
}

impl Network {
    pub fn sample() -> Self {
        let airports = vec![
            airport("LHR", "Heathrow", "London", "United Kingdom"),
            airport("JFK", "John F. Kennedy International", "New York", "United States"),
            airport("CDG", "Charles de Gaulle", "Paris", "France"),
            airport("FRA", "Frankfurt am Main", "Frankfurt", "Germany"),
            airport("AMS", "Schiphol", "Amsterdam", "Netherlands"),
            airport("DXB", "Dubai International", "Dubai", "United Arab Emirates"),
            airport("SIN", "Changi", "Singapore", "Singapore"),
            airport("ORD", "O'Hare International", "Chicago", "United States"),
        ];
        let routes = [
            ("LHR", "JFK"),
            ("LHR", "CDG"),
            ("LHR", "FRA"),
            ("LHR", "AMS"),
            ("LHR", "DXB"),
            ("LHR", "ORD"),
            ("JFK", "CDG"),
            ("JFK", "FRA"),
            ("JFK", "AMS"),
            ("JFK", "ORD"),
            ("CDG", "FRA"),
            ("CDG", "AMS"),
            ("CDG", "DXB"),
            ("FRA", "DXB"),
            ("FRA", "SIN"),
            ("FRA", "ORD"),
            ("AMS", "DXB"),
            ("DXB", "SIN"),
        ]
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
        Self { airports, routes }
    }

    pub fn find(&self, iata: &str) -> Option<&Airport> {
        self.airports.iter().find(|a| a.iata.eq_ignore_ascii_case(iata))
    }

    fn connected(&self, a: &str, b: &str, removed: &[String]) -> bool {
        if removed.iter().any(|r| r == a || r == b) {
            return false;
        }
        self.routes
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub fn degree(&self, iata: &str) -> usize {
        self.routes
            .iter()
            .filter(|(a, b)| a == iata || b == iata)
            .count()
    }

    /// Direct route first, then one-stop routes in airport order.
    pub fn paths(&self, source: &str, destination: &str, removed: &[String]) -> Vec<Vec<String>> {
        let mut paths = Vec::new();
        if self.connected(source, destination, removed) {
            paths.push(vec![source.to_string(), destination.to_string()]);
        }
        for hub in &self.airports {
            let via = hub.iata.as_str();
            if via == source || via == destination {
                continue;
            }
            if self.connected(source, via, removed) && self.connected(via, destination, removed) {
                paths.push(vec![source.to_string(), via.to_string(), destination.to_string()]);
            }
        }
        paths
    }

    /// Airports ordered by number of connections, ties broken by code.
    pub fn ranked_hubs(&self) -> Vec<(&Airport, usize)> {
        let mut ranked: Vec<_> = self
            .airports
            .iter()
            .map(|a| (a, self.degree(&a.iata)))
            .collect();
        ranked.sort_by(|(a, da), (b, db)| db.cmp(da).then_with(|| a.iata.cmp(&b.iata)));
        ranked
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
}

#[derive(Deserialize)]
pub struct TopHubsParams {
    #[serde(default = "default_metric")]
    pub metric: String,
    #[serde(default = "default_top_hubs")]
    pub top_k: usize,
}

fn default_metric() -> String {
    "degree".to_string()
}

fn default_top_hubs() -> usize {
    20
}

/// Distinguishes an absent `max_stops` (`None`) from an explicit
/// `null` (`Some(None)`).
fn present<'de, D>(deserializer: D) -> Result<Option<Option<u32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u32>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
pub struct RouteAlternatives {
    pub source: String,
    pub destination: String,
    #[serde(default = "default_cost_type")]
    pub cost_type: String,
    #[serde(default = "default_k_paths")]
    pub k_paths: usize,
    #[serde(default, deserialize_with = "present")]
    pub max_stops: Option<Option<u32>>,
}

fn default_cost_type() -> String {
    "time".to_string()
}

fn default_k_paths() -> usize {
    5
}

#[derive(Deserialize)]
pub struct HubRemoval {
    pub source: String,
    pub destination: String,
    pub hubs_to_remove: Vec<String>,
}

#[derive(Deserialize)]
pub struct AlternativeHubs {
    pub source: String,
    pub destination: String,
    pub primary_hub: String,
    #[serde(default = "default_alternative_hubs")]
    pub top_k: usize,
}

fn default_alternative_hubs() -> usize {
    5
}

type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn reject(status: StatusCode, detail: impl Into<String>) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": detail.into() })))
}

pub fn app() -> Router {
    let db: Db = Arc::new(Network::sample());
    Router::new()
        .route("/airports/search", get(search_airports))
        .route("/airports/{iata}", get(get_airport))
        .route("/routes/alternatives", post(route_alternatives))
        .route("/hubs/top", get(top_hubs))
        .route("/hubs/removal-analysis", post(hub_removal))
        .route("/hubs/alternatives", post(alternative_hubs))
        .route("/graph/stats", get(graph_stats))
        .route("/health", get(health))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn require<'a>(db: &'a Network, iata: &str) -> Result<&'a Airport, (StatusCode, Json<Value>)> {
    db.find(iata)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, format!("Airport {iata} not found")))
}

fn path_json(db: &Network, path: &[String]) -> Value {
    let hubs: Vec<&Airport> = path.iter().filter_map(|code| db.find(code)).collect();
    json!({
        "path": path,
        "stops": path.len().saturating_sub(2),
        "airports": hubs,
    })
}

async fn search_airports(State(db): State<Db>, Query(params): Query<SearchParams>) -> Json<Vec<Airport>> {
    let needle = params.q.to_lowercase();
    let matches = db
        .airports
        .iter()
        .filter(|a| {
            a.iata.to_lowercase().contains(&needle)
                || a.city.to_lowercase().contains(&needle)
                || a.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    Json(matches)
}

async fn get_airport(
    State(db): State<Db>,
    Path(iata): Path<String>,
) -> Result<Json<Airport>, (StatusCode, Json<Value>)> {
    require(&db, &iata).cloned().map(Json)
}

async fn route_alternatives(State(db): State<Db>, Json(input): Json<RouteAlternatives>) -> Reply {
    if matches!(input.max_stops, Some(None)) {
        return Err(reject(
            StatusCode::UNPROCESSABLE_ENTITY,
            "max_stops must be an integer when provided",
        ));
    }
    if !COST_TYPES.contains(&input.cost_type.as_str()) {
        return Err(reject(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("unknown cost_type {}", input.cost_type),
        ));
    }
    let source = require(&db, &input.source)?.iata.clone();
    let destination = require(&db, &input.destination)?.iata.clone();
    let max_stops = input.max_stops.flatten();

    let routes: Vec<Value> = db
        .paths(&source, &destination, &[])
        .into_iter()
        .filter(|p| max_stops.map_or(true, |limit| p.len().saturating_sub(2) <= limit as usize))
        .take(input.k_paths)
        .map(|p| path_json(&db, &p))
        .collect();

    Ok(Json(json!({
        "source": source,
        "destination": destination,
        "cost_type": input.cost_type,
        "k_paths": input.k_paths,
        "max_stops": max_stops,
        "routes": routes,
    })))
}

async fn top_hubs(State(db): State<Db>, Query(params): Query<TopHubsParams>) -> Reply {
    if !HUB_METRICS.contains(&params.metric.as_str()) {
        return Err(reject(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("unknown metric {}", params.metric),
        ));
    }
    let hubs: Vec<Value> = db
        .ranked_hubs()
        .into_iter()
        .take(params.top_k)
        .map(|(a, degree)| json!({ "airport": a, "score": degree }))
        .collect();
    Ok(Json(json!({ "metric": params.metric, "hubs": hubs })))
}

async fn hub_removal(State(db): State<Db>, Json(input): Json<HubRemoval>) -> Reply {
    let source = require(&db, &input.source)?.iata.clone();
    let destination = require(&db, &input.destination)?.iata.clone();
    let removed: Vec<String> = input.hubs_to_remove.iter().map(|h| h.to_uppercase()).collect();

    let before = db.paths(&source, &destination, &[]);
    let after = db.paths(&source, &destination, &removed);
    Ok(Json(json!({
        "source": source,
        "destination": destination,
        "hubs_removed": removed,
        "routes_before": before.len(),
        "routes_after": after.len(),
        "still_connected": !after.is_empty(),
    })))
}

async fn alternative_hubs(State(db): State<Db>, Json(input): Json<AlternativeHubs>) -> Reply {
    let source = require(&db, &input.source)?.iata.clone();
    let destination = require(&db, &input.destination)?.iata.clone();
    let primary = require(&db, &input.primary_hub)?.iata.clone();

    let alternatives: Vec<Value> = db
        .paths(&source, &destination, std::slice::from_ref(&primary))
        .into_iter()
        .filter(|p| p.len() == 3)
        .take(input.top_k)
        .map(|p| path_json(&db, &p))
        .collect();
    Ok(Json(json!({
        "source": source,
        "destination": destination,
        "primary_hub": primary,
        "alternatives": alternatives,
    })))
}

async fn graph_stats(State(db): State<Db>) -> Json<Value> {
    Json(json!({
        "num_airports": db.airports.len(),
        "num_routes": db.routes.len(),
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
