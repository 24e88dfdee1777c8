use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Airport};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- airports ---

#[tokio::test]
async fn search_matches_city_code_and_name() {
    let resp = app().oneshot(get_request("/airports/search?q=lon")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let airports: Vec<Airport> = body_json(resp).await;
    assert_eq!(airports.len(), 1);
    assert_eq!(airports[0].iata, "LHR");

    let resp = app().oneshot(get_request("/airports/search?q=International")).await.unwrap();
    let airports: Vec<Airport> = body_json(resp).await;
    assert!(airports.len() >= 3);
}

#[tokio::test]
async fn search_without_query_is_rejected() {
    let resp = app().oneshot(get_request("/airports/search")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn airport_info_found_and_missing() {
    let resp = app().oneshot(get_request("/airports/CDG")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let airport: Airport = body_json(resp).await;
    assert_eq!(airport.city, "Paris");

    let resp = app().oneshot(get_request("/airports/XXX")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let detail: Value = body_json(resp).await;
    assert_eq!(detail["detail"], "Airport XXX not found");
}

// --- routes ---

#[tokio::test]
async fn route_alternatives_without_max_stops() {
    let resp = app()
        .oneshot(json_request(
            "/routes/alternatives",
            r#"{"source":"LHR","destination":"JFK","cost_type":"time","k_paths":5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    let routes = body["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 5);
    assert_eq!(routes[0]["path"], serde_json::json!(["LHR", "JFK"]));
    assert!(body["max_stops"].is_null());
}

#[tokio::test]
async fn route_alternatives_respects_max_stops() {
    let resp = app()
        .oneshot(json_request(
            "/routes/alternatives",
            r#"{"source":"LHR","destination":"JFK","cost_type":"time","k_paths":5,"max_stops":0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    let routes = body["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0]["stops"], 0);
}

#[tokio::test]
async fn route_alternatives_rejects_explicit_null() {
    let resp = app()
        .oneshot(json_request(
            "/routes/alternatives",
            r#"{"source":"LHR","destination":"JFK","cost_type":"time","k_paths":5,"max_stops":null}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn route_alternatives_unknown_cost_type() {
    let resp = app()
        .oneshot(json_request(
            "/routes/alternatives",
            r#"{"source":"LHR","destination":"JFK","cost_type":"vibes","k_paths":5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn route_alternatives_unknown_airport() {
    let resp = app()
        .oneshot(json_request(
            "/routes/alternatives",
            r#"{"source":"LHR","destination":"ZZZ"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn route_alternatives_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("/routes/alternatives", r#"{"source":"LHR"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- hubs ---

#[tokio::test]
async fn top_hubs_defaults_and_truncation() {
    let resp = app().oneshot(get_request("/hubs/top")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["metric"], "degree");
    assert_eq!(body["hubs"].as_array().unwrap().len(), 8);

    let resp = app()
        .oneshot(get_request("/hubs/top?metric=pagerank&top_k=2"))
        .await
        .unwrap();
    let body: Value = body_json(resp).await;
    assert_eq!(body["hubs"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn top_hubs_unknown_metric() {
    let resp = app().oneshot(get_request("/hubs/top?metric=vibes")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn hub_removal_reports_connectivity() {
    let resp = app()
        .oneshot(json_request(
            "/hubs/removal-analysis",
            r#"{"source":"LHR","destination":"SIN","hubs_to_remove":["FRA","DXB"]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["routes_before"], 2);
    assert_eq!(body["routes_after"], 0);
    assert_eq!(body["still_connected"], false);
}

#[tokio::test]
async fn alternative_hubs_exclude_primary() {
    let resp = app()
        .oneshot(json_request(
            "/hubs/alternatives",
            r#"{"source":"LHR","destination":"SIN","primary_hub":"FRA","top_k":5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    let alternatives = body["alternatives"].as_array().unwrap();
    assert_eq!(alternatives.len(), 1);
    assert_eq!(alternatives[0]["path"], serde_json::json!(["LHR", "DXB", "SIN"]));
}

// --- graph & health ---

#[tokio::test]
async fn graph_stats_counts() {
    let resp = app().oneshot(get_request("/graph/stats")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["num_airports"], 8);
    assert_eq!(body["num_routes"], 18);
}

#[tokio::test]
async fn health_is_ok() {
    let resp = app().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], br#"{"status":"ok"}"#);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app().oneshot(get_request("/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
