//! Integration tests for the HTTP API.
//!
//! Requests are driven through the router in-process with
//! `tower::ServiceExt::oneshot`; no socket is bound.

use std::sync::Arc;

use airweather::http::router;
use airweather::service::WeatherService;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

// =============================================================================
// Test Helpers
// =============================================================================

struct TestApp {
    app: Router,
    service: Arc<WeatherService>,
    shutdown: CancellationToken,
}

impl TestApp {
    fn new() -> Self {
        let service = Arc::new(WeatherService::default());
        let shutdown = CancellationToken::new();
        Self {
            app: router(Arc::clone(&service), shutdown.clone()),
            service,
            shutdown,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send(Method::GET, uri, "").await
    }

    async fn post(&self, uri: &str, body: &str) -> (StatusCode, String) {
        self.send(Method::POST, uri, body).await
    }

    async fn get_json(&self, uri: &str) -> Value {
        let (status, body) = self.get(uri).await;
        assert_eq!(status, StatusCode::OK, "GET {} failed: {}", uri, body);
        serde_json::from_str(&body).unwrap()
    }
}

const WIND: &str = r#"{"first":10,"second":20,"third":30,"mean":22,"count":10}"#;

// =============================================================================
// Collect API
// =============================================================================

#[tokio::test]
async fn test_collect_ping() {
    let app = TestApp::new();
    let (status, body) = app.get("/collect/ping").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ready");
}

#[tokio::test]
async fn test_update_weather_then_query() {
    let app = TestApp::new();

    let (status, _) = app.post("/collect/weather/BOS/wind", WIND).await;
    assert_eq!(status, StatusCode::OK);

    let json = app.get_json("/query/weather/BOS/0").await;
    let snapshots = json.as_array().unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0]["wind"]["mean"], 22.0);
    assert_eq!(snapshots[0]["wind"]["count"], 10);
    assert!(snapshots[0]["temperature"].is_null());
}

#[tokio::test]
async fn test_update_weather_is_case_insensitive() {
    let app = TestApp::new();

    let (status, _) = app.post("/collect/weather/bos/CloudCover", WIND).await;
    assert_eq!(status, StatusCode::OK);

    let json = app.get_json("/query/weather/BOS/0").await;
    assert_eq!(json[0]["cloudCover"]["mean"], 22.0);
}

#[tokio::test]
async fn test_update_weather_errors() {
    let app = TestApp::new();

    let (status, _) = app.post("/collect/weather/BOS/visibility", WIND).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.post("/collect/weather/AAA/wind", WIND).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("AAA"));

    let (status, _) = app.post("/collect/weather/BOS/wind", "not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_out_of_range_reading_is_accepted_but_ignored() {
    let app = TestApp::new();

    let body = r#"{"first":1,"second":2,"third":3,"mean":900,"count":4}"#;
    let (status, _) = app.post("/collect/weather/JFK/pressure", body).await;
    assert_eq!(status, StatusCode::OK);

    assert!(app.service.get_airport("JFK").unwrap().snapshot.is_empty());
}

#[tokio::test]
async fn test_list_and_get_airports() {
    let app = TestApp::new();

    let codes = app.get_json("/collect/airports").await;
    assert_eq!(
        codes,
        serde_json::json!(["BOS", "EWR", "JFK", "LGA", "MMU"])
    );

    let bos = app.get_json("/collect/airport/BOS").await;
    assert_eq!(bos["iata"], "BOS");
    assert_eq!(bos["lat"], 42.364347);

    let (status, _) = app.get("/collect/airport/AAA").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_airport_from_path() {
    let app = TestApp::new();

    let (status, _) = app.post("/collect/airport/abc/10.5/-20.25", "").await;
    assert_eq!(status, StatusCode::OK);

    let record = app.service.get_airport("ABC").unwrap();
    assert_eq!(record.lat, 10.5);
    assert_eq!(record.lon, -20.25);

    let (status, _) = app.post("/collect/airport/ABD/north/20", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post("/collect/airport/ABD/91/20", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.service.get_airport("ABD").is_err());
}

#[tokio::test]
async fn test_add_airport_from_json() {
    let app = TestApp::new();

    let body = r#"{"iata":"sfo","icao":"ksfo","name":"San Francisco Intl","lat":37.618972,"lon":-122.374889,"dst":"A"}"#;
    let (status, _) = app.post("/collect/airport", body).await;
    assert_eq!(status, StatusCode::OK);

    let sfo = app.get_json("/collect/airport/SFO").await;
    assert_eq!(sfo["iata"], "SFO");
    assert_eq!(sfo["icao"], "KSFO");
    assert_eq!(sfo["name"], "San Francisco Intl");

    let (status, _) = app.post("/collect/airport", "{").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body = r#"{"iata":"TOOLONG","lat":0,"lon":0}"#;
    let (status, body) = app.post("/collect/airport", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("IATA"));
}

#[tokio::test]
async fn test_delete_airport() {
    let app = TestApp::new();

    let (status, _) = app.send(Method::DELETE, "/collect/airport/MMU", "").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get("/collect/airport/MMU").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting an unknown airport is not an error
    let (status, _) = app.send(Method::DELETE, "/collect/airport/MMU", "").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_exit_cancels_shutdown_token() {
    let app = TestApp::new();
    assert!(!app.shutdown.is_cancelled());

    let (status, body) = app.get("/collect/exit").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert!(app.shutdown.is_cancelled());
}

#[tokio::test]
async fn test_exit_is_a_get_route() {
    let app = TestApp::new();

    let (status, _) = app.post("/collect/exit", "").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(!app.shutdown.is_cancelled());
}

// =============================================================================
// Query API
// =============================================================================

#[tokio::test]
async fn test_query_ping_reports_usage() {
    let app = TestApp::new();
    app.post("/collect/weather/JFK/wind", WIND).await;
    app.get("/query/weather/JFK/200").await;

    let json = app.get_json("/query/ping").await;

    assert_eq!(json["datasize"], 1);
    assert_eq!(json["iata_freq"]["JFK"], 0.2);
    assert_eq!(json["iata_freq"]["BOS"], 0.0);
    let radius_freq = json["radius_freq"].as_array().unwrap();
    assert_eq!(radius_freq.len(), 1000);
    assert_eq!(radius_freq[0], 1);
}

#[tokio::test]
async fn test_query_weather_errors() {
    let app = TestApp::new();

    let (status, _) = app.get("/query/weather/AAA/10").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Unknown airport wins over a malformed radius
    let (status, _) = app.get("/query/weather/AAA/far").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/query/weather/JFK/far").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/query/weather/JFK/-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_query_weather_returns_origin_when_nothing_nearby() {
    let app = TestApp::new();

    let json = app.get_json("/query/weather/MMU/5").await;
    let snapshots = json.as_array().unwrap();

    assert_eq!(snapshots.len(), 1);
    assert!(snapshots[0]["wind"].is_null());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();
    let (status, _) = app.get("/collect/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
