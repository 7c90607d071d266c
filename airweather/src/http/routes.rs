//! Request handlers.

use std::collections::BTreeSet;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info};

use super::{ApiError, AppState};
use crate::airport::AirportRecord;
use crate::atmosphere::{AtmosphericSnapshot, DataPoint, SensorKind, UpdateOutcome};
use crate::frequency::StatusSummary;

pub(super) async fn collect_ping() -> &'static str {
    "ready"
}

pub(super) async fn update_weather(
    State(state): State<AppState>,
    Path((iata, kind)): Path<(String, String)>,
    body: String,
) -> Result<StatusCode, ApiError> {
    let kind: SensorKind = kind.parse()?;
    // Unknown airports are reported before a malformed body
    state.service.get_airport(&iata)?;
    let point: DataPoint = serde_json::from_str(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid data point: {}", e)))?;

    if let UpdateOutcome::Rejected { reason } = state.service.post_reading(&iata, kind, point)? {
        debug!(iata = %iata, reason = %reason, "Reading ignored");
    }
    Ok(StatusCode::OK)
}

pub(super) async fn list_airports(State(state): State<AppState>) -> Json<BTreeSet<String>> {
    Json(state.service.list_airport_codes())
}

pub(super) async fn get_airport(
    State(state): State<AppState>,
    Path(iata): Path<String>,
) -> Result<Json<AirportRecord>, ApiError> {
    Ok(Json(state.service.get_airport(&iata)?))
}

pub(super) async fn add_airport_at(
    State(state): State<AppState>,
    Path((iata, lat, lon)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    let lat = parse_number("latitude", &lat)?;
    let lon = parse_number("longitude", &lon)?;
    state
        .service
        .add_or_update_airport(AirportRecord::new(iata.to_uppercase(), lat, lon))?;
    Ok(StatusCode::OK)
}

pub(super) async fn add_airport(
    State(state): State<AppState>,
    body: String,
) -> Result<StatusCode, ApiError> {
    let mut record: AirportRecord = serde_json::from_str(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid airport: {}", e)))?;
    record.iata = record.iata.to_uppercase();
    record.icao = record.icao.map(|icao| icao.to_uppercase());

    state.service.add_or_update_airport(record)?;
    Ok(StatusCode::OK)
}

pub(super) async fn delete_airport(
    State(state): State<AppState>,
    Path(iata): Path<String>,
) -> StatusCode {
    state.service.delete_airport(&iata);
    StatusCode::OK
}

pub(super) async fn exit(State(state): State<AppState>) -> StatusCode {
    info!("Shutdown requested");
    state.shutdown.cancel();
    StatusCode::NO_CONTENT
}

pub(super) async fn query_ping(State(state): State<AppState>) -> Json<StatusSummary> {
    Json(state.service.status_summary())
}

pub(super) async fn query_weather(
    State(state): State<AppState>,
    Path((iata, radius)): Path<(String, String)>,
) -> Result<Json<Vec<AtmosphericSnapshot>>, ApiError> {
    // Unknown airports win over a malformed radius
    state.service.get_airport(&iata)?;
    let radius = parse_number("radius", &radius)?;
    Ok(Json(state.service.query_weather(&iata, radius)?))
}

fn parse_number(name: &str, value: &str) -> Result<f64, ApiError> {
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid {}: '{}'", name, value)))
}
