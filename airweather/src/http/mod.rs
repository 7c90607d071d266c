//! HTTP surface for the weather service.
//!
//! Two route groups map 1:1 onto [`WeatherService`] operations:
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | GET | `/collect/ping` | liveness |
//! | POST | `/collect/weather/{iata}/{kind}` | post a sensor reading |
//! | GET | `/collect/airports` | list airport codes |
//! | GET | `/collect/airport/{iata}` | get one airport |
//! | POST | `/collect/airport/{iata}/{lat}/{lon}` | add an airport by position |
//! | POST | `/collect/airport` | add an airport from JSON |
//! | DELETE | `/collect/airport/{iata}` | delete an airport |
//! | GET | `/collect/exit` | graceful shutdown |
//! | GET | `/query/ping` | status summary |
//! | GET | `/query/weather/{iata}/{radius}` | weather near an airport |
//!
//! Handlers call the synchronous core directly; nothing in the core awaits.

mod error;
mod routes;
mod server;

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::service::WeatherService;

pub use error::ApiError;
pub use server::{serve, serve_listener, ServerError};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WeatherService>,
    /// Cancelled by `/collect/exit` to stop the server.
    pub shutdown: CancellationToken,
}

/// Build the application router.
pub fn router(service: Arc<WeatherService>, shutdown: CancellationToken) -> Router {
    let collect = Router::new()
        .route("/ping", get(routes::collect_ping))
        .route("/weather/{iata}/{kind}", post(routes::update_weather))
        .route("/airports", get(routes::list_airports))
        .route(
            "/airport/{iata}",
            get(routes::get_airport).delete(routes::delete_airport),
        )
        .route("/airport/{iata}/{lat}/{lon}", post(routes::add_airport_at))
        .route("/airport", post(routes::add_airport))
        .route("/exit", get(routes::exit));

    let query = Router::new()
        .route("/ping", get(routes::query_ping))
        .route("/weather/{iata}/{radius}", get(routes::query_weather));

    Router::new()
        .nest("/collect", collect)
        .nest("/query", query)
        .layer(middleware::from_fn(log_request))
        .with_state(AppState { service, shutdown })
}

/// Log every request line.
async fn log_request(request: Request, next: Next) -> Response {
    info!(method = %request.method(), path = %request.uri(), "Request");
    next.run(request).await
}
