//! Uploading airports to a running server.

use tracing::debug;

use super::{AirportSink, LoaderError};
use crate::airport::AirportRecord;

/// Trait for the HTTP operation the loader needs.
///
/// Allows a mock client in tests.
pub trait HttpClient: Send + Sync {
    /// POST a JSON body, failing on any non-2xx status.
    fn post_json(&self, url: &str, json_body: &str) -> Result<(), LoaderError>;
}

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with a request timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, LoaderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .user_agent(concat!("airweather/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LoaderError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn post_json(&self, url: &str, json_body: &str) -> Result<(), LoaderError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(json_body.to_string())
            .send()
            .map_err(|e| LoaderError::Http(format!("POST request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(LoaderError::Rejected(format!(
                "HTTP {} from POST {}",
                response.status(),
                url
            )));
        }
        Ok(())
    }
}

/// Sends each airport to `{server}/collect/airport`.
pub struct HttpAirportSink<C = ReqwestClient> {
    client: C,
    endpoint: String,
}

impl HttpAirportSink<ReqwestClient> {
    /// Create a sink for `server_url` (e.g. `http://localhost:9090`).
    pub fn new(server_url: &str, timeout_secs: u64) -> Result<Self, LoaderError> {
        Ok(Self::with_client(
            ReqwestClient::with_timeout(timeout_secs)?,
            server_url,
        ))
    }
}

impl<C: HttpClient> HttpAirportSink<C> {
    pub fn with_client(client: C, server_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/collect/airport", server_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl<C: HttpClient> AirportSink for HttpAirportSink<C> {
    fn submit(&self, record: AirportRecord) -> Result<(), LoaderError> {
        let body = serde_json::to_string(&record)
            .map_err(|e| LoaderError::Http(format!("Failed to encode airport: {}", e)))?;
        debug!(iata = %record.iata, endpoint = %self.endpoint, "Uploading airport");
        self.client.post_json(&self.endpoint, &body)
    }
}
