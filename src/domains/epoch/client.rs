//! HTTP client for the remote epoch server.
//!
//! One `EpochClient` is built at startup and shared by every tool
//! invocation; the underlying `reqwest::Client` pools connections and is
//! safe for concurrent use. Each public method issues exactly one request
//! against a fixed route and maps the exchange into an [`HttpOutcome`],
//! so errors never leave this module as `Err`.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::EpochServerConfig;
use crate::core::error::Result;

use super::outcome::HttpOutcome;

/// Bound on each request; expiry surfaces as a transport failure.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared client for the epoch server's HTTP API.
#[derive(Debug, Clone)]
pub struct EpochClient {
    http: reqwest::Client,
    base_url: String,
}

impl EpochClient {
    /// Create a client for the configured base URL.
    ///
    /// The timeout is applied once here and covers every call made through
    /// this client.
    pub fn new(config: &EpochServerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// The base URL all routes are joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/health`
    pub async fn health(&self) -> HttpOutcome {
        let url = format!("{}/health", self.base_url);
        debug!("GET {}", url);
        self.outcome(self.http.get(url)).await
    }

    /// `POST {base}/epochs/{epoch_id}/start`
    pub async fn start_epoch(&self, epoch_id: &str) -> HttpOutcome {
        let url = format!("{}/epochs/{}/start", self.base_url, epoch_id);
        debug!("POST {}", url);
        self.outcome(self.http.post(url)).await
    }

    /// `POST {base}/epochs/{epoch_id}/distribute`
    pub async fn distribute_subsidies(&self, epoch_id: &str) -> HttpOutcome {
        let url = format!("{}/epochs/{}/distribute", self.base_url, epoch_id);
        debug!("POST {}", url);
        self.outcome(self.http.post(url)).await
    }

    /// Map one request/response exchange into an outcome.
    ///
    /// The shape is identical for every route: 2xx with a JSON body is a
    /// success, any other status is an HTTP error carrying the decoded (or
    /// raw) body, and anything that never produced a readable response is
    /// a transport failure.
    async fn outcome(&self, request: reqwest::RequestBuilder) -> HttpOutcome {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let description = describe_transport_error(&err);
                warn!("Epoch server request failed: {}", description);
                return HttpOutcome::TransportFailure(description);
            }
        };

        let status = response.status();
        if status.is_success() {
            match response.json::<Value>().await {
                Ok(body) => HttpOutcome::Success(body),
                Err(err) => {
                    warn!("Failed to decode epoch server response: {}", err);
                    HttpOutcome::TransportFailure(err.to_string())
                }
            }
        } else {
            match response.text().await {
                Ok(raw) => {
                    warn!("Epoch server returned HTTP {}", status);
                    HttpOutcome::HttpError {
                        status: status.as_u16(),
                        detail: HttpOutcome::error_detail(&raw),
                    }
                }
                Err(err) => {
                    warn!("Failed to read epoch server error body: {}", err);
                    HttpOutcome::TransportFailure(err.to_string())
                }
            }
        }
    }
}

/// Short description for errors that never produced an HTTP response.
fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "Request timed out".to_string()
    } else if err.is_connect() {
        format!("Connection failed: {}", err)
    } else {
        err.to_string()
    }
}
