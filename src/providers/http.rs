//! HTTP provider for the SimHub game data API

use std::time::Duration;
use tracing::{debug, info, trace};

use crate::provider::Provider;
use crate::types::TelemetryDocument;
use crate::{BridgeConfig, BridgeError, Result};

/// Polls SimHub's `/api/getgamedata` endpoint.
///
/// Holds one `reqwest::Client` for the lifetime of the process so the local
/// connection is reused between cycles.
pub struct HttpProvider {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpProvider {
    /// Create a provider for `url` with a per-request `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build().map_err(|e| {
            BridgeError::connection_failed_with_source("failed to build HTTP client", Box::new(e))
        })?;
        let url = url.into();

        info!(url = %url, timeout_ms = timeout.as_millis() as u64, "HTTP provider ready");

        Ok(Self { client, url, timeout })
    }

    /// Create a provider from the bridge configuration.
    pub fn from_config(config: &BridgeConfig) -> Result<Self> {
        Self::new(config.api_url(), config.fetch_timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_request_error(&self, err: reqwest::Error) -> BridgeError {
        if err.is_timeout() {
            BridgeError::Timeout { duration: self.timeout }
        } else {
            BridgeError::connection_failed_with_source(
                format!("GET {} failed", self.url),
                Box::new(err),
            )
        }
    }
}

#[async_trait::async_trait]
impl Provider for HttpProvider {
    async fn fetch(&mut self) -> Result<TelemetryDocument> {
        trace!(url = %self.url, "Requesting game data");

        let response =
            self.client.get(&self.url).send().await.map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            debug!(status = status.as_u16(), "Game data request rejected");
            return Err(BridgeError::Http { status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(|e| self.map_request_error(e))?;
        trace!(bytes = body.len(), "Game data received");

        TelemetryDocument::from_slice(&body)
    }
}
