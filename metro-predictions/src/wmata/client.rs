//! WMATA prediction HTTP client.
//!
//! Issues one `GetPrediction` request per station code and turns the
//! response into normalized [`Train`]s.

use std::time::Duration;

use reqwest::header::HeaderValue;
use tracing::{debug, info};

use crate::domain::{StationCode, Train};
use crate::stations;

use super::convert::normalize;
use super::error::{DecodeError, FetchError};
use super::transport::{HttpRequest, ReqwestTransport, Transport};
use super::types::PredictionsPayload;

/// Default base URL for the prediction API.
const DEFAULT_BASE_URL: &str = "https://api.wmata.com/StationPrediction.svc/json/GetPrediction";

/// Header carrying the developer API key.
pub const API_KEY_HEADER: &str = "api_key";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the prediction client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// WMATA developer API key
    pub api_key: String,
    /// Base URL; the station code is appended as the last path segment
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// WMATA prediction API client.
///
/// Generic over the transport so tests can serve canned responses.
#[derive(Debug, Clone)]
pub struct PredictionClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    api_key: String,
}

impl PredictionClient<ReqwestTransport> {
    /// Create a client that talks to the API over HTTP.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> PredictionClient<T> {
    /// Create a client on top of an existing transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, FetchError> {
        HeaderValue::from_str(&config.api_key)
            .map_err(|_| FetchError::Setup("invalid API key format".to_string()))?;

        Ok(Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request for a station's predictions.
    pub fn request_for(&self, code: &StationCode) -> HttpRequest {
        HttpRequest {
            url: format!("{}/{}", self.base_url, code),
            headers: vec![(API_KEY_HEADER, self.api_key.clone())],
        }
    }

    /// Fetch and normalize the predictions for one platform.
    ///
    /// Predictions come back in API order; grouping is the caller's job.
    /// A non-200 status becomes [`FetchError::Http`], a request with no
    /// response becomes [`FetchError::Transport`]. Nothing is retried.
    pub async fn fetch(&self, code: &StationCode) -> Result<Vec<Train>, FetchError> {
        let station = stations::lookup(code).ok_or(FetchError::UnknownStation(*code))?;
        info!(station = %code, name = station.name, "fetching predictions");

        let request = self.request_for(code);
        let response = self.transport.get(&request).await?;

        if response.status != 200 {
            debug!(station = %code, status = response.status, "prediction request failed");
            return Err(FetchError::Http {
                status: response.status,
            });
        }

        let payload: PredictionsPayload =
            serde_json::from_str(&response.body).map_err(|e| DecodeError::Json {
                message: e.to_string(),
                body: Some(response.body.chars().take(500).collect()),
            })?;

        let trains = normalize(&payload)?;
        debug!(
            station = %code,
            received = payload.trains.len(),
            kept = trains.len(),
            "normalized predictions"
        );

        Ok(trains)
    }
}
