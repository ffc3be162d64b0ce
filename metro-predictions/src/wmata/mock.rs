//! Mock transport for testing without API access.
//!
//! Serves canned responses keyed by station code and records every request
//! it receives, so tests can count network calls.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::error::{FetchError, TransportError};
use super::transport::{HttpRequest, HttpResponse, Transport};
use super::types::PredictionsPayload;

/// What the mock answers for one station code.
#[derive(Debug, Clone)]
pub enum MockReply {
    Response(HttpResponse),
    Failure(TransportError),
}

/// Mock transport that serves canned responses.
///
/// Codes with no configured reply get a 404.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    replies: Arc<HashMap<String, MockReply>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    /// Create a mock with no replies configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock by loading JSON files from a directory.
    ///
    /// Expects files named `{CODE}.json` (e.g., `A01.json`), each holding a
    /// prediction response body.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, FetchError> {
        let data_dir = data_dir.as_ref();
        let mut mock = Self::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            FetchError::Setup(format!("failed to read mock data directory: {e}"))
        })?;

        for entry in entries {
            let entry = entry
                .map_err(|e| FetchError::Setup(format!("failed to read directory entry: {e}")))?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            // "A01.json" -> "A01"
            let code = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| FetchError::Setup(format!("invalid filename: {path:?}")))?
                .to_string();

            let body = std::fs::read_to_string(&path)
                .map_err(|e| FetchError::Setup(format!("failed to read {path:?}: {e}")))?;

            mock = mock.with_body(&code, body);
        }

        if mock.replies.is_empty() {
            return Err(FetchError::Setup(format!(
                "no mock prediction files found in {data_dir:?}"
            )));
        }

        Ok(mock)
    }

    /// Answer `code` with a 200 and the given body.
    pub fn with_body(self, code: &str, body: impl Into<String>) -> Self {
        self.with_reply(
            code,
            MockReply::Response(HttpResponse {
                status: 200,
                body: body.into(),
            }),
        )
    }

    /// Answer `code` with a 200 carrying the serialized payload.
    pub fn with_payload(
        self,
        code: &str,
        payload: &PredictionsPayload,
    ) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(payload)?;
        Ok(self.with_body(code, body))
    }

    /// Answer `code` with an empty body and the given status.
    pub fn with_status(self, code: &str, status: u16) -> Self {
        self.with_reply(
            code,
            MockReply::Response(HttpResponse {
                status,
                body: String::new(),
            }),
        )
    }

    /// Fail requests for `code` without a response.
    pub fn with_failure(self, code: &str, failure: TransportError) -> Self {
        self.with_reply(code, MockReply::Failure(failure))
    }

    pub fn with_reply(mut self, code: &str, reply: MockReply) -> Self {
        Arc::make_mut(&mut self.replies).insert(code.to_string(), reply);
        self
    }

    /// Station codes with a configured reply.
    pub fn available_stations(&self) -> Vec<String> {
        let mut codes: Vec<_> = self.replies.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of requests received so far.
    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

impl Transport for MockTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().await.push(request.clone());

        let code = request.url.rsplit('/').next().unwrap_or_default();
        match self.replies.get(code) {
            Some(MockReply::Response(response)) => Ok(response.clone()),
            Some(MockReply::Failure(failure)) => Err(failure.clone()),
            None => Ok(HttpResponse {
                status: 404,
                body: format!("no mock data for station {code}"),
            }),
        }
    }
}
