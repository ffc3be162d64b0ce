//! HTTP transport seam.
//!
//! The client only needs "send a GET with headers, get back a status and a
//! body or a failure". Timeouts and cancellation belong to the transport.

use std::error::Error as _;
use std::future::Future;
use std::time::Duration;

use super::error::{FetchError, TransportError};

/// Failure code for a request that timed out.
pub const TIMED_OUT: i64 = -1;

/// Failure code for a connection that could not be established.
pub const CANNOT_CONNECT: i64 = -2;

/// Failure code for any other transport failure.
pub const UNKNOWN_FAILURE: i64 = -3;

/// An outgoing GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl HttpRequest {
    /// Value of the first header with the given name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A received HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Something that can perform a GET request.
///
/// This abstraction allows the client to be tested with mock responses.
pub trait Transport {
    fn get(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Setup(e.to_string()))?;

        Ok(Self { http })
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.http.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        Ok(HttpResponse { status, body })
    }
}

fn transport_error(err: reqwest::Error) -> TransportError {
    TransportError {
        code: failure_code(&err),
        message: err.to_string(),
    }
}

/// The OS error code behind a failed request, if the failure carries one,
/// otherwise a coarse classification code.
fn failure_code(err: &reqwest::Error) -> i64 {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>()
            && let Some(code) = io.raw_os_error()
        {
            return i64::from(code);
        }
        source = cause.source();
    }

    if err.is_timeout() {
        TIMED_OUT
    } else if err.is_connect() {
        CANNOT_CONNECT
    } else {
        UNKNOWN_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup() {
        let request = HttpRequest {
            url: "http://localhost/A01".to_string(),
            headers: vec![("api_key", "secret".to_string())],
        };
        assert_eq!(request.header("api_key"), Some("secret"));
        assert_eq!(request.header("accept"), None);
    }

    #[test]
    fn transport_creation() {
        assert!(ReqwestTransport::new(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_failure() {
        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        // Port 9 (discard) on localhost is closed in test environments.
        let request = HttpRequest {
            url: "http://127.0.0.1:9/A01".to_string(),
            headers: vec![],
        };

        let err = transport.get(&request).await.unwrap_err();
        assert_ne!(err.code, 0);
        assert!(!err.message.is_empty());
    }
}
