//! Prediction client error types.

use crate::domain::{InvalidStationCode, StationCode, UnknownLine};

/// Errors from fetching and decoding predictions.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No HTTP response was received (DNS failure, refused connection,
    /// timeout, etc.). `code` is the transport's failure code, verbatim.
    #[error("transport error {code}: {message}")]
    Transport { code: i64, message: String },

    /// The API answered with a status other than 200.
    #[error("HTTP error {status}")]
    Http { status: u16 },

    /// A 200 response could not be turned into predictions.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The requested code is well-formed but names no known platform.
    #[error("unknown station: {0}")]
    UnknownStation(StationCode),

    /// The requested code is malformed.
    #[error(transparent)]
    InvalidStationCode(#[from] InvalidStationCode),

    /// Client construction failed (bad API key header, TLS setup, ...).
    #[error("client setup failed: {0}")]
    Setup(String),
}

impl FetchError {
    /// Numeric error code for transport and HTTP failures.
    ///
    /// HTTP failures report their status code; transport failures report
    /// the transport's own code. Other errors have no code.
    pub fn error_code(&self) -> Option<i64> {
        match self {
            FetchError::Transport { code, .. } => Some(*code),
            FetchError::Http { status } => Some(i64::from(*status)),
            _ => None,
        }
    }
}

/// Errors turning a response body into predictions.
///
/// Any of these aborts the whole response: the payload is contractually
/// limited to known codes, so an unknown one means the contract changed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// Body is not the expected JSON shape.
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// A station code in the payload is not in the station table.
    #[error("unknown station code: {0}")]
    UnknownStation(String),

    /// A line code in the payload is not a known line.
    #[error(transparent)]
    UnknownLine(#[from] UnknownLine),

    /// A code needed for lookup is null or absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// A failed request that produced no HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport error {code}: {message}")]
pub struct TransportError {
    pub code: i64,
    pub message: String,
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::Transport {
            code: err.code,
            message: err.message,
        }
    }
}
