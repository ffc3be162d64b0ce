//! WMATA rail prediction client.
//!
//! This module provides an HTTP client for the WMATA `GetPrediction`
//! endpoint, which returns upcoming arrivals for one platform.
//!
//! Key characteristics of the feed:
//! - One request per platform code; two-platform stations need two requests
//! - Out-of-service trains arrive as "No Passenger" with null codes
//! - `Min` is free text ("3", "ARR", "BRD") and is occasionally empty

mod client;
mod convert;
mod error;
mod mock;
mod transport;
mod types;

pub use client::{API_KEY_HEADER, ClientConfig, PredictionClient};
pub use convert::{convert_prediction, normalize};
pub use error::{DecodeError, FetchError, TransportError};
pub use mock::{MockReply, MockTransport};
pub use transport::{
    CANNOT_CONNECT, HttpRequest, HttpResponse, ReqwestTransport, TIMED_OUT, Transport,
    UNKNOWN_FAILURE,
};
pub use types::{PredictionsPayload, RawPrediction};
