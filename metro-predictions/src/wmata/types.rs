//! WMATA prediction response DTOs.
//!
//! These types map directly to the `GetPrediction` JSON response. Every
//! field is optional because the API sends `null` for fields it cannot fill
//! (no destination code for out-of-service trains, no minutes for trains
//! that are not moving). `None` and `Some("")` mean different things to the
//! normalizer, so neither is defaulted away here.

use serde::{Deserialize, Serialize};

/// Response body of `GetPrediction/{StationCodes}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredictionsPayload {
    /// Predictions in API order.
    #[serde(default)]
    pub trains: Vec<RawPrediction>,
}

/// One upstream prediction (the API's `AIMPredictionTrainInfo`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawPrediction {
    /// Number of cars, or "-" when unknown.
    pub car: Option<String>,

    /// Abbreviated destination name.
    pub destination: Option<String>,

    /// Destination station code. Null for "Train" and "No Passenger".
    pub destination_code: Option<String>,

    /// Full destination name, or one of the sentinel labels.
    pub destination_name: Option<String>,

    /// Track grouping key ("1" or "2").
    pub group: Option<String>,

    /// Two-letter line code.
    pub line: Option<String>,

    /// Station code the prediction applies to.
    pub location_code: Option<String>,

    /// Name of the station the prediction applies to.
    pub location_name: Option<String>,

    /// Minutes to arrival: a number, "ARR", "BRD", "---" or empty.
    pub min: Option<String>,
}
