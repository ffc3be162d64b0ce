//! Conversion from WMATA DTOs to domain types.
//!
//! Repairs the known irregularities of the prediction feed: sentinel
//! destinations ("Train", "No Passenger") arrive with null codes and a
//! placeholder line, and some records arrive with an empty `Min`.

use tracing::debug;

use crate::domain::{Line, Station, Train};
use crate::stations::{self, NO_PASSENGER, TRAIN};

use super::error::DecodeError;
use super::types::{PredictionsPayload, RawPrediction};

/// Placeholder for unknown car counts and missing minutes.
const UNKNOWN: &str = "-";

/// Convert a prediction payload into trains, in payload order.
///
/// Incomplete records are dropped. An unknown station or line code fails the
/// whole payload.
pub fn normalize(payload: &PredictionsPayload) -> Result<Vec<Train>, DecodeError> {
    let mut trains = Vec::with_capacity(payload.trains.len());

    for raw in &payload.trains {
        match convert_prediction(raw)? {
            Some(train) => trains.push(train),
            None => debug!(
                location = raw.location_code.as_deref().unwrap_or(UNKNOWN),
                destination = raw.destination_name.as_deref().unwrap_or(UNKNOWN),
                "skipping incomplete prediction"
            ),
        }
    }

    Ok(trains)
}

/// Convert a single prediction.
///
/// Returns `Ok(None)` for records that are incomplete: an explicitly empty
/// `Min`, a missing `Min` on a real destination, or a missing `Group`.
pub fn convert_prediction(raw: &RawPrediction) -> Result<Option<Train>, DecodeError> {
    let sentinel = raw.destination_name.as_deref().and_then(sentinel_destination);

    let minutes = match (raw.min.as_deref(), sentinel) {
        (Some(""), _) => return Ok(None),
        (Some(min), _) => min.to_string(),
        (None, Some(_)) => UNKNOWN.to_string(),
        (None, None) => return Ok(None),
    };

    let Some(group) = raw.group.clone() else {
        return Ok(None);
    };

    let location = station(raw.location_code.as_deref(), "LocationCode")?;

    let train = match sentinel {
        Some(destination) => Train {
            cars: UNKNOWN.to_string(),
            destination,
            group,
            line: Line::NoPassenger,
            location,
            minutes,
        },
        None => Train {
            cars: raw.car.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            destination: station(raw.destination_code.as_deref(), "DestinationCode")?,
            group,
            line: Line::parse(raw.line.as_deref().ok_or(DecodeError::MissingField("Line"))?)?,
            location,
            minutes,
        },
    };

    Ok(Some(train))
}

/// The sentinel station whose display name is `name`, if any.
fn sentinel_destination(name: &str) -> Option<&'static Station> {
    [&NO_PASSENGER, &TRAIN]
        .into_iter()
        .find(|sentinel| sentinel.name == name)
}

fn station(code: Option<&str>, field: &'static str) -> Result<&'static Station, DecodeError> {
    let code = code.ok_or(DecodeError::MissingField(field))?;
    stations::by_code(code).ok_or_else(|| DecodeError::UnknownStation(code.to_string()))
}
