//! Arrival predictions and board entries.

use std::fmt;

use serde::Serialize;

use super::{Line, Station};

/// Group key reported for separators.
pub const SEPARATOR_GROUP: &str = "-1";

/// A single arrival prediction.
///
/// Field values are passed through from the API after normalization, so
/// `cars` may be `"-"` and `minutes` may be symbolic (`"BRD"`, `"ARR"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Train {
    /// Number of cars, or `"-"` when unknown.
    pub cars: String,
    pub destination: &'static Station,
    /// Upstream grouping key, roughly one per track.
    pub group: String,
    pub line: Line,
    /// Station the prediction was made for.
    pub location: &'static Station,
    /// Minutes until arrival. Never empty.
    pub minutes: String,
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cars: {}   destination: {}   group: {}   line: {}   location: {}   min: {}",
            self.cars, self.destination.name, self.group, self.line, self.location.name, self.minutes
        )
    }
}

/// One row of a prediction board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    Prediction(Train),
    /// Display spacing between groups or between the platforms of a
    /// two-platform station.
    Separator,
}

impl Entry {
    /// Group key of this entry; separators report [`SEPARATOR_GROUP`].
    pub fn group(&self) -> &str {
        match self {
            Entry::Prediction(train) => &train.group,
            Entry::Separator => SEPARATOR_GROUP,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Entry::Separator)
    }

    pub fn train(&self) -> Option<&Train> {
        match self {
            Entry::Prediction(train) => Some(train),
            Entry::Separator => None,
        }
    }
}

impl From<Train> for Entry {
    fn from(train: Train) -> Self {
        Entry::Prediction(train)
    }
}
