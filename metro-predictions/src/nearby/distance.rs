//! Human-readable distances.

use std::fmt;

const METERS_PER_FOOT: f64 = 0.3048;
const METERS_PER_KILOMETER: f64 = 1000.0;
const FEET_PER_MILE: f64 = 5280.0;

/// Below this many feet, imperial distances are shown in feet.
const FEET_THRESHOLD: f64 = 528.0;

/// Unit system for displayed distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn from_metric(is_metric: bool) -> Self {
        if is_metric {
            Units::Metric
        } else {
            Units::Imperial
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Metric => f.write_str("metric"),
            Units::Imperial => f.write_str("imperial"),
        }
    }
}

/// Format a distance in meters for display.
///
/// Short distances are whole meters or feet; from 1 km or a tenth of a mile
/// (528 ft) up they switch to kilometers or miles with one decimal.
///
/// # Examples
///
/// ```
/// use metro_predictions::nearby::{Units, format_distance};
///
/// assert_eq!(format_distance(999.0, Units::Metric), "999 m");
/// assert_eq!(format_distance(1000.0, Units::Metric), "1.0 km");
/// assert_eq!(format_distance(1609.344, Units::Imperial), "1.0 mi");
/// ```
pub fn format_distance(meters: f64, units: Units) -> String {
    match units {
        Units::Metric if meters < METERS_PER_KILOMETER => format!("{meters:.0} m"),
        Units::Metric => format!("{:.1} km", meters / METERS_PER_KILOMETER),
        Units::Imperial => {
            let feet = meters / METERS_PER_FOOT;
            if feet < FEET_THRESHOLD {
                format!("{feet:.0} ft")
            } else {
                format!("{:.1} mi", feet / FEET_PER_MILE)
            }
        }
    }
}
