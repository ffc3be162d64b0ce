//! Station code and station reference types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A syntactically valid WMATA station code.
///
/// Codes are one uppercase ASCII letter (the line segment) followed by two
/// ASCII digits. This type guarantees the format by construction; whether
/// the code names a known platform is answered by [`crate::stations`].
///
/// # Examples
///
/// ```
/// use metro_predictions::domain::StationCode;
///
/// let metro_center = StationCode::parse("A01").unwrap();
/// assert_eq!(metro_center.as_str(), "A01");
///
/// // Lowercase is rejected
/// assert!(StationCode::parse("a01").is_err());
///
/// // Wrong shape is rejected
/// assert!(StationCode::parse("AA1").is_err());
/// assert!(StationCode::parse("A011").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode([u8; 3]);

impl StationCode {
    /// Parse a station code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidStationCode {
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes[0].is_ascii_uppercase() {
            return Err(InvalidStationCode {
                reason: "must start with an uppercase ASCII letter A-Z",
            });
        }

        if !bytes[1..].iter().all(u8::is_ascii_digit) {
            return Err(InvalidStationCode {
                reason: "must end with two ASCII digits",
            });
        }

        Ok(StationCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII bytes are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A latitude/longitude pair in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Convert to a `geo` point (x = longitude, y = latitude).
    pub fn to_point(self) -> geo::Point<f64> {
        geo::Point::new(self.longitude, self.latitude)
    }
}

/// One platform in the station table, or one of the sentinel destinations.
///
/// Sentinel stations ("Train", "No Passenger") appear only as prediction
/// destinations and have no location.
#[derive(Debug, PartialEq, Serialize)]
pub struct Station {
    /// API code, e.g. `A01`. Sentinels use their API destination label.
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Platform location, `None` for sentinels.
    pub location: Option<Coordinate>,
}

impl Station {
    pub const fn new(code: &'static str, name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            code,
            name,
            location: Some(Coordinate::new(latitude, longitude)),
        }
    }

    pub const fn sentinel(code: &'static str, name: &'static str) -> Self {
        Self {
            code,
            name,
            location: None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.location.is_none()
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("A01").is_ok());
        assert!(StationCode::parse("B35").is_ok());
        assert!(StationCode::parse("N06").is_ok());
        assert!(StationCode::parse("Z99").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationCode::parse("a01").is_err());
        assert!(StationCode::parse("n06").is_err());
    }

    #[test]
    fn reject_wrong_shape() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("A").is_err());
        assert!(StationCode::parse("A1").is_err());
        assert!(StationCode::parse("A011").is_err());
        assert!(StationCode::parse("AB1").is_err());
        assert!(StationCode::parse("1A1").is_err());
        assert!(StationCode::parse("A-1").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = StationCode::parse("D03").unwrap();
        assert_eq!(format!("{}", code), "D03");
        assert_eq!(format!("{:?}", code), "StationCode(D03)");
    }

    #[test]
    fn ordering_follows_code_text() {
        let a = StationCode::parse("A15").unwrap();
        let b = StationCode::parse("B01").unwrap();
        assert!(a < b);
    }

    #[test]
    fn sentinel_has_no_location() {
        let s = Station::sentinel("No", "No Passenger");
        assert!(s.is_sentinel());
        let s = Station::new("A01", "Metro Center", 38.898303, -77.028099);
        assert!(!s.is_sentinel());
        assert_eq!(s.to_string(), "Metro Center");
    }

    #[test]
    fn coordinate_to_point_is_lon_lat() {
        let p = Coordinate::new(38.9, -77.0).to_point();
        assert_eq!(p.x(), -77.0);
        assert_eq!(p.y(), 38.9);
    }
}
