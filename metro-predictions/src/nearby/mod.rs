//! Nearest-station queries.
//!
//! Ranks platforms by great-circle (haversine) distance from a point.
//! The two platforms of a two-platform station share a location and are
//! reported once, under the lower code.

mod distance;

use geo::{Distance, Haversine, Point};

use crate::domain::Station;
use crate::stations;

pub use distance::{Units, format_distance};

/// Number of stations returned when the caller asks for fewer than one.
pub const DEFAULT_COUNT: usize = 5;

/// Distance in meters from `point` to `station`, `None` for sentinels.
pub fn distance_to_station(point: Point<f64>, station: &Station) -> Option<f64> {
    let location = station.location?;
    Some(Haversine.distance(point, location.to_point()))
}

/// Formatted distance from `point` to `station`, `None` for sentinels.
pub fn distance_from_station(point: Point<f64>, station: &Station, units: Units) -> Option<String> {
    distance_to_station(point, station).map(|meters| format_distance(meters, units))
}

/// The `count` stations closest to `point`, nearest first.
///
/// A `count` of zero means [`DEFAULT_COUNT`]. Equal distances are ordered by
/// station code.
pub fn nearest_stations(point: Point<f64>, count: usize) -> Vec<&'static Station> {
    let count = if count < 1 { DEFAULT_COUNT } else { count };

    let mut ranked: Vec<(f64, &'static Station)> = stations::all()
        .iter()
        .filter_map(|station| distance_to_station(point, station).map(|d| (d, station)))
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.code.cmp(b.1.code)));
    ranked.dedup_by(|later, earlier| later.1.location == earlier.1.location);
    ranked.truncate(count);

    ranked.into_iter().map(|(_, station)| station).collect()
}
