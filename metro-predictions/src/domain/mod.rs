//! Domain types for metro arrival predictions.
//!
//! Station codes are validated at construction, lines are a closed set, and
//! predictions are immutable value objects. Code that receives these types
//! can trust their validity.

mod line;
mod station;
mod train;

pub use line::{Color, Line, UnknownLine};
pub use station::{Coordinate, InvalidStationCode, Station, StationCode};
pub use train::{Entry, SEPARATOR_GROUP, Train};
