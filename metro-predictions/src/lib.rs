//! WMATA rail prediction fetcher.
//!
//! Fetches arrival predictions for a station, repairs the feed's known
//! irregularities, merges the two platforms of two-platform stations, and
//! orders the result into a display board. Also answers "which stations are
//! nearest to me?".

pub mod board;
pub mod domain;
pub mod nearby;
pub mod stations;
pub mod wmata;
