//! Display boards.
//!
//! Turns normalized predictions into the ordered board a display shows:
//! trains sorted by group with separators between groups, and the two
//! platforms of a two-platform station merged into one board.

mod fetcher;
mod group;
mod session;

#[cfg(test)]
mod fetcher_tests;

pub use fetcher::{PredictionFetcher, TrainResponse};
pub use group::{group, separator_count, trains};
pub use session::{FetchConfig, PredictionSession};
