//! Station reference data and lookup.
//!
//! Provides code → station and name → station lookup over the static
//! platform table, plus the pairing between the two platforms of
//! two-platform stations (Metro Center, Gallery Pl-Chinatown, Fort Totten,
//! L'Enfant Plaza).

mod table;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::{Station, StationCode};

pub use table::{NO_PASSENGER, STATIONS, TRAIN};

/// Code and name indexes over the station table.
pub struct StationDirectory {
    by_code: HashMap<&'static str, &'static Station>,
    by_name: HashMap<String, &'static Station>,
}

static DIRECTORY: LazyLock<StationDirectory> = LazyLock::new(StationDirectory::build);

impl StationDirectory {
    fn build() -> Self {
        let by_code = STATIONS.iter().map(|s| (s.code, s)).collect();

        // Later platforms of a shared name never replace the first one, so a
        // name resolves to the lower code of a two-platform station.
        let mut by_name = HashMap::new();
        for station in STATIONS.iter().chain([&TRAIN, &NO_PASSENGER]) {
            by_name
                .entry(station.name.to_lowercase())
                .or_insert(station);
        }

        Self { by_code, by_name }
    }

    /// The process-wide directory.
    pub fn get() -> &'static StationDirectory {
        &DIRECTORY
    }

    /// Look up a platform by API code.
    pub fn by_code(&self, code: &str) -> Option<&'static Station> {
        self.by_code.get(code).copied()
    }

    /// Look up a station by display name, ignoring case.
    ///
    /// Sentinel destinations ("Train", "No Passenger") are included.
    pub fn by_name(&self, name: &str) -> Option<&'static Station> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Number of platforms in the table.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Returns true if the table has no platforms.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

/// Look up a platform by API code.
pub fn by_code(code: &str) -> Option<&'static Station> {
    StationDirectory::get().by_code(code)
}

/// Look up a platform by validated station code.
pub fn lookup(code: &StationCode) -> Option<&'static Station> {
    by_code(code.as_str())
}

/// Look up a station by display name, ignoring case.
pub fn by_name(name: &str) -> Option<&'static Station> {
    StationDirectory::get().by_name(name)
}

/// All platforms, ordered by code. Sentinels are not included.
pub fn all() -> &'static [Station] {
    &STATIONS
}

/// The lower platform of a two-platform station, if `code` names its
/// upper platform. Lower platform codes have no pair.
pub fn paired_platform(code: &StationCode) -> Option<StationCode> {
    table::PLATFORM_PAIRS
        .iter()
        .find(|(upper, _)| *upper == code.as_str())
        .and_then(|(_, lower)| StationCode::parse(lower).ok())
}
