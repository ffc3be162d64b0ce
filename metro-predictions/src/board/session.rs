//! Per-caller fetch state.

use std::time::Duration;

use tokio::time::Instant;

use crate::domain::StationCode;

/// Default minimum interval between primary fetches.
const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(1);

/// Configuration for board fetches.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Separate groups, and the two platforms of a two-platform station.
    pub include_separators: bool,

    /// Primary fetches closer together than this are dropped.
    pub debounce: Duration,
}

impl FetchConfig {
    pub fn with_separators(mut self, include: bool) -> Self {
        self.include_separators = include;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            include_separators: true,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// State owned by one caller: its config, the time of its last primary
/// fetch, and the station it is watching.
///
/// Sessions are independent; watching several stations at once means
/// holding several sessions.
#[derive(Debug, Clone, Default)]
pub struct PredictionSession {
    config: FetchConfig,
    last_request: Option<Instant>,
    selected: Option<StationCode>,
}

impl PredictionSession {
    pub fn new(config: FetchConfig) -> Self {
        Self {
            config,
            last_request: None,
            selected: None,
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Watch `code` for subsequent [`refresh`](super::PredictionFetcher::refresh) calls.
    pub fn select(&mut self, code: StationCode) {
        self.selected = Some(code);
    }

    pub fn selected(&self) -> Option<StationCode> {
        self.selected
    }

    /// Claim the right to issue a primary fetch now.
    ///
    /// Returns false, leaving the timestamp untouched, when the previous
    /// primary fetch was no more than the debounce interval ago.
    pub(crate) fn try_begin_request(&mut self) -> bool {
        let now = Instant::now();
        if let Some(previous) = self.last_request
            && now.duration_since(previous) <= self.config.debounce
        {
            return false;
        }

        self.last_request = Some(now);
        true
    }
}
