//! Debounced board fetching with two-platform merge.

use tracing::{debug, warn};

use crate::domain::{Entry, StationCode};
use crate::stations;
use crate::wmata::{FetchError, PredictionClient, ReqwestTransport, Transport};

use super::group::group;
use super::session::{FetchConfig, PredictionSession};

/// A complete board or the reason there is none.
pub type TrainResponse = Result<Vec<Entry>, FetchError>;

/// Builds display boards from the prediction API.
///
/// Holds no per-caller state; debounce and selection live in the
/// [`PredictionSession`] passed to each call.
#[derive(Debug, Clone)]
pub struct PredictionFetcher<T = ReqwestTransport> {
    client: PredictionClient<T>,
}

impl<T: Transport> PredictionFetcher<T> {
    pub fn new(client: PredictionClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &PredictionClient<T> {
        &self.client
    }

    /// Fetch the board for `code`, subject to the session's debounce.
    ///
    /// Returns `None` without touching the network when the session's
    /// previous primary fetch was too recent. Callers must not expect one
    /// response per call.
    pub async fn fetch_predictions(
        &self,
        session: &mut PredictionSession,
        code: &StationCode,
    ) -> Option<TrainResponse> {
        if !session.try_begin_request() {
            debug!(station = %code, "dropping fetch inside debounce window");
            return None;
        }

        Some(self.resolve(code, session.config()).await)
    }

    /// Fetch the board for the session's selected station.
    ///
    /// Returns `None` when nothing is selected or the fetch was debounced.
    pub async fn refresh(&self, session: &mut PredictionSession) -> Option<TrainResponse> {
        let code = session.selected()?;
        self.fetch_predictions(session, &code).await
    }

    /// Fetch and group the full board for a possibly two-platform station.
    ///
    /// For the upper platform code of a two-platform station the lower
    /// platform is fetched after the first one succeeds, and its block follows the first, set off by a
    /// separator when separators are enabled. Either fetch failing fails the
    /// whole board. No debounce applies here.
    pub async fn resolve(&self, code: &StationCode, config: &FetchConfig) -> TrainResponse {
        let mut entries = group(self.client.fetch(code).await?, config.include_separators);

        let Some(other) = stations::paired_platform(code) else {
            return Ok(entries);
        };

        let secondary = match self.client.fetch(&other).await {
            Ok(trains) => group(trains, config.include_separators),
            Err(e) => {
                warn!(
                    station = %code,
                    platform = %other,
                    error = %e,
                    "second platform failed, discarding board"
                );
                return Err(e);
            }
        };

        if config.include_separators {
            entries.push(Entry::Separator);
        }
        entries.extend(secondary);

        Ok(entries)
    }
}
