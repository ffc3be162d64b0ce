//! Unit tests for board fetching, two-platform merge, and debounce.

use std::time::Duration;

use super::*;
use crate::domain::{Entry, Line, StationCode};
use crate::stations::NO_PASSENGER;
use crate::wmata::{
    ClientConfig, FetchError, MockTransport, PredictionClient, PredictionsPayload,
    RawPrediction, TransportError,
};

fn code(s: &str) -> StationCode {
    StationCode::parse(s).unwrap()
}

fn fetcher(transport: MockTransport) -> PredictionFetcher<MockTransport> {
    let config = ClientConfig::new("test-key").with_base_url("http://mock/GetPrediction");
    PredictionFetcher::new(PredictionClient::with_transport(config, transport).unwrap())
}

fn mock_dir() -> MockTransport {
    MockTransport::from_dir("data/mock_predictions").unwrap()
}

fn prediction(location: &str, dest: &str, line: &str, group: &str, min: &str) -> RawPrediction {
    RawPrediction {
        car: Some("6".to_string()),
        destination_code: Some(dest.to_string()),
        destination_name: crate::stations::by_code(dest).map(|s| s.name.to_string()),
        group: Some(group.to_string()),
        line: Some(line.to_string()),
        location_code: Some(location.to_string()),
        min: Some(min.to_string()),
        ..Default::default()
    }
}

fn payload(trains: Vec<RawPrediction>) -> PredictionsPayload {
    PredictionsPayload { trains }
}

/// Compact board rendering: "<line>:<destination>:<min>" or "|".
fn shape(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| match e {
            Entry::Prediction(t) => format!("{}:{}:{}", t.line, t.destination.code, t.minutes),
            Entry::Separator => "|".to_string(),
        })
        .collect()
}

async fn single_board_len(code_str: &str, separators: bool) -> usize {
    let config = FetchConfig::default().with_separators(separators);
    let trains = fetcher(mock_dir())
        .client()
        .fetch(&code(code_str))
        .await
        .unwrap();
    group(trains, config.include_separators).len()
}

#[tokio::test]
async fn two_platform_station_is_merged() {
    let fetcher = fetcher(mock_dir());

    let board = fetcher
        .resolve(&code("A01"), &FetchConfig::default())
        .await
        .unwrap();

    assert_eq!(
        shape(&board),
        vec![
            "RD:B11:BRD",
            "RD:B11:9",
            "|",
            "RD:A15:3",
            "NO:No:-",
            "|",
            "OR:D13:4",
            "BL:G05:7",
            "|",
            "SV:N06:ARR",
            "NO:Train:12",
        ]
    );

    let requests = fetcher.client().transport().requests().await;
    assert_eq!(requests.len(), 2);
    assert!(requests[0].url.ends_with("/A01"));
    assert!(requests[1].url.ends_with("/C01"));
}

#[tokio::test]
async fn merged_length_is_sum_plus_platform_separator() {
    let fetcher = fetcher(mock_dir());

    for separators in [true, false] {
        let config = FetchConfig::default().with_separators(separators);
        let board = fetcher.resolve(&code("A01"), &config).await.unwrap();

        let expected = single_board_len("A01", separators).await
            + single_board_len("C01", separators).await
            + usize::from(separators);
        assert_eq!(board.len(), expected);
    }
}

#[tokio::test]
async fn merged_without_separators_has_none() {
    let config = FetchConfig::default().with_separators(false);
    let board = fetcher(mock_dir())
        .resolve(&code("A01"), &config)
        .await
        .unwrap();

    assert_eq!(board.len(), 8);
    assert_eq!(separator_count(&board), 0);
}

#[tokio::test]
async fn lower_platform_code_fetches_only_itself() {
    let fetcher = fetcher(mock_dir());

    let board = fetcher
        .resolve(&code("C01"), &FetchConfig::default())
        .await
        .unwrap();

    assert_eq!(shape(&board)[0], "OR:D13:4");
    let requests = fetcher.client().transport().requests().await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.ends_with("/C01"));
}

#[tokio::test]
async fn single_platform_station_skips_second_fetch() {
    let fetcher = fetcher(mock_dir());

    let board = fetcher
        .resolve(&code("A03"), &FetchConfig::default())
        .await
        .unwrap();

    assert_eq!(shape(&board), vec!["RD:B11:1", "|", "RD:A15:5"]);
    assert_eq!(fetcher.client().transport().request_count().await, 1);
}

#[tokio::test]
async fn platform_separator_present_when_a_platform_is_empty() {
    let transport = MockTransport::new()
        .with_payload("B06", &payload(vec![]))
        .unwrap()
        .with_payload("E06", &payload(vec![prediction("E06", "E10", "GR", "1", "2")]))
        .unwrap();

    let board = fetcher(transport)
        .resolve(&code("B06"), &FetchConfig::default())
        .await
        .unwrap();

    assert_eq!(shape(&board), vec!["|", "GR:E10:2"]);
}

#[tokio::test]
async fn primary_failure_short_circuits() {
    let fetcher = fetcher(mock_dir().with_status("A01", 503));

    let err = fetcher
        .resolve(&code("A01"), &FetchConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Http { status: 503 }));
    assert_eq!(fetcher.client().transport().request_count().await, 1);
}

#[tokio::test]
async fn secondary_failure_discards_primary() {
    let failure = TransportError {
        code: 61,
        message: "connection refused".to_string(),
    };
    let fetcher = fetcher(mock_dir().with_failure("C01", failure));

    let err = fetcher
        .resolve(&code("A01"), &FetchConfig::default())
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), Some(61));
    assert_eq!(fetcher.client().transport().request_count().await, 2);
}

#[tokio::test]
async fn secondary_decode_failure_fails_board() {
    let transport = mock_dir()
        .with_payload("C01", &payload(vec![prediction("C01", "Z99", "OR", "1", "4")]))
        .unwrap();
    let fetcher = fetcher(transport);

    let err = fetcher
        .resolve(&code("A01"), &FetchConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn no_passenger_trains_survive_merge() {
    let board = fetcher(mock_dir())
        .resolve(&code("A01"), &FetchConfig::default())
        .await
        .unwrap();

    let ghost = board
        .iter()
        .filter_map(Entry::train)
        .find(|t| t.destination == &NO_PASSENGER)
        .unwrap();
    assert_eq!(ghost.line, Line::NoPassenger);
    assert_eq!(ghost.cars, "-");
}

#[tokio::test(start_paused = true)]
async fn debounce_drops_second_primary_fetch() {
    let fetcher = fetcher(mock_dir());
    let mut session = PredictionSession::default();

    let first = fetcher.fetch_predictions(&mut session, &code("A03")).await;
    assert!(first.is_some_and(|r| r.is_ok()));

    tokio::time::advance(Duration::from_millis(400)).await;
    let second = fetcher.fetch_predictions(&mut session, &code("A03")).await;
    assert!(second.is_none());

    assert_eq!(fetcher.client().transport().request_count().await, 1);
}

#[tokio::test(start_paused = true)]
async fn fetch_allowed_after_window() {
    let fetcher = fetcher(mock_dir());
    let mut session = PredictionSession::default();

    assert!(fetcher.fetch_predictions(&mut session, &code("A03")).await.is_some());
    tokio::time::advance(Duration::from_millis(1001)).await;
    assert!(fetcher.fetch_predictions(&mut session, &code("A03")).await.is_some());

    assert_eq!(fetcher.client().transport().request_count().await, 2);
}

#[tokio::test(start_paused = true)]
async fn paired_fetch_bypasses_debounce() {
    let fetcher = fetcher(mock_dir());
    let mut session = PredictionSession::default();

    let board = fetcher
        .fetch_predictions(&mut session, &code("A01"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(board.len(), 11);
    assert_eq!(fetcher.client().transport().request_count().await, 2);
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_still_starts_window() {
    let fetcher = fetcher(mock_dir().with_status("A03", 500));
    let mut session = PredictionSession::default();

    let first = fetcher.fetch_predictions(&mut session, &code("A03")).await;
    assert!(first.is_some_and(|r| r.is_err()));
    assert!(fetcher.fetch_predictions(&mut session, &code("A03")).await.is_none());
}

#[tokio::test(start_paused = true)]
async fn sessions_do_not_share_debounce() {
    let fetcher = fetcher(mock_dir());
    let mut watching_dupont = PredictionSession::default();
    let mut watching_metro_center = PredictionSession::default();

    assert!(fetcher
        .fetch_predictions(&mut watching_dupont, &code("A03"))
        .await
        .is_some());
    assert!(fetcher
        .fetch_predictions(&mut watching_metro_center, &code("A01"))
        .await
        .is_some());
}

#[tokio::test(start_paused = true)]
async fn session_config_controls_separators() {
    let fetcher = fetcher(mock_dir());
    let mut session = PredictionSession::new(FetchConfig::default().with_separators(false));

    let board = fetcher
        .fetch_predictions(&mut session, &code("A03"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(shape(&board), vec!["RD:B11:1", "RD:A15:5"]);
}

#[tokio::test(start_paused = true)]
async fn refresh_uses_selected_station() {
    let fetcher = fetcher(mock_dir());
    let mut session = PredictionSession::default();

    assert!(fetcher.refresh(&mut session).await.is_none());
    assert_eq!(fetcher.client().transport().request_count().await, 0);

    session.select(code("A03"));
    let board = fetcher.refresh(&mut session).await.unwrap().unwrap();
    assert_eq!(board.len(), 3);
}
