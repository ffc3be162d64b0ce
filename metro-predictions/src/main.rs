use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand};
use geo::Point;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use metro_predictions::board::{FetchConfig, PredictionFetcher, PredictionSession};
use metro_predictions::domain::{Entry, StationCode};
use metro_predictions::nearby::{self, Units};
use metro_predictions::stations;
use metro_predictions::wmata::{ClientConfig, MockTransport, PredictionClient};

/// WMATA rail predictions and nearest stations.
///
/// Set WMATA_API_KEY for live predictions, or WMATA_MOCK_DIR to serve
/// predictions from <CODE>.json files. RUST_LOG sets the log filter.
#[derive(Parser)]
#[command(name = "metro-predictions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the arrival board for a station.
    Predictions {
        #[arg(value_parser = StationCode::parse)]
        code: StationCode,
        #[arg(long)]
        no_separators: bool,
        #[arg(long)]
        json: bool,
    },
    /// List the stations closest to a point.
    Nearest {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Number of stations, defaults to 5.
        count: Option<usize>,
        #[arg(long)]
        imperial: bool,
    },
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Predictions {
            code,
            no_separators,
            json,
        } => predictions(code, !no_separators, json).await,
        Command::Nearest {
            lat,
            lon,
            count,
            imperial,
        } => {
            nearest(lat, lon, count, Units::from_metric(!imperial));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn predictions(code: StationCode, separators: bool, json: bool) -> CliResult {
    let config = FetchConfig::default().with_separators(separators);

    let mut session = PredictionSession::new(config);
    session.select(code);

    let api_key = std::env::var("WMATA_API_KEY").unwrap_or_else(|_| {
        warn!("WMATA_API_KEY not set. API calls will fail.");
        String::new()
    });
    let client_config = ClientConfig::new(api_key);

    let response = match std::env::var("WMATA_MOCK_DIR") {
        Ok(dir) => {
            info!(dir = %dir, "serving predictions from mock data");
            let transport = MockTransport::from_dir(&dir)?;
            let client = PredictionClient::with_transport(client_config, transport)?;
            PredictionFetcher::new(client).refresh(&mut session).await
        }
        Err(_) => {
            let client = PredictionClient::new(client_config)?;
            PredictionFetcher::new(client).refresh(&mut session).await
        }
    };

    let board = response.ok_or("fetch was debounced")??;

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        print_board(&code, &board);
    }

    Ok(())
}

fn print_board(code: &StationCode, board: &[Entry]) {
    let name = stations::lookup(code).map_or("unknown station", |s| s.name);
    println!("{name} ({code}) at {}", Local::now().format("%H:%M:%S"));
    println!("{:<3} {:<4} {:<26} {:>4}", "LN", "CAR", "DESTINATION", "MIN");

    for entry in board {
        match entry {
            Entry::Prediction(train) => println!(
                "{:<3} {:<4} {:<26} {:>4}",
                train.line.code(),
                train.cars,
                train.destination.name,
                train.minutes
            ),
            Entry::Separator => println!(),
        }
    }
}

fn nearest(lat: f64, lon: f64, count: Option<usize>, units: Units) {
    let point = Point::new(lon, lat);
    let count = count.unwrap_or(nearby::DEFAULT_COUNT);

    for station in nearby::nearest_stations(point, count) {
        let distance = nearby::distance_from_station(point, station, units).unwrap_or_default();
        println!("{distance:>8}  {} ({})", station.name, station.code);
    }
}
