//! pickup-router command line
//!
//! Usage: `pickup-router <origin-address> <input-file> [config.json]`

use std::path::Path;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use pickup_router::adapter::{CsvAdapter, TextAdapter};
use pickup_router::config::{build_optimizer, PlannerConfig};
use pickup_router::traits::InputAdapter;
use pickup_router::{Itinerary, PlannerError, Result};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pickup_router=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (origin, input, config) = match args.as_slice() {
        [origin, input] => (origin, input, None),
        [origin, input, config] => (origin, input, Some(config)),
        _ => {
            eprintln!("usage: pickup-router <origin-address> <input-file> [config.json]");
            return ExitCode::from(2);
        }
    };

    match run(origin, Path::new(input), config.map(Path::new)) {
        Ok(itinerary) => match serde_json::to_string_pretty(&itinerary) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!(error = %err, "failed to encode itinerary");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            error!(code = %err.code(), error = %err, "route planning failed");
            let body = serde_json::to_string_pretty(&err.body()).unwrap_or_else(|_| err.to_string());
            eprintln!("{}", body);
            ExitCode::FAILURE
        }
    }
}

fn run(origin: &str, input: &Path, config: Option<&Path>) -> Result<Itinerary> {
    let config = match config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };

    let bytes = std::fs::read(input).map_err(|err| {
        PlannerError::invalid_file_format(format!("failed to read {}", input.display()))
            .with_source(err)
    })?;

    let is_csv = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let items = if is_csv {
        CsvAdapter::default().parse(&bytes)?
    } else {
        TextAdapter.parse(&bytes)?
    };

    build_optimizer(&config)?.optimize(origin, items)
}
