//! Runs one SEIR scenario and both trend fits, printing a JSON report.
//!
//! ```text
//! epicast [CONFIG.toml]
//! ```
//!
//! Without a path the bundled scenario is used. Set `RUST_LOG` to control
//! logging, for example `RUST_LOG=epicast_models=debug`.

mod config;
mod error;
mod report;

use std::{env, path::PathBuf};

use epicast_models::seir::simulate_scenario;
use jiff::Zoned;
use tracing::info;

use config::Config;
use error::Error;
use report::Report;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(path.as_deref())?;

    let run = simulate_scenario(&config.scenario)?;
    info!(states = run.len(), "simulation finished");

    let cases = config.cases()?;
    let exponential = config.forecast.exponential(&cases)?;
    let polynomial = config.forecast.polynomial(&cases)?;
    info!(r_squared = %exponential.r_squared, "forecasts finished");

    let start = config.start.unwrap_or_else(|| Zoned::now().datetime());
    let report = Report::new(&run, start, &config.hospital, exponential, polynomial)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
