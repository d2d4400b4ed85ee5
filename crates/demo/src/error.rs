use std::{io, path::PathBuf};

use epicast_models::{cases::SeriesError, forecast, seir};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid case series: {0}")]
    Series(#[from] SeriesError),

    #[error("simulation failed: {0}")]
    Simulation(#[from] seir::Error),

    #[error("forecast failed: {0}")]
    Forecast(#[from] forecast::Error),

    #[error("timestamp out of range: {0}")]
    Time(#[from] jiff::Error),

    #[error("failed to write report: {0}")]
    Json(#[from] serde_json::Error),
}
