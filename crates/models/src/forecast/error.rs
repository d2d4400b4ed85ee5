use epicast_solvers::regression;
use jiff::civil::Date;

/// Errors returned by the trend fits.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window of {window_size} days needs more data than the {available} points available")]
    WindowTooLarge { window_size: usize, available: usize },

    #[error("window of {window_size} days cannot determine a fit needing {minimum} points")]
    WindowTooSmall { window_size: usize, minimum: usize },

    #[error("forecast horizon must be at least one day")]
    ZeroHorizon,

    #[error("forecast horizon of {horizon_days} days runs past the last representable date")]
    HorizonTooLong { horizon_days: usize },

    #[error("cumulative count on {date} is zero, so its logarithm is undefined")]
    NonPositiveCount { date: Date },

    #[error("regression failed: {0}")]
    Regression(#[from] regression::Error),

    #[error("projected date is out of range: {0}")]
    Date(#[from] jiff::Error),
}
