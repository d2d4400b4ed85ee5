//! Short-horizon trend fits over recent cumulative cases.
//!
//! Both fits take the last `window_size` points of a [`CaseSeries`], index
//! them by day `0..window_size`, fit a polynomial by least squares, and
//! evaluate it over days `0..window_size + horizon_days`.
//!
//! - [`fit_exponential`] fits a line to `ln(count)`, so the projection grows
//!   exponentially, and reports R² in log space.
//! - [`fit_polynomial`] fits the raw counts directly, a cubic by default, and
//!   reports no fit statistic.
//!
//! # Dates
//!
//! Projected point `i` carries the window's `i`-th date while inside the
//! window, and `last_date + (i - window_size + 1)` days after it. With the
//! dashboard defaults of a 20-day window and a 7-day horizon the projection
//! has 27 points, the last dated a week after the final observation.

mod config;
mod error;
mod projection;
mod result;

pub use config::{
    ConfigError, DEFAULT_DEGREE, DEFAULT_HORIZON_DAYS, DEFAULT_WINDOW_SIZE, ForecastConfig,
};
pub use error::Error;
pub use projection::{ProjectedPoint, Projection};
pub use result::FitResult;

use epicast_solvers::regression;
use jiff::Span;
use tracing::debug;

use crate::cases::{CasePoint, CaseSeries};

/// Fits an exponential trend to the last `window_size` days of `series`.
///
/// # Errors
///
/// - [`Error::ZeroHorizon`] if `horizon_days` is zero
/// - [`Error::WindowTooSmall`] if `window_size` is below two
/// - [`Error::WindowTooLarge`] if `series` is shorter than `window_size`
/// - [`Error::HorizonTooLong`] if the last projected date is not representable
/// - [`Error::NonPositiveCount`] if a count in the window is zero
pub fn fit_exponential(
    series: &CaseSeries,
    window_size: usize,
    horizon_days: usize,
) -> Result<FitResult, Error> {
    let window = window_of(series, window_size, horizon_days, 1)?;

    if let Some(zero) = window.iter().find(|point| point.count == 0) {
        return Err(Error::NonPositiveCount { date: zero.date });
    }

    let days = day_indices(window_size);
    let log_counts: Vec<f64> = window.iter().map(|p| (p.count as f64).ln()).collect();
    let line = regression::polyfit(&days, &log_counts, 1)?;

    let fitted: Vec<f64> = days.iter().map(|&day| line.eval(day)).collect();
    let r_squared = regression::r_squared(&log_counts, &fitted)?;

    let projection = project(window.points(), horizon_days, |day| line.eval(day).exp())?;

    debug!(
        window_size,
        horizon_days,
        growth_rate = line.coefficients()[1],
        %r_squared,
        "fitted exponential trend"
    );

    Ok(FitResult {
        parameters: line,
        r_squared,
        window,
        projection,
    })
}

/// Fits a polynomial trend of the given degree to the last `window_size`
/// days of `series`.
///
/// Counts are fitted as they are, so zero counts are fine.
///
/// # Errors
///
/// - [`Error::ZeroHorizon`] if `horizon_days` is zero
/// - [`Error::WindowTooSmall`] if `window_size` is not above `degree`
/// - [`Error::WindowTooLarge`] if `series` is shorter than `window_size`
/// - [`Error::HorizonTooLong`] if the last projected date is not representable
pub fn fit_polynomial(
    series: &CaseSeries,
    window_size: usize,
    horizon_days: usize,
    degree: usize,
) -> Result<Projection, Error> {
    let window = window_of(series, window_size, horizon_days, degree)?;

    let days = day_indices(window_size);
    let counts: Vec<f64> = window.iter().map(|p| p.count as f64).collect();
    let curve = regression::polyfit(&days, &counts, degree)?;

    debug!(
        window_size,
        horizon_days,
        degree,
        coefficients = ?curve.coefficients(),
        "fitted polynomial trend"
    );

    project(window.points(), horizon_days, |day| curve.eval(day))
}

/// Validates the fit inputs and returns the trailing window.
fn window_of(
    series: &CaseSeries,
    window_size: usize,
    horizon_days: usize,
    degree: usize,
) -> Result<CaseSeries, Error> {
    if horizon_days == 0 {
        return Err(Error::ZeroHorizon);
    }

    let minimum = (degree + 1).max(2);
    if window_size < minimum {
        return Err(Error::WindowTooSmall {
            window_size,
            minimum,
        });
    }

    let window = series.suffix(window_size).ok_or(Error::WindowTooLarge {
        window_size,
        available: series.len(),
    })?;

    // Every projected date must exist before anything is allocated.
    let last_date = window
        .last()
        .zip(i64::try_from(horizon_days).ok())
        .and_then(|(last, days)| {
            let span = Span::new().try_days(days).ok()?;
            last.date.checked_add(span).ok()
        });
    if last_date.is_none() {
        return Err(Error::HorizonTooLong { horizon_days });
    }

    Ok(window)
}

fn day_indices(n: usize) -> Vec<f64> {
    (0..n).map(|day| day as f64).collect()
}

/// Evaluates `trend` over the window and `horizon_days` past it.
fn project(
    window: &[CasePoint],
    horizon_days: usize,
    trend: impl Fn(f64) -> f64,
) -> Result<Projection, Error> {
    let mut points = Vec::with_capacity(window.len() + horizon_days);

    for (day, observed) in window.iter().enumerate() {
        points.push(ProjectedPoint {
            date: observed.date,
            day,
            count: trend(day as f64),
        });
    }

    if let Some(last) = window.last() {
        let mut date = last.date;
        for day in window.len()..window.len() + horizon_days {
            date = date.tomorrow()?;
            points.push(ProjectedPoint {
                date,
                day,
                count: trend(day as f64),
            });
        }
    }

    Ok(Projection::new(points))
}
