use std::f64::consts::LN_2;

use epicast_solvers::regression::{Polynomial, RSquared};
use serde::{Deserialize, Serialize};

use crate::cases::CaseSeries;

use super::projection::{ProjectedPoint, Projection};

/// An exponential trend fitted to the recent window of a case series.
///
/// `parameters` is the line fitted to `ln(count)` against day index, so
/// `parameters.coefficients()` is `[ln(initial), growth_rate]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub parameters: Polynomial,
    /// Fit quality in log space over the window only.
    pub r_squared: RSquared,
    /// The observed points the line was fitted to.
    pub window: CaseSeries,
    pub projection: Projection,
}

impl FitResult {
    /// Daily exponential growth rate, the slope of the fitted log line.
    #[must_use]
    pub fn growth_rate(&self) -> f64 {
        self.parameters.coefficients().get(1).copied().unwrap_or(0.0)
    }

    /// Days for cumulative cases to double at the fitted rate.
    ///
    /// `None` when cases are flat or shrinking.
    #[must_use]
    pub fn doubling_time_days(&self) -> Option<f64> {
        let rate = self.growth_rate();
        (rate > 0.0).then(|| LN_2 / rate)
    }

    /// Natural log of each observed count in the window.
    #[must_use]
    pub fn log_counts(&self) -> Vec<f64> {
        self.window
            .iter()
            .map(|point| (point.count as f64).ln())
            .collect()
    }

    /// Projected points over the observed window.
    #[must_use]
    pub fn in_window(&self) -> &[ProjectedPoint] {
        let n = self.window.len().min(self.projection.len());
        &self.projection.points()[..n]
    }

    /// Projected points past the last observation.
    #[must_use]
    pub fn extrapolated(&self) -> &[ProjectedPoint] {
        self.projection.beyond(self.window.len())
    }
}
