use serde::{Deserialize, Serialize};

use crate::cases::CaseSeries;

use super::{Error, FitResult, Projection, fit_exponential, fit_polynomial};

/// Days of history each fit uses.
pub const DEFAULT_WINDOW_SIZE: usize = 20;

/// Days projected past the last observation.
pub const DEFAULT_HORIZON_DAYS: usize = 7;

/// Degree of the polynomial trend.
pub const DEFAULT_DEGREE: usize = 3;

/// Window, horizon, and polynomial degree shared by both fits.
///
/// The defaults are the dashboard's: a 20-day window extrapolated 7 days
/// with a cubic polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFields")]
pub struct ForecastConfig {
    window_size: usize,
    horizon_days: usize,
    degree: usize,
}

/// Reasons a [`ForecastConfig`] is rejected.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("window of {window_size} days is too short for degree {degree}")]
    WindowTooSmall { window_size: usize, degree: usize },

    #[error("forecast horizon must be at least one day")]
    ZeroHorizon,
}

impl ForecastConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `horizon_days` is zero or the window has fewer
    /// than `degree + 1` days (and at least two, for the exponential fit).
    pub fn new(
        window_size: usize,
        horizon_days: usize,
        degree: usize,
    ) -> Result<Self, ConfigError> {
        if horizon_days == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        if window_size < 2 || window_size <= degree {
            return Err(ConfigError::WindowTooSmall {
                window_size,
                degree,
            });
        }
        Ok(Self {
            window_size,
            horizon_days,
            degree,
        })
    }

    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    #[must_use]
    pub fn horizon_days(&self) -> usize {
        self.horizon_days
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Runs [`fit_exponential`] with this configuration.
    ///
    /// # Errors
    ///
    /// See [`fit_exponential`].
    pub fn exponential(&self, series: &CaseSeries) -> Result<FitResult, Error> {
        fit_exponential(series, self.window_size, self.horizon_days)
    }

    /// Runs [`fit_polynomial`] with this configuration.
    ///
    /// # Errors
    ///
    /// See [`fit_polynomial`].
    pub fn polynomial(&self, series: &CaseSeries) -> Result<Projection, Error> {
        fit_polynomial(series, self.window_size, self.horizon_days, self.degree)
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(DEFAULT_WINDOW_SIZE, DEFAULT_HORIZON_DAYS, DEFAULT_DEGREE).unwrap()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFields {
    #[serde(default = "default_window_size")]
    window_size: usize,
    #[serde(default = "default_horizon_days")]
    horizon_days: usize,
    #[serde(default = "default_degree")]
    degree: usize,
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

fn default_horizon_days() -> usize {
    DEFAULT_HORIZON_DAYS
}

fn default_degree() -> usize {
    DEFAULT_DEGREE
}

impl TryFrom<ConfigFields> for ForecastConfig {
    type Error = ConfigError;

    fn try_from(fields: ConfigFields) -> Result<Self, Self::Error> {
        Self::new(fields.window_size, fields.horizon_days, fields.degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard() {
        let config = ForecastConfig::default();

        assert_eq!(config.window_size(), 20);
        assert_eq!(config.horizon_days(), 7);
        assert_eq!(config.degree(), 3);
    }

    #[test]
    fn validation() {
        assert_eq!(ForecastConfig::new(20, 0, 3), Err(ConfigError::ZeroHorizon));
        assert_eq!(
            ForecastConfig::new(3, 7, 3),
            Err(ConfigError::WindowTooSmall {
                window_size: 3,
                degree: 3
            })
        );
        assert!(ForecastConfig::new(1, 7, 0).is_err());
        assert!(ForecastConfig::new(4, 1, 3).is_ok());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: ForecastConfig = toml::from_str("horizon_days = 14").unwrap();

        assert_eq!(config.horizon_days(), 14);
        assert_eq!(config.window_size(), DEFAULT_WINDOW_SIZE);

        assert!(toml::from_str::<ForecastConfig>("horizon_days = 0").is_err());
        assert!(toml::from_str::<ForecastConfig>("window = 10").is_err());
    }
}
