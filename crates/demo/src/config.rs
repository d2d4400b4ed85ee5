use std::{fs, path::Path};

use epicast_models::{
    cases::{CasePoint, CaseSeries},
    forecast::ForecastConfig,
    hospital::HospitalCapacity,
    seir::Scenario,
};
use jiff::civil::DateTime;
use serde::Deserialize;
use tracing::info;

use crate::error::Error;

/// The scenario bundled with the binary, used when no path is given.
const BUNDLED: &str = include_str!("../scenario.toml");

/// Everything one report needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Calendar time of the simulation's first state; defaults to now.
    #[serde(default)]
    pub start: Option<DateTime>,
    pub scenario: Scenario,
    #[serde(default)]
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub hospital: HospitalCapacity,
    /// Daily new cases in any order.
    #[serde(default)]
    pub daily_cases: Vec<CasePoint>,
}

impl Config {
    /// Reads a config from `path`, or the bundled scenario if `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let Some(path) = path else {
            info!("no config given, using the bundled scenario");
            return Ok(toml::from_str(BUNDLED)?);
        };

        info!(path = %path.display(), "loading config");
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }

    /// The cumulative series built from the daily counts.
    pub fn cases(&self) -> Result<CaseSeries, Error> {
        Ok(CaseSeries::from_daily(self.daily_cases.clone())?)
    }
}
