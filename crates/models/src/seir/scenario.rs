use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{
    BRAZIL_POPULATION, EXPOSED_PER_INFECTED, MAX_DURATION_DAYS, STEP_SIZE_DAYS,
};

/// The inputs of one SEIR projection, validated on construction.
///
/// Build with [`Scenario::new`] and adjust the optional parts with
/// [`with_recovered`](Scenario::with_recovered) and
/// [`with_population`](Scenario::with_population). Deserialization runs the
/// same validation, so a `Scenario` read from a config file is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScenarioFields")]
pub struct Scenario {
    duration_days: f64,
    current_infected: u64,
    recovered: u64,
    contact_factor: f64,
    population: u64,
}

/// Reasons a [`Scenario`] is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ScenarioError {
    #[error("contact factor must be in (0, 1], got {0}")]
    ContactFactor(f64),

    #[error("duration must be in (0, {max}] days, got {0}", max = MAX_DURATION_DAYS)]
    Duration(f64),

    #[error("population must be positive")]
    Population,

    #[error("{occupied} exposed, infected and recovered people exceed a population of {population}")]
    InitialExceedsPopulation { occupied: f64, population: u64 },
}

impl Scenario {
    /// Creates a scenario with no recovered people and Brazil's population.
    ///
    /// # Errors
    ///
    /// Returns an error if `contact_factor` is outside `(0, 1]`, if
    /// `duration_days` is outside `(0, MAX_DURATION_DAYS]`, or if the seeded
    /// compartments do not fit in the population.
    pub fn new(
        duration_days: f64,
        current_infected: u64,
        contact_factor: f64,
    ) -> Result<Self, ScenarioError> {
        Self::from_inputs(
            duration_days,
            current_infected,
            0,
            contact_factor,
            BRAZIL_POPULATION,
        )
    }

    /// Creates a scenario from every input at once.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Scenario::new`], or if
    /// `population` is zero.
    pub fn from_inputs(
        duration_days: f64,
        current_infected: u64,
        recovered: u64,
        contact_factor: f64,
        population: u64,
    ) -> Result<Self, ScenarioError> {
        Self {
            duration_days,
            current_infected,
            recovered,
            contact_factor,
            population,
        }
        .validated()
    }

    /// Returns the scenario with a known recovered count.
    ///
    /// # Errors
    ///
    /// Returns an error if the seeded compartments no longer fit.
    pub fn with_recovered(self, recovered: u64) -> Result<Self, ScenarioError> {
        Self { recovered, ..self }.validated()
    }

    /// Returns the scenario with a different modeled population.
    ///
    /// # Errors
    ///
    /// Returns an error if `population` is zero or too small for the seeded
    /// compartments.
    pub fn with_population(self, population: u64) -> Result<Self, ScenarioError> {
        Self { population, ..self }.validated()
    }

    fn validated(self) -> Result<Self, ScenarioError> {
        let p = self.contact_factor;
        if !(p.is_finite() && p > 0.0 && p <= 1.0) {
            return Err(ScenarioError::ContactFactor(p));
        }
        if !(self.duration_days > 0.0 && self.duration_days <= MAX_DURATION_DAYS) {
            return Err(ScenarioError::Duration(self.duration_days));
        }
        if self.population == 0 {
            return Err(ScenarioError::Population);
        }

        let infected = self.current_infected as f64;
        let occupied = EXPOSED_PER_INFECTED * infected + infected + self.recovered as f64;
        if occupied > self.population as f64 {
            return Err(ScenarioError::InitialExceedsPopulation {
                occupied,
                population: self.population,
            });
        }

        Ok(self)
    }

    /// Projection horizon, in days.
    #[must_use]
    pub fn duration_days(&self) -> f64 {
        self.duration_days
    }

    /// Latest confirmed active case count.
    #[must_use]
    pub fn current_infected(&self) -> u64 {
        self.current_infected
    }

    /// Known recovered count.
    #[must_use]
    pub fn recovered(&self) -> u64 {
        self.recovered
    }

    /// Residual transmission relative to no distancing, in `(0, 1]`.
    #[must_use]
    pub fn contact_factor(&self) -> f64 {
        self.contact_factor
    }

    /// Modeled population.
    #[must_use]
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Number of Euler steps needed to cover the horizon.
    ///
    /// The run records one more state than this, for `t = 0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps(&self) -> usize {
        (self.duration_days / STEP_SIZE_DAYS).floor() as usize
    }
}

/// Unvalidated mirror of [`Scenario`] used for deserialization.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFields {
    duration_days: f64,
    current_infected: u64,
    #[serde(default)]
    recovered: u64,
    contact_factor: f64,
    #[serde(default = "brazil_population")]
    population: u64,
}

fn brazil_population() -> u64 {
    BRAZIL_POPULATION
}

impl TryFrom<ScenarioFields> for Scenario {
    type Error = ScenarioError;

    fn try_from(fields: ScenarioFields) -> Result<Self, Self::Error> {
        Self::from_inputs(
            fields.duration_days,
            fields.current_infected,
            fields.recovered,
            fields.contact_factor,
            fields.population,
        )
    }
}
