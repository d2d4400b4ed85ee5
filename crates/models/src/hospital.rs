//! Hospital bed demand implied by a SEIR run.
//!
//! A fixed share of the infected compartment is assumed to need a general
//! hospital bed, compared against a national bed count.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::seir::SimulationRun;

/// Share of infected people expected to need hospital care.
pub const HOSPITALIZED_FRACTION: f64 = 0.2;

/// General hospital beds in Brazil.
pub const BRAZIL_HOSPITAL_BEDS: u64 = 270_880;

/// Hospital capacity to compare a run against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CapacityFields")]
pub struct HospitalCapacity {
    hospitalized_fraction: f64,
    beds: u64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CapacityError {
    #[error("hospitalized fraction must be in [0, 1], got {0}")]
    Fraction(f64),
}

impl HospitalCapacity {
    /// # Errors
    ///
    /// Returns an error if `hospitalized_fraction` is outside `[0, 1]`.
    pub fn new(hospitalized_fraction: f64, beds: u64) -> Result<Self, CapacityError> {
        if !(0.0..=1.0).contains(&hospitalized_fraction) {
            return Err(CapacityError::Fraction(hospitalized_fraction));
        }
        Ok(Self {
            hospitalized_fraction,
            beds,
        })
    }

    #[must_use]
    pub fn hospitalized_fraction(&self) -> f64 {
        self.hospitalized_fraction
    }

    #[must_use]
    pub fn beds(&self) -> u64 {
        self.beds
    }

    /// People needing a bed at each recorded state of `run`.
    #[must_use]
    pub fn demand(&self, run: &SimulationRun) -> Vec<f64> {
        let population = run.scenario().population() as f64;
        run.states()
            .iter()
            .map(|state| state.infected * self.hospitalized_fraction * population)
            .collect()
    }

    /// Largest bed demand over the run and the day it occurs.
    #[must_use]
    pub fn peak_demand(&self, run: &SimulationRun) -> Option<(f64, f64)> {
        let population = run.scenario().population() as f64;
        run.peak_infected()
            .map(|peak| (peak.x, peak.value * self.hospitalized_fraction * population))
    }

    /// Simulation day on which demand first exceeds the bed count.
    #[must_use]
    pub fn first_overflow(&self, run: &SimulationRun) -> Option<f64> {
        let beds = self.beds as f64;
        self.demand(run)
            .iter()
            .position(|&demand| demand > beds)
            .map(|k| k as f64 * run.step_size())
    }
}

impl Default for HospitalCapacity {
    fn default() -> Self {
        Self {
            hospitalized_fraction: HOSPITALIZED_FRACTION,
            beds: BRAZIL_HOSPITAL_BEDS,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CapacityFields {
    #[serde(default = "default_fraction")]
    hospitalized_fraction: f64,
    #[serde(default = "default_beds")]
    beds: u64,
}

fn default_fraction() -> f64 {
    HOSPITALIZED_FRACTION
}

fn default_beds() -> u64 {
    BRAZIL_HOSPITAL_BEDS
}

impl TryFrom<CapacityFields> for HospitalCapacity {
    type Error = CapacityError;

    fn try_from(fields: CapacityFields) -> Result<Self, Self::Error> {
        Self::new(fields.hospitalized_fraction, fields.beds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::seir::{Scenario, simulate_scenario};

    #[test]
    fn demand_is_a_share_of_infected_people() {
        let scenario = Scenario::new(1.0, 10_000, 1.0).unwrap();
        let run = simulate_scenario(&scenario).unwrap();

        let demand = HospitalCapacity::default().demand(&run);

        assert_eq!(demand.len(), run.len());
        assert_relative_eq!(demand[0], 2_000.0, max_relative = 1e-12);
    }

    #[test]
    fn unmitigated_epidemic_overflows_beds() {
        let scenario = Scenario::new(100.0, 1_000, 1.0).unwrap();
        let run = simulate_scenario(&scenario).unwrap();
        let capacity = HospitalCapacity::default();

        let day = capacity.first_overflow(&run).unwrap();
        let (peak_day, peak_demand) = capacity.peak_demand(&run).unwrap();

        assert!(day > 0.0 && day < peak_day);
        assert!(peak_demand > BRAZIL_HOSPITAL_BEDS as f64);
    }

    #[test]
    fn ample_capacity_never_overflows() {
        let scenario = Scenario::new(30.0, 100, 0.3).unwrap();
        let run = simulate_scenario(&scenario).unwrap();

        assert_eq!(HospitalCapacity::default().first_overflow(&run), None);
    }

    #[test]
    fn fraction_is_validated() {
        assert!(HospitalCapacity::new(1.5, 10).is_err());
        assert!(HospitalCapacity::new(f64::NAN, 10).is_err());

        let capacity: HospitalCapacity = toml::from_str("beds = 1000").unwrap();
        assert_eq!(capacity, HospitalCapacity::new(0.2, 1_000).unwrap());
    }
}
