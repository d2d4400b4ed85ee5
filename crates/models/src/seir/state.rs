use epicast_core::StepIntegrable;
use serde::{Deserialize, Serialize};

use super::{Scenario, constants::EXPOSED_PER_INFECTED};

/// The four compartments at one instant, as fractions of the population.
///
/// The fractions sum to one at `t = 0`. Forward Euler conserves the sum up
/// to rounding, and nothing clamps the compartments afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpidemicState {
    pub susceptible: f64,
    pub exposed: f64,
    pub infected: f64,
    pub recovered: f64,
}

/// Instantaneous rates of change of each compartment, per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flows {
    pub susceptible: f64,
    pub exposed: f64,
    pub infected: f64,
    pub recovered: f64,
}

impl EpidemicState {
    /// Derives the starting compartments of a scenario.
    ///
    /// Exposed is seeded as [`EXPOSED_PER_INFECTED`] times the confirmed
    /// infected count, and susceptible takes whatever remains.
    #[must_use]
    pub fn initial(scenario: &Scenario) -> Self {
        let population = scenario.population() as f64;
        let infected = scenario.current_infected() as f64;

        let exposed = EXPOSED_PER_INFECTED * infected / population;
        let infected = infected / population;
        let recovered = scenario.recovered() as f64 / population;

        Self {
            susceptible: 1.0 - exposed - infected - recovered,
            exposed,
            infected,
            recovered,
        }
    }

    /// Sum of all compartments; one for a conserved state.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.susceptible + self.exposed + self.infected + self.recovered
    }

    /// Scales every compartment by `factor`, typically the population.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            susceptible: self.susceptible * factor,
            exposed: self.exposed * factor,
            infected: self.infected * factor,
            recovered: self.recovered * factor,
        }
    }
}

impl StepIntegrable<f64> for EpidemicState {
    type Derivative = Flows;

    fn step(&self, flows: Flows, dt: f64) -> Self {
        Self {
            susceptible: self.susceptible + flows.susceptible * dt,
            exposed: self.exposed + flows.exposed * dt,
            infected: self.infected + flows.infected * dt,
            recovered: self.recovered + flows.recovered * dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn initial_state_is_normalized() {
        let scenario = Scenario::new(10.0, 1_000, 1.0)
            .and_then(|s| s.with_recovered(500))
            .unwrap();

        let state = EpidemicState::initial(&scenario);

        assert_relative_eq!(state.infected, 1_000.0 / 200_000_000.0);
        assert_relative_eq!(state.exposed, 15_000.0 / 200_000_000.0);
        assert_relative_eq!(state.recovered, 500.0 / 200_000_000.0);
        assert_relative_eq!(state.total(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn step_moves_along_flows() {
        let state = EpidemicState {
            susceptible: 0.5,
            exposed: 0.25,
            infected: 0.25,
            recovered: 0.0,
        };
        let flows = Flows {
            susceptible: -1.0,
            exposed: 0.5,
            infected: 0.0,
            recovered: 0.5,
        };

        let next = state.step(flows, 0.5);

        assert_eq!(
            next,
            EpidemicState {
                susceptible: 0.0,
                exposed: 0.5,
                infected: 0.25,
                recovered: 0.25,
            }
        );
        assert_eq!(next.total(), 1.0);
    }

    #[test]
    fn scaled_to_people() {
        let state = EpidemicState {
            susceptible: 0.5,
            exposed: 0.25,
            infected: 0.125,
            recovered: 0.125,
        };

        let people = state.scaled(1_000.0);

        assert_eq!(people.infected, 125.0);
        assert_eq!(people.total(), 1_000.0);
    }
}
