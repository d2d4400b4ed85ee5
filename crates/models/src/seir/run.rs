use epicast_observers::PeakPoint;
use jiff::{SignedDuration, civil::DateTime};
use serde::Serialize;

use super::{Scenario, state::EpidemicState};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// The trajectory of one SEIR projection.
///
/// States are recorded every [`step_size`](SimulationRun::step_size) days,
/// starting at `t = 0`. A run is an immutable value: rerunning the same
/// scenario yields an identical run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRun {
    scenario: Scenario,
    step_size: f64,
    states: Vec<EpidemicState>,
}

impl SimulationRun {
    pub(super) fn new(scenario: Scenario, step_size: f64, states: Vec<EpidemicState>) -> Self {
        Self {
            scenario,
            step_size,
            states,
        }
    }

    /// The scenario that produced this run.
    #[must_use]
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Time between recorded states, in days.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    #[must_use]
    pub fn states(&self) -> &[EpidemicState] {
        &self.states
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Simulation day of each state.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        (0..self.states.len())
            .map(|k| k as f64 * self.step_size)
            .collect()
    }

    #[must_use]
    pub fn susceptible(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.susceptible).collect()
    }

    #[must_use]
    pub fn exposed(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.exposed).collect()
    }

    #[must_use]
    pub fn infected(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.infected).collect()
    }

    #[must_use]
    pub fn recovered(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.recovered).collect()
    }

    /// Compartments in people rather than fractions.
    #[must_use]
    pub fn counts(&self) -> Vec<EpidemicState> {
        let population = self.scenario.population() as f64;
        self.states.iter().map(|s| s.scaled(population)).collect()
    }

    /// Day and fraction of the largest infected compartment.
    ///
    /// The earliest state wins a tie.
    #[must_use]
    pub fn peak_infected(&self) -> Option<PeakPoint> {
        self.states
            .iter()
            .enumerate()
            .fold(None, |best: Option<PeakPoint>, (k, state)| match best {
                Some(best) if best.value >= state.infected => Some(best),
                _ => Some(PeakPoint {
                    x: k as f64 * self.step_size,
                    value: state.infected,
                }),
            })
    }

    /// Calendar time of each state for a run starting at `start`.
    ///
    /// Offsets are rounded to the millisecond.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp falls outside jiff's supported range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn timestamps(&self, start: DateTime) -> Result<Vec<DateTime>, jiff::Error> {
        self.times()
            .into_iter()
            .map(|day| {
                let offset = SignedDuration::from_millis((day * MILLIS_PER_DAY).round() as i64);
                start.checked_add(offset)
            })
            .collect()
    }
}
