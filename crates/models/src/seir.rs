//! SEIR epidemic projection.
//!
//! # Model
//!
//! The population is split into four fractions that always start summing to
//! one: susceptible, exposed (infected but still incubating), infected, and
//! recovered. Their evolution follows
//!
//! ```text
//! dS/dt = -beta S I
//! dE/dt =  beta S I - alpha E
//! dI/dt =  alpha E  - gamma I
//! dR/dt =  gamma I
//! ```
//!
//! with `alpha`, `gamma`, and the unmitigated contact rate fixed in
//! [`constants`], and `beta` scaled by the caller's contact factor `p`.
//!
//! # Integration
//!
//! The system is stepped with explicit forward Euler at a fixed
//! [`STEP_SIZE_DAYS`](constants::STEP_SIZE_DAYS). A run over `d` days
//! records `floor(d / 0.1) + 1` states. Nothing is clamped: a compartment may
//! dip slightly below zero or the total may drift from one by rounding, and
//! both are left visible to the caller.
//!
//! # Example
//!
//! ```
//! use epicast_models::seir::{Scenario, simulate_scenario};
//!
//! let scenario = Scenario::new(100.0, 1_000, 1.0)?;
//! let run = simulate_scenario(&scenario)?;
//!
//! assert_eq!(run.len(), 1_001);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod constants;

mod error;
mod model;
mod run;
mod scenario;
mod state;

pub use error::Error;
pub use model::{Rates, SeirInput, SeirModel, SeirProblem};
pub use run::SimulationRun;
pub use scenario::{Scenario, ScenarioError};
pub use state::{EpidemicState, Flows};

use epicast_core::Observer;
use epicast_solvers::transient::euler;
use tracing::debug;

use constants::STEP_SIZE_DAYS;

/// Event the simulator emits after every Euler step.
pub type SeirEvent = euler::Event<SeirInput, Flows>;

/// Projects the epidemic from the latest counts.
///
/// A convenience over [`Scenario`] and [`simulate_scenario`] taking every
/// input positionally. Pass [`constants::BRAZIL_POPULATION`] for the default
/// population.
///
/// # Errors
///
/// Returns [`Error::Scenario`] if any input is out of its domain; nothing is
/// computed in that case. Besides `p` outside `(0, 1]`, a duration outside
/// `(0, MAX_DURATION_DAYS]` and a zero population, this includes starting
/// counts that do not fit in the population: `16 * current_infected +
/// recovered > population` (exposed is seeded at fifteen times infected), see
/// [`ScenarioError::InitialExceedsPopulation`].
pub fn simulate(
    duration_days: f64,
    current_infected: u64,
    recovered: u64,
    p: f64,
    population: u64,
) -> Result<SimulationRun, Error> {
    let scenario =
        Scenario::from_inputs(duration_days, current_infected, recovered, p, population)?;
    simulate_scenario(&scenario)
}

/// Projects the epidemic for a validated scenario.
///
/// # Errors
///
/// Returns [`Error::Integration`] if the solver fails. The SEIR model itself
/// cannot fail, so this does not happen in practice.
pub fn simulate_scenario(scenario: &Scenario) -> Result<SimulationRun, Error> {
    simulate_observed(scenario, ())
}

/// Projects the epidemic while reporting each step to an observer.
///
/// The observer may return [`euler::Action::StopEarly`], in which case the
/// run holds only the states computed so far.
///
/// # Errors
///
/// Returns [`Error::Integration`] if the solver fails.
pub fn simulate_observed<Obs>(scenario: &Scenario, observer: Obs) -> Result<SimulationRun, Error>
where
    Obs: Observer<SeirEvent, euler::Action>,
{
    let rates = Rates::for_contact_factor(scenario.contact_factor());
    let model = SeirModel::new(rates);
    let initial = SeirInput {
        step: 0,
        state: EpidemicState::initial(scenario),
    };
    let steps = scenario.steps();

    debug!(
        ?scenario,
        steps,
        r0 = rates.basic_reproduction_number(),
        "simulating SEIR scenario"
    );

    let solution = euler::solve(&model, &SeirProblem, initial, STEP_SIZE_DAYS, steps, observer)?;
    let states = solution
        .history
        .into_iter()
        .map(|snapshot| snapshot.input.state)
        .collect();

    let run = SimulationRun::new(*scenario, STEP_SIZE_DAYS, states);
    if let Some(peak) = run.peak_infected() {
        debug!(peak_day = peak.x, peak_infected = peak.value, "SEIR run complete");
    }

    Ok(run)
}
