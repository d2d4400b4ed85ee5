use std::convert::Infallible;

use epicast_core::{DerivativeOf, Model, OdeProblem};
use serde::{Deserialize, Serialize};

use super::{
    constants::{BASE_CONTACT_RATE, INCUBATION_RATE, RECOVERY_RATE, STEP_SIZE_DAYS},
    state::{EpidemicState, Flows},
};

/// Transition rates of the SEIR system, per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    /// Exposed to infected (alpha).
    pub incubation: f64,
    /// Susceptible to exposed per infected contact (beta).
    pub contact: f64,
    /// Infected to recovered (gamma).
    pub recovery: f64,
}

impl Rates {
    /// Returns the fixed rates with the contact rate scaled by `p`.
    #[must_use]
    pub fn for_contact_factor(p: f64) -> Self {
        Self {
            incubation: INCUBATION_RATE,
            contact: BASE_CONTACT_RATE * p,
            recovery: RECOVERY_RATE,
        }
    }

    /// Basic reproduction number, `beta / gamma`.
    #[must_use]
    pub fn basic_reproduction_number(&self) -> f64 {
        self.contact / self.recovery
    }
}

/// Model input: the compartments after `step` integration steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeirInput {
    pub step: usize,
    pub state: EpidemicState,
}

impl SeirInput {
    /// Simulation time of this input, in days.
    #[must_use]
    pub fn day(&self) -> f64 {
        self.step as f64 * STEP_SIZE_DAYS
    }
}

/// The SEIR right-hand side:
///
/// ```text
/// dS/dt = -beta S I
/// dE/dt =  beta S I - alpha E
/// dI/dt =  alpha E  - gamma I
/// dR/dt =  gamma I
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeirModel {
    rates: Rates,
}

impl SeirModel {
    #[must_use]
    pub fn new(rates: Rates) -> Self {
        Self { rates }
    }

    #[must_use]
    pub fn rates(&self) -> &Rates {
        &self.rates
    }
}

impl Model for SeirModel {
    type Input = SeirInput;
    type Output = Flows;
    type Error = Infallible;

    fn call(&self, input: &SeirInput) -> Result<Flows, Self::Error> {
        let Rates {
            incubation,
            contact,
            recovery,
        } = self.rates;
        let EpidemicState {
            susceptible,
            exposed,
            infected,
            ..
        } = input.state;

        let infection = contact * susceptible * infected;

        Ok(Flows {
            susceptible: -infection,
            exposed: infection - incubation * exposed,
            infected: incubation * exposed - recovery * infected,
            recovered: recovery * infected,
        })
    }
}

/// Adapts [`SeirModel`] to the forward Euler solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeirProblem;

impl OdeProblem for SeirProblem {
    type Input = SeirInput;
    type Output = Flows;
    type Delta = f64;
    type State = EpidemicState;
    type Error = Infallible;

    fn state(&self, input: &SeirInput) -> Result<EpidemicState, Self::Error> {
        Ok(input.state)
    }

    fn derivative(
        &self,
        _input: &SeirInput,
        output: &Flows,
    ) -> Result<DerivativeOf<EpidemicState, f64>, Self::Error> {
        Ok(*output)
    }

    fn build_input(
        &self,
        base: &SeirInput,
        state: &EpidemicState,
        _delta: &f64,
    ) -> Result<SeirInput, Self::Error> {
        Ok(SeirInput {
            step: base.step + 1,
            state: *state,
        })
    }
}
