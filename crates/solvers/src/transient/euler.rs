//! Forward Euler solver for ODE problems.
//!
//! Each step evaluates the derivative at the current state and advances it:
//!
//! ```text
//! state_{n+1} = state_n + derivative(state_n) * dt
//! ```
//!
//! There is no adaptive step control and no stability check. The step size is
//! exactly the `dt` the caller passes, which keeps results reproducible
//! bit for bit across runs.
//!
//! # Example
//!
//! ```ignore
//! use epicast_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&model, &problem, initial_input, 0.1, 1000)?;
//! assert_eq!(solution.history.len(), 1001);
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use epicast_core::{Model, Observer, OdeProblem, Snapshot, StepIntegrable};
use tracing::{debug, trace};

/// Integrates an ODE problem using forward Euler.
///
/// # Algorithm
///
/// 1. Call the model with the initial input and record the initial snapshot.
/// 2. For each of `steps` steps:
///    - Extract the state and its derivative from the current snapshot.
///    - Step the state: `state + derivative * dt`.
///    - Build and finalize the next input, then call the model on it.
///    - Record the snapshot and emit an [`Event`] to the observer.
/// 3. Return the full history, initial snapshot included.
///
/// # Observer
///
/// The observer sees step 0 (the initial snapshot) and every step after it.
/// Returning [`Action::StopEarly`] ends the integration with
/// [`Status::StoppedByObserver`] and the history collected so far.
///
/// # Errors
///
/// Returns an error if the model or the problem fails at any step.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    debug!(steps, "starting forward euler integration");

    let initial_output = model.call(&initial).map_err(Error::model(0))?;
    let mut current = Snapshot::new(initial, initial_output);

    let mut history = Vec::with_capacity(steps + 1);
    history.push(current.clone());

    let event = Event {
        step: 0,
        snapshot: current.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        debug!(step = 0, "observer stopped integration");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    for step in 1..=steps {
        let state = problem.state(&current.input).map_err(Error::problem(step))?;
        let derivative = problem
            .derivative(&current.input, &current.output)
            .map_err(Error::problem(step))?;

        let next_state = state.step(derivative, dt.clone());

        let next_input = problem
            .build_input(&current.input, &next_state, &dt)
            .map_err(Error::problem(step))?;
        let next_input = problem
            .finalize_step(next_input, &current.input, &current.output, &dt)
            .map_err(Error::problem(step))?;

        let next_output = model.call(&next_input).map_err(Error::model(step))?;
        let next = Snapshot::new(next_input, next_output);
        history.push(next.clone());
        trace!(step, "accepted euler step");

        let event = Event {
            step,
            snapshot: next.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step, "observer stopped integration");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = next;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates an ODE problem using forward Euler without observation.
///
/// # Errors
///
/// Returns an error if the model or the problem fails at any step.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    solve(model, problem, initial, dt, steps, ())
}
