//! Capability traits for cross-solver observers.
//!
//! These traits hide solver-specific event and action types so an observer
//! can be written once and reused.
//!
//! # Example
//!
//! ```rust
//! use epicast_core::Observer;
//! use epicast_observers::traits::{CanStopEarly, HasStep};
//!
//! /// Stops any stepping solver after a fixed number of steps.
//! struct StepLimit(usize);
//!
//! impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StepLimit {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.step() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use epicast_solvers::transient::euler;

/// An event that belongs to a numbered solver step.
pub trait HasStep {
    /// Returns the step number, starting at 0 for the initial state.
    fn step(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<I, O> HasStep for euler::Event<I, O> {
    fn step(&self) -> usize {
        self.step
    }
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use epicast_core::{Observer, Snapshot};

    struct StepLimit(usize);

    impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StepLimit {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.step() >= self.0).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_drives_euler_actions() {
        let mut limit = StepLimit(2);
        let event = |step| euler::Event {
            step,
            snapshot: Snapshot::new((), ()),
        };

        let before: Option<euler::Action> = limit.observe(&event(1));
        let at: Option<euler::Action> = limit.observe(&event(2));

        assert_eq!(before, None);
        assert_eq!(at, Some(euler::Action::StopEarly));
    }
}
