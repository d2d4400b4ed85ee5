/// A state that can be advanced by its derivative over a step.
///
/// Explicit integrators only need this one operation: given the derivative
/// evaluated at the current state, produce `state + derivative * delta`.
/// `Delta` is the independent variable of the integration, usually elapsed
/// time in days.
pub trait StepIntegrable<Delta> {
    /// The derivative of the state with respect to `Delta`.
    type Derivative;

    /// Returns the state after one step of size `delta`.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for the derivative type of a [`StepIntegrable`] state.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    /// Cumulative cases, advanced by a daily incidence.
    #[derive(Debug, PartialEq)]
    struct Cumulative(f64);
    struct Incidence(f64);

    impl StepIntegrable<f64> for Cumulative {
        type Derivative = Incidence;

        fn step(&self, derivative: Incidence, delta: f64) -> Self {
            Cumulative(self.0 + derivative.0 * delta)
        }
    }

    /// Two compartments moving in lockstep.
    #[derive(Debug, PartialEq)]
    struct Pair([f64; 2]);

    impl StepIntegrable<f64> for Pair {
        type Derivative = [f64; 2];

        fn step(&self, derivative: [f64; 2], delta: f64) -> Self {
            Pair([
                self.0[0] + derivative[0] * delta,
                self.0[1] + derivative[1] * delta,
            ])
        }
    }

    #[test]
    fn scalar_state_advances() {
        let next = Cumulative(100.0).step(Incidence(20.0), 0.5);
        assert_eq!(next, Cumulative(110.0));
    }

    #[test]
    fn paired_state_conserves_total() {
        let state = Pair([0.75, 0.25]);
        let flow: DerivativeOf<Pair, f64> = [-0.5, 0.5];

        let next = state.step(flow, 0.5);

        assert_eq!(next, Pair([0.5, 0.5]));
        assert_eq!(next.0.iter().sum::<f64>(), 1.0);
    }
}
