use crate::{DerivativeOf, StepIntegrable};

/// Adapts a [`Model`](crate::Model) to a time-stepping ODE integrator.
///
/// The integrator never looks inside the model's input. It asks the problem
/// for the integrable state, for the derivative of that state given the
/// model's input and output, and for a fresh model input once the state has
/// been stepped.
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the integrable state from a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input carries no usable state.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Computes the state derivative from a model input and its output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Builds the next model input from the previous one and a stepped state.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be rebuilt.
    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;

    /// Adjusts an input after the solver has accepted a step.
    ///
    /// The default returns the input untouched. Override it to apply discrete
    /// changes between steps, such as a scheduled intervention.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the adjustment fails.
    fn finalize_step(
        &self,
        next_input: Self::Input,
        _prev_input: &Self::Input,
        _prev_output: &Self::Output,
        _step_delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error> {
        Ok(next_input)
    }
}
