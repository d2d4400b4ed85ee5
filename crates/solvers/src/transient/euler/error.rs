use std::error::Error as StdError;

/// Errors that can occur during Euler integration.
///
/// `step` is the step being computed when the failure happened, with `0`
/// meaning the initial evaluation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model failed at step {step}: {source}")]
    Model {
        step: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("problem failed at step {step}: {source}")]
    Problem {
        step: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(
        step: usize,
    ) -> impl FnOnce(E) -> Self {
        move |err| Self::Model {
            step,
            source: Box::new(err),
        }
    }

    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(
        step: usize,
    ) -> impl FnOnce(E) -> Self {
        move |err| Self::Problem {
            step,
            source: Box::new(err),
        }
    }

    /// The step being computed when integration failed.
    #[must_use]
    pub fn step(&self) -> usize {
        match self {
            Self::Model { step, .. } | Self::Problem { step, .. } => *step,
        }
    }
}
