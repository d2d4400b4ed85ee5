use epicast_solvers::transient::euler;

use super::ScenarioError;

/// Errors returned by the SEIR entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid scenario: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("integration failed: {0}")]
    Integration(#[from] euler::Error),
}
