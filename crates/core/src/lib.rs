//! Core traits and types shared by the epicast crates.
//!
//! The solvers, observers, and epidemic models all build on a small set of
//! abstractions:
//!
//! - [`Model`]: a deterministic callable from a typed input to a typed output
//! - [`Snapshot`]: one recorded input/output pair
//! - [`Observer`]: receives solver events and may answer with an action
//! - [`OdeProblem`]: adapts a model to a time-stepping integrator
//! - [`StepIntegrable`]: a state that can be advanced by `derivative * delta`

mod model;
mod observer;
mod problems;
mod step;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problems::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
