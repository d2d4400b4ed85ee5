//! Numerical solvers for epicast.
//!
//! - [`transient::euler`]: explicit forward Euler integration of an
//!   [`OdeProblem`](epicast_core::OdeProblem)
//! - [`regression`]: ordinary least-squares polynomial fits and R²

pub mod regression;
pub mod transient;
