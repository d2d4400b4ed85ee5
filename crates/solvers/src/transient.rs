//! Time-stepping solvers for ODE problems.

pub mod euler;
