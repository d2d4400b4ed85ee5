//! Reusable observers for epicast solvers.
//!
//! - [`traits`]: capability traits that let one observer work across solvers
//!   ([`HasStep`], [`CanStopEarly`])
//! - [`Recorder`]: collects named `(x, y)` traces for a charting layer
//! - [`Peak`]: tracks the largest value of a metric and where it occurred
//!
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod peak;
mod record;

pub use peak::{Peak, PeakPoint};
pub use record::{Plottable, Recorder, Trace};
