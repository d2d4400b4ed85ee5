//! Epidemic projections behind the COVID-19 Brazil dashboard.
//!
//! Two independent pieces turn already-fetched numbers into series a chart
//! can draw:
//!
//! - [`seir`]: a Susceptible/Exposed/Infected/Recovered simulation stepped
//!   with forward Euler from the latest confirmed counts
//! - [`forecast`]: exponential and polynomial trend fits over the most recent
//!   window of cumulative cases, extrapolated a few days ahead
//!
//! [`cases`] holds the case-count series both consume, and [`hospital`]
//! turns a simulation into hospital bed demand.
//!
//! Everything here is pure and synchronous. Fetching data and drawing charts
//! belong to the caller.

pub mod cases;
pub mod forecast;
pub mod hospital;
pub mod seir;

pub use cases::{CasePoint, CaseSeries};
pub use forecast::{FitResult, ForecastConfig, Projection, fit_exponential, fit_polynomial};
pub use hospital::HospitalCapacity;
pub use seir::{EpidemicState, Scenario, SimulationRun, simulate};
