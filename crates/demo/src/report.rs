use epicast_models::{
    forecast::{FitResult, Projection},
    hospital::HospitalCapacity,
    seir::{EpidemicState, Rates, Scenario, SimulationRun},
};
use jiff::civil::DateTime;
use serde::Serialize;

use crate::error::Error;

/// What the dashboard draws, as one JSON document.
#[derive(Debug, Serialize)]
pub struct Report {
    pub scenario: Scenario,
    pub basic_reproduction_number: f64,
    pub peak: Option<Peak>,
    pub hospital: Hospital,
    /// Compartments in people, once per simulated day.
    pub daily: Vec<DailyState>,
    pub exponential: Exponential,
    pub polynomial: Projection,
}

#[derive(Debug, Serialize)]
pub struct Peak {
    pub day: f64,
    pub timestamp: DateTime,
    pub infected: f64,
}

#[derive(Debug, Serialize)]
pub struct Hospital {
    pub beds: u64,
    pub peak_demand: Option<f64>,
    pub first_overflow_day: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct DailyState {
    pub timestamp: DateTime,
    #[serde(flatten)]
    pub people: EpidemicState,
}

#[derive(Debug, Serialize)]
pub struct Exponential {
    /// R² rounded for display. The exact value is the flattened fit's
    /// `r_squared`.
    pub r_squared_display: String,
    pub growth_rate: f64,
    pub doubling_time_days: Option<f64>,
    #[serde(flatten)]
    pub fit: FitResult,
}

impl Report {
    pub fn new(
        run: &SimulationRun,
        start: DateTime,
        capacity: &HospitalCapacity,
        exponential: FitResult,
        polynomial: Projection,
    ) -> Result<Self, Error> {
        let timestamps = run.timestamps(start)?;
        let counts = run.counts();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps_per_day = (1.0 / run.step_size()).round().max(1.0) as usize;
        let daily = timestamps
            .iter()
            .zip(&counts)
            .step_by(steps_per_day)
            .map(|(&timestamp, &people)| DailyState { timestamp, people })
            .collect();

        let peak = run
            .peak_infected()
            .and_then(|peak| {
                let step = step_of(peak.x, run.step_size());
                timestamps.get(step).map(|&timestamp| Peak {
                    day: peak.x,
                    timestamp,
                    infected: peak.value * run.scenario().population() as f64,
                })
            });

        let hospital = Hospital {
            beds: capacity.beds(),
            peak_demand: capacity.peak_demand(run).map(|(_, demand)| demand),
            first_overflow_day: capacity.first_overflow(run),
        };

        Ok(Self {
            scenario: *run.scenario(),
            basic_reproduction_number: Rates::for_contact_factor(run.scenario().contact_factor())
                .basic_reproduction_number(),
            peak,
            hospital,
            daily,
            exponential: Exponential {
                r_squared_display: exponential.r_squared.to_string(),
                growth_rate: exponential.growth_rate(),
                doubling_time_days: exponential.doubling_time_days(),
                fit: exponential,
            },
            polynomial,
        })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn step_of(day: f64, step_size: f64) -> usize {
    (day / step_size).round() as usize
}
