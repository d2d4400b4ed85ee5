//! Fixed epidemiological assumptions of the SEIR projection.
//!
//! These values come from early COVID-19 modeling literature and are not
//! caller-tunable. Only the contact factor, the starting counts, and the
//! population vary between runs.

/// Integration step, in days.
pub const STEP_SIZE_DAYS: f64 = 0.1;

/// Longest projection accepted, in days.
///
/// A century of 0.1-day steps is far past any useful horizon and keeps the
/// recorded trajectory within memory.
pub const MAX_DURATION_DAYS: f64 = 36_500.0;

/// Exposed (incubating, unreported) people assumed per confirmed case.
///
/// The exposed compartment is never observed directly; it is seeded as this
/// multiple of the confirmed infected count.
pub const EXPOSED_PER_INFECTED: f64 = 15.0;

/// Inverse mean incubation period (alpha), per day.
pub const INCUBATION_RATE: f64 = 0.2;

/// Effective contact rate with no distancing (beta at `p = 1`), per day.
pub const BASE_CONTACT_RATE: f64 = 1.2;

/// Inverse mean infectious period (gamma), per day.
pub const RECOVERY_RATE: f64 = 0.5;

/// Modeled population of Brazil.
pub const BRAZIL_POPULATION: u64 = 200_000_000;
