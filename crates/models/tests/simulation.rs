use approx::assert_relative_eq;
use epicast_models::seir::{
    EpidemicState, Error, Scenario, ScenarioError, constants::BRAZIL_POPULATION, simulate,
    simulate_scenario,
};
use jiff::civil::date;

#[test]
fn hundred_day_unmitigated_scenario() {
    let run = simulate(100.0, 1_000, 0, 1.0, BRAZIL_POPULATION).unwrap();

    assert_eq!(run.len(), 1_001);
    assert_relative_eq!(run.states()[0].infected, 1_000.0 / 200_000_000.0);
    assert_relative_eq!(run.times()[1_000], 100.0, epsilon = 1e-9);

    let infected = run.infected();
    let peak = run.peak_infected().unwrap();
    assert!(peak.x > 0.0 && peak.x < 100.0);
    assert!(peak.value > infected[0]);
    assert!(infected[1_000] < peak.value);
}

#[test]
fn compartments_are_conserved() {
    for p in [0.1, 0.5, 0.75, 1.0] {
        let run = simulate(200.0, 5_000, 2_000, p, BRAZIL_POPULATION).unwrap();
        for state in run.states() {
            assert_relative_eq!(state.total(), 1.0, epsilon = 1e-6);
        }
    }
}

#[test]
fn susceptible_falls_and_recovered_rises() {
    let run = simulate(150.0, 20_000, 500, 1.0, BRAZIL_POPULATION).unwrap();

    for pair in run.states().windows(2) {
        assert!(pair[1].susceptible <= pair[0].susceptible);
        assert!(pair[1].recovered >= pair[0].recovered);
    }
}

#[test]
fn distancing_lowers_the_peak() {
    let full = simulate(100.0, 1_000, 0, 1.0, BRAZIL_POPULATION).unwrap();
    let half = simulate(100.0, 1_000, 0, 0.5, BRAZIL_POPULATION).unwrap();

    let full_peak = full.peak_infected().unwrap().value;
    let half_peak = half.peak_infected().unwrap().value;
    assert!(full_peak >= half_peak);
}

#[test]
fn runs_are_deterministic() {
    let scenario = Scenario::new(60.0, 4_256, 0.7)
        .and_then(|s| s.with_recovered(1_200))
        .unwrap();

    let first = simulate_scenario(&scenario).unwrap();
    let second = simulate_scenario(&scenario).unwrap();

    assert_eq!(first, second);
}

#[test]
fn invalid_inputs_fail_before_integrating() {
    assert!(matches!(
        simulate(100.0, 1_000, 0, 1.5, BRAZIL_POPULATION),
        Err(Error::Scenario(ScenarioError::ContactFactor(_)))
    ));
    assert!(matches!(
        simulate(0.0, 1_000, 0, 1.0, BRAZIL_POPULATION),
        Err(Error::Scenario(ScenarioError::Duration(_)))
    ));
    assert!(matches!(
        simulate(100.0, 1_000, 0, 1.0, 0),
        Err(Error::Scenario(ScenarioError::Population))
    ));
}

#[test]
fn smaller_population_uses_its_own_fractions() {
    let run = simulate(10.0, 100, 50, 0.5, 1_000_000).unwrap();
    let EpidemicState {
        susceptible,
        exposed,
        infected,
        recovered,
    } = run.states()[0];

    assert_relative_eq!(infected, 1e-4);
    assert_relative_eq!(exposed, 1.5e-3);
    assert_relative_eq!(recovered, 5e-5);
    assert_relative_eq!(susceptible, 1.0 - 1.5e-3 - 1e-4 - 5e-5, epsilon = 1e-15);
    assert_relative_eq!(run.counts()[0].infected, 100.0, max_relative = 1e-12);
}

#[test]
fn timestamps_start_at_the_given_instant() {
    let run = simulate(1.0, 1_000, 0, 1.0, BRAZIL_POPULATION).unwrap();
    let start = date(2020, 4, 20).at(12, 0, 0, 0);

    let stamps = run.timestamps(start).unwrap();

    assert_eq!(stamps.len(), 11);
    assert_eq!(stamps[0], start);
    assert_eq!(stamps[5], date(2020, 4, 21).at(0, 0, 0, 0));
    assert_eq!(stamps[10], date(2020, 4, 21).at(12, 0, 0, 0));
}

#[test]
fn run_serializes_for_a_renderer() {
    let run = simulate(0.2, 1_000, 0, 1.0, BRAZIL_POPULATION).unwrap();

    let json = serde_json::to_value(&run).unwrap();

    assert_eq!(json["states"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["scenario"]["contact_factor"], 1.0);
}
