use approx::assert_relative_eq;
use epicast_models::{
    cases::{CasePoint, CaseSeries},
    forecast::{self, DEFAULT_DEGREE, ForecastConfig, fit_exponential, fit_polynomial},
};
use jiff::civil::{Date, date};

/// Daily new cases as an upstream feed lists them: newest first.
fn daily_feed() -> Vec<CasePoint> {
    let start = date(2020, 3, 15);
    let new_cases: [u64; 24] = [
        3, 5, 8, 10, 14, 18, 25, 31, 40, 52, 66, 80, 101, 125, 150, 190, 235, 280, 350, 420,
        510, 620, 740, 900,
    ];

    let mut points: Vec<CasePoint> = new_cases
        .iter()
        .enumerate()
        .map(|(offset, &count)| {
            let day = start
                .checked_add(jiff::Span::new().days(offset as i64))
                .unwrap();
            CasePoint::new(day, count)
        })
        .collect();
    points.reverse();
    points
}

#[test]
fn dashboard_defaults_on_a_daily_feed() {
    let series = CaseSeries::from_daily(daily_feed()).unwrap();
    assert_eq!(series.len(), 24);

    let fit = fit_exponential(&series, 20, 7).unwrap();

    assert_eq!(fit.projection.len(), 27);
    assert_eq!(fit.window.first().map(|p| p.date), Some(date(2020, 3, 19)));
    assert_eq!(fit.projection.points()[0].date, date(2020, 3, 19));
    assert_eq!(fit.projection.points()[19].date, date(2020, 4, 7));
    assert_eq!(fit.projection.points()[26].date, date(2020, 4, 14));

    let r2 = fit.r_squared.value().unwrap();
    assert!(r2 > 0.9 && r2 <= 1.0);
    assert!(fit.growth_rate() > 0.0);
    assert_eq!(fit.r_squared.to_string().split('.').nth(1).map(str::len), Some(3));
}

#[test]
fn polynomial_and_exponential_share_dates() {
    let series = CaseSeries::from_daily(daily_feed()).unwrap();

    let exponential = fit_exponential(&series, 20, 7).unwrap();
    let polynomial = fit_polynomial(&series, 20, 7, DEFAULT_DEGREE).unwrap();

    assert_eq!(exponential.projection.dates(), polynomial.dates());

    // The cubic tracks the recent, larger counts closely.
    let window = series.tail(20).unwrap();
    for (observed, fitted) in window.iter().zip(polynomial.iter()).skip(12) {
        assert_relative_eq!(fitted.count, observed.count as f64, max_relative = 0.05);
    }
}

#[test]
fn exponential_window_must_be_positive() {
    let start: Date = date(2020, 2, 25);
    let points = (0..10_u64)
        .map(|k| {
            let day = start.checked_add(jiff::Span::new().days(k as i64)).unwrap();
            CasePoint::new(day, k)
        })
        .collect();
    let series = CaseSeries::new(points).unwrap();

    assert!(matches!(
        fit_exponential(&series, 10, 7),
        Err(forecast::Error::NonPositiveCount { .. })
    ));
    assert!(fit_exponential(&series, 9, 7).is_ok());
    assert!(fit_polynomial(&series, 10, 7, 3).is_ok());
}

#[test]
fn short_series_is_a_caller_error() {
    let series = CaseSeries::from_daily(daily_feed()).unwrap();

    let config = ForecastConfig::new(30, 7, 3).unwrap();

    assert!(matches!(
        config.exponential(&series),
        Err(forecast::Error::WindowTooLarge {
            window_size: 30,
            available: 24
        })
    ));
}

#[test]
fn fit_result_serializes() {
    let series = CaseSeries::from_daily(daily_feed()).unwrap();
    let fit = fit_exponential(&series, 20, 7).unwrap();

    let json = serde_json::to_value(&fit).unwrap();

    assert_eq!(json["projection"].as_array().map(Vec::len), Some(27));
    assert_eq!(json["projection"][26]["date"], "2020-04-14");
    assert_eq!(json["window"].as_array().map(Vec::len), Some(20));
}
