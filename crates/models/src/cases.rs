//! Cumulative confirmed-case series.
//!
//! A [`CaseSeries`] is the input both forecasts read. It is built once from
//! already-fetched data, either from cumulative counts with
//! [`CaseSeries::new`] or from daily new cases with [`CaseSeries::from_daily`],
//! and never mutated afterwards.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cumulative confirmed cases as of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasePoint {
    pub date: Date,
    pub count: u64,
}

impl CasePoint {
    #[must_use]
    pub fn new(date: Date, count: u64) -> Self {
        Self { date, count }
    }
}

/// A date-ascending series of cumulative case counts.
///
/// Dates are strictly increasing and counts never decrease.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<CasePoint>", into = "Vec<CasePoint>")]
pub struct CaseSeries {
    points: Vec<CasePoint>,
}

/// Reasons a [`CaseSeries`] is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    #[error("{later} comes after {earlier} but is listed before it")]
    OutOfOrder { earlier: Date, later: Date },

    #[error("{0} appears more than once")]
    DuplicateDate(Date),

    #[error("cumulative count drops from {previous} to {current} on {date}")]
    Decreasing {
        date: Date,
        previous: u64,
        current: u64,
    },

    #[error("cumulative count overflows on {0}")]
    Overflow(Date),
}

impl CaseSeries {
    /// Creates a series from cumulative counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the dates are not strictly ascending or a count is
    /// lower than the one before it.
    pub fn new(points: Vec<CasePoint>) -> Result<Self, SeriesError> {
        for pair in points.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.date == prev.date {
                return Err(SeriesError::DuplicateDate(next.date));
            }
            if next.date < prev.date {
                return Err(SeriesError::OutOfOrder {
                    earlier: next.date,
                    later: prev.date,
                });
            }
            if next.count < prev.count {
                return Err(SeriesError::Decreasing {
                    date: next.date,
                    previous: prev.count,
                    current: next.count,
                });
            }
        }

        Ok(Self { points })
    }

    /// Builds the cumulative series from daily new-case counts.
    ///
    /// The daily points may come in any order; upstream feeds usually list
    /// the newest day first.
    ///
    /// # Errors
    ///
    /// Returns an error if a date appears twice or the running total
    /// overflows.
    pub fn from_daily(mut daily: Vec<CasePoint>) -> Result<Self, SeriesError> {
        daily.sort_by_key(|point| point.date);

        let mut total: u64 = 0;
        let mut points = Vec::with_capacity(daily.len());
        for point in daily {
            total = total
                .checked_add(point.count)
                .ok_or(SeriesError::Overflow(point.date))?;
            points.push(CasePoint::new(point.date, total));
        }

        Self::new(points)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[CasePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CasePoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&CasePoint> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&CasePoint> {
        self.points.last()
    }

    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        self.points.iter().map(|point| point.date).collect()
    }

    #[must_use]
    pub fn counts(&self) -> Vec<u64> {
        self.points.iter().map(|point| point.count).collect()
    }

    /// The last `n` points, or `None` if the series is shorter than `n`.
    #[must_use]
    pub fn tail(&self, n: usize) -> Option<&[CasePoint]> {
        let start = self.points.len().checked_sub(n)?;
        Some(&self.points[start..])
    }

    /// The last `n` points as a series of their own.
    #[must_use]
    pub fn suffix(&self, n: usize) -> Option<Self> {
        self.tail(n).map(|points| Self {
            points: points.to_vec(),
        })
    }
}

impl TryFrom<Vec<CasePoint>> for CaseSeries {
    type Error = SeriesError;

    fn try_from(points: Vec<CasePoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<CaseSeries> for Vec<CasePoint> {
    fn from(series: CaseSeries) -> Self {
        series.points
    }
}

impl<'a> IntoIterator for &'a CaseSeries {
    type Item = &'a CasePoint;
    type IntoIter = std::slice::Iter<'a, CasePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    fn point(day: i8, count: u64) -> CasePoint {
        CasePoint::new(date(2020, 4, day), count)
    }

    #[test]
    fn accepts_ascending_cumulative_counts() {
        let series = CaseSeries::new(vec![point(1, 10), point(2, 10), point(4, 25)]).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.counts(), vec![10, 10, 25]);
        assert_eq!(series.last().map(|p| p.date), Some(date(2020, 4, 4)));
    }

    #[test]
    fn rejects_invalid_series() {
        assert_eq!(
            CaseSeries::new(vec![point(1, 10), point(1, 12)]),
            Err(SeriesError::DuplicateDate(date(2020, 4, 1)))
        );
        assert!(matches!(
            CaseSeries::new(vec![point(2, 10), point(1, 12)]),
            Err(SeriesError::OutOfOrder { .. })
        ));
        assert_eq!(
            CaseSeries::new(vec![point(1, 10), point(2, 9)]),
            Err(SeriesError::Decreasing {
                date: date(2020, 4, 2),
                previous: 10,
                current: 9,
            })
        );
    }

    #[test]
    fn cumulates_daily_counts_newest_first() {
        let daily = vec![point(3, 7), point(1, 2), point(2, 0)];

        let series = CaseSeries::from_daily(daily).unwrap();

        assert_eq!(
            series.dates(),
            vec![date(2020, 4, 1), date(2020, 4, 2), date(2020, 4, 3)]
        );
        assert_eq!(series.counts(), vec![2, 2, 9]);
    }

    #[test]
    fn daily_overflow_is_reported() {
        let daily = vec![point(1, u64::MAX), point(2, 1)];
        assert_eq!(
            CaseSeries::from_daily(daily),
            Err(SeriesError::Overflow(date(2020, 4, 2)))
        );
    }

    #[test]
    fn tail_requires_enough_points() {
        let series = CaseSeries::new((1..=5).map(|d| point(d, d as u64)).collect()).unwrap();

        let tail = series.tail(2).unwrap();
        assert_eq!(tail, &[point(4, 4), point(5, 5)]);
        assert_eq!(series.tail(5).map(<[_]>::len), Some(5));
        assert!(series.tail(6).is_none());
    }

    #[test]
    fn deserialization_validates() {
        let series: CaseSeries = serde_json::from_str(
            r#"[{"date":"2020-04-01","count":1},{"date":"2020-04-02","count":3}]"#,
        )
        .unwrap();
        assert_eq!(series.counts(), vec![1, 3]);

        let invalid = serde_json::from_str::<CaseSeries>(
            r#"[{"date":"2020-04-01","count":3},{"date":"2020-04-02","count":1}]"#,
        );
        assert!(invalid.is_err());
    }
}
