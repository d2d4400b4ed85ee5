use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One value of a fitted trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub date: Date,
    /// Day index within the fit; the window's first day is zero.
    pub day: usize,
    /// Predicted cumulative cases.
    pub count: f64,
}

/// A fitted trend re-evaluated over its window and extrapolated past it.
///
/// Point `i` is the fit evaluated at day `i`. The first `window_size` points
/// carry the window's own dates; the rest step one day at a time past the
/// last observed date.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Projection {
    points: Vec<ProjectedPoint>,
}

impl Projection {
    pub(super) fn new(points: Vec<ProjectedPoint>) -> Self {
        Self { points }
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
    pub fn points(&self) -> &[ProjectedPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectedPoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        self.points.iter().map(|point| point.date).collect()
    }

    #[must_use]
    pub fn counts(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.count).collect()
    }

    /// Points after day `window_size - 1`, i.e. the extrapolated forecast.
    #[must_use]
    pub fn beyond(&self, window_size: usize) -> &[ProjectedPoint] {
        self.points.get(window_size..).unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a Projection {
    type Item = &'a ProjectedPoint;
    type IntoIter = std::slice::Iter<'a, ProjectedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
