use epicast_core::Observer;

/// The position and value of a running maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakPoint {
    pub x: f64,
    pub value: f64,
}

/// Tracks the largest value of a metric across solver events.
///
/// The metric closure maps an event to `Some((x, value))`, or `None` to skip
/// it. NaN values are ignored. On ties the earliest event wins.
///
/// `Peak` never asks the solver to stop; wrap it in a closure if the search
/// should end once the peak has passed.
pub struct Peak<F> {
    metric: F,
    best: Option<PeakPoint>,
}

impl<F> Peak<F> {
    /// Creates a tracker around a metric closure.
    pub fn new(metric: F) -> Self {
        Self { metric, best: None }
    }

    /// Returns the peak seen so far.
    pub fn peak(&self) -> Option<PeakPoint> {
        self.best
    }

    fn offer(&mut self, x: f64, value: f64) {
        if value.is_nan() {
            return;
        }
        if self.best.is_none_or(|best| value > best.value) {
            self.best = Some(PeakPoint { x, value });
        }
    }
}

impl<F, E, A> Observer<E, A> for Peak<F>
where
    F: FnMut(&E) -> Option<(f64, f64)>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some((x, value)) = (self.metric)(event) {
            self.offer(x, value);
        }
        None
    }
}

impl<F, E, A> Observer<E, A> for &mut Peak<F>
where
    F: FnMut(&E) -> Option<(f64, f64)>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<O: Observer<(f64, f64), ()>>(mut observer: O, events: &[(f64, f64)]) {
        for event in events {
            observer.observe(event);
        }
    }

    #[test]
    fn finds_interior_maximum() {
        let mut peak = Peak::new(|&(day, infected): &(f64, f64)| Some((day, infected)));

        feed(&mut peak, &[(0.0, 1.0), (1.0, 4.0), (2.0, 3.0)]);

        assert_eq!(peak.peak(), Some(PeakPoint { x: 1.0, value: 4.0 }));
    }

    #[test]
    fn earliest_tie_wins_and_nan_is_ignored() {
        let mut peak = Peak::new(|&(day, value): &(f64, f64)| Some((day, value)));

        feed(&mut peak, &[(0.0, 2.0), (1.0, f64::NAN), (2.0, 2.0)]);

        assert_eq!(peak.peak(), Some(PeakPoint { x: 0.0, value: 2.0 }));
    }

    #[test]
    fn skipped_events_leave_no_peak() {
        let mut peak = Peak::new(|_: &(f64, f64)| None::<(f64, f64)>);

        feed(&mut peak, &[(0.0, 2.0)]);

        assert_eq!(peak.peak(), None);
    }
}
