//! Trace collection for an external charting layer.
//!
//! See [`Recorder`] and [`Plottable`] for usage.

use epicast_core::Observer;

/// Extracts chart data from a solver event.
///
/// Implement this on an event type defined in your own crate to pass a
/// [`Recorder`] straight to a solver. Return `None` from [`x`][Plottable::x]
/// to skip the event, or `None` in a trace slot to skip only that trace.
///
/// For event types defined elsewhere, such as `euler::Event<I, O>`, the
/// orphan rule gets in the way; wrap the recorder in a closure and call
/// [`Recorder::record`] instead.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip it.
    fn x(&self) -> Option<f64>;

    /// The y-axis values, one per trace.
    fn traces(&self) -> [Option<f64>; N];
}

/// One named series of `(x, y)` points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

/// Collects `N` named traces while a solver runs.
///
/// Record through either path:
///
/// - **Direct**: implement [`Plottable<N>`][Plottable] on a local event type
///   and hand `&mut Recorder` to the solver as its observer.
/// - **Closure**: call [`record`][Recorder::record] from an observer closure.
///
/// # Example: closure path
///
/// ```ignore
/// let mut recorder = Recorder::new(["Infected", "Exposed"]);
/// euler::solve(&model, &problem, initial, 0.1, steps, |event: &SeirEvent| {
///     let state = &event.snapshot.input.state;
///     recorder.record(event.snapshot.input.day(), [Some(state.infected), Some(state.exposed)]);
///     None
/// })?;
/// let traces = recorder.into_traces();
/// ```
#[derive(Debug, Clone)]
pub struct Recorder<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> Recorder<N> {
    /// Creates a recorder with the given trace names.
    #[must_use]
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records one x value across all traces, skipping `None` slots.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Returns the points recorded so far for trace `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn points(&self, index: usize) -> &[[f64; 2]] {
        &self.data[index]
    }

    /// Consumes the recorder and returns its traces in declaration order.
    #[must_use]
    pub fn into_traces(self) -> Vec<Trace> {
        self.names
            .into_iter()
            .zip(self.data)
            .map(|(name, points)| Trace { name, points })
            .collect()
    }
}

impl<const N: usize, E, A> Observer<E, A> for Recorder<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Lets `&mut Recorder<N>` be passed to solvers that take the observer by
/// value, so the traces are still available after the solve.
impl<const N: usize, E, A> Observer<E, A> for &mut Recorder<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
