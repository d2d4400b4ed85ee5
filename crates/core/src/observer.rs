/// Receives solver events and decides whether the solver should carry on.
///
/// `observe` returns `Some(action)` to request a solver-specific action and
/// `None` to let the solver continue. Closures of the form
/// `FnMut(&E) -> Option<A>` are observers, and `()` is the no-op observer.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
