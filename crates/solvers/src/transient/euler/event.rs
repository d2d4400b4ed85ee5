use epicast_core::Snapshot;

/// Event emitted by the Euler solver once per recorded snapshot.
///
/// Step 0 carries the initial snapshot; steps `1..=N` follow each accepted
/// integration step.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    /// The step number.
    pub step: usize,

    /// Model input and output at this step.
    pub snapshot: Snapshot<I, O>,
}
