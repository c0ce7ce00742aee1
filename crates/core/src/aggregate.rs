//! Aggregate root trait for in-memory domain models.

/// Aggregate root marker + minimal interface.
///
/// Aggregates own a consistency boundary: every invariant of the model is
/// checked inside the aggregate before state changes, never by callers.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Bumped once per committed state change; rejected commands leave it
    /// untouched.
    fn version(&self) -> u64;
}
