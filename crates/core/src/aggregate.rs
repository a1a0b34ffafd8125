//! Aggregate root trait.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root is the only component allowed to create, mutate or
/// delete the entities it owns. Everything outside of it reads through
/// read-only views.
pub trait AggregateRoot {
    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Bumped by exactly one for every accepted command; rejected commands and
    /// queries leave it untouched.
    fn version(&self) -> u64;
}
