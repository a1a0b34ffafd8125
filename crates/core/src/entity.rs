//! Entities keep their identity while their other fields change.

/// Something identified by a key that never changes after construction.
///
/// A product is the canonical example: its code is fixed, while name,
/// description, price and stock can be replaced by the owning aggregate.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Two entities are the same thing when their ids match, whatever their state.
    fn is_same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
