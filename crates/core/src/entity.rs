//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same entity, whatever their other
/// attributes say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Returns true when `other` denotes the same entity.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
