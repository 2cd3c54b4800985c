//! Entity trait: identity + continuity across lookups.

/// Entity marker + minimal interface.
///
/// Plays are entities: two plays with the same identifier are the same play,
/// whatever their display names say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
