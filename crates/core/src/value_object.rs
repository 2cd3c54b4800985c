//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Performances and computed statement lines have **no identity**: two
/// performances of the same play with the same audience are interchangeable,
/// and two statement results built from the same input compare equal.
///
/// Value objects are immutable. To "change" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Seats(u32);
///
/// impl ValueObject for Seats {}
///
/// assert_eq!(Seats(55), Seats(55));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
