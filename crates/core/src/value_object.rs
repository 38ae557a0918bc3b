//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attributes are interchangeable. To "modify" one, build a new
/// one. Catalog records handed out by repositories are value objects; no
/// layer above the repository mutates them.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
