//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two instances
/// with the same attribute values are equal. `Money` and `CurrencyCode` are
/// value objects; a catalog entry (which has identity) is not.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
