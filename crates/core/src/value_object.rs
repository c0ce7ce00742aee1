//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. `Money` and the cart's `(sku, warehouse)` stock key are
//! the value objects of this workspace.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Money(1500) == Money(1500)`)
/// - **Entity**: has identity (a cart line is the same line while its
///   `(sku, warehouse)` key is unchanged, whatever its quantity)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Warehouse(String);
///
/// impl ValueObject for Warehouse {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
