//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// Equality may be defined over a canonical form rather than the raw fields:
/// a license plate typed as `"ka ab 123"` equals one typed as `"KA-AB-123"`
/// when both normalize to the same rendering. `Hash` (where implemented) must
/// then be derived from the same canonical form.
///
/// ## Design Constraints
///
/// - **Clone**: values are copied, not shared by reference
/// - **PartialEq**: compared by (canonical) value
/// - **Debug**: inspectable in logs and tests
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct CountryCode(String);
///
/// impl ValueObject for CountryCode {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
