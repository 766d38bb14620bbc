//! Descriptors for the types and properties of the host object graph.
//!
//! - [`PropertyInfo`]: a named property, its [`PropertyKind`] and its annotations.
//! - [`StructInfo`]: the ordered property list of a struct or object class.
//! - [`EnumInfo`]: the ordered `(name, value)` variants of an enumeration.
//! - [`TypeInfo`]: either of the two above, as stored in a type directory.

// -----------------------------------------------------------------------------
// Modules

mod enum_info;
mod kind;
mod metadata;
mod property_info;
mod struct_info;
mod type_info;

// -----------------------------------------------------------------------------
// Exports

pub use enum_info::{EnumInfo, EnumRepr};
pub use kind::{KindError, PrimitiveKind, PropertyKind, ReflectKind};
pub use metadata::Metadata;
pub use property_info::{PropertyFlags, PropertyInfo};
pub use struct_info::StructInfo;
pub use type_info::TypeInfo;
