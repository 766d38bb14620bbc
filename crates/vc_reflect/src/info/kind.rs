use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::info::PropertyInfo;

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected property.
///
/// This is the data-less tag of [`PropertyKind`], obtained via [`PropertyKind::reflect_kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Primitive,
    Enum,
    Struct,
    List,
    Map,
    Set,
    Object,
}

impl ReflectKind {
    /// Returns `true` for the three collection kinds.
    #[inline]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::List | Self::Map | Self::Set)
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive => f.pad("Primitive"),
            Self::Enum => f.pad("Enum"),
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Set => f.pad("Set"),
            Self::Object => f.pad("Object"),
        }
    }
}

/// Error returned when a descriptor is not the expected [`ReflectKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("reflect kind mismatch: expected {expected}, received {received}")]
pub struct KindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// PrimitiveKind

/// Leaf value kinds that are stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    /// An unsigned 8-bit integer.
    Byte,
    /// A signed 64-bit integer.
    Int,
    /// A 64-bit float.
    Float,
    String,
    /// An interned identifier, compared case-insensitively.
    Name,
    /// Localizable display text.
    Text,
}

impl PrimitiveKind {
    /// Returns the native type name reported to clients.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Byte => "Byte",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::Name => "Name",
            Self::Text => "Text",
        }
    }

    /// Returns `true` for [`Byte`](Self::Byte), [`Int`](Self::Int) and [`Float`](Self::Float).
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Byte | Self::Int | Self::Float)
    }
}

impl fmt::Display for PrimitiveKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.type_name())
    }
}

// -----------------------------------------------------------------------------
// PropertyKind

/// The shape of a property, including the descriptors of nested elements.
///
/// Struct, enum and object kinds refer to their type by name; the
/// [`TypeDirectory`](crate::registry::TypeDirectory) resolves the name.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    Primitive(PrimitiveKind),
    /// An enumeration, by enum type name.
    Enum(String),
    /// An embedded struct, by struct type name.
    Struct(String),
    /// A nullable reference to another object, by class name.
    Object(String),
    /// An ordered collection.
    List(Box<PropertyInfo>),
    /// An associative collection, `(key, value)`.
    Map(Box<PropertyInfo>, Box<PropertyInfo>),
    /// An unordered collection of unique elements.
    Set(Box<PropertyInfo>),
}

impl PropertyKind {
    /// Returns the data-less [`ReflectKind`] tag.
    pub const fn reflect_kind(&self) -> ReflectKind {
        match self {
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Struct(_) => ReflectKind::Struct,
            Self::Object(_) => ReflectKind::Object,
            Self::List(_) => ReflectKind::List,
            Self::Map(..) => ReflectKind::Map,
            Self::Set(_) => ReflectKind::Set,
        }
    }

    /// Returns the native type name, e.g. `Float`, `Margin` or `Map<Name, Int>`.
    pub fn type_name(&self) -> String {
        match self {
            Self::Primitive(kind) => String::from(kind.type_name()),
            Self::Enum(name) | Self::Struct(name) | Self::Object(name) => name.clone(),
            Self::List(elem) => alloc::format!("List<{}>", elem.type_name()),
            Self::Set(elem) => alloc::format!("Set<{}>", elem.type_name()),
            Self::Map(key, value) => {
                alloc::format!("Map<{}, {}>", key.type_name(), value.type_name())
            }
        }
    }

    /// Returns the element descriptor of a list or set, or the value descriptor of a map.
    pub fn element(&self) -> Option<&PropertyInfo> {
        match self {
            Self::List(elem) | Self::Set(elem) | Self::Map(_, elem) => Some(elem),
            _ => None,
        }
    }
}
