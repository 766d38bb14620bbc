use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::graph::ObjectId;
use crate::info::ReflectKind;
use crate::value::{DynamicMap, DynamicSet, DynamicStruct, Name};

/// A native property value.
///
/// The variant mirrors the [`PropertyKind`](crate::info::PropertyKind) of
/// the property holding it:
///
/// | kind | variant |
/// |---|---|
/// | `Bool` | [`Bool`](Self::Bool) |
/// | `Byte`, `Int` | [`Int`](Self::Int) |
/// | `Float` | [`Float`](Self::Float) |
/// | `String` / `Name` / `Text` | [`String`](Self::String) / [`Name`](Self::Name) / [`Text`](Self::Text) |
/// | `Enum` | [`Enum`](Self::Enum), the variant's value |
/// | `Struct` | [`Struct`](Self::Struct) |
/// | `List` / `Map` / `Set` | [`List`](Self::List) / [`Map`](Self::Map) / [`Set`](Self::Set) |
/// | `Object` | [`Object`](Self::Object), `None` when null |
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Name(Name),
    Text(String),
    Enum(i64),
    Struct(DynamicStruct),
    List(Vec<Value>),
    Map(DynamicMap),
    Set(DynamicSet),
    Object(Option<ObjectId>),
}

macro_rules! impl_as_method {
    ($name:ident, $name_mut:ident : $variant:ident => $ty:ty) => {
        #[inline]
        pub fn $name(&self) -> Option<&$ty> {
            match self {
                Self::$variant(value) => Some(value),
                _ => None,
            }
        }

        #[inline]
        pub fn $name_mut(&mut self) -> Option<&mut $ty> {
            match self {
                Self::$variant(value) => Some(value),
                _ => None,
            }
        }
    };
}

impl Value {
    impl_as_method!(as_struct, as_struct_mut: Struct => DynamicStruct);
    impl_as_method!(as_list, as_list_mut: List => Vec<Value>);
    impl_as_method!(as_map, as_map_mut: Map => DynamicMap);
    impl_as_method!(as_set, as_set_mut: Set => DynamicSet);

    /// Returns the [`ReflectKind`] this value belongs to.
    pub const fn reflect_kind(&self) -> ReflectKind {
        match self {
            Self::Bool(_)
            | Self::Int(_)
            | Self::Float(_)
            | Self::String(_)
            | Self::Name(_)
            | Self::Text(_) => ReflectKind::Primitive,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Set(_) => ReflectKind::Set,
            Self::Object(_) => ReflectKind::Object,
        }
    }

    /// Returns the variant name, used in diagnostics.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::Name(_) => "Name",
            Self::Text(_) => "Text",
            Self::Enum(_) => "Enum",
            Self::Struct(_) => "Struct",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
            Self::Set(_) => "Set",
            Self::Object(_) => "Object",
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer payload of [`Int`](Self::Int) and [`Enum`](Self::Enum).
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) | Self::Enum(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns [`Float`](Self::Float), or [`Int`](Self::Int) widened.
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the text of [`String`](Self::String), [`Name`](Self::Name) and [`Text`](Self::Text).
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) | Self::Text(value) => Some(value),
            Self::Name(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the referenced object; `Some(None)` for a null reference.
    #[inline]
    pub fn as_object(&self) -> Option<Option<ObjectId>> {
        match self {
            Self::Object(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the element count of a list, map or set.
    pub fn collection_len(&self) -> Option<usize> {
        match self {
            Self::List(list) => Some(list.len()),
            Self::Map(map) => Some(map.len()),
            Self::Set(set) => Some(set.len()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Name> for Value {
    #[inline]
    fn from(value: Name) -> Self {
        Self::Name(value)
    }
}

impl From<DynamicStruct> for Value {
    #[inline]
    fn from(value: DynamicStruct) -> Self {
        Self::Struct(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) | Self::Enum(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) | Self::Text(value) => f.pad(value),
            Self::Name(value) => fmt::Display::fmt(value, f),
            Self::Struct(value) => write!(f, "{}{{..}}", value.type_name()),
            Self::List(value) => write!(f, "[..; {}]", value.len()),
            Self::Map(value) => write!(f, "{{..; {}}}", value.len()),
            Self::Set(value) => write!(f, "Set(..; {})", value.len()),
            Self::Object(Some(id)) => write!(f, "{id:?}"),
            Self::Object(None) => f.pad("null"),
        }
    }
}
