use alloc::string::String;
use alloc::vec::Vec;

use crate::info::{EnumInfo, PrimitiveKind, PropertyInfo, PropertyKind, StructInfo, TypeInfo};
use crate::value::{DynamicMap, DynamicSet, DynamicStruct, Value};

/// Upper bound on super-type chains and struct nesting, guarding against
/// cyclic type declarations.
const MAX_DEPTH: usize = 64;

/// Lookup of type descriptors by type name.
///
/// Only [`type_info`](Self::type_info) is required; the remaining methods are
/// derived from it and may be overridden when the host has faster paths.
///
/// The trait is object safe; the path engine holds a `&dyn TypeDirectory`.
pub trait TypeDirectory {
    /// Returns the [`TypeInfo`] registered under `name`.
    fn type_info(&self, name: &str) -> Option<&TypeInfo>;

    /// Returns the [`StructInfo`] registered under `name`.
    fn struct_info(&self, name: &str) -> Option<&StructInfo> {
        self.type_info(name)?.as_struct().ok()
    }

    /// Returns the [`EnumInfo`] registered under `name`.
    fn enum_info(&self, name: &str) -> Option<&EnumInfo> {
        self.type_info(name)?.as_enum().ok()
    }

    /// Finds the property `name` on `type_name` or any of its super types.
    ///
    /// The most derived declaration wins.
    fn find_property(&self, type_name: &str, name: &str) -> Option<&PropertyInfo> {
        let mut current = self.struct_info(type_name);
        for _ in 0..MAX_DEPTH {
            let info = current?;
            if let Some(property) = info.property(name) {
                return Some(property);
            }
            current = info.super_name().and_then(|s| self.struct_info(s));
        }
        log::warn!("super chain of `{type_name}` exceeds {MAX_DEPTH} levels");
        None
    }

    /// Returns every property of `type_name`, super types first,
    /// each type's properties in declaration order.
    ///
    /// Returns an empty list for unknown or non-struct types.
    fn properties(&self, type_name: &str) -> Vec<&PropertyInfo> {
        let mut chain: Vec<&StructInfo> = Vec::new();
        let mut current = self.struct_info(type_name);
        while let Some(info) = current {
            if chain.len() >= MAX_DEPTH {
                log::warn!("super chain of `{type_name}` exceeds {MAX_DEPTH} levels");
                break;
            }
            chain.push(info);
            current = info.super_name().and_then(|s| self.struct_info(s));
        }

        let mut properties: Vec<&PropertyInfo> = Vec::new();
        for info in chain.into_iter().rev() {
            for property in info.iter() {
                // A redeclared name shadows the inherited one.
                match properties.iter().position(|p| p.name() == property.name()) {
                    Some(index) => properties[index] = property,
                    None => properties.push(property),
                }
            }
        }
        properties
    }

    /// Returns `true` if `class` is `base` or derives from it.
    fn is_subclass_of(&self, class: &str, base: &str) -> bool {
        let mut current = Some(class);
        for _ in 0..MAX_DEPTH {
            let Some(name) = current else {
                return false;
            };
            if name == base {
                return true;
            }
            current = self.struct_info(name).and_then(StructInfo::super_name);
        }
        false
    }

    /// Creates a default-initialized instance of the struct or class `type_name`.
    ///
    /// Unknown types produce an empty [`DynamicStruct`] carrying the name.
    fn instantiate(&self, type_name: &str) -> DynamicStruct {
        instantiate_struct(self, type_name, 0)
    }

    /// Returns the default value of a property.
    ///
    /// - Numbers are zero, strings empty, booleans `false`.
    /// - Enums default to their first declared variant.
    /// - Object references are null, collections empty.
    fn default_value(&self, info: &PropertyInfo) -> Value {
        default_value(self, info, 0)
    }
}

fn instantiate_struct<D: TypeDirectory + ?Sized>(
    directory: &D,
    type_name: &str,
    depth: usize,
) -> DynamicStruct {
    let mut value = DynamicStruct::new(type_name);
    if depth >= MAX_DEPTH {
        log::warn!("nesting of `{type_name}` exceeds {MAX_DEPTH} levels, left empty");
        return value;
    }
    for property in directory.properties(type_name) {
        let field = default_value(directory, property, depth + 1);
        value.insert(String::from(property.name()), field);
    }
    value
}

fn default_value<D: TypeDirectory + ?Sized>(
    directory: &D,
    info: &PropertyInfo,
    depth: usize,
) -> Value {
    match info.kind() {
        PropertyKind::Primitive(kind) => match kind {
            PrimitiveKind::Bool => Value::Bool(false),
            PrimitiveKind::Byte | PrimitiveKind::Int => Value::Int(0),
            PrimitiveKind::Float => Value::Float(0.0),
            PrimitiveKind::String => Value::String(String::new()),
            PrimitiveKind::Name => Value::Name(Default::default()),
            PrimitiveKind::Text => Value::Text(String::new()),
        },
        PropertyKind::Enum(name) => {
            let first = directory
                .enum_info(name)
                .and_then(|info| info.iter().next())
                .map(|(_, v)| v);
            Value::Enum(first.unwrap_or_default())
        }
        PropertyKind::Struct(name) => Value::Struct(instantiate_struct(directory, name, depth)),
        PropertyKind::Object(_) => Value::Object(None),
        PropertyKind::List(_) => Value::List(Vec::new()),
        PropertyKind::Map(..) => Value::Map(DynamicMap::new()),
        PropertyKind::Set(_) => Value::Set(DynamicSet::new()),
    }
}
