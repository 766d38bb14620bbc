//! Map keys as text.
//!
//! Path selectors and JSON object keys are strings; these functions convert
//! them to and from the native key of a map.

use alloc::string::{String, ToString};

use vc_reflect::info::{PrimitiveKind, PropertyInfo, PropertyKind};
use vc_reflect::registry::TypeDirectory;
use vc_reflect::value::{Name, Value};

use crate::{Error, Result};

/// Converts `text` to a native key described by `key`.
///
/// Supported key kinds are `Name`, `String`, `Text`, `Int`, `Byte` and
/// enums. Enum keys accept a variant name, falling back to a declared
/// numeric value.
pub fn decode_key(directory: &dyn TypeDirectory, key: &PropertyInfo, text: &str) -> Result<Value> {
    match key.kind() {
        PropertyKind::Primitive(kind) => match kind {
            PrimitiveKind::Name => Ok(Value::Name(Name::from(text))),
            PrimitiveKind::String => Ok(Value::String(String::from(text))),
            PrimitiveKind::Text => Ok(Value::Text(String::from(text))),
            PrimitiveKind::Int => match text.trim().parse::<i64>() {
                Ok(value) => Ok(Value::Int(value)),
                Err(_) => Err(Error::format(
                    PrimitiveKind::Int.type_name(),
                    alloc::format!("`{text}` is not an integer key"),
                )),
            },
            PrimitiveKind::Byte => match text.trim().parse::<u8>() {
                Ok(value) => Ok(Value::Int(i64::from(value))),
                Err(_) => Err(Error::format(
                    PrimitiveKind::Byte.type_name(),
                    alloc::format!("`{text}` is not a byte key"),
                )),
            },
            PrimitiveKind::Bool | PrimitiveKind::Float => Err(unsupported(key)),
        },
        PropertyKind::Enum(name) => {
            let Some(info) = directory.enum_info(name) else {
                return Err(Error::unsupported_type(name.as_str(), "enum is not registered"));
            };
            if let Some(value) = info.parse(text) {
                return Ok(Value::Enum(value));
            }
            match text.trim().parse::<i64>() {
                Ok(value) if info.repr().contains(value) => Ok(Value::Enum(value)),
                Ok(value) => Err(Error::format(
                    name.as_str(),
                    alloc::format!("{value} does not fit a {:?} enum", info.repr()),
                )),
                Err(_) => Err(Error::format(
                    name.as_str(),
                    alloc::format!("`{text}` is neither a variant nor a number"),
                )),
            }
        }
        _ => Err(unsupported(key)),
    }
}

/// Renders a native key as text; enum keys render as their variant name.
pub fn encode_key(directory: &dyn TypeDirectory, key: &PropertyInfo, value: &Value) -> String {
    if let (PropertyKind::Enum(name), Some(raw)) = (key.kind(), value.as_int())
        && let Some(variant) = directory.enum_info(name).and_then(|info| info.name_of(raw))
    {
        return String::from(variant);
    }
    match value {
        Value::String(text) | Value::Text(text) => text.clone(),
        Value::Name(name) => String::from(name.as_str()),
        other => other.to_string(),
    }
}

fn unsupported(key: &PropertyInfo) -> Error {
    Error::unsupported_type(key.type_name(), "unsupported map key kind")
}
