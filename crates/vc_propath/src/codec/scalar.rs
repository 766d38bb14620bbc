//! Primitive conversions.

use alloc::string::{String, ToString};

use serde_json::{Number, Value as JsonValue};
use vc_reflect::info::PrimitiveKind;
use vc_reflect::value::{Name, Value};

use crate::{Error, Result};

/// Decodes a primitive of `kind`.
///
/// Numbers and booleans also accept their string forms. String-like kinds
/// accept numbers and booleans, stringified.
pub(crate) fn decode(kind: PrimitiveKind, external: &JsonValue) -> Result<Value> {
    match kind {
        PrimitiveKind::Bool => decode_bool(external).map(Value::Bool),
        PrimitiveKind::Byte => decode_byte(external).map(|b| Value::Int(i64::from(b))),
        PrimitiveKind::Int => decode_int(external).map(Value::Int),
        PrimitiveKind::Float => decode_float(external).map(Value::Float),
        PrimitiveKind::String => decode_text(kind, external).map(Value::String),
        PrimitiveKind::Name => decode_text(kind, external).map(|s| Value::Name(Name::new(s))),
        PrimitiveKind::Text => decode_text(kind, external).map(Value::Text),
    }
}

fn mismatch(kind: PrimitiveKind, external: &JsonValue) -> Error {
    Error::format(kind.type_name(), alloc::format!("cannot convert `{external}`"))
}

fn decode_bool(external: &JsonValue) -> Result<bool> {
    match external {
        JsonValue::Bool(value) => Ok(*value),
        JsonValue::String(text) if text.eq_ignore_ascii_case("true") => Ok(true),
        JsonValue::String(text) if text.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(mismatch(PrimitiveKind::Bool, external)),
    }
}

fn decode_byte(external: &JsonValue) -> Result<u8> {
    let value = decode_int(external).map_err(|_| mismatch(PrimitiveKind::Byte, external))?;
    u8::try_from(value).map_err(|_| {
        Error::format(PrimitiveKind::Byte.type_name(), alloc::format!("{value} is outside 0..=255"))
    })
}

pub(crate) fn decode_int(external: &JsonValue) -> Result<i64> {
    let value = match external {
        JsonValue::Number(number) => number.as_i64().or_else(|| {
            let float = number.as_f64()?;
            let int = float as i64;
            (int as f64 == float).then_some(int)
        }),
        JsonValue::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    value.ok_or_else(|| mismatch(PrimitiveKind::Int, external))
}

pub(crate) fn decode_float(external: &JsonValue) -> Result<f64> {
    let value = match external {
        JsonValue::Number(number) => number.as_f64(),
        JsonValue::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.ok_or_else(|| mismatch(PrimitiveKind::Float, external))
}

fn decode_text(kind: PrimitiveKind, external: &JsonValue) -> Result<String> {
    match external {
        JsonValue::String(text) => Ok(text.clone()),
        JsonValue::Number(number) => Ok(number.to_string()),
        JsonValue::Bool(value) => Ok(value.to_string()),
        _ => Err(mismatch(kind, external)),
    }
}

/// Non-finite floats have no JSON form and encode as `null`.
pub(crate) fn float_to_json(value: f64) -> JsonValue {
    Number::from_f64(value).map_or(JsonValue::Null, JsonValue::Number)
}
