//! Conversion between external JSON values and native [`Value`]s.
//!
//! Every conversion is driven by the [`PropertyInfo`] of the target:
//!
//! | kind | external form |
//! |---|---|
//! | `Bool` | `true`, `"true"` |
//! | `Byte`, `Int` | integer, integral float, numeric string |
//! | `Float` | number, numeric string |
//! | `String`, `Name`, `Text` | string; numbers and booleans are stringified |
//! | `Enum` | variant name, `Enum::Variant`, or a declared value |
//! | `Object` | object path or `null` |
//! | `Struct` | object of fields, or a string holding one as JSON text |
//! | `List`, `Set` | array |
//! | `Map` | object whose keys are converted with the key descriptor |
//!
//! Some value types have their own forms, listed below.
//!
//! # Well-known types
//!
//! - `Vector2D`: `{X, Y}` or `[x, y]`
//! - `Margin`: `{Left, Top, Right, Bottom}`, `[l, t, r, b]` or a single number
//! - `LinearColor`: `{R, G, B, A?}` or `[r, g, b, a?]`, alpha defaulting to `1.0`
//! - `SlateBrush`, `ButtonStyle`: objects whose unknown fields are skipped;
//!   at least one field must be recognized.

// -----------------------------------------------------------------------------
// Modules

mod key;
mod scalar;
mod well_known;

// -----------------------------------------------------------------------------
// Exports

pub use key::{decode_key, encode_key};

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde_json::{Map, Value as JsonValue};
use vc_reflect::graph::ObjectGraph;
use vc_reflect::info::{PropertyInfo, PropertyKind};
use vc_reflect::registry::TypeDirectory;
use vc_reflect::value::{DynamicMap, DynamicSet, DynamicStruct, Value};

use crate::resolve::{PropertyHandle, Step};
use crate::{Error, Result};

use scalar::float_to_json;

// -----------------------------------------------------------------------------
// Codec

/// Converts values for properties described by a [`TypeDirectory`].
///
/// The graph is consulted for object references only: decoding looks an
/// object path up, encoding renders an object's path.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vc_propath::Codec;
/// use vc_reflect::graph::ObjectArena;
/// use vc_reflect::info::PropertyInfo;
/// use vc_reflect::registry::TypeTable;
///
/// let types = TypeTable::new();
/// let graph = ObjectArena::new();
/// let codec = Codec::new(&types);
///
/// let info = PropertyInfo::structure("Tint", "LinearColor");
/// let value = codec.decode(&graph, &json!([1, 0, 0]), &info).unwrap();
/// assert_eq!(
///     codec.encode(&graph, &value, &info),
///     json!({ "R": 1.0, "G": 0.0, "B": 0.0, "A": 1.0 }),
/// );
/// ```
#[derive(Clone, Copy)]
pub struct Codec<'a> {
    directory: &'a dyn TypeDirectory,
}

impl<'a> Codec<'a> {
    #[inline]
    pub fn new(directory: &'a dyn TypeDirectory) -> Self {
        Self { directory }
    }

    #[inline]
    pub fn directory(&self) -> &'a dyn TypeDirectory {
        self.directory
    }

    /// Decodes `external` into a value for the property `info`.
    pub fn decode(
        &self,
        graph: &dyn ObjectGraph,
        external: &JsonValue,
        info: &PropertyInfo,
    ) -> Result<Value> {
        match info.kind() {
            PropertyKind::Primitive(kind) => scalar::decode(*kind, external),
            PropertyKind::Enum(name) => self.decode_enum(name, external),
            PropertyKind::Object(class) => self.decode_object(graph, class, external),
            PropertyKind::Struct(name) => {
                self.decode_struct(graph, name, external).map(Value::Struct)
            }
            PropertyKind::List(element) => {
                let items = expect_array(info, external)?;
                let list = items
                    .iter()
                    .map(|item| self.decode(graph, item, element))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::List(list))
            }
            PropertyKind::Set(element) => {
                let items = expect_array(info, external)?;
                let mut set = DynamicSet::new();
                for item in items {
                    set.insert(self.decode(graph, item, element)?);
                }
                Ok(Value::Set(set))
            }
            PropertyKind::Map(key, element) => {
                let JsonValue::Object(entries) = external else {
                    return Err(Error::format(info.type_name(), "expected an object of entries"));
                };
                let mut map = DynamicMap::new();
                for (text, item) in entries {
                    let key = decode_key(self.directory, key, text)?;
                    map.insert(key, self.decode(graph, item, element)?);
                }
                Ok(Value::Map(map))
            }
        }
    }

    /// Encodes `value`, a value of the property `info`.
    ///
    /// A value whose variant does not match `info` is encoded from the
    /// value alone.
    pub fn encode(&self, graph: &dyn ObjectGraph, value: &Value, info: &PropertyInfo) -> JsonValue {
        match (info.kind(), value) {
            (PropertyKind::Enum(name), Value::Enum(raw)) => {
                match self.directory.enum_info(name).and_then(|e| e.name_of(*raw)) {
                    Some(variant) => JsonValue::from(variant),
                    None => JsonValue::from(*raw),
                }
            }
            (PropertyKind::Struct(name), Value::Struct(fields)) => {
                match well_known::float_shape(name) {
                    Some(shape) => shape.encode(fields),
                    None => self.encode_struct(graph, name, fields),
                }
            }
            (PropertyKind::List(element), Value::List(items)) => items
                .iter()
                .map(|item| self.encode(graph, item, element))
                .collect(),
            (PropertyKind::Set(element), Value::Set(items)) => items
                .iter()
                .map(|item| self.encode(graph, item, element))
                .collect(),
            (PropertyKind::Map(key, element), Value::Map(entries)) => {
                let map: Map<_, _> = entries
                    .iter()
                    .map(|(k, v)| {
                        (encode_key(self.directory, key, k), self.encode(graph, v, element))
                    })
                    .collect();
                JsonValue::Object(map)
            }
            (PropertyKind::Primitive(_) | PropertyKind::Object(_), _) => {
                self.encode_untyped(graph, value)
            }
            _ => {
                log::warn!(
                    "`{}` holds a {} value, encoding it untyped",
                    info.type_name(),
                    value.variant_name()
                );
                self.encode_untyped(graph, value)
            }
        }
    }

    /// Decodes `external` into the value addressed by `handle`.
    ///
    /// Structs given as objects are written one field at a time, each field
    /// through its own handle, so nested structs are written field by field
    /// as well. A failure part way through leaves the fields already written
    /// in place. Every other value is decoded in full before it is stored.
    pub fn apply(
        &self,
        graph: &mut dyn ObjectGraph,
        handle: &PropertyHandle,
        external: &JsonValue,
        info: &PropertyInfo,
    ) -> Result<()> {
        if let PropertyKind::Struct(name) = info.kind()
            && well_known::float_shape(name).is_none()
        {
            match external {
                JsonValue::Object(fields) => return self.apply_fields(graph, handle, name, fields),
                JsonValue::String(text) => {
                    let parsed = parse_structured_text(name, text)?;
                    return self.apply(graph, handle, &parsed, info);
                }
                _ => {}
            }
        }

        let value = self.decode(&*graph, external, info)?;
        *handle.get_mut(graph)? = value;
        Ok(())
    }

    fn apply_fields(
        &self,
        graph: &mut dyn ObjectGraph,
        handle: &PropertyHandle,
        name: &str,
        fields: &Map<String, JsonValue>,
    ) -> Result<()> {
        let writes = self.struct_fields(name, fields)?;
        let total = writes.len();
        for (applied, (field, external)) in writes.into_iter().enumerate() {
            let field_handle = handle.join(Step::Field(String::from(field.name())));
            if let Err(err) = self.apply(graph, &field_handle, external, field) {
                if applied > 0 {
                    log::warn!(
                        "`{name}` partially written, {applied} of {total} fields applied \
                         before `{}` failed: {err}",
                        field.name()
                    );
                }
                return Err(err);
            }
        }
        Ok(())
    }

    fn decode_enum(&self, name: &str, external: &JsonValue) -> Result<Value> {
        let Some(info) = self.directory.enum_info(name) else {
            return Err(Error::unsupported_type(name, "enum is not registered"));
        };
        let value = match external {
            JsonValue::String(text) => info.parse(text).or_else(|| {
                let raw = text.trim().parse::<i64>().ok()?;
                info.contains_value(raw).then_some(raw)
            }),
            JsonValue::Number(number) => number.as_i64().filter(|raw| info.contains_value(*raw)),
            _ => None,
        };
        value
            .map(Value::Enum)
            .ok_or_else(|| Error::format(name, alloc::format!("`{external}` is not a variant")))
    }

    fn decode_object(
        &self,
        graph: &dyn ObjectGraph,
        class: &str,
        external: &JsonValue,
    ) -> Result<Value> {
        let path = match external {
            JsonValue::Null => return Ok(Value::Object(None)),
            JsonValue::String(path) => path,
            _ => return Err(Error::format(class, "expected an object path or null")),
        };
        let Some(id) = graph.find_object(path) else {
            return Err(Error::format(class, alloc::format!("no object at `{path}`")));
        };
        let actual = graph.class_of(id).unwrap_or_default();
        if !self.directory.is_subclass_of(actual, class) {
            return Err(Error::format(class, alloc::format!("`{path}` is a `{actual}`")));
        }
        Ok(Value::Object(Some(id)))
    }

    fn decode_struct(
        &self,
        graph: &dyn ObjectGraph,
        name: &str,
        external: &JsonValue,
    ) -> Result<DynamicStruct> {
        if let JsonValue::String(text) = external {
            let parsed = parse_structured_text(name, text)?;
            return self.decode_struct(graph, name, &parsed);
        }
        if let Some(shape) = well_known::float_shape(name) {
            return shape.decode(external);
        }
        if self.directory.struct_info(name).is_none() {
            return Err(Error::unsupported_type(name, "struct is not registered"));
        }

        let JsonValue::Object(fields) = external else {
            return Err(Error::format(name, "expected an object of fields"));
        };
        let mut value = self.directory.instantiate(name);
        for (field, item) in self.struct_fields(name, fields)? {
            value.insert(field.name(), self.decode(graph, item, field)?);
        }
        Ok(value)
    }

    // Pairs each external field with its descriptor.
    fn struct_fields<'j>(
        &self,
        name: &str,
        fields: &'j Map<String, JsonValue>,
    ) -> Result<Vec<(&'a PropertyInfo, &'j JsonValue)>> {
        let directory: &'a dyn TypeDirectory = self.directory;
        if directory.struct_info(name).is_none() {
            return Err(Error::unsupported_type(name, "struct is not registered"));
        }

        let lenient = well_known::is_lenient(name);
        let mut pairs = Vec::with_capacity(fields.len());
        for (key, item) in fields {
            match directory.find_property(name, key) {
                Some(field) => pairs.push((field, item)),
                None if lenient => log::trace!("`{name}` skips unknown field `{key}`"),
                None => {
                    return Err(Error::format(name, alloc::format!("unknown field `{key}`")));
                }
            }
        }
        if lenient && pairs.is_empty() {
            return Err(Error::format(name, "no recognized field"));
        }
        Ok(pairs)
    }

    fn encode_struct(
        &self,
        graph: &dyn ObjectGraph,
        name: &str,
        fields: &DynamicStruct,
    ) -> JsonValue {
        let map: Map<_, _> = fields
            .iter()
            .map(|(field, value)| {
                let external = match self.directory.find_property(name, field) {
                    Some(info) => self.encode(graph, value, info),
                    None => self.encode_untyped(graph, value),
                };
                (String::from(field), external)
            })
            .collect();
        JsonValue::Object(map)
    }

    /// Encodes `value` without a descriptor: enums become their raw values
    /// and map keys their display text.
    pub fn encode_untyped(&self, graph: &dyn ObjectGraph, value: &Value) -> JsonValue {
        match value {
            Value::Bool(value) => JsonValue::Bool(*value),
            Value::Int(value) | Value::Enum(value) => JsonValue::from(*value),
            Value::Float(value) => float_to_json(*value),
            Value::String(text) | Value::Text(text) => JsonValue::from(text.as_str()),
            Value::Name(name) => JsonValue::from(name.as_str()),
            Value::Struct(fields) => JsonValue::Object(
                fields
                    .iter()
                    .map(|(field, value)| (String::from(field), self.encode_untyped(graph, value)))
                    .collect(),
            ),
            Value::List(items) => {
                items.iter().map(|item| self.encode_untyped(graph, item)).collect()
            }
            Value::Set(items) => {
                items.iter().map(|item| self.encode_untyped(graph, item)).collect()
            }
            Value::Map(entries) => JsonValue::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), self.encode_untyped(graph, v)))
                    .collect(),
            ),
            Value::Object(id) => match id.and_then(|id| graph.object_path(id)) {
                Some(path) => JsonValue::from(path),
                None => JsonValue::Null,
            },
        }
    }
}

fn expect_array<'j>(info: &PropertyInfo, external: &'j JsonValue) -> Result<&'j Vec<JsonValue>> {
    match external {
        JsonValue::Array(items) => Ok(items),
        _ => Err(Error::format(info.type_name(), "expected an array")),
    }
}

// Parses JSON text standing in for a struct. Nested strings are rejected so
// that text cannot recurse.
fn parse_structured_text(name: &str, text: &str) -> Result<JsonValue> {
    match serde_json::from_str::<JsonValue>(text) {
        Ok(JsonValue::String(_)) => Err(Error::format(name, "structured text holds a string")),
        Ok(parsed) => Ok(parsed),
        Err(err) => Err(Error::format(name, alloc::format!("invalid structured text: {err}"))),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use serde_json::{Value as JsonValue, json};
    use vc_reflect::graph::ObjectGraph;
    use vc_reflect::info::PropertyInfo;
    use vc_reflect::registry::TypeDirectory;
    use vc_reflect::value::{DynamicStruct, Value};

    use super::Codec;
    use crate::ErrorKind;
    use crate::fixtures::{PANEL, TEXTURE, fixture};
    use crate::resolve::{PropertyHandle, Step};

    #[test]
    fn round_trips() {
        let fx = fixture();
        let codec = Codec::new(&fx.types);
        let cases = [
            (PropertyInfo::bool("B"), Value::Bool(true)),
            (PropertyInfo::byte("B"), Value::Int(200)),
            (PropertyInfo::int("I"), Value::Int(-12)),
            (PropertyInfo::float("F"), Value::Float(0.25)),
            (PropertyInfo::string("S"), Value::from("hello")),
            (PropertyInfo::text("T"), Value::Text(String::from("Play"))),
            (PropertyInfo::enumeration("E", "WidgetVisibility"), Value::Enum(2)),
            (PropertyInfo::object("O", "Texture2D"), Value::Object(Some(fx.texture))),
            (PropertyInfo::object("O", "Texture2D"), Value::Object(None)),
            (
                PropertyInfo::structure("V", "Vector2D"),
                Value::Struct(DynamicStruct::from_fields("Vector2D", [
                    ("X", Value::Float(1.5)),
                    ("Y", Value::Float(-2.0)),
                ])),
            ),
            (
                PropertyInfo::structure("C", "LinearColor"),
                Value::Struct(DynamicStruct::from_fields("LinearColor", [
                    ("R", Value::Float(0.1)),
                    ("G", Value::Float(0.2)),
                    ("B", Value::Float(0.3)),
                    ("A", Value::Float(0.4)),
                ])),
            ),
            (
                PropertyInfo::structure("M", "Margin"),
                Value::Struct(fx.types.instantiate("Margin")),
            ),
            (
                PropertyInfo::structure("Brush", "SlateBrush"),
                Value::Struct(fx.types.instantiate("SlateBrush")),
            ),
            (
                PropertyInfo::structure("Style", "ButtonStyle"),
                Value::Struct(fx.types.instantiate("ButtonStyle")),
            ),
            (
                PropertyInfo::structure("Settings", "ButtonSettings"),
                Value::Struct(fx.types.instantiate("ButtonSettings")),
            ),
        ];

        for (info, value) in cases {
            let external = codec.encode(&fx.arena, &value, &info);
            let decoded = codec.decode(&fx.arena, &external, &info).unwrap();
            assert_eq!(decoded, value, "{} via {external}", info.type_name());
        }
    }

    #[test]
    fn enum_forms() {
        let fx = fixture();
        let codec = Codec::new(&fx.types);
        let info = PropertyInfo::enumeration("Visibility", "WidgetVisibility");

        let forms = [
            json!("Collapsed"),
            json!("WidgetVisibility::Collapsed"),
            json!(1),
            json!("1"),
        ];
        for external in forms {
            assert_eq!(codec.decode(&fx.arena, &external, &info).unwrap(), Value::Enum(1));
        }
        for external in [json!("Bogus"), json!(99), json!(true)] {
            let err = codec.decode(&fx.arena, &external, &info).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::FormatError);
        }
        assert_eq!(codec.encode(&fx.arena, &Value::Enum(1), &info), json!("Collapsed"));
    }

    #[test]
    fn object_references() {
        let fx = fixture();
        let codec = Codec::new(&fx.types);
        let icon = PropertyInfo::object("Icon", "Texture2D");

        let value = codec.decode(&fx.arena, &json!(TEXTURE), &icon).unwrap();
        assert_eq!(value, Value::Object(Some(fx.texture)));
        assert_eq!(codec.encode(&fx.arena, &value, &icon), json!(TEXTURE));

        for external in [json!("/Game/Missing"), json!(PANEL), json!(3)] {
            let err = codec.decode(&fx.arena, &external, &icon).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::FormatError);
        }
    }

    #[test]
    fn structs_from_text() {
        let fx = fixture();
        let codec = Codec::new(&fx.types);
        let info = PropertyInfo::structure("Settings", "ButtonSettings");

        let value = codec
            .decode(&fx.arena, &json!(r#"{ "ClickCount": 3, "Size": [4, 5] }"#), &info)
            .unwrap();
        let settings = value.as_struct().unwrap();
        assert_eq!(settings.get("ClickCount"), Some(&Value::Int(3)));
        assert_eq!(settings.get("Label"), Some(&Value::from("")));

        for text in ["{ oops", r#""nested""#] {
            let err = codec.decode(&fx.arena, &json!(text), &info).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::FormatError);
        }

        let err = codec.decode(&fx.arena, &json!({ "Clicks": 3 }), &info).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);

        let tint = PropertyInfo::structure("Tint", "LinearColor");
        let value = codec.decode(&fx.arena, &json!("[0, 1, 0]"), &tint).unwrap();
        assert_eq!(value.as_struct().unwrap().get("A"), Some(&Value::Float(1.0)));
    }

    #[test]
    fn unknown_structs_are_unsupported() {
        let fx = fixture();
        let codec = Codec::new(&fx.types);
        let info = PropertyInfo::structure("Mystery", "Mystery");
        for external in [json!({}), json!([1, 2])] {
            let err = codec.decode(&fx.arena, &external, &info).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedType);
        }
    }

    #[test]
    fn brush_fields() {
        let fx = fixture();
        let codec = Codec::new(&fx.types);
        let info = PropertyInfo::structure("Brush", "SlateBrush");

        let external = json!({
            "ResourceObject": TEXTURE,
            "DrawAs": "Box",
            "Tiling": "Both",
            "TintColor": [1, 0, 0],
            "Junk": 1
        });
        let value = codec.decode(&fx.arena, &external, &info).unwrap();
        let brush = value.as_struct().unwrap();
        assert_eq!(brush.get("ResourceObject"), Some(&Value::Object(Some(fx.texture))));
        assert_eq!(brush.get("DrawAs"), Some(&Value::Enum(1)));
        assert_eq!(brush.get("Tiling"), Some(&Value::Enum(3)));
        let tint = brush.get("TintColor").and_then(Value::as_struct).unwrap();
        assert_eq!(tint.get("A"), Some(&Value::Float(1.0)));

        let err = codec.decode(&fx.arena, &json!({ "Junk": 1 }), &info).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);
        let err = codec.decode(&fx.arena, &json!({ "DrawAs": "Sphere" }), &info).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);
    }

    #[test]
    fn collections() {
        let fx = fixture();
        let codec = Codec::new(&fx.types);

        let tags = PropertyInfo::set("Tags", PropertyInfo::identifier("Tags"));
        let value = codec.decode(&fx.arena, &json!(["a", "A", "b"]), &tags).unwrap();
        assert_eq!(value.collection_len(), Some(2));

        let scores =
            PropertyInfo::map("Scores", PropertyInfo::int("Key"), PropertyInfo::float("Value"));
        let value = codec.decode(&fx.arena, &json!({ "42": 1.5, "7": 2 }), &scores).unwrap();
        assert_eq!(value.as_map().unwrap().get(&Value::Int(7)), Some(&Value::Float(2.0)));
        assert_eq!(codec.encode(&fx.arena, &value, &scores), json!({ "42": 1.5, "7": 2.0 }));

        let err = codec.decode(&fx.arena, &json!({ "x": 1 }), &scores).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);

        let offsets = PropertyInfo::list("Offsets", PropertyInfo::int("Offsets"));
        let err = codec.decode(&fx.arena, &json!([1, "two"]), &offsets).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);
        let err = codec.decode(&fx.arena, &json!(1), &offsets).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);
    }

    #[test]
    fn apply_keeps_fields_written_before_a_failure() {
        let mut fx = fixture();
        let codec = Codec::new(&fx.types);
        let style = fx.types.find_property("Button", "Style").unwrap();
        let handle = PropertyHandle::new(fx.button).join(Step::Field(String::from("Style")));

        // Fields are written in the order given: `Hovered` is written, `Normal` fails.
        let external = json!({
            "Hovered": { "TintColor": [1, 0, 0] },
            "Normal": { "DrawAs": "Sphere" }
        });
        let err = codec.apply(&mut fx.arena, &handle, &external, style).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);

        let red = handle
            .join(Step::Field(String::from("Hovered")))
            .join(Step::Field(String::from("TintColor")))
            .join(Step::Field(String::from("R")));
        assert_eq!(red.get(&fx.arena).unwrap(), &Value::Float(1.0));
    }

    #[test]
    fn apply_stops_at_the_first_failing_field() {
        let mut fx = fixture();
        let codec = Codec::new(&fx.types);
        let style = fx.types.find_property("Button", "Style").unwrap();
        let handle = PropertyHandle::new(fx.button).join(Step::Field(String::from("Style")));

        let external = json!({
            "Normal": { "DrawAs": "Sphere" },
            "Hovered": { "TintColor": [1, 0, 0] }
        });
        let err = codec.apply(&mut fx.arena, &handle, &external, style).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);

        let red = handle
            .join(Step::Field(String::from("Hovered")))
            .join(Step::Field(String::from("TintColor")))
            .join(Step::Field(String::from("R")));
        assert_eq!(red.get(&fx.arena).unwrap(), &Value::Float(0.0));
    }

    #[test]
    fn apply_structured_text() {
        let mut fx = fixture();
        let codec = Codec::new(&fx.types);
        let settings = fx.types.find_property("Button", "Settings").unwrap();
        let handle = PropertyHandle::new(fx.button).join(Step::Field(String::from("Settings")));

        let external = JsonValue::from(r#"{ "Label": "Go" }"#);
        codec.apply(&mut fx.arena, &handle, &external, settings).unwrap();
        let label = handle.join(Step::Field(String::from("Label")));
        assert_eq!(label.get(&fx.arena).unwrap(), &Value::from("Go"));

        // Nothing is written when the text does not parse.
        let err = codec.apply(&mut fx.arena, &handle, &json!("{"), settings).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);
        assert_eq!(label.get(&fx.arena).unwrap(), &Value::from("Go"));
        assert!(fx.arena.contains(fx.button));
    }
}
