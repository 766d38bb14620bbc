//! Value types with dedicated external forms.
//!
//! `Vector2D`, `Margin` and `LinearColor` are all-float structs that also
//! accept a positional array. `SlateBrush` and `ButtonStyle` decode
//! leniently: unknown fields are skipped, but at least one field must be
//! recognized.

use alloc::string::String;

use serde_json::{Map, Value as JsonValue};
use vc_reflect::registry::builtin::{BUTTON_STYLE, LINEAR_COLOR, MARGIN, SLATE_BRUSH, VECTOR2D};
use vc_reflect::value::{DynamicStruct, Value};

use super::scalar::{decode_float, float_to_json};
use crate::{Error, Result};

/// An all-float struct with a positional form.
#[derive(Debug)]
pub(crate) struct FloatShape {
    name: &'static str,
    fields: &'static [&'static str],
    // Positional arrays may omit trailing fields past this count.
    required: usize,
    // Value of omitted trailing fields.
    fill: f64,
    // A single number sets every field.
    uniform: bool,
}

static FLOAT_SHAPES: [FloatShape; 3] = [
    FloatShape {
        name: VECTOR2D,
        fields: &["X", "Y"],
        required: 2,
        fill: 0.0,
        uniform: false,
    },
    FloatShape {
        name: MARGIN,
        fields: &["Left", "Top", "Right", "Bottom"],
        required: 4,
        fill: 0.0,
        uniform: true,
    },
    FloatShape {
        name: LINEAR_COLOR,
        fields: &["R", "G", "B", "A"],
        required: 3,
        fill: 1.0,
        uniform: false,
    },
];

pub(crate) fn float_shape(type_name: &str) -> Option<&'static FloatShape> {
    FLOAT_SHAPES.iter().find(|shape| shape.name == type_name)
}

/// Returns `true` for structs whose unknown fields are skipped on decode.
pub(crate) fn is_lenient(type_name: &str) -> bool {
    type_name == SLATE_BRUSH || type_name == BUTTON_STYLE
}

impl FloatShape {
    pub(crate) fn decode(&self, external: &JsonValue) -> Result<DynamicStruct> {
        let mut values = alloc::vec![self.fill; self.fields.len()];
        match external {
            JsonValue::Array(items) => {
                if items.len() < self.required || items.len() > self.fields.len() {
                    return Err(self.error(alloc::format!(
                        "expected {}..={} numbers, got {}",
                        self.required,
                        self.fields.len(),
                        items.len()
                    )));
                }
                for (slot, item) in values.iter_mut().zip(items) {
                    *slot = self.number(item)?;
                }
            }
            JsonValue::Object(map) => self.decode_fields(map, &mut values)?,
            JsonValue::Number(_) if self.uniform => {
                let value = self.number(external)?;
                values.iter_mut().for_each(|slot| *slot = value);
            }
            _ => {
                return Err(self.error(alloc::format!(
                    "expected an object with {:?} or an array",
                    self.fields
                )));
            }
        }

        let fields = self.fields.iter().zip(values).map(|(f, v)| (*f, Value::Float(v)));
        Ok(DynamicStruct::from_fields(self.name, fields))
    }

    fn decode_fields(&self, map: &Map<String, JsonValue>, values: &mut [f64]) -> Result<()> {
        if let Some(unknown) = map.keys().find(|k| !self.fields.contains(&k.as_str())) {
            return Err(self.error(alloc::format!("unknown field `{unknown}`")));
        }
        for (index, field) in self.fields.iter().enumerate() {
            match map.get(*field) {
                Some(value) => values[index] = self.number(value)?,
                None if index >= self.required => {}
                None => return Err(self.error(alloc::format!("missing field `{field}`"))),
            }
        }
        Ok(())
    }

    pub(crate) fn encode(&self, value: &DynamicStruct) -> JsonValue {
        let map: Map<_, _> = self
            .fields
            .iter()
            .map(|field| {
                let number = value.get(field).and_then(Value::as_float).unwrap_or(self.fill);
                (String::from(*field), float_to_json(number))
            })
            .collect();
        JsonValue::Object(map)
    }

    fn number(&self, item: &JsonValue) -> Result<f64> {
        decode_float(item).map_err(|_| self.error(alloc::format!("`{item}` is not a number")))
    }

    fn error(&self, reason: String) -> Error {
        Error::format(self.name, reason)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use serde_json::json;
    use vc_reflect::value::{DynamicStruct, Value};

    use super::float_shape;
    use crate::ErrorKind;

    #[test]
    fn color_alpha_defaults_to_one() {
        let shape = float_shape("LinearColor").unwrap();
        let color = shape.decode(&json!([1.0, 0.5, 0.0])).unwrap();
        let expected = DynamicStruct::from_fields("LinearColor", [
            ("R", Value::Float(1.0)),
            ("G", Value::Float(0.5)),
            ("B", Value::Float(0.0)),
            ("A", Value::Float(1.0)),
        ]);
        assert_eq!(color, expected);

        let color = shape.decode(&json!({ "R": 0, "G": 0, "B": 1 })).unwrap();
        assert_eq!(color.get("A"), Some(&Value::Float(1.0)));

        assert_eq!(shape.decode(&json!([1, 2])).unwrap_err().kind(), ErrorKind::FormatError);
        let err = shape.decode(&json!([1, 2, 3, 4, 5])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);
    }

    #[test]
    fn margin_forms() {
        let shape = float_shape("Margin").unwrap();
        let uniform = shape.decode(&json!(4)).unwrap();
        assert!(uniform.iter().all(|(_, v)| *v == Value::Float(4.0)));

        let array = shape.decode(&json!([1, 2, 3, 4])).unwrap();
        let object = shape
            .decode(&json!({ "Left": 1, "Top": 2, "Right": 3, "Bottom": 4 }))
            .unwrap();
        assert_eq!(array, object);
        assert_eq!(shape.decode(&shape.encode(&array)).unwrap(), array);

        let err = shape.decode(&json!({ "Left": 1, "Top": 2, "Right": 3 })).unwrap_err();
        assert!(err.to_string().contains("missing field `Bottom`"));
    }

    #[test]
    fn vector_rejects_unknown_fields() {
        let shape = float_shape("Vector2D").unwrap();
        let err = shape.decode(&json!({ "X": 1, "Y": 2, "Z": 3 })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);
        assert_eq!(shape.decode(&json!(1)).unwrap_err().kind(), ErrorKind::FormatError);
    }
}
