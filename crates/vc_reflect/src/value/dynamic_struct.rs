use alloc::string::String;
use alloc::vec::Vec;

use crate::value::Value;

/// The storage of a struct value or of an object's properties.
///
/// Fields keep insertion order, which for instantiated values is the
/// declaration order of the type (super types first).
///
/// # Examples
///
/// ```
/// use vc_reflect::value::{DynamicStruct, Value};
///
/// let mut point = DynamicStruct::new("Vector2D");
/// point.insert("X", Value::Float(1.0));
/// point.insert("Y", Value::Float(2.0));
///
/// assert_eq!(point.get("Y"), Some(&Value::Float(2.0)));
/// assert_eq!(point.index_of("X"), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DynamicStruct {
    type_name: String,
    fields: Vec<(String, Value)>,
}

impl DynamicStruct {
    /// Creates an empty struct of the given type.
    #[inline]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a struct from `(name, value)` pairs.
    pub fn from_fields<N: Into<String>>(
        type_name: impl Into<String>,
        fields: impl IntoIterator<Item = (N, Value)>,
    ) -> Self {
        let mut value = Self::new(type_name);
        for (name, field) in fields {
            value.insert(name, field);
        }
        value
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Sets `name` to `value`, returning the previous value.
    ///
    /// A new field is appended after the existing ones.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<(&str, &Value)> {
        self.fields.get(index).map(|(n, v)| (n.as_str(), v))
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(n, _)| n == name)
    }

    /// Returns an iterator over `(name, value)` in field order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
