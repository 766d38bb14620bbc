use alloc::string::String;
use alloc::vec::Vec;

use crate::hash::HashMap;
use crate::info::PropertyInfo;

/// A container for struct and object class info.
///
/// Properties keep their **declaration order**. Inherited properties are not
/// copied; [`super_name`](Self::super_name) names the parent type and the
/// [`TypeDirectory`](crate::registry::TypeDirectory) walks the chain.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{PropertyInfo, StructInfo};
///
/// let info = StructInfo::new("Vector2D", [
///     PropertyInfo::float("X"),
///     PropertyInfo::float("Y"),
/// ]);
///
/// assert_eq!(info.len(), 2);
/// assert_eq!(info.index_of("Y"), Some(1));
/// assert_eq!(info.property("X").unwrap().declared_on(), Some("Vector2D"));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    name: String,
    super_name: Option<String>,
    properties: Vec<PropertyInfo>,
    indices: HashMap<String, usize>,
}

impl StructInfo {
    /// Creates a new [`StructInfo`].
    ///
    /// Duplicate property names keep the first declaration.
    pub fn new(
        name: impl Into<String>,
        properties: impl IntoIterator<Item = PropertyInfo>,
    ) -> Self {
        let name = name.into();
        let mut list: Vec<PropertyInfo> = Vec::new();
        let mut indices = HashMap::default();

        for mut property in properties {
            if indices.contains_key(property.name()) {
                log::warn!("`{name}` declares property `{}` twice", property.name());
                continue;
            }
            property.set_declared_on(&name);
            indices.insert(String::from(property.name()), list.len());
            list.push(property);
        }

        Self {
            name,
            super_name: None,
            properties: list,
            indices,
        }
    }

    /// Sets the parent type.
    #[inline]
    pub fn with_super(self, super_name: impl Into<String>) -> Self {
        Self {
            super_name: Some(super_name.into()),
            ..self
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn super_name(&self) -> Option<&str> {
        self.super_name.as_deref()
    }

    /// Returns the property declared directly on this type with the given `name`.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.indices.get(name).map(|&index| &self.properties[index])
    }

    /// Returns the property at the given declaration index.
    #[inline]
    pub fn property_at(&self, index: usize) -> Option<&PropertyInfo> {
        self.properties.get(index)
    }

    /// Returns an iterator over the properties in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &PropertyInfo> {
        self.properties.iter()
    }

    /// Returns the declaration index of `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns the number of properties declared directly on this type.
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }
}
