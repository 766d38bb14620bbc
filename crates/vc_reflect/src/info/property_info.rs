use alloc::boxed::Box;
use alloc::string::String;

use bitflags::bitflags;

use crate::info::{Metadata, PrimitiveKind, PropertyKind, ReflectKind};

bitflags! {
    /// Editor-facing flags of a [`PropertyInfo`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        /// Shown and editable in editor tooling.
        const EDITABLE = 1 << 0;
        /// Visible but not writable from editor tooling.
        const READ_ONLY = 1 << 1;
    }
}

impl Default for PropertyFlags {
    #[inline]
    fn default() -> Self {
        Self::EDITABLE
    }
}

/// Information for a named property of a struct or object class.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{PrimitiveKind, PropertyInfo, ReflectKind};
///
/// let info = PropertyInfo::float("Opacity")
///     .with_metadata("ClampMin", "0.0")
///     .with_metadata("ClampMax", "1.0");
///
/// assert_eq!(info.name(), "Opacity");
/// assert_eq!(info.reflect_kind(), ReflectKind::Primitive);
/// assert_eq!(info.metadata().get("ClampMax"), Some("1.0"));
///
/// let items = PropertyInfo::list("Items", PropertyInfo::string("Items"));
/// assert_eq!(items.type_name(), "List<String>");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInfo {
    name: String,
    kind: PropertyKind,
    flags: PropertyFlags,
    category: Option<String>,
    metadata: Metadata,
    declared_on: Option<String>,
}

impl PropertyInfo {
    /// Creates a new editable [`PropertyInfo`] without category or metadata.
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            flags: PropertyFlags::default(),
            category: None,
            metadata: Metadata::new(),
            declared_on: None,
        }
    }

    #[inline]
    pub fn primitive(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self::new(name, PropertyKind::Primitive(kind))
    }

    #[inline]
    pub fn bool(name: impl Into<String>) -> Self {
        Self::primitive(name, PrimitiveKind::Bool)
    }

    #[inline]
    pub fn byte(name: impl Into<String>) -> Self {
        Self::primitive(name, PrimitiveKind::Byte)
    }

    #[inline]
    pub fn int(name: impl Into<String>) -> Self {
        Self::primitive(name, PrimitiveKind::Int)
    }

    #[inline]
    pub fn float(name: impl Into<String>) -> Self {
        Self::primitive(name, PrimitiveKind::Float)
    }

    #[inline]
    pub fn string(name: impl Into<String>) -> Self {
        Self::primitive(name, PrimitiveKind::String)
    }

    #[inline]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::primitive(name, PrimitiveKind::Name)
    }

    #[inline]
    pub fn text(name: impl Into<String>) -> Self {
        Self::primitive(name, PrimitiveKind::Text)
    }

    #[inline]
    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::Enum(enum_name.into()))
    }

    #[inline]
    pub fn structure(name: impl Into<String>, struct_name: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::Struct(struct_name.into()))
    }

    #[inline]
    pub fn object(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::Object(class_name.into()))
    }

    #[inline]
    pub fn list(name: impl Into<String>, element: PropertyInfo) -> Self {
        Self::new(name, PropertyKind::List(Box::new(element)))
    }

    #[inline]
    pub fn set(name: impl Into<String>, element: PropertyInfo) -> Self {
        Self::new(name, PropertyKind::Set(Box::new(element)))
    }

    #[inline]
    pub fn map(name: impl Into<String>, key: PropertyInfo, value: PropertyInfo) -> Self {
        Self::new(name, PropertyKind::Map(Box::new(key), Box::new(value)))
    }

    /// Replaces the flags.
    #[inline]
    pub fn with_flags(self, flags: PropertyFlags) -> Self {
        Self { flags, ..self }
    }

    /// Marks the property as read-only for editor tooling.
    #[inline]
    pub fn read_only(self) -> Self {
        let flags = self.flags | PropertyFlags::READ_ONLY;
        Self { flags, ..self }
    }

    #[inline]
    pub fn with_category(self, category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..self
        }
    }

    /// Adds (or overwrites) a metadata entry.
    #[inline]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// Records the type that declares this property.
    ///
    /// Called by [`StructInfo::new`](crate::info::StructInfo::new).
    #[inline]
    pub(crate) fn set_declared_on(&mut self, owner: &str) {
        self.declared_on = Some(String::from(owner));
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    #[inline]
    pub fn reflect_kind(&self) -> ReflectKind {
        self.kind.reflect_kind()
    }

    /// See [`PropertyKind::type_name`].
    #[inline]
    pub fn type_name(&self) -> String {
        self.kind.type_name()
    }

    #[inline]
    pub fn flags(&self) -> PropertyFlags {
        self.flags
    }

    #[inline]
    pub fn is_editable(&self) -> bool {
        self.flags.contains(PropertyFlags::EDITABLE)
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.flags.contains(PropertyFlags::READ_ONLY)
    }

    #[inline]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the name of the struct or class that declares this property.
    ///
    /// `None` for element descriptors of collections.
    #[inline]
    pub fn declared_on(&self) -> Option<&str> {
        self.declared_on.as_deref()
    }
}
