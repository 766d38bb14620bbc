use alloc::string::String;

use crate::hash::HashMap;
use crate::info::TypeInfo;
use crate::registry::{TypeDirectory, builtin};

// -----------------------------------------------------------------------------
// TypeTable

/// An in-memory [`TypeDirectory`].
///
/// Types are keyed by name; a name can be registered once.
///
/// # Example
///
/// ```
/// use vc_reflect::info::{PropertyInfo, StructInfo};
/// use vc_reflect::registry::{TypeDirectory, TypeTable};
///
/// let mut table = TypeTable::new();
/// table.register(StructInfo::new("Widget", [PropertyInfo::bool("bIsEnabled")]).with_super("Object"));
/// table.register(StructInfo::new("Button", [PropertyInfo::structure("Style", "ButtonStyle")]).with_super("Widget"));
///
/// assert!(table.find_property("Button", "bIsEnabled").is_some());
/// assert!(table.is_subclass_of("Button", "Object"));
/// ```
#[derive(Debug, Clone)]
pub struct TypeTable {
    types: HashMap<String, TypeInfo>,
}

impl Default for TypeTable {
    /// See [`TypeTable::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    /// Creates an empty [`TypeTable`].
    #[inline]
    pub fn empty() -> Self {
        Self {
            types: HashMap::default(),
        }
    }

    /// Creates a table with the [builtin](builtin) types registered.
    ///
    /// - `Object`, the root class
    /// - `Vector2D` `Margin` `LinearColor`
    /// - `SlateBrush` `ButtonStyle`
    /// - `SlateBrushDrawType` `SlateBrushTileType`
    pub fn new() -> Self {
        let mut table = Self::empty();
        builtin::register_builtin_types(&mut table);
        table
    }

    /// Registers a type if its name is not taken yet.
    ///
    /// Returns `false` and leaves the table unchanged if the name exists.
    pub fn register(&mut self, info: impl Into<TypeInfo>) -> bool {
        let info = info.into();
        if self.types.contains_key(info.name()) {
            log::debug!("type `{}` is already registered", info.name());
            return false;
        }
        self.types.insert(String::from(info.name()), info);
        true
    }

    /// Registers a type, **overwriting** any existing registration.
    pub fn insert(&mut self, info: impl Into<TypeInfo>) {
        let info = info.into();
        self.types.insert(String::from(info.name()), info);
    }

    /// Removes and returns the type registered under `name`.
    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<TypeInfo> {
        self.types.remove(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns an iterator over all registered types, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeInfo> {
        self.types.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }
}

impl TypeDirectory for TypeTable {
    #[inline]
    fn type_info(&self, name: &str) -> Option<&TypeInfo> {
        self.types.get(name)
    }
}

// -----------------------------------------------------------------------------
// Tests
