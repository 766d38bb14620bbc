use crate::info::{EnumInfo, KindError, ReflectKind, StructInfo};

/// Type information stored in a [`TypeDirectory`](crate::registry::TypeDirectory).
///
/// Only named types are stored: structs (including object classes) and
/// enumerations. Primitives and collections are fully described by their
/// [`PropertyKind`](crate::info::PropertyKind).
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Enum(EnumInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, KindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(KindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);

    /// Returns the [`ReflectKind`] of the stored type.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Enum(_) => ReflectKind::Enum,
        }
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        match self {
            Self::Struct(info) => info.name(),
            Self::Enum(info) => info.name(),
        }
    }
}

impl From<StructInfo> for TypeInfo {
    #[inline]
    fn from(value: StructInfo) -> Self {
        Self::Struct(value)
    }
}

impl From<EnumInfo> for TypeInfo {
    #[inline]
    fn from(value: EnumInfo) -> Self {
        Self::Enum(value)
    }
}
