use alloc::string::String;
use alloc::vec::Vec;

/// Storage width of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumRepr {
    /// Byte-backed, values in `0..=255`.
    #[default]
    U8,
    I64,
}

impl EnumRepr {
    /// Returns `true` if `value` fits the storage width.
    #[inline]
    pub const fn contains(self, value: i64) -> bool {
        match self {
            Self::U8 => 0 <= value && value <= u8::MAX as i64,
            Self::I64 => true,
        }
    }
}

/// A container for enumeration info.
///
/// Variants keep their **declaration order**, which is also the order
/// reported to clients as the list of choices.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{EnumInfo, EnumRepr};
///
/// let info = EnumInfo::new("Visibility", EnumRepr::U8, [
///     ("Visible", 0),
///     ("Collapsed", 1),
///     ("Hidden", 2),
/// ]);
///
/// assert_eq!(info.value_of("Hidden"), Some(2));
/// assert_eq!(info.name_of(1), Some("Collapsed"));
/// assert_eq!(info.parse("Visibility::Collapsed"), Some(1));
/// assert!(info.repr().contains(255));
/// assert!(!info.repr().contains(256));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumInfo {
    name: String,
    repr: EnumRepr,
    variants: Vec<(String, i64)>,
}

impl EnumInfo {
    /// Creates a new [`EnumInfo`].
    pub fn new<N: Into<String>>(
        name: impl Into<String>,
        repr: EnumRepr,
        variants: impl IntoIterator<Item = (N, i64)>,
    ) -> Self {
        Self {
            name: name.into(),
            repr,
            variants: variants.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        }
    }

    /// Creates an enumeration whose values are the declaration indices.
    pub fn sequential<N: Into<String>>(
        name: impl Into<String>,
        repr: EnumRepr,
        variants: impl IntoIterator<Item = N>,
    ) -> Self {
        Self::new(name, repr, variants.into_iter().zip(0..))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn repr(&self) -> EnumRepr {
        self.repr
    }

    /// Returns the value of the variant named `name`.
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.variants
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Returns the first variant name whose value is `value`.
    pub fn name_of(&self, value: i64) -> Option<&str> {
        self.variants
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(n, _)| n.as_str())
    }

    /// Returns `true` if some variant has the value `value`.
    #[inline]
    pub fn contains_value(&self, value: i64) -> bool {
        self.variants.iter().any(|(_, v)| *v == value)
    }

    /// Parses a symbolic name, optionally qualified as `Enum::Name`.
    pub fn parse(&self, text: &str) -> Option<i64> {
        let short = match text.rsplit_once("::") {
            Some((prefix, short)) if prefix == self.name => short,
            _ => text,
        };
        self.value_of(short)
    }

    /// Returns an iterator over `(name, value)` in **declaration order**.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, i64)> {
        self.variants.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Returns an iterator over the variant names in **declaration order**.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.variants.iter().map(|(n, _)| n.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.variants.len()
    }
}
