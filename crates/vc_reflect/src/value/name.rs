use alloc::string::String;
use core::fmt;

/// An identifier value, compared **case-insensitively** (ASCII).
///
/// The original spelling is preserved for display.
///
/// # Examples
///
/// ```
/// use vc_reflect::value::Name;
///
/// assert_eq!(Name::from("Admin"), Name::from("admin"));
/// assert_eq!(Name::from("Admin").as_str(), "Admin");
/// ```
#[derive(Clone, Default)]
pub struct Name(String);

impl Name {
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty name.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for Name {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Name {}

impl PartialEq<str> for Name {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl From<&str> for Name {
    #[inline]
    fn from(value: &str) -> Self {
        Self(String::from(value))
    }
}

impl From<String> for Name {
    #[inline]
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", self.0)
    }
}

impl fmt::Display for Name {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
