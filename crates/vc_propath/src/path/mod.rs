//! Path strings and their parsed form.
//!
//! ```text
//! path     := [ alternate-root "." ] segment ( "." segment )*
//! segment  := name [ "[" ( digits | key-text ) "]" ]
//! ```
//!
//! The alternate root token defaults to `Slot` and is matched
//! case-insensitively. Keys are taken verbatim; there is no escaping, so a
//! key cannot contain `.`, `[` or `]`.

// -----------------------------------------------------------------------------
// Modules

mod parser;
mod segment;

// -----------------------------------------------------------------------------
// Exports

pub use segment::{Segment, Selector};

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::Error;
use crate::config::DEFAULT_ALTERNATE_ROOT;

// -----------------------------------------------------------------------------
// PropertyPath

/// A parsed, non-empty property path.
///
/// # Examples
///
/// ```
/// use vc_propath::path::{PropertyPath, Selector};
///
/// let path = PropertyPath::parse("Slot.Items[2].Name").unwrap();
/// assert!(path.roots_at_alternate_root());
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.segments()[0].selector(), Some(&Selector::Index(2)));
/// assert_eq!(path.to_string(), "Slot.Items[2].Name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    alternate_root: Option<String>,
    segments: Vec<Segment>,
}

impl PropertyPath {
    /// Parses `path` using the default alternate root token, `Slot`.
    #[inline]
    pub fn parse(path: &str) -> Result<Self, Error> {
        parser::parse(path, DEFAULT_ALTERNATE_ROOT)
    }

    /// Parses `path`, treating a leading `token` as the alternate root.
    #[inline]
    pub fn parse_with(path: &str, token: &str) -> Result<Self, Error> {
        parser::parse(path, token)
    }

    /// Returns `true` if resolution starts at the root's alternate root.
    #[inline]
    pub fn roots_at_alternate_root(&self) -> bool {
        self.alternate_root.is_some()
    }

    /// Returns the alternate root token as written.
    #[inline]
    pub fn alternate_root(&self) -> Option<&str> {
        self.alternate_root.as_deref()
    }

    /// Returns the segments; never empty.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns the final segment.
    #[inline]
    pub fn last(&self) -> &Segment {
        // `parser::parse` never produces an empty path.
        &self.segments[self.segments.len() - 1]
    }
}

impl FromStr for PropertyPath {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(token) = &self.alternate_root {
            write!(f, "{token}.")?;
        }
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(segment, f)?;
        }
        Ok(())
    }
}
