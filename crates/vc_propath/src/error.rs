use alloc::borrow::Cow;
use alloc::string::String;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The category of an [`Error`], as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed path string.
    ParseError,
    PropertyNotFound,
    IndexOutOfBounds,
    KeyNotFound,
    /// Descending into a leaf or a set, or a collection addressed without
    /// an index or key before the last segment.
    UnsupportedTraversal,
    /// A null object reference or missing alternate root before the last segment.
    NullReference,
    /// An external value of the wrong shape.
    FormatError,
    /// No conversion exists for the resolved kind.
    UnsupportedType,
    /// The root reference of a request names no object.
    ObjectNotFound,
}

/// An error raised while parsing, resolving, converting or mutating.
///
/// Every error is recoverable: nothing is left half-resolved, and batch
/// operations turn each error into a per-item failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("failed to parse `{path}` at offset {offset}: {reason}")]
    Parse {
        path: String,
        offset: usize,
        reason: Cow<'static, str>,
    },
    #[error("property `{segment}` not found on `{type_name}`")]
    PropertyNotFound { segment: String, type_name: String },
    #[error("`{segment}`: index {index} (len={len}) is out of bounds")]
    IndexOutOfBounds {
        segment: String,
        index: usize,
        len: usize,
    },
    #[error("`{segment}`: key `{key}` not found (len={len})")]
    KeyNotFound {
        segment: String,
        key: String,
        len: usize,
    },
    #[error("`{segment}`: {reason}")]
    UnsupportedTraversal {
        segment: String,
        reason: Cow<'static, str>,
    },
    #[error("`{segment}`: null reference")]
    NullReference { segment: String },
    #[error("invalid value for `{expected}`: {reason}")]
    Format { expected: String, reason: String },
    #[error("unsupported type `{type_name}`: {reason}")]
    UnsupportedType {
        type_name: String,
        reason: Cow<'static, str>,
    },
    #[error("object `{0}` not found")]
    ObjectNotFound(String),
}

impl Error {
    /// Returns the [`ErrorKind`] of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::ParseError,
            Self::PropertyNotFound { .. } => ErrorKind::PropertyNotFound,
            Self::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            Self::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            Self::UnsupportedTraversal { .. } => ErrorKind::UnsupportedTraversal,
            Self::NullReference { .. } => ErrorKind::NullReference,
            Self::Format { .. } => ErrorKind::FormatError,
            Self::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            Self::ObjectNotFound(_) => ErrorKind::ObjectNotFound,
        }
    }

    pub(crate) fn format(expected: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            expected: expected.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported_type(
        type_name: impl Into<String>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn traversal(
        segment: impl Into<String>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::UnsupportedTraversal {
            segment: segment.into(),
            reason: reason.into(),
        }
    }
}

/// Result type of this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
