//! Request and response types of the [`Inspector`](crate::Inspector).
//!
//! Every type uses camelCase field names on the wire.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use vc_reflect::info::PropertyInfo;

use crate::constraints::ConstraintSet;
use crate::mutate::{CollectionOp, CollectionOpKind};
use crate::{Error, ErrorKind};

// -----------------------------------------------------------------------------
// Get

/// Reads the property at `path`, starting from the object at `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRequest {
    /// Object path of the root object.
    pub root: String,
    pub path: String,
}

impl GetRequest {
    #[inline]
    pub fn new(root: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResponse {
    pub value: JsonValue,
    /// The native type name, such as `Float`, `Vector2D` or `Map<Int, Float>`.
    pub native_type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ConstraintSet>,
}

// -----------------------------------------------------------------------------
// Set

/// Writes `value` to the property at `path`, or applies `collection_op`
/// to the collection there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRequest {
    pub root: String,
    pub path: String,
    #[serde(default)]
    pub value: JsonValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_op: Option<CollectionOp>,
}

impl SetRequest {
    #[inline]
    pub fn new(root: impl Into<String>, path: impl Into<String>, value: JsonValue) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
            value,
            collection_op: None,
        }
    }

    /// Turns the request into a collection operation.
    #[inline]
    pub fn with_op(mut self, op: CollectionOp) -> Self {
        self.collection_op = Some(op);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetResponse {
    /// The value read back after the write.
    pub applied_value: JsonValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_op: Option<CollectionOpKind>,
    /// Element count after a collection operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
}

// -----------------------------------------------------------------------------
// Batch

/// The failure of one batch entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&Error> for ErrorReport {
    fn from(err: &Error) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// The outcome of one batch entry: `value` on success, `error` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    pub path: String,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl BatchItem {
    pub fn success(path: impl Into<String>, value: JsonValue) -> Self {
        Self {
            path: path.into(),
            ok: true,
            value: Some(value),
            error: None,
        }
    }

    pub fn failure(path: impl Into<String>, error: &Error) -> Self {
        Self {
            path: path.into(),
            ok: false,
            value: None,
            error: Some(ErrorReport::from(error)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub results: Vec<BatchItem>,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchResponse {
    pub fn push(&mut self, item: BatchItem) {
        if item.ok {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(item);
    }
}

impl FromIterator<BatchItem> for BatchResponse {
    fn from_iter<T: IntoIterator<Item = BatchItem>>(iter: T) -> Self {
        let mut response = Self::default();
        iter.into_iter().for_each(|item| response.push(item));
        response
    }
}

// -----------------------------------------------------------------------------
// List properties

/// Lists the properties of a struct or object class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPropertiesRequest {
    pub type_name: String,
    #[serde(default)]
    pub include_non_editable: bool,
}

impl ListPropertiesRequest {
    #[inline]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            include_non_editable: false,
        }
    }

    #[inline]
    pub fn include_non_editable(mut self) -> Self {
        self.include_non_editable = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub name: String,
    /// The reflect kind: `Primitive`, `Enum`, `Struct`, `Object`, `List`,
    /// `Map` or `Set`.
    pub kind: String,
    pub native_type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_read_only: bool,
    pub is_collection: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_on: Option<String>,
}

impl From<&PropertyInfo> for PropertySummary {
    fn from(info: &PropertyInfo) -> Self {
        let kind = info.reflect_kind();
        Self {
            name: String::from(info.name()),
            kind: kind.to_string(),
            native_type_name: info.type_name(),
            category: info.category().map(String::from),
            is_read_only: info.is_read_only(),
            is_collection: kind.is_collection(),
            declared_on: info.declared_on().map(String::from),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
