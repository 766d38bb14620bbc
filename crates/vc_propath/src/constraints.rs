//! Enum choices and numeric ranges declared on a property.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use vc_reflect::info::{PropertyInfo, PropertyKind};
use vc_reflect::registry::TypeDirectory;

use crate::config::DEFAULT_SENTINEL_SUFFIX;

/// Metadata key of the hard minimum.
pub const CLAMP_MIN: &str = "ClampMin";
/// Metadata key of the hard maximum.
pub const CLAMP_MAX: &str = "ClampMax";
/// Metadata key of the soft minimum shown by editors.
pub const UI_MIN: &str = "UIMin";
/// Metadata key of the soft maximum shown by editors.
pub const UI_MAX: &str = "UIMax";

/// Constraints used by callers for validation and form generation.
///
/// Absent values are omitted when serialized, never defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_choices: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_max: Option<f64>,
}

impl ConstraintSet {
    /// Returns `true` if no constraint is present.
    pub fn is_empty(&self) -> bool {
        self.enum_choices.is_none()
            && self.min.is_none()
            && self.max.is_none()
            && self.ui_min.is_none()
            && self.ui_max.is_none()
    }
}

/// Extracts the constraints of `info`, using the default `_MAX` sentinel suffix.
///
/// See [`extract_constraints_with`].
#[inline]
pub fn extract_constraints(directory: &dyn TypeDirectory, info: &PropertyInfo) -> ConstraintSet {
    extract_constraints_with(directory, info, DEFAULT_SENTINEL_SUFFIX)
}

/// Extracts the constraints of `info`.
///
/// - Enums report their variant names in declaration order, skipping names
///   ending in `sentinel_suffix`.
/// - Numeric properties report `ClampMin`, `ClampMax`, `UIMin` and `UIMax`
///   when declared; values that do not parse are skipped.
/// - Collections report the constraints of their elements (map values).
pub fn extract_constraints_with(
    directory: &dyn TypeDirectory,
    info: &PropertyInfo,
    sentinel_suffix: &str,
) -> ConstraintSet {
    let mut constraints = ConstraintSet::default();
    match info.kind() {
        PropertyKind::Enum(name) => {
            let Some(enum_info) = directory.enum_info(name) else {
                log::warn!("`{}` refers to unregistered enum `{name}`", info.name());
                return constraints;
            };
            let choices = enum_info
                .names()
                .filter(|n| sentinel_suffix.is_empty() || !n.ends_with(sentinel_suffix))
                .map(String::from)
                .collect();
            constraints.enum_choices = Some(choices);
        }
        PropertyKind::Primitive(kind) if kind.is_numeric() => {
            constraints.min = numeric_metadata(info, CLAMP_MIN);
            constraints.max = numeric_metadata(info, CLAMP_MAX);
            constraints.ui_min = numeric_metadata(info, UI_MIN);
            constraints.ui_max = numeric_metadata(info, UI_MAX);
        }
        kind => {
            if let Some(element) = kind.element() {
                return extract_constraints_with(directory, element, sentinel_suffix);
            }
        }
    }
    constraints
}

fn numeric_metadata(info: &PropertyInfo, key: &str) -> Option<f64> {
    let text = info.metadata().get(key)?;
    match text.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("`{}` has unparseable {key} `{text}`, skipped", info.name());
            None
        }
    }
}
