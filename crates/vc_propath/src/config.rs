//! Engine configuration: the alternate root token, name aliases, the enum
//! sentinel suffix and the synthetic property rules.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use vc_reflect::graph::{ObjectGraph, ObjectId};
use vc_reflect::info::PropertyInfo;
use vc_reflect::value::Value;

use crate::{Error, Result};

/// The leading path token that switches resolution to the alternate root.
pub const DEFAULT_ALTERNATE_ROOT: &str = "Slot";

/// Enum variants ending with this suffix are count sentinels, not choices.
pub const DEFAULT_SENTINEL_SUFFIX: &str = "_MAX";

/// `(public name, property name)` pairs tried after a direct lookup misses.
pub const DEFAULT_ALIASES: [(&str, &str); 3] = [
    ("IsVariable", "bIsVariable"),
    ("IsEnabled", "bIsEnabled"),
    ("IsFocusable", "bIsFocusable"),
];

/// Name of the builtin synthetic property exposing an object's position
/// among its parent's children.
pub const CHILD_ORDER: &str = "ChildOrder";

// -----------------------------------------------------------------------------
// SyntheticProperty

/// Which object a path starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    /// The root object itself.
    Object,
    /// The root's alternate root, selected by the `Slot.` prefix.
    AlternateRoot,
}

/// Computes a synthetic value from the graph and the request's root object.
pub type SyntheticGetter = fn(&dyn ObjectGraph, ObjectId) -> Result<Value>;

/// Applies a decoded synthetic value to the graph.
pub type SyntheticSetter = fn(&mut dyn ObjectGraph, ObjectId, &Value) -> Result<()>;

/// A computed property with no backing storage.
///
/// A rule matches a single-segment path starting at `root` whose name equals
/// the rule's name, ignoring ASCII case. Matching happens before any
/// descriptor lookup.
///
/// The accessors always receive the request's root object, not the
/// alternate root.
#[derive(Clone)]
pub struct SyntheticProperty {
    root: RootKind,
    info: PropertyInfo,
    get: SyntheticGetter,
    set: Option<SyntheticSetter>,
}

impl SyntheticProperty {
    /// Creates a read-only rule. `info` names the property and drives value conversion.
    pub fn new(root: RootKind, info: PropertyInfo, get: SyntheticGetter) -> Self {
        Self {
            root,
            info,
            get,
            set: None,
        }
    }

    pub fn with_setter(mut self, set: SyntheticSetter) -> Self {
        self.set = Some(set);
        self
    }

    #[inline]
    pub fn root(&self) -> RootKind {
        self.root
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.info.name()
    }

    #[inline]
    pub fn info(&self) -> &PropertyInfo {
        &self.info
    }

    #[inline]
    pub fn is_writable(&self) -> bool {
        self.set.is_some()
    }

    #[inline]
    pub fn matches(&self, root: RootKind, name: &str) -> bool {
        self.root == root && self.info.name().eq_ignore_ascii_case(name)
    }

    #[inline]
    pub fn get(&self, graph: &dyn ObjectGraph, root: ObjectId) -> Result<Value> {
        (self.get)(graph, root)
    }

    pub fn set(&self, graph: &mut dyn ObjectGraph, root: ObjectId, value: &Value) -> Result<()> {
        match self.set {
            Some(set) => set(graph, root, value),
            None => Err(Error::unsupported_type(
                self.info.type_name(),
                alloc::format!("synthetic property `{}` is read-only", self.name()),
            )),
        }
    }
}

impl fmt::Debug for SyntheticProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntheticProperty")
            .field("root", &self.root)
            .field("name", &self.info.name())
            .field("writable", &self.is_writable())
            .finish()
    }
}

/// The `Slot.ChildOrder` rule: the root's index among its parent's
/// children. Writing it moves the root to that index.
pub fn child_order() -> SyntheticProperty {
    SyntheticProperty::new(
        RootKind::AlternateRoot,
        PropertyInfo::int(CHILD_ORDER),
        child_order_get,
    )
    .with_setter(child_order_set)
}

fn child_order_get(graph: &dyn ObjectGraph, root: ObjectId) -> Result<Value> {
    match graph.sibling_index(root) {
        Some(index) => Ok(Value::Int(index as i64)),
        None => Err(Error::NullReference {
            segment: String::from(CHILD_ORDER),
        }),
    }
}

fn child_order_set(graph: &mut dyn ObjectGraph, root: ObjectId, value: &Value) -> Result<()> {
    let parent = graph.parent(root).ok_or_else(|| Error::NullReference {
        segment: String::from(CHILD_ORDER),
    })?;
    let len = graph.children(parent).len();
    let index = value
        .as_int()
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(|| Error::format("usize", alloc::format!("`{value}` is not a child index")))?;
    if index >= len || !graph.move_child(parent, root, index) {
        return Err(Error::IndexOutOfBounds {
            segment: String::from(CHILD_ORDER),
            index,
            len,
        });
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// InspectConfig

/// Configuration of an [`Inspector`](crate::Inspector) and its resolver.
///
/// # Examples
///
/// ```
/// use vc_propath::InspectConfig;
///
/// let config = InspectConfig::default().with_alias("Enabled", "bIsEnabled");
/// assert_eq!(config.alias("Enabled"), Some("bIsEnabled"));
/// assert_eq!(config.alias("IsVariable"), Some("bIsVariable"));
/// assert_eq!(config.alternate_root(), "Slot");
/// ```
#[derive(Debug, Clone)]
pub struct InspectConfig {
    alternate_root: String,
    aliases: Vec<(String, String)>,
    sentinel_suffix: String,
    synthetics: Vec<SyntheticProperty>,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            alternate_root: String::from(DEFAULT_ALTERNATE_ROOT),
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|&(public, name)| (String::from(public), String::from(name)))
                .collect(),
            sentinel_suffix: String::from(DEFAULT_SENTINEL_SUFFIX),
            synthetics: alloc::vec![child_order()],
        }
    }
}

impl InspectConfig {
    /// Sets the alternate root token; an empty token disables the prefix.
    pub fn with_alternate_root(mut self, token: impl Into<String>) -> Self {
        self.alternate_root = token.into();
        self
    }

    /// Adds an alias, replacing an existing one with the same public name.
    pub fn with_alias(mut self, public: impl Into<String>, name: impl Into<String>) -> Self {
        let public = public.into();
        let name = name.into();
        match self.aliases.iter_mut().find(|(p, _)| *p == public) {
            Some(entry) => entry.1 = name,
            None => self.aliases.push((public, name)),
        }
        self
    }

    pub fn with_sentinel_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.sentinel_suffix = suffix.into();
        self
    }

    /// Appends a synthetic rule. Earlier rules win.
    pub fn with_synthetic(mut self, rule: SyntheticProperty) -> Self {
        self.synthetics.push(rule);
        self
    }

    /// Removes every synthetic rule, including the builtin ones.
    pub fn without_synthetics(mut self) -> Self {
        self.synthetics.clear();
        self
    }

    #[inline]
    pub fn alternate_root(&self) -> &str {
        &self.alternate_root
    }

    /// Returns the property name `public` stands for.
    pub fn alias(&self, public: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(p, _)| p == public)
            .map(|(_, name)| name.as_str())
    }

    #[inline]
    pub fn sentinel_suffix(&self) -> &str {
        &self.sentinel_suffix
    }

    /// Returns the first synthetic rule matching `root` and `name`.
    pub fn synthetic(&self, root: RootKind, name: &str) -> Option<&SyntheticProperty> {
        self.synthetics.iter().find(|rule| rule.matches(root, name))
    }

    #[inline]
    pub fn synthetics(&self) -> &[SyntheticProperty] {
        &self.synthetics
    }
}

#[cfg(test)]
mod tests {
    use super::{CHILD_ORDER, InspectConfig, RootKind};

    #[test]
    fn child_order_is_builtin() {
        let config = InspectConfig::default();
        let rule = config.synthetic(RootKind::AlternateRoot, "childorder").unwrap();
        assert_eq!(rule.name(), CHILD_ORDER);
        assert!(rule.is_writable());
        assert!(config.synthetic(RootKind::Object, CHILD_ORDER).is_none());
        assert!(config.without_synthetics().synthetics().is_empty());
    }

    #[test]
    fn alias_replacement() {
        let config = InspectConfig::default().with_alias("IsVariable", "bVariable");
        assert_eq!(config.alias("IsVariable"), Some("bVariable"));
        assert_eq!(config.alias("isvariable"), None);
    }
}
