//! Path resolution: from a root object and a [`PropertyPath`] to the
//! address and descriptor of one property.
//!
//! Resolution only reads the graph. The result is a [`ResolvedTarget`]
//! holding a [`PropertyHandle`]; all dereferencing goes through the handle.

// -----------------------------------------------------------------------------
// Modules

mod handle;

// -----------------------------------------------------------------------------
// Exports

pub use handle::{PropertyHandle, Step};

use alloc::string::{String, ToString};

use vc_reflect::graph::{ObjectGraph, ObjectId};
use vc_reflect::info::PropertyInfo;
use vc_reflect::info::PropertyKind;
use vc_reflect::registry::TypeDirectory;
use vc_reflect::value::Value;

use crate::codec::decode_key;
use crate::config::{InspectConfig, RootKind, SyntheticProperty};
use crate::path::{PropertyPath, Segment, Selector};
use crate::{Error, Result};

// -----------------------------------------------------------------------------
// ResolvedTarget

/// What a resolved path points at.
#[derive(Debug, Clone, Copy)]
pub enum Descriptor<'a> {
    /// A declared property, or an element of a declared collection.
    Property(&'a PropertyInfo),
    /// A computed property with no storage.
    Synthetic(&'a SyntheticProperty),
}

impl<'a> Descriptor<'a> {
    /// Returns the descriptor used to convert the target's value.
    #[inline]
    pub fn info(&self) -> &'a PropertyInfo {
        match *self {
            Self::Property(info) => info,
            Self::Synthetic(rule) => rule.info(),
        }
    }
}

/// The outcome of a successful resolution.
///
/// It borrows descriptors from the type directory and configuration, never
/// from the graph, so the graph may be borrowed mutably while it is alive.
#[derive(Debug, Clone)]
pub struct ResolvedTarget<'a> {
    root: ObjectId,
    handle: PropertyHandle,
    descriptor: Descriptor<'a>,
}

impl<'a> ResolvedTarget<'a> {
    /// The object the request started from.
    #[inline]
    pub fn root(&self) -> ObjectId {
        self.root
    }

    /// The object whose storage holds the target.
    #[inline]
    pub fn owner(&self) -> ObjectId {
        self.handle.owner()
    }

    #[inline]
    pub fn handle(&self) -> &PropertyHandle {
        &self.handle
    }

    #[inline]
    pub fn descriptor(&self) -> Descriptor<'a> {
        self.descriptor
    }

    #[inline]
    pub fn info(&self) -> &'a PropertyInfo {
        self.descriptor.info()
    }

    #[inline]
    pub fn is_synthetic(&self) -> bool {
        matches!(self.descriptor, Descriptor::Synthetic(_))
    }

    /// Reads the current value of the target.
    pub fn read(&self, graph: &dyn ObjectGraph) -> Result<Value> {
        match self.descriptor {
            Descriptor::Synthetic(rule) => rule.get(graph, self.root),
            Descriptor::Property(_) => self.handle.get(graph).cloned(),
        }
    }
}

// -----------------------------------------------------------------------------
// Resolver

// The type the next segment is looked up on.
#[derive(Clone, Copy)]
enum Cursor<'a> {
    Object(ObjectId),
    Struct(&'a str),
}

/// Walks property paths over an [`ObjectGraph`].
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    directory: &'a dyn TypeDirectory,
    config: &'a InspectConfig,
}

impl<'a> Resolver<'a> {
    #[inline]
    pub fn new(directory: &'a dyn TypeDirectory, config: &'a InspectConfig) -> Self {
        Self { directory, config }
    }

    /// Resolves `path` starting at `root`.
    ///
    /// The start object is `root`, or its alternate root when the path
    /// begins with the alternate root token. A single-segment path is first
    /// matched against the synthetic rules. Each segment is then looked up
    /// by name on the current type, retrying once through the alias table,
    /// and descended into according to its kind.
    pub fn resolve(
        &self,
        graph: &dyn ObjectGraph,
        root: ObjectId,
        path: &PropertyPath,
    ) -> Result<ResolvedTarget<'a>> {
        let result = self.resolve_inner(graph, root, path);
        if let Err(err) = &result {
            log::debug!("failed to resolve `{path}`: {err}");
        }
        result
    }

    fn resolve_inner(
        &self,
        graph: &dyn ObjectGraph,
        root: ObjectId,
        path: &PropertyPath,
    ) -> Result<ResolvedTarget<'a>> {
        if !graph.contains(root) {
            return Err(Error::ObjectNotFound(alloc::format!("{root:?}")));
        }

        let (start, root_kind) = match path.alternate_root() {
            Some(token) => match graph.alternate_root(root) {
                Some(slot) if graph.contains(slot) => (slot, RootKind::AlternateRoot),
                _ => {
                    return Err(Error::NullReference {
                        segment: String::from(token),
                    });
                }
            },
            None => (root, RootKind::Object),
        };

        let config: &'a InspectConfig = self.config;
        if let [segment] = path.segments()
            && let Some(rule) = config.synthetic(root_kind, segment.name())
        {
            if segment.has_selector() {
                return Err(Error::traversal(
                    segment.to_string(),
                    "a synthetic property takes no selector",
                ));
            }
            log::trace!("`{path}` is the synthetic property `{}`", rule.name());
            return Ok(ResolvedTarget {
                root,
                handle: PropertyHandle::new(start),
                descriptor: Descriptor::Synthetic(rule),
            });
        }

        let Some((last, init)) = path.segments().split_last() else {
            return Err(Error::Parse {
                path: path.to_string(),
                offset: 0,
                reason: "empty path".into(),
            });
        };

        let mut handle = PropertyHandle::new(start);
        let mut cursor = Cursor::Object(start);
        for segment in init {
            let info = self.lookup(graph, cursor, segment)?;
            handle.push(Step::Field(String::from(info.name())));
            let info = self.select(graph, &mut handle, info, segment)?;
            cursor = self.descend(graph, &mut handle, info, segment)?;
        }

        let info = self.lookup(graph, cursor, last)?;
        handle.push(Step::Field(String::from(info.name())));
        let info = self.select(graph, &mut handle, info, last)?;

        log::trace!("resolved `{path}` to {handle}");
        Ok(ResolvedTarget {
            root,
            handle,
            descriptor: Descriptor::Property(info),
        })
    }

    fn lookup(
        &self,
        graph: &dyn ObjectGraph,
        cursor: Cursor<'a>,
        segment: &Segment,
    ) -> Result<&'a PropertyInfo> {
        let directory: &'a dyn TypeDirectory = self.directory;
        let type_name = match cursor {
            Cursor::Object(id) => graph
                .class_of(id)
                .ok_or_else(|| Error::ObjectNotFound(alloc::format!("{id:?}")))?,
            Cursor::Struct(name) => name,
        };

        if let Some(info) = directory.find_property(type_name, segment.name()) {
            log::trace!("`{segment}` found on `{type_name}`");
            return Ok(info);
        }
        if let Some(alias) = self.config.alias(segment.name())
            && let Some(info) = directory.find_property(type_name, alias)
        {
            log::trace!("`{segment}` found on `{type_name}` as `{alias}`");
            return Ok(info);
        }

        Err(Error::PropertyNotFound {
            segment: segment.to_string(),
            type_name: String::from(type_name),
        })
    }

    // Applies the segment's index or key, returning the selected descriptor.
    fn select(
        &self,
        graph: &dyn ObjectGraph,
        handle: &mut PropertyHandle,
        info: &'a PropertyInfo,
        segment: &Segment,
    ) -> Result<&'a PropertyInfo> {
        let Some(selector) = segment.selector() else {
            return Ok(info);
        };

        match info.kind() {
            PropertyKind::List(element) => {
                let Selector::Index(index) = *selector else {
                    return Err(Error::traversal(
                        segment.to_string(),
                        "a list is addressed by numeric index",
                    ));
                };
                let value = handle.get(graph)?;
                let len = value
                    .as_list()
                    .ok_or_else(|| storage_mismatch(segment, info, value))?
                    .len();
                if index >= len {
                    return Err(Error::IndexOutOfBounds {
                        segment: segment.to_string(),
                        index,
                        len,
                    });
                }
                handle.push(Step::Element(index));
                Ok(&**element)
            }
            PropertyKind::Map(key, element) => {
                let text = segment.selector_text().unwrap_or_default();
                let native = decode_key(self.directory, key, text)?;
                let value = handle.get(graph)?;
                let map = value
                    .as_map()
                    .ok_or_else(|| storage_mismatch(segment, info, value))?;
                let Some(entry) = map.find(&native) else {
                    return Err(Error::KeyNotFound {
                        segment: segment.to_string(),
                        key: String::from(text),
                        len: map.len(),
                    });
                };
                handle.push(Step::MapValue(entry));
                Ok(&**element)
            }
            PropertyKind::Set(_) => Err(Error::traversal(
                segment.to_string(),
                "set elements are not addressable, use a collection operation instead",
            )),
            _ => Err(Error::traversal(
                segment.to_string(),
                alloc::format!("`{}` is not a list or map", info.type_name()),
            )),
        }
    }

    // Moves past a non-final segment, returning where the next lookup happens.
    fn descend(
        &self,
        graph: &dyn ObjectGraph,
        handle: &mut PropertyHandle,
        info: &'a PropertyInfo,
        segment: &Segment,
    ) -> Result<Cursor<'a>> {
        match info.kind() {
            PropertyKind::Struct(name) => Ok(Cursor::Struct(name.as_str())),
            PropertyKind::Object(_) => match handle.get(graph)?.as_object() {
                Some(Some(id)) if graph.contains(id) => {
                    *handle = PropertyHandle::new(id);
                    Ok(Cursor::Object(id))
                }
                _ => Err(Error::NullReference {
                    segment: segment.to_string(),
                }),
            },
            PropertyKind::List(_) => Err(Error::traversal(
                segment.to_string(),
                "must specify an index",
            )),
            PropertyKind::Map(..) => Err(Error::traversal(
                segment.to_string(),
                "must specify a key",
            )),
            PropertyKind::Set(_) => Err(Error::traversal(
                segment.to_string(),
                "use a collection operation instead",
            )),
            PropertyKind::Primitive(_) | PropertyKind::Enum(_) => Err(Error::traversal(
                segment.to_string(),
                alloc::format!("cannot descend into `{}`", info.type_name()),
            )),
        }
    }
}

fn storage_mismatch(segment: &Segment, info: &PropertyInfo, value: &Value) -> Error {
    Error::traversal(
        segment.to_string(),
        alloc::format!(
            "declared as `{}` but stores a {} value",
            info.type_name(),
            value.variant_name()
        ),
    )
}

// -----------------------------------------------------------------------------
// Tests
