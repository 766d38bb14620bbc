//! Insert, remove, append and clear on collection properties.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use vc_reflect::graph::ObjectGraph;
use vc_reflect::info::{PropertyInfo, PropertyKind};
use vc_reflect::value::{DynamicMap, DynamicSet, Value};

use crate::codec::{Codec, decode_key};
use crate::resolve::{Descriptor, PropertyHandle, ResolvedTarget};
use crate::{Error, Result};

// -----------------------------------------------------------------------------
// CollectionOp

/// The kind of a collection operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionOpKind {
    /// Insert at `index`, or append when no index is given.
    Insert,
    /// Remove the element at `index`, the map entry at `key`, or the set
    /// element equal to the value.
    Remove,
    Append,
    Clear,
}

impl fmt::Display for CollectionOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => f.pad("Insert"),
            Self::Remove => f.pad("Remove"),
            Self::Append => f.pad("Append"),
            Self::Clear => f.pad("Clear"),
        }
    }
}

/// A collection operation as sent by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionOp {
    pub op: CollectionOpKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl CollectionOp {
    #[inline]
    pub const fn new(op: CollectionOpKind) -> Self {
        Self {
            op,
            index: None,
            key: None,
        }
    }

    #[inline]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    #[inline]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// The result of a successful collection operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationOutcome {
    pub op: CollectionOpKind,
    /// Element count after the operation.
    pub size: usize,
}

// -----------------------------------------------------------------------------
// mutate

/// Applies `op` to the collection at `target`.
///
/// Values are decoded with the element descriptor (for maps, `value` is an
/// object of entries) before the collection is touched, so a decoding
/// failure changes nothing.
pub fn mutate(
    codec: &Codec<'_>,
    graph: &mut dyn ObjectGraph,
    target: &ResolvedTarget<'_>,
    op: &CollectionOp,
    value: Option<&JsonValue>,
) -> Result<MutationOutcome> {
    let info = match target.descriptor() {
        Descriptor::Property(info) => info,
        Descriptor::Synthetic(rule) => {
            return Err(Error::unsupported_type(
                rule.info().type_name(),
                "synthetic properties are not collections",
            ));
        }
    };
    let handle = target.handle();

    let size = match info.kind() {
        PropertyKind::List(element) => mutate_list(codec, graph, handle, info, element, op, value),
        PropertyKind::Set(element) => mutate_set(codec, graph, handle, info, element, op, value),
        PropertyKind::Map(key, _) => mutate_map(codec, graph, handle, info, key, op, value),
        _ => Err(Error::unsupported_type(
            info.type_name(),
            "collection operations need a list, map or set",
        )),
    }?;

    log::debug!("{} on `{}` at {handle}, size is now {size}", op.op, info.name());
    Ok(MutationOutcome { op: op.op, size })
}

fn required<'j>(
    info: &PropertyInfo,
    op: CollectionOpKind,
    value: Option<&'j JsonValue>,
) -> Result<&'j JsonValue> {
    value.ok_or_else(|| Error::format(info.type_name(), alloc::format!("{op} requires a value")))
}

// `null` stands for "no value" where a value is optional.
fn present(value: Option<&JsonValue>) -> Option<&JsonValue> {
    value.filter(|v| !v.is_null())
}

fn out_of_bounds(info: &PropertyInfo, index: usize, len: usize) -> Error {
    Error::IndexOutOfBounds {
        segment: String::from(info.name()),
        index,
        len,
    }
}

fn storage_mismatch(info: &PropertyInfo, value: &Value) -> Error {
    Error::unsupported_type(
        info.type_name(),
        alloc::format!("storage holds a {} value", value.variant_name()),
    )
}

fn list_mut<'g>(
    graph: &'g mut dyn ObjectGraph,
    handle: &PropertyHandle,
    info: &PropertyInfo,
) -> Result<&'g mut Vec<Value>> {
    match handle.get_mut(graph)? {
        Value::List(list) => Ok(list),
        other => Err(storage_mismatch(info, other)),
    }
}

fn set_mut<'g>(
    graph: &'g mut dyn ObjectGraph,
    handle: &PropertyHandle,
    info: &PropertyInfo,
) -> Result<&'g mut DynamicSet> {
    match handle.get_mut(graph)? {
        Value::Set(set) => Ok(set),
        other => Err(storage_mismatch(info, other)),
    }
}

fn map_mut<'g>(
    graph: &'g mut dyn ObjectGraph,
    handle: &PropertyHandle,
    info: &PropertyInfo,
) -> Result<&'g mut DynamicMap> {
    match handle.get_mut(graph)? {
        Value::Map(map) => Ok(map),
        other => Err(storage_mismatch(info, other)),
    }
}

fn mutate_list(
    codec: &Codec<'_>,
    graph: &mut dyn ObjectGraph,
    handle: &PropertyHandle,
    info: &PropertyInfo,
    element: &PropertyInfo,
    op: &CollectionOp,
    value: Option<&JsonValue>,
) -> Result<usize> {
    match op.op {
        CollectionOpKind::Append | CollectionOpKind::Insert => {
            let item = codec.decode(&*graph, required(info, op.op, value)?, element)?;
            let list = list_mut(graph, handle, info)?;
            let len = list.len();
            match (op.op, op.index) {
                (CollectionOpKind::Insert, Some(index)) if index > len => {
                    return Err(out_of_bounds(info, index, len));
                }
                (CollectionOpKind::Insert, Some(index)) => list.insert(index, item),
                _ => list.push(item),
            }
            Ok(list.len())
        }
        CollectionOpKind::Remove => {
            let index = op
                .index
                .ok_or_else(|| Error::format(info.type_name(), "Remove requires an index"))?;
            let list = list_mut(graph, handle, info)?;
            if index >= list.len() {
                return Err(out_of_bounds(info, index, list.len()));
            }
            list.remove(index);
            Ok(list.len())
        }
        CollectionOpKind::Clear => {
            let list = list_mut(graph, handle, info)?;
            list.clear();
            Ok(0)
        }
    }
}

fn mutate_set(
    codec: &Codec<'_>,
    graph: &mut dyn ObjectGraph,
    handle: &PropertyHandle,
    info: &PropertyInfo,
    element: &PropertyInfo,
    op: &CollectionOp,
    value: Option<&JsonValue>,
) -> Result<usize> {
    match op.op {
        CollectionOpKind::Append | CollectionOpKind::Insert => {
            let item = codec.decode(&*graph, required(info, op.op, value)?, element)?;
            let set = set_mut(graph, handle, info)?;
            if !set.insert(item) {
                log::trace!("`{}` already holds the element", info.name());
            }
            Ok(set.len())
        }
        CollectionOpKind::Remove => match (present(value), op.index) {
            (Some(value), _) => {
                let item = codec.decode(&*graph, value, element)?;
                let set = set_mut(graph, handle, info)?;
                if !set.remove(&item) {
                    return Err(Error::KeyNotFound {
                        segment: String::from(info.name()),
                        key: item.to_string(),
                        len: set.len(),
                    });
                }
                Ok(set.len())
            }
            (None, Some(index)) => {
                let set = set_mut(graph, handle, info)?;
                let len = set.len();
                if set.remove_at(index).is_none() {
                    return Err(out_of_bounds(info, index, len));
                }
                Ok(set.len())
            }
            (None, None) => Err(Error::format(
                info.type_name(),
                "Remove requires a value or an index",
            )),
        },
        CollectionOpKind::Clear => {
            set_mut(graph, handle, info)?.clear();
            Ok(0)
        }
    }
}

fn mutate_map(
    codec: &Codec<'_>,
    graph: &mut dyn ObjectGraph,
    handle: &PropertyHandle,
    info: &PropertyInfo,
    key: &PropertyInfo,
    op: &CollectionOp,
    value: Option<&JsonValue>,
) -> Result<usize> {
    match op.op {
        CollectionOpKind::Append | CollectionOpKind::Insert => {
            let entries = match codec.decode(&*graph, required(info, op.op, value)?, info)? {
                Value::Map(entries) => entries,
                other => return Err(storage_mismatch(info, &other)),
            };
            let map = map_mut(graph, handle, info)?;
            for (k, v) in entries.iter() {
                map.insert(k.clone(), v.clone());
            }
            Ok(map.len())
        }
        CollectionOpKind::Remove => match (op.key.as_deref(), op.index) {
            (Some(text), _) => {
                let native = decode_key(codec.directory(), key, text)?;
                let map = map_mut(graph, handle, info)?;
                if map.remove(&native).is_none() {
                    return Err(Error::KeyNotFound {
                        segment: String::from(info.name()),
                        key: String::from(text),
                        len: map.len(),
                    });
                }
                Ok(map.len())
            }
            (None, Some(index)) => {
                let map = map_mut(graph, handle, info)?;
                let len = map.len();
                if map.remove_at(index).is_none() {
                    return Err(out_of_bounds(info, index, len));
                }
                Ok(map.len())
            }
            (None, None) => Err(Error::format(
                info.type_name(),
                "Remove requires a key or an index",
            )),
        },
        CollectionOpKind::Clear => {
            map_mut(graph, handle, info)?.clear();
            Ok(0)
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use serde_json::{Value as JsonValue, json};
    use vc_reflect::value::Value;

    use super::{CollectionOp, CollectionOpKind, mutate};
    use crate::fixtures::{Fixture, fixture};
    use crate::path::PropertyPath;
    use crate::{Codec, ErrorKind, InspectConfig, Resolver, Result};

    fn run(
        fx: &mut Fixture,
        path: &str,
        op: CollectionOp,
        value: Option<JsonValue>,
    ) -> Result<usize> {
        let config = InspectConfig::default();
        let resolver = Resolver::new(&fx.types, &config);
        let codec = Codec::new(&fx.types);
        let path = PropertyPath::parse(path)?;
        let target = resolver.resolve(&fx.arena, fx.button, &path)?;
        let outcome = mutate(&codec, &mut fx.arena, &target, &op, value.as_ref())?;
        assert_eq!(outcome.op, op.op);
        Ok(outcome.size)
    }

    fn failure(result: Result<usize>) -> ErrorKind {
        result.unwrap_err().kind()
    }

    fn read(fx: &Fixture, path: &str) -> Value {
        let config = InspectConfig::default();
        let resolver = Resolver::new(&fx.types, &config);
        let path = PropertyPath::parse(path).unwrap();
        let target = resolver.resolve(&fx.arena, fx.button, &path).unwrap();
        target.read(&fx.arena).unwrap()
    }

    #[test]
    fn list_operations() {
        let mut fx = fixture();
        let append = CollectionOp::new(CollectionOpKind::Append);
        let insert = CollectionOp::new(CollectionOpKind::Insert);
        let remove = CollectionOp::new(CollectionOpKind::Remove);
        let clear = CollectionOp::new(CollectionOpKind::Clear);

        assert_eq!(run(&mut fx, "Offsets", append, Some(json!(40))).unwrap(), 4);
        let front = insert.clone().with_index(0);
        assert_eq!(run(&mut fx, "Offsets", front, Some(json!(5))).unwrap(), 5);
        assert_eq!(run(&mut fx, "Offsets", insert.clone(), Some(json!(50))).unwrap(), 6);
        let back = insert.clone().with_index(6);
        assert_eq!(run(&mut fx, "Offsets", back, Some(json!(60))).unwrap(), 7);
        assert_eq!(read(&fx, "Offsets[0]"), Value::Int(5));
        assert_eq!(read(&fx, "Offsets[6]"), Value::Int(60));

        let past = insert.with_index(9);
        let err = run(&mut fx, "Offsets", past, Some(json!(1))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);

        let first = remove.clone().with_index(0);
        assert_eq!(run(&mut fx, "Offsets", first, None).unwrap(), 6);
        let past = remove.clone().with_index(6);
        assert_eq!(failure(run(&mut fx, "Offsets", past, None)), ErrorKind::IndexOutOfBounds);
        assert_eq!(failure(run(&mut fx, "Offsets", remove, None)), ErrorKind::FormatError);

        assert_eq!(run(&mut fx, "Offsets", clear, None).unwrap(), 0);
    }

    #[test]
    fn struct_elements_decode_before_writing() {
        let mut fx = fixture();
        let append = CollectionOp::new(CollectionOpKind::Append);

        let bow = json!({ "Name": "Bow", "Rarity": "Epic" });
        assert_eq!(run(&mut fx, "Items", append.clone(), Some(bow)).unwrap(), 4);
        assert_eq!(read(&fx, "Items[3].Rarity"), Value::Enum(2));

        let unknown = json!({ "Rarity": "Mythic" });
        let err = run(&mut fx, "Items", append.clone(), Some(unknown)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);
        let err = run(&mut fx, "Items", append, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);
        assert_eq!(read(&fx, "Items").collection_len(), Some(4));
    }

    #[test]
    fn set_operations() {
        let mut fx = fixture();
        let append = CollectionOp::new(CollectionOpKind::Append);
        let remove = CollectionOp::new(CollectionOpKind::Remove);

        assert_eq!(run(&mut fx, "Tags", append.clone(), Some(json!("guest"))).unwrap(), 3);
        // Names compare without case, so this is a duplicate.
        assert_eq!(run(&mut fx, "Tags", append, Some(json!("ADMIN"))).unwrap(), 3);

        assert_eq!(run(&mut fx, "Tags", remove.clone(), Some(json!("ops"))).unwrap(), 2);
        let err = run(&mut fx, "Tags", remove.clone(), Some(json!("ops"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyNotFound);

        let first = remove.clone().with_index(0);
        assert_eq!(run(&mut fx, "Tags", first, Some(JsonValue::Null)).unwrap(), 1);
        let past = remove.with_index(5);
        assert_eq!(failure(run(&mut fx, "Tags", past, None)), ErrorKind::IndexOutOfBounds);
    }

    #[test]
    fn map_operations() {
        let mut fx = fixture();
        let insert = CollectionOp::new(CollectionOpKind::Insert);
        let remove = CollectionOp::new(CollectionOpKind::Remove);

        let entries = json!({ "42": 9.0, "100": 1.0 });
        assert_eq!(run(&mut fx, "Scores", insert, Some(entries)).unwrap(), 3);
        assert_eq!(read(&fx, "Scores[42]"), Value::Float(9.0));

        let by_key = remove.clone().with_key("100");
        assert_eq!(run(&mut fx, "Scores", by_key.clone(), None).unwrap(), 2);
        assert_eq!(failure(run(&mut fx, "Scores", by_key, None)), ErrorKind::KeyNotFound);
        let first = remove.clone().with_index(0);
        assert_eq!(run(&mut fx, "Scores", first, None).unwrap(), 1);
        assert_eq!(failure(run(&mut fx, "Scores", remove, None)), ErrorKind::FormatError);

        let counts = CollectionOp::new(CollectionOpKind::Append);
        assert_eq!(run(&mut fx, "Counts", counts, Some(json!({ "Epic": 1 }))).unwrap(), 2);
        assert_eq!(read(&fx, "Counts[Epic]"), Value::Int(1));
    }

    #[test]
    fn non_collections_are_rejected() {
        let mut fx = fixture();
        let clear = CollectionOp::new(CollectionOpKind::Clear);
        for path in ["RenderOpacity", "Settings", "Items[0]", "Slot.ChildOrder"] {
            let err = run(&mut fx, path, clear.clone(), None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedType, "{path}");
        }
    }

    #[test]
    fn op_wire_format() {
        let op: CollectionOp =
            serde_json::from_value(json!({ "op": "Insert", "index": 2 })).unwrap();
        assert_eq!(op, CollectionOp::new(CollectionOpKind::Insert).with_index(2));
        assert_eq!(
            serde_json::to_value(CollectionOp::new(CollectionOpKind::Clear)).unwrap(),
            json!({ "op": "Clear" })
        );
    }
}
