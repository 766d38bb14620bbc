use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use vc_reflect::graph::{ObjectGraph, ObjectId};
use vc_reflect::value::Value;

use crate::{Error, Result};

// -----------------------------------------------------------------------------
// Step

/// One level of descent below an object's storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// A named field of the object or of an embedded struct.
    Field(String),
    /// An element of a list.
    Element(usize),
    /// The value of the map entry at this position.
    MapValue(usize),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, ".{name}"),
            Self::Element(index) => write!(f, "[{index}]"),
            Self::MapValue(index) => write!(f, "{{{index}}}"),
        }
    }
}

// -----------------------------------------------------------------------------
// PropertyHandle

/// The address of a value inside one object's storage.
///
/// A handle owns no data: it names the owner object and the steps from the
/// owner's storage down to the value. [`get`](Self::get) and
/// [`get_mut`](Self::get_mut) re-walk the steps against the current graph,
/// so a handle that outlives a structural change fails with an error
/// instead of reaching stale memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyHandle {
    owner: ObjectId,
    steps: Vec<Step>,
}

impl PropertyHandle {
    /// A handle to the storage of `owner` itself, with no steps.
    #[inline]
    pub const fn new(owner: ObjectId) -> Self {
        Self {
            owner,
            steps: Vec::new(),
        }
    }

    #[inline]
    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[inline]
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Returns a copy of this handle extended by `step`.
    pub fn join(&self, step: Step) -> Self {
        let mut handle = self.clone();
        handle.push(step);
        handle
    }

    /// Reads the addressed value.
    pub fn get<'g>(&self, graph: &'g dyn ObjectGraph) -> Result<&'g Value> {
        let storage = graph
            .storage(self.owner)
            .ok_or_else(|| Error::ObjectNotFound(alloc::format!("{:?}", self.owner)))?;
        let (first, rest) = self.split_first(graph)?;
        let mut current = storage.get(first).ok_or_else(|| Error::PropertyNotFound {
            segment: String::from(first),
            type_name: String::from(storage.type_name()),
        })?;
        for step in rest {
            current = step_into(current, step)?;
        }
        Ok(current)
    }

    /// Mutably borrows the addressed value.
    pub fn get_mut<'g>(&self, graph: &'g mut dyn ObjectGraph) -> Result<&'g mut Value> {
        let (first, rest) = self.split_first(&*graph)?;
        let owner = self.owner;
        let storage = graph
            .storage_mut(owner)
            .ok_or_else(|| Error::ObjectNotFound(alloc::format!("{owner:?}")))?;
        let type_name = String::from(storage.type_name());
        let mut current = storage.get_mut(first).ok_or_else(|| Error::PropertyNotFound {
            segment: String::from(first),
            type_name,
        })?;
        for step in rest {
            current = step_into_mut(current, step)?;
        }
        Ok(current)
    }

    fn split_first(&self, graph: &dyn ObjectGraph) -> Result<(&str, &[Step])> {
        match self.steps.split_first() {
            Some((Step::Field(name), rest)) => Ok((name, rest)),
            Some((step, _)) => Err(Error::traversal(
                alloc::format!("{step}"),
                "object storage is addressed by field name",
            )),
            None => Err(Error::traversal(
                graph.object_path(self.owner).unwrap_or_default(),
                "a handle without steps addresses no property",
            )),
        }
    }
}

impl fmt::Display for PropertyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.owner)?;
        for step in &self.steps {
            fmt::Display::fmt(step, f)?;
        }
        Ok(())
    }
}

fn mismatch(step: &Step, value: &Value) -> Error {
    Error::traversal(
        alloc::format!("{step}"),
        alloc::format!("cannot step into a {} value", value.variant_name()),
    )
}

fn step_into<'v>(value: &'v Value, step: &Step) -> Result<&'v Value> {
    match (step, value) {
        (Step::Field(name), Value::Struct(s)) => {
            let type_name = s.type_name();
            s.get(name).ok_or_else(|| Error::PropertyNotFound {
                segment: name.clone(),
                type_name: String::from(type_name),
            })
        }
        (Step::Element(index), Value::List(list)) => {
            list.get(*index).ok_or_else(|| Error::IndexOutOfBounds {
                segment: alloc::format!("{step}"),
                index: *index,
                len: list.len(),
            })
        }
        (Step::MapValue(index), Value::Map(map)) => match map.entry_at(*index) {
            Some((_, value)) => Ok(value),
            None => Err(Error::IndexOutOfBounds {
                segment: alloc::format!("{step}"),
                index: *index,
                len: map.len(),
            }),
        },
        _ => Err(mismatch(step, value)),
    }
}

fn step_into_mut<'v>(value: &'v mut Value, step: &Step) -> Result<&'v mut Value> {
    match (step, value) {
        (Step::Field(name), Value::Struct(s)) => {
            let type_name = String::from(s.type_name());
            s.get_mut(name).ok_or_else(|| Error::PropertyNotFound {
                segment: name.clone(),
                type_name,
            })
        }
        (Step::Element(index), Value::List(list)) => {
            let len = list.len();
            list.get_mut(*index).ok_or_else(|| Error::IndexOutOfBounds {
                segment: alloc::format!("{step}"),
                index: *index,
                len,
            })
        }
        (Step::MapValue(index), Value::Map(map)) => {
            let len = map.len();
            map.value_at_mut(*index).ok_or_else(|| Error::IndexOutOfBounds {
                segment: alloc::format!("{step}"),
                index: *index,
                len,
            })
        }
        (step, value) => Err(mismatch(step, value)),
    }
}

// -----------------------------------------------------------------------------
// Tests
