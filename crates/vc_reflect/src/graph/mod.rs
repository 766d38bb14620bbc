//! The object graph the path engine navigates.
//!
//! [`ObjectGraph`] is the host boundary: object storage, class names, the
//! alternate (layout slot) root of an object, parent/child ordering, and
//! lookup by reference path. [`ObjectArena`] is an in-memory implementation.

// -----------------------------------------------------------------------------
// Modules

mod arena;
mod object_graph;

// -----------------------------------------------------------------------------
// Exports

pub use arena::{Object, ObjectArena};
pub use object_graph::{ObjectGraph, ObjectId};
