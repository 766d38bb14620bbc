//! The type directory: where descriptors are looked up by type name.
//!
//! [`TypeDirectory`] is the boundary the path engine consumes. A host with
//! its own reflection implements it over that reflection; [`TypeTable`] is a
//! plain in-memory table for hosts (and tests) that describe types by hand.

// -----------------------------------------------------------------------------
// Modules

mod type_directory;
mod type_table;

pub mod builtin;

// -----------------------------------------------------------------------------
// Exports

pub use type_directory::TypeDirectory;
pub use type_table::TypeTable;
