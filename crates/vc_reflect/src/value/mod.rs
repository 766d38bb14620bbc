//! The dynamic value model object storage is made of.
//!
//! Every object stores its properties as a [`DynamicStruct`]; nested values
//! are [`Value`]s whose variant matches the property's
//! [`PropertyKind`](crate::info::PropertyKind).

// -----------------------------------------------------------------------------
// Modules

mod dynamic_map;
mod dynamic_set;
mod dynamic_struct;
mod name;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use dynamic_map::DynamicMap;
pub use dynamic_set::DynamicSet;
pub use dynamic_struct::DynamicStruct;
pub use name::Name;
pub use value::Value;
