#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub mod codec;
pub mod config;
pub mod constraints;
pub mod inspector;
pub mod mutate;
pub mod path;
pub mod protocol;
pub mod resolve;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Exports

pub use codec::Codec;
pub use config::InspectConfig;
pub use error::{Error, ErrorKind, Result};
pub use inspector::Inspector;
pub use path::PropertyPath;
pub use resolve::{ResolvedTarget, Resolver};
