//! Hash containers used across the crate, re-exports *hashbrown* and *foldhash*.

/// The hash state used by every map in this crate.
///
/// Seeds are fixed, so iteration order is stable between runs.
pub type FixedHashState = foldhash::fast::FixedState;

/// A [`hashbrown::HashMap`] using [`FixedHashState`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;

pub use foldhash;
pub use hashbrown;
