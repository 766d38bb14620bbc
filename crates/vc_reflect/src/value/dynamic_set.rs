use alloc::vec::Vec;

use crate::value::Value;

/// An unordered collection of unique [`Value`]s.
///
/// Elements are kept in insertion order internally so that index-based
/// removal is deterministic, but equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct DynamicSet {
    values: Vec<Value>,
}

impl DynamicSet {
    /// Creates an empty `DynamicSet`.
    #[inline]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    #[inline]
    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }

    /// Inserts `value` if absent. Returns `true` if it was inserted.
    pub fn insert(&mut self, value: Value) -> bool {
        if self.contains(&value) {
            false
        } else {
            self.values.push(value);
            true
        }
    }

    /// Removes `value`. Returns `true` if it was present.
    pub fn remove(&mut self, value: &Value) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(index) => {
                self.values.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the element at `index` in insertion order.
    pub fn remove_at(&mut self, index: usize) -> Option<Value> {
        if index < self.values.len() {
            Some(self.values.remove(index))
        } else {
            None
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.values.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PartialEq for DynamicSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values.iter().all(|v| other.contains(v))
    }
}

impl FromIterator<Value> for DynamicSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}
