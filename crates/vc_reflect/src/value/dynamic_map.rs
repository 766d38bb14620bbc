use alloc::vec::Vec;

use crate::value::Value;

/// An associative collection of [`Value`] pairs.
///
/// Entries keep insertion order and are located by an equality scan, so
/// keys only need [`PartialEq`]. Replacing a value keeps the entry's position.
///
/// Two maps are equal when they hold equal entries, in any order.
///
/// # Examples
///
/// ```
/// use vc_reflect::value::{DynamicMap, Value};
///
/// let mut map = DynamicMap::new();
/// map.insert(Value::Int(42), Value::from("answer"));
/// map.insert(Value::Int(7), Value::from("lucky"));
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.find(&Value::Int(7)), Some(1));
/// assert_eq!(map.get(&Value::Int(42)), Some(&Value::from("answer")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DynamicMap {
    entries: Vec<(Value, Value)>,
}

impl DynamicMap {
    /// Creates an empty `DynamicMap`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the entry index of `key`.
    #[inline]
    pub fn find(&self, key: &Value) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    #[inline]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.find(key).map(|index| &self.entries[index].1)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &Value) -> Option<&mut Value> {
        let index = self.find(key)?;
        Some(&mut self.entries[index].1)
    }

    /// Returns the entry at `index` in insertion order.
    #[inline]
    pub fn entry_at(&self, index: usize) -> Option<(&Value, &Value)> {
        self.entries.get(index).map(|(k, v)| (k, v))
    }

    /// Returns the value of the entry at `index` in insertion order.
    #[inline]
    pub fn value_at_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.entries.get_mut(index).map(|(_, v)| v)
    }

    /// Inserts an entry, returning the value it replaced.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.find(&key) {
            Some(index) => Some(core::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        let index = self.find(key)?;
        Some(self.entries.remove(index).1)
    }

    /// Removes the entry at `index` in insertion order.
    pub fn remove_at(&mut self, index: usize) -> Option<(Value, Value)> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for DynamicMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| o == v))
    }
}

impl FromIterator<(Value, Value)> for DynamicMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::DynamicMap;
    use crate::value::{Name, Value};

    #[test]
    fn insert_replaces_in_place() {
        let mut map: DynamicMap = [
            (Value::from("a"), Value::Int(1)),
            (Value::from("b"), Value::Int(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.insert(Value::from("a"), Value::Int(10)), Some(Value::Int(1)));
        assert_eq!(map.entry_at(0), Some((&Value::from("a"), &Value::Int(10))));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn name_keys_ignore_case() {
        let mut map = DynamicMap::new();
        map.insert(Value::Name(Name::from("Admin")), Value::Bool(true));
        assert_eq!(map.find(&Value::Name(Name::from("ADMIN"))), Some(0));
        // A string key is a different kind of key.
        assert_eq!(map.find(&Value::from("Admin")), None);
    }

    #[test]
    fn equality_ignores_order() {
        let a: DynamicMap = [
            (Value::Int(1), Value::Bool(true)),
            (Value::Int(2), Value::Bool(false)),
        ]
        .into_iter()
        .collect();
        let b: DynamicMap = [
            (Value::Int(2), Value::Bool(false)),
            (Value::Int(1), Value::Bool(true)),
        ]
        .into_iter()
        .collect();
        assert_eq!(a, b);

        let mut c = b.clone();
        c.remove_at(0);
        assert_ne!(a, c);
    }
}
