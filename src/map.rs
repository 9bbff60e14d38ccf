//! Ordered map type for plain objects.
//!
//! [`ValueMap`] wraps an [`IndexMap`] so that a coerced object keeps exactly
//! the keys of its source, enumerated in the same order. The walker relies on
//! [`ValueMap::map_values`] to rebuild objects without reordering anything.
//!
//! ## Examples
//!
//! ```rust
//! use numeric_coerce::{Value, ValueMap};
//!
//! let mut map = ValueMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from("30"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to values.
///
/// # Examples
///
/// ```rust
/// use numeric_coerce::{Value, ValueMap};
///
/// let mut map = ValueMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap(IndexMap<String, crate::Value>);

impl ValueMap {
    /// Creates an empty `ValueMap`.
    #[must_use]
    pub fn new() -> Self {
        ValueMap(IndexMap::new())
    }

    /// Creates an empty `ValueMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_coerce::{Value, ValueMap};
    ///
    /// let mut map = ValueMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }

    /// Builds a new map with the same keys in the same order, each value
    /// replaced by `f(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_coerce::{value, Value};
    ///
    /// let Value::Object(map) = value!({ "b": "2", "a": "1" }) else { unreachable!() };
    /// let doubled = map.map_values(|v| Value::from(format!("{}{}", v, v)));
    ///
    /// let keys: Vec<_> = doubled.keys().cloned().collect();
    /// assert_eq!(keys, vec!["b", "a"]);
    /// assert_eq!(doubled.get("a").and_then(|v| v.as_str()), Some("11"));
    /// ```
    #[must_use]
    pub fn map_values<F>(self, mut f: F) -> ValueMap
    where
        F: FnMut(crate::Value) -> crate::Value,
    {
        ValueMap(self.0.into_iter().map(|(k, v)| (k, f(v))).collect())
    }
}

impl From<HashMap<String, crate::Value>> for ValueMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        ValueMap(map.into_iter().collect())
    }
}

impl From<ValueMap> for HashMap<String, crate::Value> {
    fn from(map: ValueMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for ValueMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        ValueMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_map_values_keeps_order() {
        let map: ValueMap = vec![
            ("z".to_string(), Value::from(1)),
            ("a".to_string(), Value::from(2)),
            ("m".to_string(), Value::from(3)),
        ]
        .into_iter()
        .collect();

        let mapped = map.map_values(|v| Value::from(v.as_i64().unwrap_or(0) * 10));
        let pairs: Vec<_> = mapped
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_i64()))
            .collect();
        assert_eq!(pairs, vec![("z", Some(10)), ("a", Some(20)), ("m", Some(30))]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map = ValueMap::new();
        map.insert("a".to_string(), Value::Null);
        map.insert("b".to_string(), Value::Null);
        map.insert("c".to_string(), Value::Null);

        assert!(map.remove("a").is_some());
        assert!(!map.contains_key("a"));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }
}
