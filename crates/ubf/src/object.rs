//! [`UbfObject`]: an insertion-ordered string-keyed map of values.

use indexmap::IndexMap;

use crate::UbfValue;

/// Ordered mapping from string keys to [`UbfValue`]s.
///
/// Iteration follows insertion order. Re-putting an existing key replaces
/// its value in place, so keys stay unique and keep their first position.
/// Equality compares entries pairwise in order.
#[derive(Debug, Clone, Default)]
pub struct UbfObject {
    entries: IndexMap<String, UbfValue>,
}

impl UbfObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty object with storage for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts or overwrites `key`, returning the previous value if any.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<UbfValue>) -> Option<UbfValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`, or `None` when missing.
    pub fn get(&self, key: &str) -> Option<&UbfValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, UbfValue> {
        self.entries.iter()
    }
}

impl PartialEq for UbfObject {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Into<String>, V: Into<UbfValue>> FromIterator<(K, V)> for UbfObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut obj = UbfObject::new();
        for (k, v) in iter {
            obj.put(k, v);
        }
        obj
    }
}

impl IntoIterator for UbfObject {
    type Item = (String, UbfValue);
    type IntoIter = indexmap::map::IntoIter<String, UbfValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a UbfObject {
    type Item = (&'a String, &'a UbfValue);
    type IntoIter = indexmap::map::Iter<'a, String, UbfValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position_and_length() {
        let mut obj = UbfObject::new();
        obj.put("a", 1i32);
        obj.put("k", 2i32);
        obj.put("z", 3i32);
        let prev = obj.put("k", "replaced");
        assert_eq!(prev, Some(UbfValue::Int(2)));
        assert_eq!(obj.len(), 3);
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["a", "k", "z"]);
        assert_eq!(obj.get("k").and_then(UbfValue::get_string), Some("replaced"));
    }

    #[test]
    fn missing_key_is_none() {
        let obj: UbfObject = [("x", true)].into_iter().collect();
        assert!(obj.get("y").is_none());
        assert!(obj.contains_key("x"));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab: UbfObject = [("a", 1i32), ("b", 2)].into_iter().collect();
        let ba: UbfObject = [("b", 2i32), ("a", 1)].into_iter().collect();
        assert_ne!(ab, ba);
        let again: UbfObject = [("a", 1i32), ("b", 2)].into_iter().collect();
        assert_eq!(ab, again);
    }
}
