//! [`UbfArray`]: an ordered sequence of values.

use crate::UbfValue;

/// Ordered, index-addressable sequence of [`UbfValue`]s.
///
/// Insertion order is preserved through encode/decode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UbfArray {
    items: Vec<UbfValue>,
}

impl UbfArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty array. `capacity` only sizes storage; it never
    /// limits how many values may be added.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Appends a value at the end.
    pub fn add(&mut self, value: impl Into<UbfValue>) {
        self.items.push(value.into());
    }

    /// Returns the value at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<&UbfValue> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UbfValue> {
        self.items.iter()
    }
}

impl<V: Into<UbfValue>> FromIterator<V> for UbfArray {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for UbfArray {
    type Item = UbfValue;
    type IntoIter = std::vec::IntoIter<UbfValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a UbfArray {
    type Item = &'a UbfValue;
    type IntoIter = std::slice::Iter<'a, UbfValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
