//! Insertion-ordered object representation.
//!
//! [`Map`] stores object members as a flat sequence of `(key, value)` pairs
//! in insertion order. Lookup is a linear scan from the front; this is a
//! deliberate choice for the small objects JSON documents typically carry,
//! not a missing optimization. Entries are never re-sorted or hashed.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::Value;

/// An insertion-ordered map of object members with linear-scan lookup.
///
/// Keys are unique: [`insert`](Map::insert) replaces the first entry with an
/// equal key in place (keeping its position) and appends otherwise, so a
/// later write for the same key wins without reordering the object.
///
/// # Examples
///
/// ```
/// use jsontree::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("b".into(), Value::from(1.0));
/// map.insert("a".into(), Value::from(2.0));
/// map.insert("b".into(), Value::from(3.0));
///
/// let keys: Vec<&str> = map.keys().collect();
/// assert_eq!(keys, ["b", "a"]);
/// assert_eq!(map.get("b"), Some(&Value::from(3.0)));
/// ```
#[derive(Clone, Default)]
pub struct Map {
    entries: Vec<(String, Value)>,
}

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty `Map` with space for at least `capacity` members.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value for `key`, scanning from the front.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value for `key`.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    /// Returns the position of the first member whose key equals `key`.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.as_str() == key)
    }

    /// Returns the member at `index`, in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&str, &Value)> {
        self.entries.get(index).map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the member at `index` with a mutable value reference.
    #[must_use]
    pub fn get_index_mut(&mut self, index: usize) -> Option<(&str, &mut Value)> {
        self.entries.get_mut(index).map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `true` if the map holds a member with the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    /// Inserts a member, returning the replaced value if the key was
    /// already present.
    ///
    /// An existing entry keeps its position; its value is dropped and
    /// replaced in place. A new key is appended at the end.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes the first member whose key equals `key`, shifting later
    /// members down to preserve their order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.index_of(key)?;
        Some(self.entries.remove(index).1)
    }

    /// Removes and returns the member at `index`, shifting later members
    /// down.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; a bad position is a caller bug,
    /// not a data error.
    pub fn remove_index(&mut self, index: usize) -> (String, Value) {
        self.entries.remove(index)
    }

    /// Drops every member.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates with mutable value references, in insertion order.
    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = (&str, &mut Value)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterates over mutable value references in insertion order.
    pub fn values_mut(&mut self) -> impl ExactSizeIterator<Item = &mut Value> {
        self.entries.iter_mut().map(|(_, v)| v)
    }
}

/// Structural equality over members, ignoring insertion order.
///
/// Two maps are equal when they have the same number of members and every
/// key of `self` maps to an equal value in `other`. Keys are unique by
/// construction, so the relation is symmetric.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k) == Some(v))
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl Extend<(String, Value)> for Map {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = alloc::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a str, &'a Value);
    type IntoIter = MapIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        MapIter {
            inner: self.entries.iter(),
        }
    }
}

/// Borrowing iterator over a [`Map`]'s members, in insertion order.
pub struct MapIter<'a> {
    inner: core::slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for MapIter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MapIter<'_> {}
