use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

use crate::enumerator::{Enumerable, SnapshotEnumerator};
use crate::error::{CollectionError, Result};
use crate::list::List;

/// A key and its value, as produced by enumerating a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValuePair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// An insertion-ordered key/value store with unique keys.
///
/// Keys and values live in two parallel sequences and are found by a linear
/// scan with `PartialEq`, so lookups are O(n). Removal shifts both sequences
/// to keep the remaining entries in insertion order.
#[derive(Debug, Clone)]
pub struct Dictionary<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> Dictionary<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn find_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.keys.iter().position(|k| k.borrow() == key)
    }

    /// Appends a new entry.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if an equal key is already present; the store
    /// is left unchanged.
    pub fn add(&mut self, key: K, value: V) -> Result<()>
    where
        K: PartialEq,
    {
        if self.find_key(&key).is_some() {
            tracing::debug!(count = self.keys.len(), "duplicate key rejected");
            return Err(CollectionError::DuplicateKey);
        }
        self.keys.push(key);
        self.values.push(value);
        Ok(())
    }

    /// Gets the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if no entry has an equal key.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.find_key(key).ok_or(CollectionError::KeyNotFound)?;
        Ok(&self.values[index])
    }

    /// # Errors
    ///
    /// Returns `KeyNotFound` if no entry has an equal key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.find_key(key).ok_or(CollectionError::KeyNotFound)?;
        Ok(&mut self.values[index])
    }

    /// Updates the entry in place if `key` exists, otherwise appends it.
    ///
    /// Returns the value that was replaced.
    pub fn set(&mut self, key: K, value: V) -> Option<V>
    where
        K: PartialEq,
    {
        match self.find_key(&key) {
            Some(index) => Some(core::mem::replace(&mut self.values[index], value)),
            None => {
                self.keys.push(key);
                self.values.push(value);
                None
            }
        }
    }

    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find_key(key).map(|index| &self.values[index])
    }

    /// Looks up `key`, returning whether it was found together with the
    /// value, or `V::default()` when it was not.
    pub fn try_get_value<Q>(&self, key: &Q) -> (bool, V)
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
        V: Clone + Default,
    {
        match self.try_get(key) {
            Some(value) => (true, value.clone()),
            None => (false, V::default()),
        }
    }

    /// Removes the entry for `key`; returns whether one was removed.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self.find_key(key) {
            Some(index) => {
                self.keys.remove(index);
                self.values.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find_key(key).is_some()
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values.iter().any(|v| v == value)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// The keys in insertion order, as a new list.
    #[must_use]
    pub fn keys(&self) -> List<K>
    where
        K: Clone,
    {
        self.keys.iter().cloned().collect()
    }

    /// The values in insertion order, as a new list.
    #[must_use]
    pub fn values(&self) -> List<V>
    where
        V: Clone,
    {
        self.values.iter().cloned().collect()
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    #[must_use]
    pub fn iter(&self) -> DictionaryIter<'_, K, V> {
        DictionaryIter {
            keys: self.keys.iter(),
            values: self.values.iter(),
        }
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Display for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dictionary[Count={}]", self.keys.len())
    }
}

impl<K: Clone, V: Clone> Enumerable for Dictionary<K, V> {
    type Item = KeyValuePair<K, V>;

    fn get_enumerator(&self) -> SnapshotEnumerator<Self::Item> {
        SnapshotEnumerator::new(
            self.iter()
                .map(|(k, v)| KeyValuePair::new(k.clone(), v.clone()))
                .collect(),
        )
    }
}

/// Iterator over the entries of a `Dictionary`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct DictionaryIter<'a, K, V> {
    keys: core::slice::Iter<'a, K>,
    values: core::slice::Iter<'a, V>,
}

impl<'a, K, V> Iterator for DictionaryIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        let value = self.values.next()?;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K, V> ExactSizeIterator for DictionaryIter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = DictionaryIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
