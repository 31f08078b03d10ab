use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::dictionary::KeyValuePair;
use crate::enumerator::{Enumerable, SnapshotEnumerator};
use crate::error::{CollectionError, Result};
use crate::hash_key::{derive_hash_key, HashKey};
use crate::list::List;

/// An insertion-ordered store keyed by derived hash strings.
///
/// Every key is reduced to a string with [`derive_hash_key`] and entries are
/// found by a linear scan over those strings. Keys of any [`HashKey`] type
/// can share one table; keys that reduce to the same string address the same
/// entry (see the [`hash_key`](crate::hash_key) module for the collision
/// rules).
///
/// Unlike [`Dictionary`](crate::Dictionary), reading a missing key is not an
/// error: [`Hashtable::get`] returns `Ok(None)`.
#[derive(Debug, Clone)]
pub struct Hashtable<V> {
    entries: Vec<(String, V)>,
}

impl<V> Hashtable<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, hash_key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == hash_key)
    }

    fn require_key<K: HashKey + ?Sized>(key: &K) -> Result<String> {
        derive_hash_key(key).ok_or(CollectionError::NullArgument { parameter: "key" })
    }

    /// Adds a new entry.
    ///
    /// # Errors
    ///
    /// Returns `NullArgument` for a null key and `DuplicateKey` if the derived
    /// hash key is already present.
    pub fn add<K: HashKey + ?Sized>(&mut self, key: &K, value: V) -> Result<()> {
        let hash_key = Self::require_key(key)?;
        if self.find(&hash_key).is_some() {
            tracing::debug!(%hash_key, "duplicate hash key rejected");
            return Err(CollectionError::DuplicateKey);
        }
        self.entries.push((hash_key, value));
        Ok(())
    }

    /// Gets the value for `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `NullArgument` for a null key.
    pub fn get<K: HashKey + ?Sized>(&self, key: &K) -> Result<Option<&V>> {
        let hash_key = Self::require_key(key)?;
        Ok(self.find(&hash_key).map(|index| &self.entries[index].1))
    }

    /// Updates the entry in place if the key exists, otherwise appends it.
    ///
    /// # Errors
    ///
    /// Returns `NullArgument` for a null key.
    pub fn set<K: HashKey + ?Sized>(&mut self, key: &K, value: V) -> Result<()> {
        let hash_key = Self::require_key(key)?;
        match self.find(&hash_key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((hash_key, value)),
        }
        Ok(())
    }

    /// Removes the entry for `key`; a null key removes nothing.
    pub fn remove<K: HashKey + ?Sized>(&mut self, key: &K) -> bool {
        let Some(hash_key) = derive_hash_key(key) else {
            return false;
        };
        match self.find(&hash_key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// A null key is never contained.
    pub fn contains_key<K: HashKey + ?Sized>(&self, key: &K) -> bool {
        derive_hash_key(key).is_some_and(|hash_key| self.find(&hash_key).is_some())
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|(_, v)| v == value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The derived hash keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> List<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    #[must_use]
    pub fn values(&self) -> List<V>
    where
        V: Clone,
    {
        self.entries.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Copies the entries as `(hash key, value)` pairs in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> Default for Hashtable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Display for Hashtable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hashtable[Count={}]", self.entries.len())
    }
}

impl<V: Clone> Enumerable for Hashtable<V> {
    type Item = KeyValuePair<String, V>;

    fn get_enumerator(&self) -> SnapshotEnumerator<Self::Item> {
        SnapshotEnumerator::new(
            self.entries
                .iter()
                .map(|(k, v)| KeyValuePair::new(k.clone(), v.clone()))
                .collect(),
        )
    }
}
