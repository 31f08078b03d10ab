//! Eager queries over any [`Enumerable`].
//!
//! Each operation takes a fresh enumerator snapshot, walks it through the
//! [`Enumerator`] protocol and materializes its result immediately. Sources
//! are never mutated. Indices handed to predicates and selectors are
//! positions in that snapshot.
//!
//! Callback arguments are checked with [`Delegate::is_invocable`] before the
//! snapshot is taken; an unbound delegate fails with
//! [`CollectionError::NotInvocable`] even when the source is empty.
//!
//! [`Delegate::is_invocable`]: crate::Delegate::is_invocable

use alloc::vec::Vec;

use crate::delegate::{KeySelector, Predicate, Selector};
use crate::enumerator::{Enumerable, Enumerator, SnapshotEnumerator};
use crate::error::{CollectionError, Result};
use crate::list::{sort_checked, List};

/// Drives `enumerator` to the end, calling `visit` with each element and its
/// position. Stops early when `visit` returns `false`.
fn walk<T, F>(mut enumerator: SnapshotEnumerator<T>, mut visit: F) -> Result<()>
where
    F: FnMut(&T, usize) -> bool,
{
    let mut index = 0;
    while enumerator.move_next() {
        if !visit(enumerator.current()?, index) {
            break;
        }
        index += 1;
    }
    Ok(())
}

fn ordered<T, K, F>(items: Vec<T>, key: F, descending: bool) -> Result<List<T>>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    // Keys are extracted once per element, then sorted alongside it.
    let mut keyed: Vec<(K, T)> = items.into_iter().map(|item| (key(&item), item)).collect();
    sort_checked(&mut keyed, |(a, _), (b, _)| {
        let ordering = a.partial_cmp(b)?;
        Some(if descending { ordering.reverse() } else { ordering })
    })?;
    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

/// Query operations available on every [`Enumerable`].
///
/// The ordering operations do not guarantee stability: elements with equal
/// keys may come out in any relative order.
pub trait Queryable: Enumerable {
    /// Projects every element and its index; preserves order and length.
    ///
    /// # Errors
    ///
    /// Returns `NotInvocable` if `selector` is unbound.
    fn select<U>(&self, selector: &Selector<'_, Self::Item, U>) -> Result<List<U>> {
        let project = selector.bind("selector")?;
        let mut result = List::new();
        walk(self.get_enumerator(), |item, index| {
            result.add(project(item, index));
            true
        })?;
        Ok(result)
    }

    /// Keeps the elements for which `predicate` holds, in source order.
    ///
    /// # Errors
    ///
    /// Returns `NotInvocable` if `predicate` is unbound.
    fn filter(&self, predicate: &Predicate<'_, Self::Item>) -> Result<List<Self::Item>> {
        let test = predicate.bind("predicate")?;
        let mut result = List::new();
        walk(self.get_enumerator(), |item, index| {
            if test(item, index) {
                result.add(item.clone());
            }
            true
        })?;
        Ok(result)
    }

    /// Sorts ascending by natural ordering.
    ///
    /// # Errors
    ///
    /// Returns `NotComparable` if two compared elements have no ordering.
    fn order_by(&self) -> Result<List<Self::Item>>
    where
        Self::Item: PartialOrd,
    {
        ordered(self.get_enumerator().collect(), Clone::clone, false)
    }

    /// Sorts descending by natural ordering.
    ///
    /// # Errors
    ///
    /// Returns `NotComparable` if two compared elements have no ordering.
    fn order_by_descending(&self) -> Result<List<Self::Item>>
    where
        Self::Item: PartialOrd,
    {
        ordered(self.get_enumerator().collect(), Clone::clone, true)
    }

    /// Sorts ascending by the key extracted with `key_selector`.
    ///
    /// # Errors
    ///
    /// Returns `NotInvocable` if `key_selector` is unbound and
    /// `NotComparable` if two compared keys have no ordering.
    fn order_by_key<K: PartialOrd>(
        &self,
        key_selector: &KeySelector<'_, Self::Item, K>,
    ) -> Result<List<Self::Item>> {
        let key = key_selector.bind("key_selector")?;
        ordered(self.get_enumerator().collect(), key, false)
    }

    /// Sorts descending by the key extracted with `key_selector`.
    ///
    /// # Errors
    ///
    /// Returns `NotInvocable` if `key_selector` is unbound and
    /// `NotComparable` if two compared keys have no ordering.
    fn order_by_key_descending<K: PartialOrd>(
        &self,
        key_selector: &KeySelector<'_, Self::Item, K>,
    ) -> Result<List<Self::Item>> {
        let key = key_selector.bind("key_selector")?;
        ordered(self.get_enumerator().collect(), key, true)
    }

    /// # Errors
    ///
    /// Returns `EmptySequence` if there are no elements.
    fn first(&self) -> Result<Self::Item> {
        let mut enumerator = self.get_enumerator();
        if !enumerator.move_next() {
            return Err(CollectionError::EmptySequence);
        }
        enumerator.current().cloned()
    }

    /// The first element for which `predicate` holds.
    ///
    /// # Errors
    ///
    /// Returns `NotInvocable` if `predicate` is unbound and
    /// `NoMatchingElement` if nothing matches.
    fn first_where(&self, predicate: &Predicate<'_, Self::Item>) -> Result<Self::Item> {
        let test = predicate.bind("predicate")?;
        let mut found = None;
        walk(self.get_enumerator(), |item, index| {
            if test(item, index) {
                found = Some(item.clone());
                return false;
            }
            true
        })?;
        found.ok_or(CollectionError::NoMatchingElement)
    }

    fn first_or_default(&self) -> Option<Self::Item> {
        self.first().ok()
    }

    /// Like [`first_where`](Queryable::first_where), with `None` for no match.
    ///
    /// # Errors
    ///
    /// Returns `NotInvocable` if `predicate` is unbound.
    fn first_or_default_where(
        &self,
        predicate: &Predicate<'_, Self::Item>,
    ) -> Result<Option<Self::Item>> {
        match self.first_where(predicate) {
            Ok(item) => Ok(Some(item)),
            Err(CollectionError::NoMatchingElement) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn any(&self) -> bool {
        self.get_enumerator().move_next()
    }

    /// # Errors
    ///
    /// Returns `NotInvocable` if `predicate` is unbound.
    fn any_where(&self, predicate: &Predicate<'_, Self::Item>) -> Result<bool> {
        let test = predicate.bind("predicate")?;
        let mut matched = false;
        walk(self.get_enumerator(), |item, index| {
            matched = test(item, index);
            !matched
        })?;
        Ok(matched)
    }

    /// Whether `predicate` holds for every element; `true` when there are none.
    ///
    /// # Errors
    ///
    /// Returns `NotInvocable` if `predicate` is unbound.
    fn all(&self, predicate: &Predicate<'_, Self::Item>) -> Result<bool> {
        let test = predicate.bind("predicate")?;
        let mut holds = true;
        walk(self.get_enumerator(), |item, index| {
            holds = test(item, index);
            holds
        })?;
        Ok(holds)
    }

    fn count(&self) -> usize {
        self.get_enumerator().len()
    }

    /// # Errors
    ///
    /// Returns `NotInvocable` if `predicate` is unbound.
    fn count_where(&self, predicate: &Predicate<'_, Self::Item>) -> Result<usize> {
        let test = predicate.bind("predicate")?;
        let mut matches = 0;
        walk(self.get_enumerator(), |item, index| {
            if test(item, index) {
                matches += 1;
            }
            true
        })?;
        Ok(matches)
    }

    /// Materializes the current contents as a new list.
    fn to_list(&self) -> List<Self::Item> {
        self.get_enumerator().collect()
    }
}

impl<E: Enumerable + ?Sized> Queryable for E {}
