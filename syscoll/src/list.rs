use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::delegate::Comparison;
use crate::enumerator::{Enumerable, SnapshotEnumerator};
use crate::error::{CollectionError, Result};

/// Capacity of a list created with [`List::new`]
pub const DEFAULT_CAPACITY: usize = 4;
/// Capacity a zero-capacity list grows to on its first insertion
pub const MIN_GROWTH_CAPACITY: usize = 4;

/// An indexed, growable sequence with explicit capacity accounting.
///
/// `capacity` is the logical allocation size; it doubles when an insertion
/// would exceed it and never shrinks on removal. Only the `[0, len)` window
/// is ever visible.
#[derive(Debug, Clone)]
pub struct List<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> List<T> {
    /// Creates an empty list with the default capacity (4).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sets the logical capacity.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if `capacity` is less than the current count.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.items.len() {
            return Err(CollectionError::ArgumentOutOfRange {
                parameter: "capacity",
                value: capacity,
                reason: "capacity cannot be less than count",
            });
        }
        self.items
            .reserve_exact(capacity.saturating_sub(self.items.len()));
        self.capacity = capacity;
        Ok(())
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            Err(CollectionError::IndexOutOfRange {
                index,
                count: self.items.len(),
            })
        } else {
            Ok(())
        }
    }

    fn ensure_capacity(&mut self, min: usize) {
        if self.capacity >= min {
            return;
        }
        let grown = if self.capacity == 0 {
            MIN_GROWTH_CAPACITY
        } else {
            self.capacity.saturating_mul(2)
        };
        let new_capacity = grown.max(min);
        tracing::trace!(
            from = self.capacity,
            to = new_capacity,
            "list capacity grown"
        );
        self.items
            .reserve_exact(new_capacity.saturating_sub(self.items.len()));
        self.capacity = new_capacity;
    }

    /// Gets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_bounds(index)?;
        Ok(&self.items[index])
    }

    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_bounds(index)?;
        Ok(&mut self.items[index])
    }

    /// Replaces the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_bounds(index)?;
        self.items[index] = value;
        Ok(())
    }

    /// Appends an element, growing the capacity if needed. Amortized O(1).
    pub fn add(&mut self, item: T) {
        self.ensure_capacity(self.items.len() + 1);
        self.items.push(item);
    }

    /// Appends every element of `items` in order.
    pub fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.add(item);
        }
    }

    /// Inserts an element at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index > len()`.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.items.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                count: self.items.len(),
            });
        }
        self.ensure_capacity(self.items.len() + 1);
        self.items.insert(index, item);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_bounds(index)?;
        Ok(self.items.remove(index))
    }

    /// Resets the count to zero. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Sorts by natural ordering. The sort is stable.
    ///
    /// The list is left untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns `NotComparable` if two elements compared during the sort have
    /// no ordering (for example a float `NaN`).
    pub fn sort(&mut self) -> Result<()>
    where
        T: PartialOrd,
    {
        sort_checked(&mut self.items, |a, b| a.partial_cmp(b))
    }

    /// Sorts with `comparison`, which fully decides the order. The sort is stable.
    ///
    /// # Errors
    ///
    /// Returns `NotInvocable` if `comparison` is unbound.
    pub fn sort_by(&mut self, comparison: &Comparison<'_, T>) -> Result<()> {
        let compare = comparison.bind("comparison")?;
        self.items.sort_by(|a, b| compare(a, b));
        Ok(())
    }

    /// Index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|x| x == item)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`; returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Copies the live elements into a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> ListIter<'_, T> {
        self.into_iter()
    }
}

/// Sorts `items` with a partial comparison. The sort is stable.
///
/// The sort runs on a permutation and returns at the first pair `compare`
/// cannot order, so `items` is only rearranged once every comparison has
/// produced an ordering.
pub(crate) fn sort_checked<T, C>(items: &mut Vec<T>, mut compare: C) -> Result<()>
where
    C: FnMut(&T, &T) -> Option<Ordering>,
{
    if items.len() <= 1 {
        return Ok(());
    }
    let mut order: Vec<usize> = (0..items.len()).collect();
    merge_sort_by(&mut order, |i, j| compare(&items[i], &items[j]))?;
    let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();
    items.extend(order.into_iter().filter_map(|i| slots[i].take()));
    Ok(())
}

/// Bottom-up merge sort over element indices.
///
/// `compare` never has to be total: a `None` aborts the sort with
/// `NotComparable` instead of reaching a std sort, which may panic on a
/// comparator that is not a total order.
fn merge_sort_by<C>(order: &mut Vec<usize>, mut compare: C) -> Result<()>
where
    C: FnMut(usize, usize) -> Option<Ordering>,
{
    let len = order.len();
    let mut merged = order.clone();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            for slot in &mut merged[start..end] {
                let take_left = if left == mid {
                    false
                } else if right == end {
                    true
                } else {
                    // Ties take from the left run
                    let ordering = compare(order[right], order[left])
                        .ok_or(CollectionError::NotComparable)?;
                    ordering != Ordering::Less
                };
                if take_left {
                    *slot = order[left];
                    left += 1;
                } else {
                    *slot = order[right];
                    right += 1;
                }
            }
            start = end;
        }
        core::mem::swap(order, &mut merged);
        width *= 2;
    }
    Ok(())
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists are equal when their live elements are; capacity is not compared.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> Index<usize> for List<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.items.len(),
            "Index {} out of range for list of count {}",
            index,
            self.items.len()
        );
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.items.len(),
            "Index {} out of range for list of count {}",
            index,
            self.items.len()
        );
        &mut self.items[index]
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.add_range(iter);
        list
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<T> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List[Count={}]", self.items.len())
    }
}

impl<T: Clone> Enumerable for List<T> {
    type Item = T;

    fn get_enumerator(&self) -> SnapshotEnumerator<T> {
        SnapshotEnumerator::new(self.to_vec())
    }
}

/// Iterator over the elements of a `List`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct ListIter<'a, T> {
    inner: core::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for ListIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ListIter<'_, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        ListIter {
            inner: self.items.iter(),
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
