//! The enumeration protocol.
//!
//! An [`Enumerable`] produces a fresh [`SnapshotEnumerator`] on every call.
//! The enumerator owns a copy of the contents taken at creation time, so
//! mutating the source afterwards is never observed and two enumerators over
//! the same container advance independently.
//!
//! ```text
//! NotStarted --move_next--> Iterating --move_next (past end)--> Exhausted
//!      ^                        |                                  |
//!      +---------reset----------+---------------reset--------------+
//! ```

use alloc::vec::Vec;

use crate::error::{CollectionError, Result};

/// Cursor position of an enumerator
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EnumeratorState {
    NotStarted,
    Iterating,
    Exhausted,
}

/// Single-cursor iteration over a fixed sequence.
pub trait Enumerator {
    type Item;

    /// The element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns `EnumerationNotStarted` before the first `move_next`, and
    /// `EnumerationEnded` once `move_next` has returned `false`.
    fn current(&self) -> Result<&Self::Item>;

    /// Advances the cursor; returns whether an element exists at the new position.
    fn move_next(&mut self) -> bool;

    /// Moves the cursor back before the first element.
    fn reset(&mut self);
}

/// Anything that can produce an enumerator over its current contents.
pub trait Enumerable {
    type Item: Clone;

    fn get_enumerator(&self) -> SnapshotEnumerator<Self::Item>;
}

/// Enumerator over a copy of a sequence.
///
/// Also a Rust [`Iterator`] yielding owned elements, starting from the
/// current cursor position.
#[derive(Debug, Clone)]
pub struct SnapshotEnumerator<T> {
    items: Vec<T>,
    // None before the first move_next; Some(len) once exhausted
    position: Option<usize>,
}

impl<T> SnapshotEnumerator<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            position: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> EnumeratorState {
        match self.position {
            None => EnumeratorState::NotStarted,
            Some(p) if p < self.items.len() => EnumeratorState::Iterating,
            Some(_) => EnumeratorState::Exhausted,
        }
    }

    /// Number of elements in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn remaining(&self) -> usize {
        match self.position {
            None => self.items.len(),
            Some(p) => self.items.len().saturating_sub(p + 1),
        }
    }
}

impl<T> Enumerator for SnapshotEnumerator<T> {
    type Item = T;

    fn current(&self) -> Result<&T> {
        match self.position {
            None => Err(CollectionError::EnumerationNotStarted),
            Some(p) => self.items.get(p).ok_or(CollectionError::EnumerationEnded),
        }
    }

    fn move_next(&mut self) -> bool {
        let next = match self.position {
            None => 0,
            // Stay parked one past the end
            Some(p) => (p + 1).min(self.items.len()),
        };
        self.position = Some(next);
        next < self.items.len()
    }

    fn reset(&mut self) {
        self.position = None;
    }
}

impl<T: Clone> Iterator for SnapshotEnumerator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.move_next() {
            self.current().ok().cloned()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for SnapshotEnumerator<T> {}
