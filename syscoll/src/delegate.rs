//! Function values passed to queries, sorts and trace listeners.
//!
//! A [`Delegate`] either wraps a callable target or is unbound. Every
//! operation that takes one checks [`Delegate::is_invocable`] before touching
//! its input, so an unbound delegate fails up front with
//! [`CollectionError::NotInvocable`] instead of being skipped.

use alloc::boxed::Box;
use core::cmp::Ordering;
use core::fmt;

use crate::error::{CollectionError, Result};

/// A possibly unbound callable of signature `F`.
pub struct Delegate<F: ?Sized> {
    target: Option<Box<F>>,
}

/// Tests an element and its position in the source snapshot.
pub type Predicate<'f, T> = Delegate<dyn Fn(&T, usize) -> bool + 'f>;

/// Projects an element and its position in the source snapshot.
pub type Selector<'f, T, U> = Delegate<dyn Fn(&T, usize) -> U + 'f>;

/// Extracts the ordering key of an element.
pub type KeySelector<'f, T, K> = Delegate<dyn Fn(&T) -> K + 'f>;

/// Orders two elements.
pub type Comparison<'f, T> = Delegate<dyn Fn(&T, &T) -> Ordering + 'f>;

/// Receives messages written to a [`TraceContext`](crate::TraceContext).
pub type Listener<'f> = Delegate<dyn Fn(&str) + 'f>;

impl<F: ?Sized> Delegate<F> {
    /// A delegate without a target.
    #[must_use]
    pub const fn unbound() -> Self {
        Self { target: None }
    }

    #[must_use]
    pub fn is_invocable(&self) -> bool {
        self.target.is_some()
    }

    /// Returns the target, or `NotInvocable` naming `parameter`.
    pub(crate) fn bind(&self, parameter: &'static str) -> Result<&F> {
        self.target
            .as_deref()
            .ok_or(CollectionError::NotInvocable { parameter })
    }
}

impl<'f, T> Delegate<dyn Fn(&T, usize) -> bool + 'f> {
    pub fn predicate<P>(predicate: P) -> Self
    where
        P: Fn(&T, usize) -> bool + 'f,
    {
        Self {
            target: Some(Box::new(predicate)),
        }
    }
}

impl<'f, T, U> Delegate<dyn Fn(&T, usize) -> U + 'f> {
    pub fn selector<S>(selector: S) -> Self
    where
        S: Fn(&T, usize) -> U + 'f,
    {
        Self {
            target: Some(Box::new(selector)),
        }
    }
}

impl<'f, T, K> Delegate<dyn Fn(&T) -> K + 'f> {
    pub fn key_selector<S>(selector: S) -> Self
    where
        S: Fn(&T) -> K + 'f,
    {
        Self {
            target: Some(Box::new(selector)),
        }
    }
}

impl<'f, T> Delegate<dyn Fn(&T, &T) -> Ordering + 'f> {
    pub fn comparison<C>(comparison: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'f,
    {
        Self {
            target: Some(Box::new(comparison)),
        }
    }
}

impl<'f> Delegate<dyn Fn(&str) + 'f> {
    pub fn listener<L>(listener: L) -> Self
    where
        L: Fn(&str) + 'f,
    {
        Self {
            target: Some(Box::new(listener)),
        }
    }
}

impl<F: ?Sized> Default for Delegate<F> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<F: ?Sized> fmt::Debug for Delegate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_invocable() { "bound" } else { "unbound" };
        f.debug_tuple("Delegate").field(&state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_bound_delegate_is_invocable() {
        let even = Predicate::predicate(|x: &i32, _| x % 2 == 0);
        assert!(even.is_invocable());
        let target = even.bind("predicate").unwrap();
        assert!(target(&4, 0));
        assert!(!target(&3, 1));
    }

    #[test]
    fn test_unbound_delegate_fails_to_bind() {
        let missing: Predicate<'_, i32> = Delegate::unbound();
        assert!(!missing.is_invocable());
        assert!(matches!(
            missing.bind("predicate"),
            Err(CollectionError::NotInvocable {
                parameter: "predicate"
            })
        ));
    }

    #[test]
    fn test_default_is_unbound() {
        let comparison: Comparison<'_, u8> = Delegate::default();
        assert!(!comparison.is_invocable());
        assert_eq!(format!("{comparison:?}"), "Delegate(\"unbound\")");
    }

    #[test]
    fn test_selector_receives_index() {
        let tag = Selector::selector(|s: &&str, i| format!("{i}:{s}"));
        let target = tag.bind("selector").unwrap();
        assert_eq!(target(&"a", 2), "2:a");
    }
}
