//! Default identity capabilities.
//!
//! Types opt into display, equality and hashing through `Display`,
//! `PartialEq` and [`HashKey`](crate::HashKey). The helpers here provide the
//! identity-based fallbacks for types that have nothing better to offer.

use alloc::format;
use alloc::string::String;
use core::any::type_name;

/// Returns `true` if both references point at the same value.
#[must_use]
pub fn reference_equals<T: ?Sized>(a: &T, b: &T) -> bool {
    core::ptr::eq(a, b)
}

/// Hash string derived from the address of `value`.
///
/// Stable only for as long as the value is not moved.
#[must_use]
pub fn identity_hash<T: ?Sized>(value: &T) -> String {
    format!("{:016x}", (value as *const T).cast::<()>() as usize)
}

/// Display string for types without their own rendering: the type name.
#[must_use]
pub fn type_display<T: ?Sized>(_value: &T) -> &'static str {
    type_name::<T>()
}
