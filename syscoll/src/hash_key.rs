//! Derived string keys for [`Hashtable`](crate::Hashtable).
//!
//! A key is reduced to a string by the first capability it offers, in this
//! order:
//!
//! 1. its own hash code ([`HashKey::hash_code`]),
//! 2. string or numeric text ([`HashKey::scalar_text`]),
//! 3. a boolean, mapped to `"true"` / `"false"`,
//! 4. an md5 digest of its serialized content ([`HashKey::write_content`]).
//!
//! Keys of different types that reduce to the same string are the same key:
//! the string `"1"` and the integer `1` address one entry, and so do the
//! string `"true"` and the boolean `true`. Composite keys whose contents
//! serialize identically collide as well. The table relies on this and does
//! not try to tell such keys apart.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A value usable as a [`Hashtable`](crate::Hashtable) key.
pub trait HashKey {
    /// Whether this is the null sentinel. Only `Option::None` is.
    fn is_null(&self) -> bool {
        false
    }

    /// A hash code supplied by the key itself; wins over every other capability.
    fn hash_code(&self) -> Option<String> {
        None
    }

    /// Direct text of a string or number.
    fn scalar_text(&self) -> Option<String> {
        None
    }

    fn bool_value(&self) -> Option<bool> {
        None
    }

    /// Appends a serialized, type-tagged form of the key to `out`.
    ///
    /// Composite keys are digested from this; scalars write it so they can
    /// be nested inside composites.
    fn write_content(&self, out: &mut Vec<u8>);
}

/// Reduces `key` to its table key, or `None` for the null sentinel.
pub fn derive_hash_key<K: HashKey + ?Sized>(key: &K) -> Option<String> {
    if key.is_null() {
        return None;
    }
    if let Some(code) = key.hash_code() {
        return Some(code);
    }
    if let Some(text) = key.scalar_text() {
        return Some(text);
    }
    if let Some(flag) = key.bool_value() {
        return Some(if flag { "true" } else { "false" }.to_owned());
    }
    let mut content = Vec::new();
    key.write_content(&mut content);
    let digest = format!("{:x}", md5::compute(&content));
    tracing::trace!(%digest, bytes = content.len(), "composite key digested");
    Some(digest)
}

fn write_text(out: &mut Vec<u8>, text: &str) {
    out.extend_from_slice(format!("s:{}:\"", text.len()).as_bytes());
    out.extend_from_slice(text.as_bytes());
    out.extend_from_slice(b"\";");
}

fn write_sequence<'a, K, I>(out: &mut Vec<u8>, len: usize, items: I)
where
    K: HashKey + ?Sized + 'a,
    I: IntoIterator<Item = &'a K>,
{
    out.extend_from_slice(format!("a:{len}:{{").as_bytes());
    for (index, item) in items.into_iter().enumerate() {
        out.extend_from_slice(format!("i:{index};").as_bytes());
        item.write_content(out);
    }
    out.push(b'}');
}

impl HashKey for str {
    fn scalar_text(&self) -> Option<String> {
        Some(self.to_owned())
    }

    fn write_content(&self, out: &mut Vec<u8>) {
        write_text(out, self);
    }
}

impl HashKey for String {
    fn scalar_text(&self) -> Option<String> {
        Some(self.clone())
    }

    fn write_content(&self, out: &mut Vec<u8>) {
        write_text(out, self);
    }
}

impl HashKey for char {
    fn scalar_text(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn write_content(&self, out: &mut Vec<u8>) {
        write_text(out, self.encode_utf8(&mut [0u8; 4]));
    }
}

macro_rules! numeric_hash_key {
    ($tag:literal: $($t:ty),*) => {
        $(
            impl HashKey for $t {
                fn scalar_text(&self) -> Option<String> {
                    Some(self.to_string())
                }

                fn write_content(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(format!(concat!($tag, ":{};"), self).as_bytes());
                }
            }
        )*
    };
}

numeric_hash_key!("i": i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_hash_key!("d": f32, f64);

impl HashKey for bool {
    fn bool_value(&self) -> Option<bool> {
        Some(*self)
    }

    fn write_content(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(if *self { b"b:1;" } else { b"b:0;" });
    }
}

impl<K: HashKey> HashKey for Option<K> {
    fn is_null(&self) -> bool {
        self.as_ref().map_or(true, HashKey::is_null)
    }

    fn hash_code(&self) -> Option<String> {
        self.as_ref().and_then(HashKey::hash_code)
    }

    fn scalar_text(&self) -> Option<String> {
        self.as_ref().and_then(HashKey::scalar_text)
    }

    fn bool_value(&self) -> Option<bool> {
        self.as_ref().and_then(HashKey::bool_value)
    }

    fn write_content(&self, out: &mut Vec<u8>) {
        match self {
            Some(key) => key.write_content(out),
            None => out.extend_from_slice(b"N;"),
        }
    }
}

impl<K: HashKey + ?Sized> HashKey for &K {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn hash_code(&self) -> Option<String> {
        (**self).hash_code()
    }

    fn scalar_text(&self) -> Option<String> {
        (**self).scalar_text()
    }

    fn bool_value(&self) -> Option<bool> {
        (**self).bool_value()
    }

    fn write_content(&self, out: &mut Vec<u8>) {
        (**self).write_content(out);
    }
}

impl<K: HashKey> HashKey for [K] {
    fn write_content(&self, out: &mut Vec<u8>) {
        write_sequence(out, self.len(), self);
    }
}

impl<K: HashKey, const N: usize> HashKey for [K; N] {
    fn write_content(&self, out: &mut Vec<u8>) {
        write_sequence(out, N, self);
    }
}

impl<K: HashKey> HashKey for Vec<K> {
    fn write_content(&self, out: &mut Vec<u8>) {
        write_sequence(out, self.len(), self);
    }
}

impl<A: HashKey, B: HashKey> HashKey for (A, B) {
    fn write_content(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"a:2:{i:0;");
        self.0.write_content(out);
        out.extend_from_slice(b"i:1;");
        self.1.write_content(out);
        out.push(b'}');
    }
}

impl<A: HashKey, B: HashKey, C: HashKey> HashKey for (A, B, C) {
    fn write_content(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"a:3:{i:0;");
        self.0.write_content(out);
        out.extend_from_slice(b"i:1;");
        self.1.write_content(out);
        out.extend_from_slice(b"i:2;");
        self.2.write_content(out);
        out.push(b'}');
    }
}
