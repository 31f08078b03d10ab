#![no_std]

//! `syscoll`: lists, ordered key/value stores, snapshot enumerators and eager
//! queries modeled on a managed runtime's collection library.
//!
//! The crate provides:
//!
//! - [`List`]: an indexed sequence with explicit, doubling capacity.
//! - [`Dictionary`]: an insertion-ordered store with unique keys and strict
//!   lookups.
//! - [`Hashtable`]: an insertion-ordered store keyed by derived hash strings,
//!   with lenient lookups.
//! - [`Enumerable`] / [`Enumerator`]: a cursor protocol over point-in-time
//!   snapshots.
//! - [`Queryable`]: eager filter/project/order/first/any/all/count operations
//!   over anything enumerable, each returning a new [`List`].
//!
//! Everything is synchronous and nothing locks internally; a container shared
//! between threads needs the caller's own synchronization.
//!
//! The crate is `no_std` and needs only `alloc`.
//!
//! # Performance Characteristics
//!
//! - `List::add`: amortized O(1); capacity goes 0 → 4 → 8 → 16 …
//! - `List::get` / `set`: O(1), bounds-checked
//! - `List::insert` / `remove_at`: O(n) shifts
//! - `Dictionary` and `Hashtable` lookups: O(n) linear key scans. There is no
//!   hashing-based lookup; the hashtable's "hash" is only the string its keys
//!   are reduced to.
//! - Creating an enumerator copies the source: O(n) time and memory.
//!
//! # Lists
//!
//! ```
//! use syscoll::List;
//!
//! let mut fruits = List::new();
//! fruits.add("apple");
//! fruits.add("banana");
//! fruits.add("cherry");
//!
//! fruits.remove_at(1).unwrap();
//! assert_eq!(fruits.to_vec(), vec!["apple", "cherry"]);
//! assert_eq!(fruits.len(), 2);
//!
//! // Indices outside [0, len) are reported, not clamped
//! assert!(fruits.get(2).is_err());
//! ```
//!
//! # Dictionaries
//!
//! ```
//! use syscoll::{CollectionError, Dictionary};
//!
//! let mut person: Dictionary<&str, String> = Dictionary::new();
//! person.add("name", "John".to_string()).unwrap();
//! person.add("age", "30".to_string()).unwrap();
//!
//! assert_eq!(person.len(), 2);
//! assert_eq!(person.get("name").unwrap(), "John");
//! assert_eq!(person.try_get_value("missing"), (false, String::new()));
//! assert_eq!(
//!     person.add("name", "Jane".to_string()),
//!     Err(CollectionError::DuplicateKey)
//! );
//! ```
//!
//! # Hashtables
//!
//! Keys are reduced to strings, so keys of different types can collide:
//!
//! ```
//! use syscoll::Hashtable;
//!
//! let mut table = Hashtable::new();
//! table.add("1", "from string").unwrap();
//! assert!(table.add(&1, "from integer").is_err());
//! assert_eq!(table.get(&1).unwrap(), Some(&"from string"));
//!
//! // Missing keys read as None rather than failing
//! assert_eq!(table.get("2").unwrap(), None);
//! ```
//!
//! # Enumerators
//!
//! ```
//! use syscoll::{Enumerable, Enumerator, List};
//!
//! let mut numbers: List<i32> = (1..=3).collect();
//! let mut cursor = numbers.get_enumerator();
//!
//! // The enumerator works on a snapshot taken above
//! numbers.add(4);
//!
//! let mut seen = Vec::new();
//! while cursor.move_next() {
//!     seen.push(*cursor.current().unwrap());
//! }
//! assert_eq!(seen, vec![1, 2, 3]);
//! assert!(cursor.current().is_err());
//! ```
//!
//! # Queries
//!
//! ```
//! use syscoll::{Delegate, List, Queryable};
//!
//! let numbers: List<i32> = (1..=10).collect();
//!
//! let evens = numbers
//!     .filter(&Delegate::predicate(|x: &i32, _| x % 2 == 0))
//!     .unwrap();
//! assert_eq!(evens.to_vec(), vec![2, 4, 6, 8, 10]);
//!
//! let first_large = numbers
//!     .first_where(&Delegate::predicate(|x: &i32, _| *x > 5))
//!     .unwrap();
//! assert_eq!(first_large, 6);
//!
//! assert!(numbers.all(&Delegate::predicate(|x: &i32, _| *x > 0)).unwrap());
//!
//! // An unbound delegate is rejected before anything runs
//! assert!(numbers.filter(&Delegate::unbound()).is_err());
//! ```

extern crate alloc;

mod delegate;
mod dictionary;
mod enumerator;
mod error;
pub mod hash_key;
mod hashtable;
mod list;
pub mod object;
mod query;
mod trace;

pub use delegate::{Comparison, Delegate, KeySelector, Listener, Predicate, Selector};
pub use dictionary::{Dictionary, DictionaryIter, KeyValuePair};
pub use enumerator::{Enumerable, Enumerator, EnumeratorState, SnapshotEnumerator};
pub use error::{CollectionError, ErrorKind, Result};
pub use hash_key::{derive_hash_key, HashKey};
pub use hashtable::Hashtable;
pub use list::{List, ListIter, DEFAULT_CAPACITY, MIN_GROWTH_CAPACITY};
pub use query::Queryable;
pub use trace::TraceContext;
