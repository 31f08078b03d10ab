use syscoll::object::identity_hash;
use syscoll::{CollectionError, Enumerable, HashKey, Hashtable, KeyValuePair};

#[derive(Debug)]
struct Session {
    id: u32,
}

impl HashKey for Session {
    fn hash_code(&self) -> Option<String> {
        Some(format!("session#{}", self.id))
    }

    fn write_content(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(format!("O:7:\"Session\":{};", self.id).as_bytes());
    }
}

struct Handle(u8);

impl HashKey for Handle {
    fn hash_code(&self) -> Option<String> {
        Some(identity_hash(self))
    }

    fn write_content(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(format!("O:6:\"Handle\":{};", self.0).as_bytes());
    }
}

#[test]
fn test_add_and_get() {
    let mut table = Hashtable::new();
    table.add("key", "value").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("key"), Ok(Some(&"value")));
    assert_eq!(table.to_string(), "Hashtable[Count=1]");
}

#[test]
fn test_get_missing_is_absent_not_error() {
    let table: Hashtable<i32> = Hashtable::new();
    assert_eq!(table.get("nothing"), Ok(None));
}

#[test]
fn test_duplicate_add_fails() {
    let mut table = Hashtable::new();
    table.add(&7, 'a').unwrap();
    assert_eq!(table.add(&7, 'b'), Err(CollectionError::DuplicateKey));
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(&7), Ok(Some(&'a')));
}

#[test]
fn test_set_upserts_in_place() {
    let mut table = Hashtable::new();
    table.set("a", 1).unwrap();
    table.set("b", 2).unwrap();
    table.set("a", 10).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.to_vec(), vec![("a".to_string(), 10), ("b".to_string(), 2)]);
}

#[test]
fn test_null_key_handling() {
    let mut table: Hashtable<i32> = Hashtable::new();
    let null: Option<&str> = None;
    let expected = CollectionError::NullArgument { parameter: "key" };

    assert_eq!(table.add(&null, 1), Err(expected.clone()));
    assert_eq!(table.set(&null, 1), Err(expected.clone()));
    assert_eq!(table.get(&null), Err(expected));
    assert!(!table.contains_key(&null));
    assert!(!table.remove(&null));
    assert!(table.is_empty());

    // A present option is just its inner key
    table.add(&Some("k"), 5).unwrap();
    assert_eq!(table.get("k"), Ok(Some(&5)));
}

#[test]
fn test_string_and_integer_keys_collide() {
    let mut table = Hashtable::new();
    table.add("1", "string one").unwrap();
    assert_eq!(table.add(&1, "integer one"), Err(CollectionError::DuplicateKey));
    assert!(table.contains_key(&1u64));

    table.set(&1, "overwritten").unwrap();
    assert_eq!(table.get("1"), Ok(Some(&"overwritten")));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_bool_keys_map_to_literals() {
    let mut table = Hashtable::new();
    table.add(&true, 1).unwrap();
    table.add(&false, 0).unwrap();
    assert_eq!(table.keys().to_vec(), vec!["true", "false"]);
    assert!(table.contains_key("true"));
}

#[test]
fn test_float_keys() {
    let mut table = Hashtable::new();
    table.add(&2.5f64, "x").unwrap();
    assert!(table.contains_key("2.5"));
    // Whole floats print without a fraction
    table.add(&3.0f64, "y").unwrap();
    assert!(table.contains_key(&3));
}

#[test]
fn test_object_hash_code_takes_precedence() {
    let mut table = Hashtable::new();
    table.add(&Session { id: 4 }, "alice").unwrap();
    assert!(table.contains_key(&Session { id: 4 }));
    assert!(!table.contains_key(&Session { id: 5 }));
    assert!(table.contains_key("session#4"));
    assert!(!table.contains_key(&4));
}

#[test]
fn test_identity_hash_keys() {
    let first = Handle(0);
    let second = Handle(0);
    let mut table = Hashtable::new();
    table.add(&first, 1).unwrap();
    table.add(&second, 2).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(&first), Ok(Some(&1)));
    assert_eq!(table.get(&second), Ok(Some(&2)));
}

#[test]
fn test_composite_keys_use_content_digest() {
    let mut table = Hashtable::new();
    table.add(&vec![1, 2], "pair").unwrap();
    assert!(table.contains_key(&[1, 2]));
    assert!(table.contains_key(&(1, 2)));
    assert!(!table.contains_key(&vec![2, 1]));
    assert_eq!(table.add(&(1, 2), "tuple"), Err(CollectionError::DuplicateKey));

    let keys = table.keys();
    assert_eq!(keys[0].len(), 32);
}

#[test]
fn test_remove() {
    let mut table = Hashtable::new();
    for key in ["x", "y", "z"] {
        table.add(key, key.to_uppercase()).unwrap();
    }
    assert!(table.remove("y"));
    assert!(!table.remove("y"));
    assert_eq!(table.keys().to_vec(), vec!["x", "z"]);
    assert_eq!(table.values().to_vec(), vec!["X", "Z"]);
}

#[test]
fn test_contains_value() {
    let mut table = Hashtable::new();
    table.add("a", 1).unwrap();
    assert!(table.contains_value(&1));
    assert!(!table.contains_value(&2));
}

#[test]
fn test_clear() {
    let mut table = Hashtable::new();
    table.add("a", 1).unwrap();
    table.add("b", 2).unwrap();
    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.get("a"), Ok(None));
}

#[test]
fn test_iteration_and_enumeration() {
    let mut table = Hashtable::new();
    table.add(&10, "ten").unwrap();
    table.add("name", "value").unwrap();

    let pairs: Vec<_> = table.iter().collect();
    assert_eq!(pairs, vec![("10", &"ten"), ("name", &"value")]);

    let mut enumerator = table.get_enumerator();
    table.clear();
    assert_eq!(
        enumerator.next(),
        Some(KeyValuePair::new("10".to_string(), "ten"))
    );
    assert_eq!(enumerator.count(), 1);
}
