use syscoll::{CollectionError, Dictionary, ErrorKind, Hashtable, List};

#[test]
fn test_display_messages() {
    assert_eq!(
        CollectionError::IndexOutOfRange { index: 5, count: 2 }.to_string(),
        "Index out of range: index 5 is not valid for a list of count 2"
    );
    assert_eq!(
        CollectionError::NotInvocable {
            parameter: "predicate"
        }
        .to_string(),
        "Invalid argument: predicate must be callable"
    );
    assert_eq!(
        CollectionError::DuplicateKey.to_string(),
        "An item with the same key has already been added"
    );
    assert_eq!(
        CollectionError::NullArgument { parameter: "key" }.to_string(),
        "Value cannot be null: parameter key"
    );
    assert_eq!(
        CollectionError::EmptySequence.to_string(),
        "Sequence contains no elements"
    );
}

#[test]
fn test_kinds() {
    let list: List<i32> = List::new();
    assert_eq!(list.get(0).unwrap_err().kind(), ErrorKind::OutOfRange);

    let mut dict = Dictionary::new();
    dict.add(1, 'a').unwrap();
    assert_eq!(dict.add(1, 'b').unwrap_err().kind(), ErrorKind::DuplicateKey);
    assert_eq!(dict.get(&2).unwrap_err().kind(), ErrorKind::KeyNotFound);

    let table: Hashtable<i32> = Hashtable::new();
    assert_eq!(
        table.get(&None::<i32>).unwrap_err().kind(),
        ErrorKind::NullArgument
    );

    assert_eq!(
        CollectionError::NotInvocable { parameter: "x" }.kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(CollectionError::EnumerationEnded.kind(), ErrorKind::InvalidState);
    assert_eq!(CollectionError::NotComparable.kind(), ErrorKind::InvalidState);
}

#[test]
fn test_is_std_error() {
    fn describe(error: &dyn std::error::Error) -> String {
        error.to_string()
    }
    assert_eq!(
        describe(&CollectionError::KeyNotFound),
        "The given key was not present in the dictionary"
    );
}

#[test]
fn test_propagates_with_question_mark() {
    fn second_of(list: &List<&'static str>) -> syscoll::Result<&'static str> {
        let item = list.get(1)?;
        Ok(*item)
    }

    let list: List<&str> = vec!["only"].into();
    assert_eq!(
        second_of(&list),
        Err(CollectionError::IndexOutOfRange { index: 1, count: 1 })
    );
}
