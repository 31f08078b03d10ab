use std::cell::RefCell;

use syscoll::{CollectionError, Delegate, Listener, TraceContext};

#[test]
fn test_listeners_receive_messages() {
    let log = RefCell::new(Vec::new());
    let count = RefCell::new(0);

    let mut trace = TraceContext::new();
    trace
        .add_listener(Delegate::listener(|message: &str| {
            log.borrow_mut().push(message.to_string());
        }))
        .unwrap();
    trace
        .add_listener(Delegate::listener(|_: &str| *count.borrow_mut() += 1))
        .unwrap();
    assert_eq!(trace.listener_count(), 2);

    trace.write("plain");
    trace.write_line("line");
    trace.write_line_fmt(format_args!("{} of {}", 1, 2));

    assert_eq!(*log.borrow(), vec!["plain", "line\n", "1 of 2\n"]);
    assert_eq!(*count.borrow(), 3);
}

#[test]
fn test_unbound_listener_rejected() {
    let mut trace = TraceContext::new();
    let unbound: Listener<'_> = Delegate::unbound();
    assert_eq!(
        trace.add_listener(unbound),
        Err(CollectionError::NotInvocable {
            parameter: "listener"
        })
    );
    assert_eq!(trace.listener_count(), 0);
}

#[test]
fn test_assert_writes_only_on_failure() {
    let log = RefCell::new(Vec::new());
    let mut trace = TraceContext::new();
    trace
        .add_listener(Delegate::listener(|message: &str| {
            log.borrow_mut().push(message.to_string());
        }))
        .unwrap();

    trace.assert(true, "never shown");
    trace.assert(false, "");
    trace.assert(false, "count mismatch");

    assert_eq!(
        *log.borrow(),
        vec!["Assertion failed\n", "Assertion failed: count mismatch\n"]
    );
}

#[test]
fn test_clear_listeners() {
    let log = RefCell::new(Vec::<String>::new());
    let mut trace = TraceContext::new();
    trace
        .add_listener(Delegate::listener(|message: &str| {
            log.borrow_mut().push(message.to_string());
        }))
        .unwrap();

    trace.clear_listeners();
    trace.write("dropped");
    assert!(log.borrow().is_empty());
    assert_eq!(trace.listener_count(), 0);
}

#[test]
fn test_write_without_listeners() {
    let trace = TraceContext::default();
    trace.write("only reaches the subscriber");
    trace.assert(false, "nobody listening");
}
