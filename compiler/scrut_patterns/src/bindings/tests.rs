use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_insertion_order_is_kept() {
    let (a, b, c) = (Name::from_raw(3), Name::from_raw(1), Name::from_raw(2));
    let mut bindings = Bindings::new();
    bindings.bind(a, Value::int(1));
    bindings.bind(b, Value::int(2));
    bindings.bind(c, Value::int(3));
    assert_eq!(bindings.names().collect::<Vec<_>>(), vec![a, b, c]);
    assert_eq!(bindings.get(b), Some(&Value::int(2)));
    assert_eq!(bindings.len(), 3);
}

#[test]
fn test_truncate_forgets_later_entries() {
    let (a, b) = (Name::from_raw(1), Name::from_raw(2));
    let mut bindings = Bindings::new();
    bindings.bind(a, Value::int(1));
    let mark = bindings.len();
    bindings.bind(b, Value::int(2));
    bindings.truncate(mark);
    assert!(bindings.contains(a));
    assert!(!bindings.contains(b));
    bindings.clear();
    assert!(bindings.is_empty());
}

#[test]
fn test_collect() {
    let x = Name::from_raw(7);
    let bindings: Bindings = [(x, Value::string("x"))].into_iter().collect();
    assert_eq!(bindings.iter().collect::<Vec<_>>(), vec![(x, &Value::string("x"))]);
}
