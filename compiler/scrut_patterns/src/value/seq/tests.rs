#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;

fn ints(range: Range<i64>) -> SeqValue {
    SeqValue::new(range.map(Value::Int).collect())
}

#[test]
fn test_tail_shares_backing() {
    let seq = ints(0..5);
    let tail = seq.tail().unwrap();
    assert_eq!(tail.len(), 4);
    assert_eq!(tail.first(), Some(&Value::Int(1)));
    assert_eq!(tail.offset(), 1);
    assert!(tail.shares_backing(&seq));
}

#[test]
fn test_init_drops_last() {
    let seq = ints(0..3);
    let init = seq.init().unwrap();
    assert_eq!(init.as_slice(), &[Value::Int(0), Value::Int(1)]);
    assert!(init.shares_backing(&seq));
}

#[test]
fn test_empty_has_no_tail_or_init() {
    let seq = ints(0..0);
    assert!(seq.is_empty());
    assert!(seq.tail().is_none());
    assert!(seq.init().is_none());
    assert!(seq.first().is_none());
}

#[test]
fn test_repeated_tails_walk_the_same_allocation() {
    let seq = ints(0..1000);
    let mut view = seq.clone();
    let mut steps = 0;
    while let Some(next) = view.tail() {
        assert!(next.shares_backing(&seq));
        view = next;
        steps += 1;
    }
    assert_eq!(steps, 1000);
    assert_eq!(view.offset(), 1000);
}

#[test]
fn test_subview_bounds() {
    let seq = ints(0..4);
    assert_eq!(seq.subview(1..3).unwrap().as_slice(), &[Value::Int(1), Value::Int(2)]);
    assert!(seq.subview(2..5).is_none());
    assert!(seq.subview(4..4).unwrap().is_empty());
}

#[test]
fn test_equality_ignores_offsets() {
    let a = ints(0..3).tail().unwrap();
    let b = ints(1..3);
    assert_eq!(a, b);
}
