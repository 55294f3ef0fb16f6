use super::*;

#[test]
fn test_intern_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("unity");
    let b = interner.intern("unity");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "unity");
}

#[test]
fn test_distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    assert_ne!(x, y);
    assert_eq!(interner.len(), 3);
}

#[test]
fn test_empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Name::EMPTY);
}

#[test]
fn test_lookup_of_foreign_name() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(999)), "<unknown>");
}

#[test]
fn test_concurrent_interning_agrees() {
    let interner = StringInterner::new();
    let names: Vec<Name> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| interner.intern("shared")))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or(Name::EMPTY))
            .collect()
    });
    assert!(names.iter().all(|n| *n == names[0]));
    assert_eq!(interner.lookup(names[0]), "shared");
}
