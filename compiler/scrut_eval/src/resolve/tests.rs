#![allow(clippy::unwrap_used, reason = "tests unwrap resolved patterns")]

use super::*;
use pretty_assertions::assert_eq;
use scrut_patterns::{TypeTag, Value};

struct Fixture {
    interner: StringInterner,
    scope: Scope,
    classes: ClassTable,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
            scope: Scope::new(),
            classes: ClassTable::new(),
        }
    }

    fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    fn resolve(&self, syntax: &MatchPattern) -> Result<Pattern, MalformedClause> {
        resolve_pattern(syntax, &self.scope, &self.interner, &self.classes)
    }
}

#[test]
fn test_unbound_ident_becomes_binder() {
    let fx = Fixture::new();
    let x = fx.name("x");
    assert_eq!(fx.resolve(&MatchPattern::Ident(x)).unwrap(), Pattern::Binder(x));
}

#[test]
fn test_immutable_ident_becomes_stable_ref() {
    let mut fx = Fixture::new();
    let unity = fx.name("unity");
    fx.scope.define_val(unity, Value::int(1));
    assert_eq!(
        fx.resolve(&MatchPattern::Ident(unity)).unwrap(),
        Pattern::StableRef {
            name: unity,
            value: Value::int(1),
        }
    );
}

#[test]
fn test_stable_ref_captures_value_at_build_time() {
    let mut fx = Fixture::new();
    let unity = fx.name("unity");
    fx.scope.define_val(unity, Value::int(1));
    let pattern = fx.resolve(&MatchPattern::Ident(unity)).unwrap();
    fx.scope.define_val(unity, Value::int(99));
    assert_eq!(
        pattern,
        Pattern::StableRef {
            name: unity,
            value: Value::int(1),
        }
    );
}

#[test]
fn test_mutable_ident_is_rejected() {
    let mut fx = Fixture::new();
    let counter = fx.name("counter");
    fx.scope.define(counter, Value::int(0), Mutability::Mutable);
    assert_eq!(
        fx.resolve(&MatchPattern::Ident(counter)),
        Err(MalformedClause::UnstableIdentifier {
            name: "counter".to_string()
        })
    );
}

#[test]
fn test_explicit_bind_shadows_scope() {
    let mut fx = Fixture::new();
    let unity = fx.name("unity");
    fx.scope.define_val(unity, Value::int(1));
    assert_eq!(
        fx.resolve(&MatchPattern::Bind(unity)).unwrap(),
        Pattern::Binder(unity)
    );
}

#[test]
fn test_explicit_stable_requires_scope() {
    let fx = Fixture::new();
    let missing = fx.name("missing");
    assert_eq!(
        fx.resolve(&MatchPattern::Stable(missing)),
        Err(MalformedClause::UndefinedStableRef {
            name: "missing".to_string()
        })
    );
}

#[test]
fn test_duplicate_binder_rejected() {
    let fx = Fixture::new();
    let x = fx.name("x");
    let syntax = MatchPattern::Tuple(vec![MatchPattern::Ident(x), MatchPattern::Ident(x)]);
    assert_eq!(
        fx.resolve(&syntax),
        Err(MalformedClause::DuplicateBinder {
            name: "x".to_string()
        })
    );
}

#[test]
fn test_at_binder_collides_with_inner() {
    let fx = Fixture::new();
    let xs = fx.name("xs");
    let syntax = MatchPattern::at(
        xs,
        MatchPattern::cons(MatchPattern::Wildcard, MatchPattern::Ident(xs)),
    );
    assert!(matches!(
        fx.resolve(&syntax),
        Err(MalformedClause::DuplicateBinder { .. })
    ));
}

#[test]
fn test_tuple_arity_bounds() {
    let fx = Fixture::new();
    let single = MatchPattern::Tuple(vec![MatchPattern::Wildcard]);
    assert!(matches!(
        fx.resolve(&single),
        Err(MalformedClause::InconsistentArity { arity: 1, .. })
    ));

    let widest = MatchPattern::Tuple(vec![MatchPattern::Wildcard; MAX_TUPLE_ARITY]);
    assert!(fx.resolve(&widest).is_ok());

    let too_wide = MatchPattern::Tuple(vec![MatchPattern::Wildcard; MAX_TUPLE_ARITY + 1]);
    assert!(matches!(
        fx.resolve(&too_wide),
        Err(MalformedClause::InconsistentArity { arity: 23, .. })
    ));
}

#[test]
fn test_head_var_needs_one_element() {
    let fx = Fixture::new();
    let syntax = MatchPattern::head_var(MatchPattern::Wildcard, 0);
    assert!(matches!(
        fx.resolve(&syntax),
        Err(MalformedClause::InconsistentArity { arity: 0, .. })
    ));
}

#[test]
fn test_unknown_class_rejected() {
    let fx = Fixture::new();
    let ghost = fx.name("Ghost");
    let syntax = MatchPattern::Typed(TypeTag::seq(TypeTag::Class(ghost)));
    assert_eq!(
        fx.resolve(&syntax),
        Err(MalformedClause::UnknownClass {
            name: "Ghost".to_string()
        })
    );
}

#[test]
fn test_nested_structure_resolves() {
    let mut fx = Fixture::new();
    let unity = fx.name("unity");
    let rest = fx.name("rest");
    fx.scope.define_val(unity, Value::int(1));
    let syntax = MatchPattern::cons(MatchPattern::Ident(unity), MatchPattern::Ident(rest));
    assert_eq!(
        fx.resolve(&syntax).unwrap(),
        Pattern::SeqHeadTail {
            head: Box::new(Pattern::StableRef {
                name: unity,
                value: Value::int(1),
            }),
            tail: Box::new(Pattern::Binder(rest)),
        }
    );
}
