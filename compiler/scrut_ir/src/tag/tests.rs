#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn shapes() -> (StringInterner, ClassTable, Name, Name, Name) {
    let interner = StringInterner::new();
    let mut classes = ClassTable::new();
    let shape = classes.declare(&interner, "Shape", None).unwrap();
    let circle = classes.declare(&interner, "Circle", Some(shape)).unwrap();
    let rational = classes.declare(&interner, "Rational", None).unwrap();
    (interner, classes, shape, circle, rational)
}

#[test]
fn test_everything_is_any() {
    let (_, classes, _, circle, _) = shapes();
    for tag in [
        TypeTag::Int,
        TypeTag::Str,
        TypeTag::Tuple(2),
        TypeTag::seq(TypeTag::Int),
        TypeTag::Class(circle),
    ] {
        assert!(classes.is_subtype(&tag, &TypeTag::Any));
    }
}

#[test]
fn test_numbers() {
    let classes = ClassTable::new();
    assert!(classes.is_subtype(&TypeTag::Int, &TypeTag::Number));
    assert!(classes.is_subtype(&TypeTag::Float, &TypeTag::Number));
    assert!(!classes.is_subtype(&TypeTag::Number, &TypeTag::Int));
    assert!(!classes.is_subtype(&TypeTag::Str, &TypeTag::Number));
}

#[test]
fn test_class_hierarchy() {
    let (_, classes, shape, circle, rational) = shapes();
    assert!(classes.is_subtype(&TypeTag::Class(circle), &TypeTag::Class(shape)));
    assert!(!classes.is_subtype(&TypeTag::Class(shape), &TypeTag::Class(circle)));
    assert!(!classes.is_subtype(&TypeTag::Class(rational), &TypeTag::Class(shape)));
}

#[test]
fn test_arrays_are_covariant() {
    let (_, classes, shape, circle, _) = shapes();
    let circles = TypeTag::array(TypeTag::Class(circle));
    let shapes = TypeTag::array(TypeTag::Class(shape));
    assert!(classes.is_subtype(&circles, &shapes));
    assert!(!classes.is_subtype(&shapes, &circles));
    assert!(!classes.is_subtype(&TypeTag::array(TypeTag::Str), &TypeTag::array(TypeTag::Int)));
}

#[test]
fn test_tuple_arity_is_part_of_the_tag() {
    let classes = ClassTable::new();
    assert!(classes.is_subtype(&TypeTag::Tuple(2), &TypeTag::Tuple(2)));
    assert!(!classes.is_subtype(&TypeTag::Tuple(3), &TypeTag::Tuple(2)));
}

#[test]
fn test_unchecked_parameters() {
    assert!(!TypeTag::seq(TypeTag::Any).has_unchecked_parameters());
    assert!(TypeTag::seq(TypeTag::Int).has_unchecked_parameters());
    assert!(TypeTag::map(TypeTag::Str, TypeTag::Any).has_unchecked_parameters());
    assert!(!TypeTag::array(TypeTag::Int).has_unchecked_parameters());
    assert!(TypeTag::array(TypeTag::seq(TypeTag::Int)).has_unchecked_parameters());
    assert!(TypeTag::seq(TypeTag::Int).is_erased_aggregate());
    assert!(!TypeTag::array(TypeTag::Int).is_erased_aggregate());
}

#[test]
fn test_declare_requires_known_parent() {
    let interner = StringInterner::new();
    let mut classes = ClassTable::new();
    let ghost = interner.intern("Ghost");
    assert_eq!(
        classes.declare(&interner, "Child", Some(ghost)),
        Err(ClassError::UndeclaredParent(ghost))
    );
}

#[test]
fn test_redeclaration_rejected() {
    let (interner, mut classes, shape, circle, _) = shapes();
    assert_eq!(
        classes.declare(&interner, "Shape", Some(circle)),
        Err(ClassError::AlreadyDeclared("Shape"))
    );
    assert_eq!(classes.get(shape).and_then(|info| info.parent), None);
    assert!(!classes.is_subclass(shape, circle));
}

#[test]
fn test_self_parent_rejected() {
    let interner = StringInterner::new();
    let mut classes = ClassTable::new();
    let knot = interner.intern("Knot");
    assert_eq!(
        classes.declare(&interner, "Knot", Some(knot)),
        Err(ClassError::UndeclaredParent(knot))
    );
    classes.declare(&interner, "Knot", None).unwrap();
    assert_eq!(
        classes.declare(&interner, "Knot", Some(knot)),
        Err(ClassError::AlreadyDeclared("Knot"))
    );
    let other = classes.declare(&interner, "Other", None).unwrap();
    assert!(!classes.is_subtype(&TypeTag::Class(knot), &TypeTag::Class(other)));
}

#[test]
fn test_first_undeclared() {
    let (interner, classes, _, circle, _) = shapes();
    let ghost = interner.intern("Ghost");
    assert_eq!(classes.first_undeclared(&TypeTag::Class(circle)), None);
    assert_eq!(
        classes.first_undeclared(&TypeTag::map(TypeTag::Str, TypeTag::seq(TypeTag::Class(ghost)))),
        Some(ghost)
    );
}

#[test]
fn test_describe() {
    let (_, classes, _, _, rational) = shapes();
    assert_eq!(
        classes.describe(&TypeTag::seq(TypeTag::Class(rational))),
        "Seq[Rational]"
    );
    assert_eq!(
        classes.describe(&TypeTag::map(TypeTag::Str, TypeTag::array(TypeTag::Int))),
        "Map[Str, Array[Int]]"
    );
    assert_eq!(classes.describe(&TypeTag::Tuple(2)), "Tuple2");
}
