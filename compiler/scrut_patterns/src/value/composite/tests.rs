use super::*;

#[test]
fn test_field_lookup() {
    let class = Name::from_raw(1);
    let num = Name::from_raw(2);
    let den = Name::from_raw(3);
    let half = StructValue::new(class, vec![(num, Value::Int(1)), (den, Value::Int(2))]);
    assert_eq!(half.field(den), Some(&Value::Int(2)));
    assert_eq!(half.field(Name::from_raw(9)), None);
    assert_eq!(half.fields().len(), 2);
}

#[test]
fn test_equality_includes_class() {
    let num = Name::from_raw(2);
    let a = StructValue::new(Name::from_raw(1), vec![(num, Value::Int(1))]);
    let b = StructValue::new(Name::from_raw(1), vec![(num, Value::Int(1))]);
    let c = StructValue::new(Name::from_raw(7), vec![(num, Value::Int(1))]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
