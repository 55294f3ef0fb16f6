use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_helpers_box_their_parts() {
    let x = Name::from_raw(1);
    assert_eq!(
        MatchPattern::cons(MatchPattern::Ident(x), MatchPattern::EmptySeq),
        MatchPattern::Cons {
            head: Box::new(MatchPattern::Ident(x)),
            tail: Box::new(MatchPattern::EmptySeq),
        }
    );
    assert_eq!(
        MatchPattern::at(x, MatchPattern::head_var(MatchPattern::Wildcard, 2)),
        MatchPattern::At {
            name: x,
            pattern: Box::new(MatchPattern::SeqHeadVar {
                head: Box::new(MatchPattern::Wildcard),
                min_len: 2,
            }),
        }
    );
}

#[test]
fn test_lit_converts() {
    assert_eq!(MatchPattern::lit(3_i64), MatchPattern::Literal(Value::int(3)));
    assert_eq!(
        MatchPattern::lit("12:00"),
        MatchPattern::Literal(Value::string("12:00"))
    );
    assert_eq!(MatchPattern::lit(true), MatchPattern::Literal(Value::Bool(true)));
}
