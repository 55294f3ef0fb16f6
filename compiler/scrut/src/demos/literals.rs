//! Literal clauses, a stable reference to a scope constant, and a guarded
//! binder as the fallback.

use std::io::Write;

use scrut_eval::{Clause, Dispatcher, MatchPattern, Scope, StringInterner, Value};

use super::{show, DemoError};

pub(super) fn run(interner: &StringInterner, out: &mut dyn Write) -> Result<(), DemoError> {
    let unity = interner.intern("unity");
    let subunitary = interner.intern("subunitary");
    let x = interner.intern("x");

    let mut scope = Scope::new();
    scope.define_val(unity, Value::int(1));
    scope.define_val(subunitary, Value::Float(0.5));

    let dispatcher = Dispatcher::from_clauses(
        interner,
        &scope,
        [
            Clause::returning(MatchPattern::lit(3_i64), "three".to_string()),
            Clause::returning(MatchPattern::Ident(subunitary), "subunitary".to_string()),
            Clause::returning(MatchPattern::Ident(unity), "unity".to_string()),
            Clause::returning(MatchPattern::Ident(x), "negative".to_string())
                .guarded([x], move |env| Ok(env.require(x)?.as_int().is_some_and(|n| n < 0))),
            Clause::new(MatchPattern::Ident(x), move |env| {
                Ok(format!("unity? no, {}", env.require(x)?))
            }),
        ],
    )?;

    for subject in [
        Value::int(1),
        Value::int(3),
        Value::Float(0.5),
        Value::int(-4),
        Value::string("one"),
    ] {
        let result = dispatcher.evaluate(&subject)?;
        show(out, interner, &subject, &result)?;
    }
    Ok(())
}
