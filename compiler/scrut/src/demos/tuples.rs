//! Tuple patterns that nest literals, binders and an `@` alias.

use std::io::Write;

use scrut_eval::{Clause, Dispatcher, MatchPattern, Scope, StringInterner, Value};

use super::{show, DemoError};

pub(super) fn run(interner: &StringInterner, out: &mut dyn Write) -> Result<(), DemoError> {
    let scope = Scope::new();
    let what = interner.intern("what");
    let when = interner.intern("when");
    let pair = interner.intern("pair");

    let dispatcher = Dispatcher::from_clauses(
        interner,
        &scope,
        [
            Clause::new(
                MatchPattern::Tuple(vec![MatchPattern::Ident(what), MatchPattern::lit("12:00")]),
                move |env| Ok(format!("{} at noon", env.require(what)?)),
            ),
            Clause::new(
                MatchPattern::at(
                    pair,
                    MatchPattern::Tuple(vec![MatchPattern::Ident(what), MatchPattern::Ident(when)]),
                ),
                move |env| {
                    Ok(format!(
                        "{} at {} (whole pair {})",
                        env.require(what)?,
                        env.require(when)?,
                        env.require(pair)?
                    ))
                },
            ),
            Clause::returning(
                MatchPattern::Tuple(vec![MatchPattern::Wildcard; 3]),
                "some triple".to_string(),
            ),
        ],
    )?;

    for subject in [
        Value::tuple(vec![Value::string("lunch"), Value::string("12:00")]),
        Value::tuple(vec![Value::string("tea"), Value::string("13:00")]),
        Value::tuple(vec![Value::int(1), Value::int(2), Value::int(3)]),
    ] {
        let result = dispatcher.evaluate(&subject)?;
        show(out, interner, &subject, &result)?;
    }

    let quad = Value::tuple(vec![Value::Unit; 4]);
    match dispatcher.evaluate(&quad) {
        Ok(result) => show(out, interner, &quad, &result)?,
        Err(err) => show(out, interner, &quad, &err.to_string())?,
    }
    Ok(())
}
