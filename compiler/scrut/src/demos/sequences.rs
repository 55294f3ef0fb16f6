//! Fixed-length, head/tail and init/last sequence patterns, plus a recursive
//! sum written as a head/tail fold.

use std::io::Write;

use scrut_eval::{Clause, Dispatcher, MatchPattern, Scope, StringInterner, Value};

use super::{ints, show, DemoError};

/// One step of a head/tail fold.
#[derive(Clone, Debug)]
enum Step {
    Done,
    More(i64, Value),
}

pub(super) fn run(interner: &StringInterner, out: &mut dyn Write) -> Result<(), DemoError> {
    let scope = Scope::new();
    let first = interner.intern("first");
    let head = interner.intern("head");
    let tail = interner.intern("tail");
    let init = interner.intern("init");
    let last = interner.intern("last");

    let describe = Dispatcher::from_clauses(
        interner,
        &scope,
        [
            Clause::returning(
                MatchPattern::Seq(vec![
                    MatchPattern::lit(1_i64),
                    MatchPattern::lit(2_i64),
                    MatchPattern::lit(3_i64),
                ]),
                "exactly 1, 2, 3".to_string(),
            ),
            Clause::new(MatchPattern::head_var(MatchPattern::Ident(first), 3), move |env| {
                Ok(format!("starts with {}, at least 3 long", env.require(first)?))
            }),
            Clause::new(
                MatchPattern::snoc(MatchPattern::Ident(init), MatchPattern::Ident(last)),
                move |env| {
                    Ok(format!(
                        "{} followed by {}",
                        env.require(init)?,
                        env.require(last)?
                    ))
                },
            ),
            Clause::returning(MatchPattern::EmptySeq, "Empty sequence".to_string()),
        ],
    )?;

    for subject in [
        ints([1, 2, 3]),
        ints([1, 2, 3, 4]),
        ints([7, 8]),
        ints([]),
    ] {
        let result = describe.evaluate(&subject)?;
        show(out, interner, &subject, &result)?;
    }

    // Summing by repeated head/tail splits; each tail is a view, not a copy.
    let step = Dispatcher::from_clauses(
        interner,
        &scope,
        [
            Clause::returning(MatchPattern::EmptySeq, Step::Done),
            Clause::new(
                MatchPattern::cons(MatchPattern::Ident(head), MatchPattern::Ident(tail)),
                move |env| {
                    Ok(Step::More(
                        env.require_int(head)?,
                        env.require(tail)?.clone(),
                    ))
                },
            ),
        ],
    )?;

    let mut rest = ints(1..=100);
    let mut total = 0;
    while let Step::More(value, next) = step.evaluate(&rest)? {
        total += value;
        rest = next;
    }
    writeln!(out, "  sum of 1..=100 by head/tail   => {total}")?;
    Ok(())
}
