//! Subjects produced by iterators: a lazily filtered, unbounded sequence of
//! primes, and numbers parsed from text without panicking on bad input.

use std::io::Write;

use scrut_eval::{
    Clause, ClauseFault, Dispatcher, EvalError, MatchPattern, Scope, StringInterner, TypeTag,
    Value,
};

use super::{ints, show, DemoError};

fn is_prime(n: i64) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

fn primes() -> impl Iterator<Item = i64> {
    (2..).filter(|&n| is_prime(n))
}

pub(super) fn run(interner: &StringInterner, out: &mut dyn Write) -> Result<(), DemoError> {
    let scope = Scope::new();
    let p = interner.intern("p");
    let q = interner.intern("q");
    let rest = interner.intern("rest");
    let text = interner.intern("text");

    let gaps = Dispatcher::from_clauses(
        interner,
        &scope,
        [
            Clause::new(
                MatchPattern::cons(
                    MatchPattern::Ident(p),
                    MatchPattern::cons(MatchPattern::Ident(q), MatchPattern::Ident(rest)),
                ),
                move |env| {
                    let (p, q) = (env.require_int(p)?, env.require_int(q)?);
                    Ok(format!("{p} and {q} are {} apart", q - p))
                },
            )
            .guarded([p, q], move |env| Ok(env.require_int(q)? - env.require_int(p)? == 2)),
            Clause::new(
                MatchPattern::cons(MatchPattern::Ident(p), MatchPattern::Wildcard),
                move |env| Ok(format!("{} has no twin next", env.require_int(p)?)),
            ),
            Clause::returning(MatchPattern::EmptySeq, "no primes".to_string()),
        ],
    )?;

    // Windows of two consecutive primes, taken from an unbounded stream.
    let window: Vec<i64> = primes().take(10).collect();
    for pair in window.windows(2) {
        let subject = ints(pair.iter().copied());
        let result = gaps.evaluate(&subject)?;
        show(out, interner, &subject, &result)?;
    }
    let large = primes().skip_while(|&n| n < 1_000).take(3);
    let subject = ints(large);
    let result = gaps.evaluate(&subject)?;
    show(out, interner, &subject, &result)?;

    let parse = Dispatcher::from_clauses(
        interner,
        &scope,
        [Clause::new(
            MatchPattern::at(text, MatchPattern::Typed(TypeTag::Str)),
            move |env| {
                let text = env.require(text)?.as_str().unwrap_or_default();
                text.trim().parse::<i64>().map_err(ClauseFault::wrap)
            },
        )],
    )?;

    for input in ["42", " -7 ", "x1", ""] {
        let subject = Value::string(input);
        let line = match parse.evaluate(&subject) {
            Ok(n) => format!("parsed {n}"),
            Err(EvalError::ProduceFault { fault, .. }) => format!("rejected: {fault}"),
            Err(err) => return Err(err.into()),
        };
        show(out, interner, &subject, &line)?;
    }
    Ok(())
}
