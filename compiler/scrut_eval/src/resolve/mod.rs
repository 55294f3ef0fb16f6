//! Resolution of pattern syntax into runnable patterns.
//!
//! Runs once per clause when a dispatcher is built. Each identifier is
//! classified against the enclosing `Scope`:
//!
//! | Syntax | In scope, immutable | In scope, mutable | Not in scope |
//! |---|---|---|---|
//! | `Ident(x)` | `StableRef` | error | `Binder` |
//! | `Stable(x)` | `StableRef` | error | error |
//! | `Bind(x)` | `Binder` | `Binder` | `Binder` |
//!
//! Structural problems (bad arities, unknown classes, a name bound twice) are
//! reported here too, so evaluation never meets a malformed pattern.

use rustc_hash::FxHashSet;
use tracing::trace;

use scrut_patterns::{
    ClassTable, MalformedClause, MatchPattern, Name, Pattern, StringInterner,
};

use crate::{ensure_sufficient_stack, Mutability, Scope};

/// Largest tuple arity a pattern may name.
pub const MAX_TUPLE_ARITY: usize = 22;

/// Resolve `syntax` against `scope`.
pub fn resolve_pattern(
    syntax: &MatchPattern,
    scope: &Scope,
    interner: &StringInterner,
    classes: &ClassTable,
) -> Result<Pattern, MalformedClause> {
    let resolver = Resolver {
        scope,
        interner,
        classes,
    };
    let pattern = resolver.resolve(syntax)?;
    check_distinct_binders(&pattern, interner)?;
    Ok(pattern)
}

struct Resolver<'a> {
    scope: &'a Scope,
    interner: &'a StringInterner,
    classes: &'a ClassTable,
}

impl Resolver<'_> {
    fn resolve(&self, syntax: &MatchPattern) -> Result<Pattern, MalformedClause> {
        ensure_sufficient_stack(|| self.resolve_inner(syntax))
    }

    fn resolve_inner(&self, syntax: &MatchPattern) -> Result<Pattern, MalformedClause> {
        Ok(match syntax {
            MatchPattern::Wildcard => Pattern::Wildcard,
            MatchPattern::Bind(name) => Pattern::Binder(*name),
            MatchPattern::Ident(name) => match self.scope.lookup_entry(*name) {
                None => Pattern::Binder(*name),
                Some(_) => self.stable_ref(*name)?,
            },
            MatchPattern::Stable(name) => self.stable_ref(*name)?,
            MatchPattern::Literal(value) => Pattern::Literal(value.clone()),
            MatchPattern::Typed(tag) => {
                if let Some(class) = self.classes.first_undeclared(tag) {
                    return Err(MalformedClause::UnknownClass {
                        name: self.text(class),
                    });
                }
                Pattern::TypedClass(tag.clone())
            }
            MatchPattern::Seq(elements) => Pattern::SeqFixed(self.resolve_all(elements)?),
            MatchPattern::SeqHeadVar { head, min_len } => {
                if *min_len == 0 {
                    return Err(MalformedClause::InconsistentArity {
                        pattern: "sequence head",
                        arity: 0,
                        reason: "a head needs at least one element",
                    });
                }
                Pattern::SeqHeadVar {
                    head: Box::new(self.resolve(head)?),
                    min_len: *min_len,
                }
            }
            MatchPattern::Cons { head, tail } => Pattern::SeqHeadTail {
                head: Box::new(self.resolve(head)?),
                tail: Box::new(self.resolve(tail)?),
            },
            MatchPattern::Snoc { init, last } => Pattern::SeqInitLast {
                init: Box::new(self.resolve(init)?),
                last: Box::new(self.resolve(last)?),
            },
            MatchPattern::EmptySeq => Pattern::SeqEmpty,
            MatchPattern::Tuple(elements) => {
                if !(2..=MAX_TUPLE_ARITY).contains(&elements.len()) {
                    return Err(MalformedClause::InconsistentArity {
                        pattern: "tuple",
                        arity: elements.len(),
                        reason: "tuples have between 2 and 22 elements",
                    });
                }
                Pattern::Tuple(self.resolve_all(elements)?)
            }
            MatchPattern::At { name, pattern } => Pattern::Bound {
                name: *name,
                inner: Box::new(self.resolve(pattern)?),
            },
        })
    }

    fn resolve_all(&self, elements: &[MatchPattern]) -> Result<Box<[Pattern]>, MalformedClause> {
        elements.iter().map(|element| self.resolve(element)).collect()
    }

    /// Capture the current value of an immutable binding.
    fn stable_ref(&self, name: Name) -> Result<Pattern, MalformedClause> {
        match self.scope.lookup_entry(name) {
            Some((value, Mutability::Immutable)) => {
                trace!(name = self.interner.lookup(name), "resolved stable reference");
                Ok(Pattern::StableRef {
                    name,
                    value: value.clone(),
                })
            }
            Some((_, Mutability::Mutable)) => Err(MalformedClause::UnstableIdentifier {
                name: self.text(name),
            }),
            None => Err(MalformedClause::UndefinedStableRef {
                name: self.text(name),
            }),
        }
    }

    fn text(&self, name: Name) -> String {
        self.interner.lookup(name).to_string()
    }
}

fn check_distinct_binders(
    pattern: &Pattern,
    interner: &StringInterner,
) -> Result<(), MalformedClause> {
    let mut seen = FxHashSet::default();
    for name in pattern.binders() {
        if !seen.insert(name) {
            return Err(MalformedClause::DuplicateBinder {
                name: interner.lookup(name).to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
