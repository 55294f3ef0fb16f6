//! Pattern syntax as written by the caller.
//!
//! A bare identifier (`Ident`) is ambiguous here: it may be a fresh binder or
//! a reference to an immutable name already in scope. The dispatcher resolves
//! each identifier once, at construction, into a `Pattern`.

use scrut_ir::{Name, TypeTag};

use crate::Value;

/// Unresolved match pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchPattern {
    /// `_`
    Wildcard,
    /// `x`: a stable reference if `x` is bound immutably in scope, else a binder.
    Ident(Name),
    /// Always a fresh binder, even if the name is in scope.
    Bind(Name),
    /// Always a stable reference (`` `x` ``); the name must be in scope.
    Stable(Name),
    /// `3`, `"12:00"`
    Literal(Value),
    /// `_: T`
    Typed(TypeTag),
    /// `Seq(p1, p2, p3)`: exactly this many elements.
    Seq(Vec<MatchPattern>),
    /// `Seq(p, _*)` with at least `min_len` elements.
    SeqHeadVar {
        head: Box<MatchPattern>,
        min_len: usize,
    },
    /// `head +: tail`
    Cons {
        head: Box<MatchPattern>,
        tail: Box<MatchPattern>,
    },
    /// `init :+ last`
    Snoc {
        init: Box<MatchPattern>,
        last: Box<MatchPattern>,
    },
    /// `Nil`
    EmptySeq,
    /// `(p1, p2)`
    Tuple(Vec<MatchPattern>),
    /// `name @ pattern`
    At {
        name: Name,
        pattern: Box<MatchPattern>,
    },
}

impl MatchPattern {
    pub fn lit(value: impl Into<Value>) -> Self {
        MatchPattern::Literal(value.into())
    }

    pub fn head_var(head: MatchPattern, min_len: usize) -> Self {
        MatchPattern::SeqHeadVar {
            head: Box::new(head),
            min_len,
        }
    }

    pub fn cons(head: MatchPattern, tail: MatchPattern) -> Self {
        MatchPattern::Cons {
            head: Box::new(head),
            tail: Box::new(tail),
        }
    }

    pub fn snoc(init: MatchPattern, last: MatchPattern) -> Self {
        MatchPattern::Snoc {
            init: Box::new(init),
            last: Box::new(last),
        }
    }

    pub fn at(name: Name, pattern: MatchPattern) -> Self {
        MatchPattern::At {
            name,
            pattern: Box::new(pattern),
        }
    }
}

#[cfg(test)]
mod tests;
