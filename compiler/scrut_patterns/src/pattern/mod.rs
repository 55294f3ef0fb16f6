//! Resolved patterns.
//!
//! Every identifier has been classified as a binder or a stable reference and
//! every stable reference carries the value it compares against, so running a
//! `Pattern` never consults a scope.

use scrut_ir::{Name, TypeTag};
use smallvec::SmallVec;

use crate::Value;

/// One acceptance rule and the bindings it produces.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// Subject equals the value.
    Literal(Value),
    /// Subject equals the value captured from immutable binding `name`.
    StableRef { name: Name, value: Value },
    /// Always accepts.
    Wildcard,
    /// Always accepts; binds `name` to the subject.
    Binder(Name),
    /// Subject's runtime tag is, or is a subtype of, the tag.
    TypedClass(TypeTag),
    /// Sequence of exactly `elements.len()` elements, each accepted positionally.
    SeqFixed(Box<[Pattern]>),
    /// Sequence of at least `min_len` elements whose first element matches.
    SeqHeadVar { head: Box<Pattern>, min_len: usize },
    /// Non-empty sequence: first element matches `head`, the rest matches `tail`.
    SeqHeadTail { head: Box<Pattern>, tail: Box<Pattern> },
    /// Non-empty sequence: last element matches `last`, the rest matches `init`.
    SeqInitLast { init: Box<Pattern>, last: Box<Pattern> },
    /// Empty sequence.
    SeqEmpty,
    /// Tuple of exactly `elements.len()` elements, each accepted positionally.
    Tuple(Box<[Pattern]>),
    /// `inner` accepts; additionally binds `name` to the whole subject.
    Bound { name: Name, inner: Box<Pattern> },
}

impl Pattern {
    /// Short kind name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Pattern::Literal(_) => "literal",
            Pattern::StableRef { .. } => "stable reference",
            Pattern::Wildcard => "wildcard",
            Pattern::Binder(_) => "binder",
            Pattern::TypedClass(_) => "type test",
            Pattern::SeqFixed(_) => "fixed sequence",
            Pattern::SeqHeadVar { .. } => "sequence head",
            Pattern::SeqHeadTail { .. } => "head/tail",
            Pattern::SeqInitLast { .. } => "init/last",
            Pattern::SeqEmpty => "empty sequence",
            Pattern::Tuple(_) => "tuple",
            Pattern::Bound { .. } => "bound pattern",
        }
    }

    /// Visit this pattern and all sub-patterns, parents before children.
    pub fn walk(&self, visit: &mut impl FnMut(&Pattern)) {
        visit(self);
        match self {
            Pattern::SeqFixed(elements) | Pattern::Tuple(elements) => {
                for element in elements.iter() {
                    element.walk(visit);
                }
            }
            Pattern::SeqHeadVar { head, .. } => head.walk(visit),
            Pattern::SeqHeadTail { head, tail } => {
                head.walk(visit);
                tail.walk(visit);
            }
            Pattern::SeqInitLast { init, last } => {
                init.walk(visit);
                last.walk(visit);
            }
            Pattern::Bound { inner, .. } => inner.walk(visit),
            Pattern::Literal(_)
            | Pattern::StableRef { .. }
            | Pattern::Wildcard
            | Pattern::Binder(_)
            | Pattern::TypedClass(_)
            | Pattern::SeqEmpty => {}
        }
    }

    /// Names this pattern binds, outermost first.
    pub fn binders(&self) -> SmallVec<[Name; 4]> {
        let mut names = SmallVec::new();
        self.walk(&mut |p| match p {
            Pattern::Binder(name) | Pattern::Bound { name, .. } => names.push(*name),
            _ => {}
        });
        names
    }

    /// True when the pattern accepts every subject.
    pub fn is_irrefutable(&self) -> bool {
        match self {
            Pattern::Wildcard | Pattern::Binder(_) => true,
            Pattern::TypedClass(tag) => *tag == TypeTag::Any,
            Pattern::Bound { inner, .. } => inner.is_irrefutable(),
            _ => false,
        }
    }
}
