//! Extraction: one pattern against one subject.
//!
//! `attempt` is pure apart from observer notifications. Each call owns a
//! fresh `Bindings` buffer, so a rejected attempt leaves nothing behind for
//! the next clause to see. Erasure notices are held the same way and only
//! reach the observer when the whole pattern accepts.

use smallvec::SmallVec;

use scrut_patterns::{Bindings, ClassTable, Pattern, SeqValue, TypeTag, Value};

use crate::observer::{is_erasure_prone, ErasureNotice, MatchObserver};
use crate::ensure_sufficient_stack;

/// Context shared by every level of one extraction.
#[derive(Clone, Copy)]
pub struct MatchCx<'a> {
    pub classes: &'a ClassTable,
    pub observer: &'a dyn MatchObserver,
    /// Reported in erasure notices.
    pub clause_index: usize,
}

impl<'a> MatchCx<'a> {
    pub fn new(
        classes: &'a ClassTable,
        observer: &'a dyn MatchObserver,
        clause_index: usize,
    ) -> Self {
        MatchCx {
            classes,
            observer,
            clause_index,
        }
    }
}

/// Result of running a pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchOutcome {
    Accepted(Bindings),
    Rejected,
}

impl MatchOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MatchOutcome::Accepted(_))
    }
}

/// Outcome of a run-time type test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagCheck {
    Accepted,
    /// Accepted on the outer constructor; element parameters were not checked.
    AcceptedErased,
    Rejected,
}

/// State accumulated by one attempt.
#[derive(Default)]
struct Trail {
    bindings: Bindings,
    erased: SmallVec<[ErasureNotice; 1]>,
}

/// Run `pattern` against `subject`.
pub fn attempt(pattern: &Pattern, subject: &Value, cx: &MatchCx<'_>) -> MatchOutcome {
    let mut trail = Trail::default();
    if !extract(pattern, subject, cx, &mut trail) {
        return MatchOutcome::Rejected;
    }
    for notice in &trail.erased {
        cx.observer.element_type_erased(notice);
    }
    MatchOutcome::Accepted(trail.bindings)
}

/// Test `subject` against `expected` as far as run-time information allows.
///
/// `Seq` and `Map` values carry no element tags, so only their constructor
/// is compared. Arrays carry an element tag, which is compared covariantly.
pub fn check_tag(subject: &Value, expected: &TypeTag, classes: &ClassTable) -> TagCheck {
    runtime_conforms(&subject.tag(), expected, classes)
}

fn runtime_conforms(actual: &TypeTag, expected: &TypeTag, classes: &ClassTable) -> TagCheck {
    match (actual, expected) {
        (_, TypeTag::Any) => TagCheck::Accepted,
        (TypeTag::Seq(_), TypeTag::Seq(_)) | (TypeTag::Map(..), TypeTag::Map(..)) => {
            if is_erasure_prone(expected) {
                TagCheck::AcceptedErased
            } else {
                TagCheck::Accepted
            }
        }
        (TypeTag::Array(actual), TypeTag::Array(expected)) => {
            runtime_conforms(actual, expected, classes)
        }
        (actual, expected) if classes.is_subtype(actual, expected) => TagCheck::Accepted,
        _ => TagCheck::Rejected,
    }
}

fn extract(pattern: &Pattern, subject: &Value, cx: &MatchCx<'_>, out: &mut Trail) -> bool {
    ensure_sufficient_stack(|| extract_inner(pattern, subject, cx, out))
}

fn extract_inner(
    pattern: &Pattern,
    subject: &Value,
    cx: &MatchCx<'_>,
    out: &mut Trail,
) -> bool {
    match pattern {
        Pattern::Literal(value) | Pattern::StableRef { value, .. } => subject.equals(value),
        Pattern::Wildcard => true,
        Pattern::Binder(name) => {
            out.bindings.bind(*name, subject.clone());
            true
        }
        Pattern::TypedClass(tag) => match check_tag(subject, tag, cx.classes) {
            TagCheck::Accepted => true,
            TagCheck::AcceptedErased => {
                out.erased.push(ErasureNotice {
                    clause_index: cx.clause_index,
                    expected: cx.classes.describe(tag),
                    subject_tag: subject.describe_tag(cx.classes),
                });
                true
            }
            TagCheck::Rejected => false,
        },
        Pattern::SeqFixed(elements) => subject.as_seq().is_some_and(|seq| {
            seq.len() == elements.len() && extract_all(elements, seq.as_slice(), cx, out)
        }),
        Pattern::SeqHeadVar { head, min_len } => subject.as_seq().is_some_and(|seq| {
            seq.len() >= *min_len
                && seq
                    .first()
                    .is_some_and(|first| extract(head, first, cx, out))
        }),
        Pattern::SeqHeadTail { head, tail } => {
            let Some(seq) = subject.as_seq() else {
                return false;
            };
            let (Some(first), Some(rest)) = (seq.first(), seq.tail()) else {
                return false;
            };
            extract(head, first, cx, out) && extract_view(tail, subject, rest, cx, out)
        }
        Pattern::SeqInitLast { init, last } => {
            let Some(seq) = subject.as_seq() else {
                return false;
            };
            let (Some(front), Some(final_item)) = (seq.init(), seq.last()) else {
                return false;
            };
            extract_view(init, subject, front, cx, out) && extract(last, final_item, cx, out)
        }
        Pattern::SeqEmpty => subject.as_seq().is_some_and(SeqValue::is_empty),
        Pattern::Tuple(elements) => subject.as_tuple().is_some_and(|items| {
            items.len() == elements.len() && extract_all(elements, items, cx, out)
        }),
        Pattern::Bound { name, inner } => {
            out.bindings.bind(*name, subject.clone());
            extract(inner, subject, cx, out)
        }
    }
}

fn extract_all(
    patterns: &[Pattern],
    items: &[Value],
    cx: &MatchCx<'_>,
    out: &mut Trail,
) -> bool {
    patterns
        .iter()
        .zip(items)
        .all(|(pattern, item)| extract(pattern, item, cx, out))
}

/// Match `pattern` against a sub-view of the sequence `whole`, keeping its kind.
fn extract_view(
    pattern: &Pattern,
    whole: &Value,
    view: SeqValue,
    cx: &MatchCx<'_>,
    out: &mut Trail,
) -> bool {
    whole
        .with_seq_view(view)
        .is_some_and(|sub| extract(pattern, &sub, cx, out))
}
